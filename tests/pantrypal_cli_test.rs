// ABOUTME: Integration tests for the pantrypal-cli binary
// ABOUTME: Runs real commands against a temporary data directory and checks their output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PantryPal

//! Integration tests for the pantrypal-cli binary.
//!
//! Every test gets its own data directory, so commands only share state
//! within a test.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

const TODAY: &str = "2025-03-14";

/// Run the CLI with an isolated data dir and no API key in the environment
fn run_cli(data_dir: &Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_pantrypal-cli"))
        .arg("--data-dir")
        .arg(data_dir)
        .args(["--today", TODAY])
        .args(args)
        .env_remove("OPENAI_API_KEY")
        .env_remove("ENVIRONMENT")
        .env("RUST_LOG", "warn")
        .env("LLM_BASE_URL", "http://127.0.0.1:9/v1")
        .output()
        .unwrap();

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (exit_code, stdout, stderr)
}

#[test]
fn test_cli_help_shows_commands() {
    let output = Command::new(env!("CARGO_BIN_EXE_pantrypal-cli"))
        .arg("--help")
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    for command in ["pantry", "recipes", "suggest", "key", "prefs"] {
        assert!(stdout.contains(command), "help should mention '{command}'");
    }
}

#[test]
fn test_add_then_list_shows_status() {
    let dir = TempDir::new().unwrap();

    let (code, stdout, _) = run_cli(
        dir.path(),
        &["pantry", "add", "Greek Yogurt", "-e", "2025-03-20", "-b", "Fage"],
    );
    assert_eq!(code, 0);
    assert!(stdout.contains("Added Greek Yogurt"));

    run_cli(dir.path(), &["pantry", "add", "Rice", "-e", "12/31/2025"]);
    run_cli(dir.path(), &["pantry", "add", "Ham", "-e", "2025-03-10"]);

    let (code, stdout, _) = run_cli(dir.path(), &["pantry", "list", "--sort", "date"]);
    assert_eq!(code, 0);
    let ham = stdout.find("Ham").unwrap();
    let yogurt = stdout.find("Greek Yogurt").unwrap();
    let rice = stdout.find("Rice").unwrap();
    assert!(ham < yogurt && yogurt < rice);
    assert!(stdout.contains("expired 4d ago"));
    assert!(stdout.contains("expiring in 6d"));

    let (_, stdout, _) = run_cli(dir.path(), &["pantry", "summary"]);
    assert!(stdout.contains("Pantry: 3 items"));
}

#[test]
fn test_bad_date_is_rejected_by_the_parser() {
    let dir = TempDir::new().unwrap();
    let (code, _, stderr) = run_cli(dir.path(), &["pantry", "add", "Milk", "-e", "someday"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Invalid date"));
}

#[test]
fn test_donate_with_nothing_expiring_is_a_user_error() {
    let dir = TempDir::new().unwrap();
    run_cli(dir.path(), &["pantry", "add", "Rice", "-e", "2026-01-01"]);

    let (code, _, stderr) = run_cli(dir.path(), &["pantry", "donate", "--all"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("No items expiring within a week to donate"));
}

#[test]
fn test_recipe_filter_preference_is_saved() {
    let dir = TempDir::new().unwrap();

    let (_, stdout, _) = run_cli(dir.path(), &["recipes", "list"]);
    assert!(stdout.contains("time=20-40 min"));
    assert!(stdout.contains("Lemon Garlic Salmon"));
    assert!(!stdout.contains("Green Smoothie Bowl"));

    let (code, _, _) = run_cli(
        dir.path(),
        &["recipes", "list", "--time", "0-20", "--diet", "Vegan"],
    );
    assert_eq!(code, 0);

    let (_, stdout, _) = run_cli(dir.path(), &["recipes", "list"]);
    assert!(stdout.contains("Green Smoothie Bowl"));
    assert!(!stdout.contains("Lemon Garlic Salmon"));

    // Search text is per-query
    run_cli(dir.path(), &["recipes", "list", "--search", "bowl"]);
    let (_, stdout, _) = run_cli(dir.path(), &["prefs", "show"]);
    assert!(stdout.contains("skill=any time=0-20 min diet=Vegan"));
    assert!(!stdout.contains("search="));

    let (code, _, _) = run_cli(dir.path(), &["recipes", "list", "--time", "any"]);
    assert_eq!(code, 0);
    let (_, stdout, _) = run_cli(dir.path(), &["prefs", "show"]);
    assert!(stdout.contains("skill=any time=any diet=Vegan"));

    let (code, _, stderr) = run_cli(dir.path(), &["recipes", "list", "--time", "forever"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Unknown cook time"));

    run_cli(dir.path(), &["prefs", "reset"]);
    let (_, stdout, _) = run_cli(dir.path(), &["prefs", "show"]);
    assert!(stdout.contains("time=20-40 min diet=any"));
}

#[test]
fn test_suggest_without_key_prints_fallback_and_hint() {
    let dir = TempDir::new().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["suggest", "--items", "Chicken,Rice"]);

    assert_eq!(code, 0);
    assert!(stdout.contains("fallback (no API key configured)"));
    assert!(stdout.contains("Chicken Stir-Fry"));
    assert!(stdout.contains("key set"));
}

#[test]
fn test_suggest_with_unreachable_service_still_succeeds() {
    let dir = TempDir::new().unwrap();
    run_cli(dir.path(), &["key", "set", "sk-test-000000"]);

    let (code, stdout, _) = run_cli(dir.path(), &["suggest", "--items", "Eggs"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Suggestions: fallback"));
    assert!(stdout.contains("Garlic Mushroom Pasta"));
    assert!(!stdout.contains("key set"));
}

/// Short id printed by `pantry add` as "Added <name> (<id>)"
fn added_id(stdout: &str) -> String {
    let start = stdout.find('(').unwrap() + 1;
    let end = start + stdout[start..].find(')').unwrap();
    stdout[start..end].to_owned()
}

#[test]
fn test_suggest_with_single_selected_item() {
    let dir = TempDir::new().unwrap();
    let (_, stdout, _) = run_cli(dir.path(), &["pantry", "add", "Eggs", "-e", "2025-03-20"]);
    let eggs = added_id(&stdout);
    run_cli(dir.path(), &["pantry", "add", "Rice", "-e", "2025-12-31"]);

    let (code, stdout, _) = run_cli(dir.path(), &["pantry", "select", &eggs]);
    assert_eq!(code, 0);
    assert!(stdout.contains("1 item(s) selected"));

    let (code, stdout, stderr) = run_cli(dir.path(), &["suggest"]);
    assert_eq!(code, 0, "stderr: {stderr}");
    assert!(stdout.contains("fallback (no API key configured)"));
    assert!(!stderr.contains("Please select"));
}

#[test]
fn test_favorites_round_trip() {
    let dir = TempDir::new().unwrap();

    let (code, stdout, _) = run_cli(dir.path(), &["recipes", "favorite", "4"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Added Lemon Garlic Salmon to favorites"));

    let (_, stdout, _) = run_cli(dir.path(), &["recipes", "favorites"]);
    assert!(stdout.contains("Lemon Garlic Salmon"));

    let (code, _, stderr) = run_cli(dir.path(), &["recipes", "favorite", "404"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Recipe 404 not found"));
}
