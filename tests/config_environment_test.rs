// ABOUTME: Unit tests for environment configuration
// ABOUTME: Defaults, overrides, validation errors, and reading the real process environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PantryPal

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pantrypal::config::environment::{
    API_KEY_ENV, DATA_DIR_ENV, ENVIRONMENT_ENV, LLM_BASE_URL_ENV, LLM_MODEL_ENV, LLM_TIMEOUT_ENV,
};
use pantrypal::config::{AppConfig, Environment};
use pantrypal::ErrorCode;
use pantrypal_core::constants::llm;
use serial_test::serial;
use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, pantrypal::AppError> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    AppConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("production"),
        Environment::Production
    );
    assert_eq!(Environment::from_str_or_default("PROD"), Environment::Production);
    assert_eq!(Environment::from_str_or_default("test"), Environment::Testing);
    assert_eq!(
        Environment::from_str_or_default("staging"),
        Environment::Development
    ); // Default fallback
}

#[test]
fn test_defaults_when_nothing_is_set() {
    let config = config_from(&[]).unwrap();
    assert_eq!(config.llm.base_url, llm::DEFAULT_BASE_URL);
    assert_eq!(config.llm.model, llm::DEFAULT_MODEL);
    assert_eq!(config.llm.timeout_secs, llm::DEFAULT_TIMEOUT_SECS);
    assert!(config.llm.api_key.is_none());
    assert_eq!(config.environment, Environment::Development);
    assert!(config.store_path().ends_with("pantrypal.json"));
}

#[test]
fn test_overrides() {
    let config = config_from(&[
        (DATA_DIR_ENV, "/tmp/pantry-data"),
        (API_KEY_ENV, "  sk-env  "),
        (LLM_BASE_URL_ENV, "http://localhost:11434/v1"),
        (LLM_MODEL_ENV, "llama3"),
        (LLM_TIMEOUT_ENV, "5"),
        (ENVIRONMENT_ENV, "production"),
    ])
    .unwrap();

    assert_eq!(config.data_dir, PathBuf::from("/tmp/pantry-data"));
    assert_eq!(
        config.store_path(),
        PathBuf::from("/tmp/pantry-data/pantrypal.json")
    );
    assert_eq!(config.llm.api_key.as_deref(), Some("sk-env"));
    assert_eq!(config.llm.base_url, "http://localhost:11434/v1");
    assert_eq!(config.llm.model, "llama3");
    assert_eq!(config.llm.timeout_secs, 5);
    assert!(config.environment.is_production());
}

#[test]
fn test_blank_values_are_ignored() {
    let config = config_from(&[(API_KEY_ENV, "   "), (LLM_MODEL_ENV, "")]).unwrap();
    assert!(config.llm.api_key.is_none());
    assert_eq!(config.llm.model, llm::DEFAULT_MODEL);
}

#[test]
fn test_invalid_timeout_is_rejected() {
    for raw in ["0", "-3", "soon"] {
        let err = config_from(&[(LLM_TIMEOUT_ENV, raw)]).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalid, "timeout {raw}");
    }
}

#[test]
fn test_non_http_base_url_is_rejected() {
    let err = config_from(&[(LLM_BASE_URL_ENV, "ftp://example.com")]).unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
}

#[test]
fn test_summary_does_not_leak_the_key() {
    let config = config_from(&[(API_KEY_ENV, "sk-very-secret")]).unwrap();
    let summary = config.summary();
    assert!(summary.contains("env_key=present"));
    assert!(!summary.contains("sk-very-secret"));
}

#[test]
#[serial]
fn test_from_env_reads_process_environment() {
    env::set_var(LLM_MODEL_ENV, "env-model");
    env::set_var(ENVIRONMENT_ENV, "testing");

    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.llm.model, "env-model");
    assert!(config.environment.is_testing());

    // Clean up
    env::remove_var(LLM_MODEL_ENV);
    env::remove_var(ENVIRONMENT_ENV);
}
