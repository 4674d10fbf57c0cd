// ABOUTME: Integration tests for the key-value store backends
// ABOUTME: JSON file persistence across instances, corruption handling, and in-memory sharing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PantryPal

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::init_test_logging;
use pantrypal::config::{AppConfig, Environment};
use pantrypal::storage::file::JsonFileStore;
use pantrypal::storage::memory::InMemoryStore;
use pantrypal::storage::{load_json, open_store, save_json, KeyValueStore};
use pantrypal::ErrorCode;
use std::fs;
use tempfile::TempDir;

#[tokio::test]
async fn test_file_store_round_trip() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("store.json"));

    assert_eq!(store.get("missing").await.unwrap(), None);

    store.set("greeting", "hello").await.unwrap();
    store.set("other", "value").await.unwrap();
    assert_eq!(store.get("greeting").await.unwrap().as_deref(), Some("hello"));

    store.remove("greeting").await.unwrap();
    assert_eq!(store.get("greeting").await.unwrap(), None);
    assert_eq!(store.get("other").await.unwrap().as_deref(), Some("value"));
}

#[tokio::test]
async fn test_file_store_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("store.json");

    JsonFileStore::new(&path).set("key", "persisted").await.unwrap();
    assert!(path.exists());

    let reopened = JsonFileStore::new(&path);
    assert_eq!(reopened.get("key").await.unwrap().as_deref(), Some("persisted"));
    assert_eq!(reopened.backend_name(), "json-file");
}

#[tokio::test]
async fn test_file_store_writes_a_json_object() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");
    let store = JsonFileStore::new(&path);
    store.set("a", "1").await.unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(parsed["a"], "1");
    assert!(!dir.path().join("store.json.tmp").exists());
}

#[tokio::test]
async fn test_corrupt_file_is_a_storage_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");
    fs::write(&path, "[1, 2, 3]").unwrap();

    let err = JsonFileStore::new(&path).get("anything").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::StorageError);
}

#[tokio::test]
async fn test_empty_file_reads_as_empty_store() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");
    fs::write(&path, "  \n").unwrap();

    let store = JsonFileStore::new(&path);
    assert_eq!(store.get("anything").await.unwrap(), None);
    store.set("anything", "now").await.unwrap();
    assert_eq!(store.get("anything").await.unwrap().as_deref(), Some("now"));
}

#[tokio::test]
async fn test_memory_store_clones_share_state() {
    let store = InMemoryStore::new();
    let clone = store.clone();
    clone.set("shared", "yes").await.unwrap();

    assert_eq!(store.get("shared").await.unwrap().as_deref(), Some("yes"));
    assert_eq!(store.len().await, 1);
    store.remove("shared").await.unwrap();
    assert!(clone.is_empty().await);
}

#[tokio::test]
async fn test_json_helpers() {
    let store = InMemoryStore::new();
    save_json(&store, "ids", &["1", "4"]).await.unwrap();
    let ids: Option<Vec<String>> = load_json(&store, "ids").await.unwrap();
    assert_eq!(ids, Some(vec!["1".to_owned(), "4".to_owned()]));

    let missing: Option<Vec<String>> = load_json(&store, "nothing").await.unwrap();
    assert!(missing.is_none());
}

#[test]
fn test_open_store_picks_backend_from_environment() {
    let dir = TempDir::new().unwrap();
    let dir_path = dir.path().to_string_lossy().into_owned();

    let config = AppConfig::from_lookup(|key| match key {
        "PANTRYPAL_DATA_DIR" => Some(dir_path.clone()),
        _ => None,
    })
    .unwrap();
    assert_eq!(open_store(&config).backend_name(), "json-file");

    let testing = AppConfig {
        environment: Environment::Testing,
        ..config
    };
    assert_eq!(open_store(&testing).backend_name(), "memory");
}
