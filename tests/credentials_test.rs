// ABOUTME: Integration tests for the saved generation service API key
// ABOUTME: Save, load, removal, blank rejection, and saved-over-environment resolution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PantryPal

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{init_test_logging, memory_store};
use pantrypal::config::LlmSettings;
use pantrypal::credentials::{mask_key, CredentialStore, KeySource};
use pantrypal::ErrorCode;
use pantrypal_core::constants::storage_keys;

fn settings_with_env_key(key: Option<&str>) -> LlmSettings {
    LlmSettings {
        api_key: key.map(str::to_owned),
        ..LlmSettings::default()
    }
}

#[tokio::test]
async fn test_save_load_remove() {
    init_test_logging();
    let store = memory_store();
    let credentials = CredentialStore::new(store.clone());

    assert_eq!(credentials.load().await.unwrap(), None);

    credentials.save("  sk-live-123456  ").await.unwrap();
    assert_eq!(credentials.load().await.unwrap().as_deref(), Some("sk-live-123456"));
    assert_eq!(
        store.get(storage_keys::OPENAI_API_KEY).await.unwrap().as_deref(),
        Some("sk-live-123456")
    );

    credentials.remove().await.unwrap();
    assert_eq!(credentials.load().await.unwrap(), None);
}

#[tokio::test]
async fn test_blank_key_is_rejected_and_nothing_is_stored() {
    let store = memory_store();
    let credentials = CredentialStore::new(store.clone());

    let err = credentials.save("   ").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(store.get(storage_keys::OPENAI_API_KEY).await.unwrap().is_none());
}

#[tokio::test]
async fn test_whitespace_value_in_store_counts_as_absent() {
    let store = memory_store();
    store.set(storage_keys::OPENAI_API_KEY, " \t").await.unwrap();
    assert_eq!(CredentialStore::new(store).load().await.unwrap(), None);
}

#[tokio::test]
async fn test_saved_key_takes_precedence_over_environment() {
    let credentials = CredentialStore::new(memory_store());
    let settings = settings_with_env_key(Some("sk-from-env"));

    let resolved = credentials.resolve(&settings).await.unwrap().unwrap();
    assert_eq!(resolved.source, KeySource::Environment);
    assert_eq!(resolved.value, "sk-from-env");

    credentials.save("sk-from-store").await.unwrap();
    let resolved = credentials.resolve(&settings).await.unwrap().unwrap();
    assert_eq!(resolved.source, KeySource::Saved);
    assert_eq!(resolved.value, "sk-from-store");
}

#[tokio::test]
async fn test_no_key_anywhere_resolves_to_none() {
    let credentials = CredentialStore::new(memory_store());
    assert!(credentials
        .resolve(&settings_with_env_key(None))
        .await
        .unwrap()
        .is_none());
    assert!(credentials
        .resolve(&settings_with_env_key(Some("  ")))
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_debug_output_never_shows_the_key() {
    let credentials = CredentialStore::new(memory_store());
    credentials.save("sk-secret-9876").await.unwrap();
    let resolved = credentials
        .resolve(&LlmSettings::default())
        .await
        .unwrap()
        .unwrap();

    let debug = format!("{resolved:?}");
    assert!(!debug.contains("sk-secret"));
    assert!(debug.contains("9876"));
    assert_eq!(resolved.masked(), mask_key("sk-secret-9876"));

    let settings = format!("{:?}", settings_with_env_key(Some("sk-secret-9876")));
    assert!(!settings.contains("sk-secret"));
}
