// ABOUTME: Key-value storage abstraction for preferences, credentials, and pantry state
// ABOUTME: Pluggable backends (in-memory, JSON file) behind a string-keyed async trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PantryPal

//! # Key-Value Storage
//!
//! Services depend on [`KeyValueStore`] rather than a concrete backend, so
//! the CLI can persist to a JSON file while tests use memory.
//!
//! ```rust,no_run
//! use pantrypal::storage::{memory::InMemoryStore, KeyValueStore};
//! # async fn example() -> Result<(), pantrypal_core::errors::AppError> {
//! let store = InMemoryStore::new();
//! store.set("pantrypal_openai_key", "sk-test").await?;
//! assert_eq!(store.get("pantrypal_openai_key").await?.as_deref(), Some("sk-test"));
//! store.remove("pantrypal_openai_key").await?;
//! # Ok(())
//! # }
//! ```

/// JSON file backend
pub mod file;
/// In-memory backend
pub mod memory;

use async_trait::async_trait;
use pantrypal_core::errors::AppResult;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

use crate::config::AppConfig;
use file::JsonFileStore;
use memory::InMemoryStore;

/// String-keyed storage
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a value; `None` when the key is absent
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Write a value, replacing any previous one
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    async fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Delete a value; removing an absent key is not an error
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    async fn remove(&self, key: &str) -> AppResult<()>;

    /// Backend name for logging
    fn backend_name(&self) -> &'static str;
}

/// Read and deserialize a JSON value
///
/// # Errors
///
/// Returns an error if the backend fails or the stored value is not valid
/// JSON for `T`
pub async fn load_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> AppResult<Option<T>> {
    match store.get(key).await? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Serialize and write a JSON value
///
/// # Errors
///
/// Returns an error if serialization or the backend fails
pub async fn save_json<T: Serialize + Sync>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> AppResult<()> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw).await
}

/// Open the store selected by configuration
///
/// The testing environment uses memory; everything else uses the JSON file
/// in the data directory.
#[must_use]
pub fn open_store(config: &AppConfig) -> Arc<dyn KeyValueStore> {
    if config.environment.is_testing() {
        info!("Using in-memory key-value store");
        return Arc::new(InMemoryStore::new());
    }

    let path = config.store_path();
    info!(path = %path.display(), "Using JSON file key-value store");
    Arc::new(JsonFileStore::new(path))
}
