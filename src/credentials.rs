// ABOUTME: Saved API key for the recipe generation service
// ABOUTME: Resolves the effective key from the store first, then the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PantryPal

use pantrypal_core::constants::storage_keys;
use pantrypal_core::errors::{AppError, AppResult};
use std::fmt;
use std::sync::Arc;
use tracing::info;

use crate::config::LlmSettings;
use crate::storage::KeyValueStore;

/// Where the effective key came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    /// Saved through the credential store
    Saved,
    /// `OPENAI_API_KEY` environment variable
    Environment,
}

impl fmt::Display for KeySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Saved => write!(f, "saved"),
            Self::Environment => write!(f, "environment"),
        }
    }
}

/// The key used for a generation request
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedKey {
    /// Key value
    pub value: String,
    /// Origin
    pub source: KeySource,
}

impl ResolvedKey {
    /// Key with everything but the last four characters hidden
    #[must_use]
    pub fn masked(&self) -> String {
        mask_key(&self.value)
    }
}

impl fmt::Debug for ResolvedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedKey")
            .field("value", &self.masked())
            .field("source", &self.source)
            .finish()
    }
}

/// Mask a key for display
#[must_use]
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let visible: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{visible}", "*".repeat(chars.len() - 4))
}

/// Credential storage over a key-value store
pub struct CredentialStore {
    store: Arc<dyn KeyValueStore>,
}

impl CredentialStore {
    /// Wrap a key-value store
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Saved key, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails
    pub async fn load(&self) -> AppResult<Option<String>> {
        Ok(self
            .store
            .get(storage_keys::OPENAI_API_KEY)
            .await?
            .map(|k| k.trim().to_owned())
            .filter(|k| !k.is_empty()))
    }

    /// Save a key
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank key, or a backend error
    pub async fn save(&self, key: &str) -> AppResult<()> {
        let key = key.trim();
        if key.is_empty() {
            return Err(AppError::invalid_input("API key cannot be empty"));
        }
        self.store.set(storage_keys::OPENAI_API_KEY, key).await?;
        info!(key = %mask_key(key), "Saved generation service API key");
        Ok(())
    }

    /// Delete the saved key
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails
    pub async fn remove(&self) -> AppResult<()> {
        self.store.remove(storage_keys::OPENAI_API_KEY).await?;
        info!("Removed generation service API key");
        Ok(())
    }

    /// Effective key: the saved one, else the one from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails
    pub async fn resolve(&self, settings: &LlmSettings) -> AppResult<Option<ResolvedKey>> {
        if let Some(value) = self.load().await? {
            return Ok(Some(ResolvedKey {
                value,
                source: KeySource::Saved,
            }));
        }

        Ok(settings
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(|value| ResolvedKey {
                value: value.to_owned(),
                source: KeySource::Environment,
            }))
    }
}
