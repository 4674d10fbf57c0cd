// ABOUTME: Persisted recipe filter preference read at startup and written on every change
// ABOUTME: Missing or corrupted values fall back to the dashboard defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PantryPal

use pantrypal_core::constants::storage_keys;
use pantrypal_core::errors::AppResult;
use pantrypal_core::models::FilterCriteria;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::storage::{save_json, KeyValueStore};

/// Last-used filter criteria
pub struct FilterPreferenceStore {
    store: Arc<dyn KeyValueStore>,
}

impl FilterPreferenceStore {
    /// Wrap a key-value store
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Load the saved criteria, or the defaults when none are usable
    ///
    /// A value that no longer parses is logged and ignored rather than
    /// surfaced; the next save overwrites it.
    ///
    /// # Errors
    ///
    /// Returns an error only if the backend itself fails
    pub async fn load(&self) -> AppResult<FilterCriteria> {
        let Some(raw) = self.store.get(storage_keys::FILTER_PREFERENCES).await? else {
            debug!("No saved filter preference, using defaults");
            return Ok(FilterCriteria::dashboard_defaults());
        };

        match serde_json::from_str::<FilterCriteria>(&raw) {
            Ok(criteria) => Ok(criteria),
            Err(e) => {
                warn!(error = %e, "Saved filter preference is corrupted, using defaults");
                Ok(FilterCriteria::dashboard_defaults())
            }
        }
    }

    /// Persist the criteria
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the backend fails
    pub async fn save(&self, criteria: &FilterCriteria) -> AppResult<()> {
        save_json(self.store.as_ref(), storage_keys::FILTER_PREFERENCES, criteria).await
    }

    /// Forget the saved criteria so the defaults apply again
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails
    pub async fn reset(&self) -> AppResult<()> {
        self.store.remove(storage_keys::FILTER_PREFERENCES).await
    }
}
