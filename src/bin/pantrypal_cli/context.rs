// ABOUTME: Shared state handed to every CLI command
// ABOUTME: Configuration, the opened key-value store, and the reference date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PantryPal

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use pantrypal::catalog::RecipeCatalog;
use pantrypal::config::AppConfig;
use pantrypal::pantry::PantryStore;
use pantrypal::storage::KeyValueStore;
use pantrypal_core::errors::AppResult;

/// Values every command needs
pub struct CliContext {
    pub config: AppConfig,
    pub store: Arc<dyn KeyValueStore>,
    pub today: NaiveDate,
}

impl CliContext {
    pub fn new(config: AppConfig, store: Arc<dyn KeyValueStore>, today: Option<NaiveDate>) -> Self {
        Self {
            config,
            store,
            today: today.unwrap_or_else(|| Local::now().date_naive()),
        }
    }

    pub async fn load_pantry(&self) -> AppResult<PantryStore> {
        PantryStore::load(self.store.as_ref()).await
    }

    pub async fn save_pantry(&self, pantry: &PantryStore) -> AppResult<()> {
        pantry.save(self.store.as_ref()).await
    }

    pub fn catalog() -> AppResult<RecipeCatalog> {
        RecipeCatalog::builtin()
    }
}
