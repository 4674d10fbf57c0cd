// ABOUTME: Favorite recipe ids kept outside the catalog records
// ABOUTME: Unknown ids are ignored on toggle and dropped on resolve
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PantryPal

use pantrypal_core::constants::storage_keys;
use pantrypal_core::errors::AppResult;
use pantrypal_core::models::RecipeRecord;
use tracing::{debug, info};

use super::RecipeCatalog;
use crate::storage::{load_json, save_json, KeyValueStore};

/// Favorite recipe ids in the order they were added
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    ids: Vec<String>,
}

impl Favorites {
    /// No favorites
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load persisted favorites; an absent key means none
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails or the stored value is corrupt
    pub async fn load(store: &dyn KeyValueStore) -> AppResult<Self> {
        let ids: Vec<String> = load_json(store, storage_keys::FAVORITE_RECIPES)
            .await?
            .unwrap_or_default();
        debug!(count = ids.len(), "Loaded favorite recipes");
        Ok(Self { ids })
    }

    /// Persist favorites
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the backend fails
    pub async fn save(&self, store: &dyn KeyValueStore) -> AppResult<()> {
        save_json(store, storage_keys::FAVORITE_RECIPES, &self.ids).await
    }

    /// Raw ids, possibly including ones the catalog no longer has
    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Whether `id` is a favorite
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|f| f == id)
    }

    /// Flip `id` and return whether it is now a favorite
    ///
    /// Returns `None` without changing anything if the catalog has no such
    /// recipe.
    pub fn toggle_in(&mut self, catalog: &RecipeCatalog, id: &str) -> Option<bool> {
        if !catalog.contains(id) {
            debug!(id = %id, "Ignoring favorite toggle for unknown recipe");
            return None;
        }
        if let Some(index) = self.ids.iter().position(|f| f == id) {
            self.ids.remove(index);
            info!(id = %id, "Removed favorite recipe");
            Some(false)
        } else {
            self.ids.push(id.to_owned());
            info!(id = %id, "Added favorite recipe");
            Some(true)
        }
    }

    /// Favorite recipes that still exist, in favorite order
    #[must_use]
    pub fn resolve<'a>(&self, catalog: &'a RecipeCatalog) -> Vec<&'a RecipeRecord> {
        self.ids.iter().filter_map(|id| catalog.get(id)).collect()
    }

    /// Drop ids the catalog does not know; returns how many were removed
    pub fn prune(&mut self, catalog: &RecipeCatalog) -> usize {
        let before = self.ids.len();
        self.ids.retain(|id| catalog.contains(id));
        before - self.ids.len()
    }
}
