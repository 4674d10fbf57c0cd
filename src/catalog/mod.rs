// ABOUTME: Built-in recipe catalog with filtering, pantry matching, and readiness ranking
// ABOUTME: Recipes are embedded at compile time and parsed once per catalog instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PantryPal

//! # Recipe Catalog
//!
//! The catalog is read-only. Favorites are tracked separately by id in
//! [`Favorites`], never as a field on the recipe.

mod favorites;

pub use favorites::Favorites;

use pantrypal_core::errors::{AppError, AppResult};
use pantrypal_core::models::{FilterCriteria, RecipeRecord};
use pantrypal_intelligence::{
    apply_filter, match_ingredients, rank_by_readiness, IngredientMatch, RankedRecipe,
};
use tracing::debug;

/// Embedded catalog data
const BUILTIN_RECIPES: &str = include_str!("recipes.json");

/// Ordered, read-only recipe collection
#[derive(Debug, Clone, Default)]
pub struct RecipeCatalog {
    recipes: Vec<RecipeRecord>,
}

impl RecipeCatalog {
    /// The recipes shipped with the application
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the embedded data is malformed
    pub fn builtin() -> AppResult<Self> {
        let recipes: Vec<RecipeRecord> = serde_json::from_str(BUILTIN_RECIPES)?;
        debug!(count = recipes.len(), "Loaded built-in recipe catalog");
        Ok(Self { recipes })
    }

    /// Catalog over arbitrary recipes, in the given order
    #[must_use]
    pub fn from_recipes(recipes: Vec<RecipeRecord>) -> Self {
        Self { recipes }
    }

    /// All recipes in catalog order
    #[must_use]
    pub fn recipes(&self) -> &[RecipeRecord] {
        &self.recipes
    }

    /// Number of recipes
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Look up a recipe by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&RecipeRecord> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Whether a recipe with this id exists
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Recipes matching `criteria`, in catalog order
    #[must_use]
    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<RecipeRecord> {
        apply_filter(&self.recipes, criteria)
    }

    /// Overlap between one recipe and the pantry
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown recipe id
    pub fn match_recipe<S: AsRef<str>>(
        &self,
        id: &str,
        pantry_names: &[S],
    ) -> AppResult<IngredientMatch> {
        let recipe = self
            .get(id)
            .ok_or_else(|| AppError::not_found(format!("Recipe {id}")))?;
        Ok(match_ingredients(&recipe.ingredients, pantry_names))
    }

    /// Every recipe ordered by readiness against the pantry
    #[must_use]
    pub fn rank<S: AsRef<str>>(&self, pantry_names: &[S]) -> Vec<RankedRecipe<RecipeRecord>> {
        rank_by_readiness(&self.recipes, pantry_names)
    }
}
