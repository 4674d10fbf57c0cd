// ABOUTME: Ingredient overlap between a recipe and the pantry using case-insensitive substrings
// ABOUTME: Computes available ingredients, used pantry items, readiness, and readiness ranking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PantryPal

//! A pantry name counts toward an ingredient when it appears anywhere in the
//! ingredient line, ignoring case. "Garlic" matches "3 cloves garlic, minced".
//! Short names can match unrelated lines ("Oil" inside "boiling water"); no
//! stemming, plural handling, or unit parsing is attempted.

use pantrypal_core::models::RecipeView;
use serde::{Deserialize, Serialize};

/// Overlap between one recipe and the pantry
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IngredientMatch {
    /// Recipe ingredient lines matched by at least one pantry name, recipe order
    pub available_ingredients: Vec<String>,
    /// Pantry names that matched at least one ingredient, pantry order, no
    /// case-insensitive duplicates
    pub used_pantry_items: Vec<String>,
    /// Number of ingredient lines in the recipe
    pub total_ingredients: usize,
}

impl IngredientMatch {
    /// Count of available ingredients
    #[must_use]
    pub fn available_count(&self) -> usize {
        self.available_ingredients.len()
    }

    /// Available fraction in `[0, 1]`; zero for a recipe without ingredients
    #[must_use]
    pub fn readiness(&self) -> f64 {
        if self.total_ingredients == 0 {
            return 0.0;
        }
        self.available_ingredients.len() as f64 / self.total_ingredients as f64
    }

    /// Readiness as a whole percentage, rounded half away from zero
    #[must_use]
    pub fn readiness_percent(&self) -> u32 {
        (self.readiness() * 100.0).round() as u32
    }
}

/// Compute which ingredients the pantry covers
#[must_use]
pub fn match_ingredients<S: AsRef<str>>(ingredients: &[String], pantry_names: &[S]) -> IngredientMatch {
    let pantry: Vec<(&str, String)> = pantry_names
        .iter()
        .map(|name| name.as_ref().trim())
        .filter(|name| !name.is_empty())
        .map(|name| (name, name.to_lowercase()))
        .collect();

    let lowered: Vec<String> = ingredients.iter().map(|i| i.to_lowercase()).collect();

    let available_ingredients = ingredients
        .iter()
        .zip(&lowered)
        .filter(|(_, line)| pantry.iter().any(|(_, needle)| line.contains(needle.as_str())))
        .map(|(original, _)| original.clone())
        .collect();

    let mut seen: Vec<&str> = Vec::new();
    let mut used_pantry_items = Vec::new();
    for (name, needle) in &pantry {
        if seen.contains(&needle.as_str()) {
            continue;
        }
        if lowered.iter().any(|line| line.contains(needle.as_str())) {
            seen.push(needle.as_str());
            used_pantry_items.push((*name).to_owned());
        }
    }

    IngredientMatch {
        available_ingredients,
        used_pantry_items,
        total_ingredients: ingredients.len(),
    }
}

/// A recipe paired with its pantry overlap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedRecipe<R> {
    /// The recipe
    pub recipe: R,
    /// Its overlap with the pantry
    pub matched: IngredientMatch,
}

/// Order recipes by readiness, highest first; ties keep catalog order
#[must_use]
pub fn rank_by_readiness<R, S>(recipes: &[R], pantry_names: &[S]) -> Vec<RankedRecipe<R>>
where
    R: RecipeView + Clone,
    S: AsRef<str>,
{
    let mut ranked: Vec<RankedRecipe<R>> = recipes
        .iter()
        .map(|recipe| RankedRecipe {
            recipe: recipe.clone(),
            matched: match_ingredients(recipe.ingredients(), pantry_names),
        })
        .collect();

    ranked.sort_by(|a, b| b.matched.readiness().total_cmp(&a.matched.readiness()));
    ranked
}
