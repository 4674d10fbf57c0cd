// ABOUTME: Stable recipe filter combining search, skill, cook-time, and dietary predicates
// ABOUTME: Works on catalog recipes and generated suggestions through the RecipeView trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PantryPal

use pantrypal_core::models::{FilterCriteria, RecipeView, SearchScope};
use tracing::debug;

/// Whether a single recipe passes every active predicate
///
/// A recipe without a known cook time never passes an active cook-time
/// predicate.
#[must_use]
pub fn matches_criteria<R: RecipeView + ?Sized>(recipe: &R, criteria: &FilterCriteria) -> bool {
    matches_search(recipe, criteria)
        && criteria
            .skill_level
            .is_none_or(|level| recipe.skill_level() == level)
        && criteria.cook_time.is_none_or(|bucket| {
            recipe
                .cook_time_minutes()
                .is_some_and(|minutes| bucket.contains(minutes))
        })
        && criteria
            .effective_dietary_label()
            .is_none_or(|label| recipe.has_dietary_label(label))
}

fn matches_search<R: RecipeView + ?Sized>(recipe: &R, criteria: &FilterCriteria) -> bool {
    let Some(needle) = criteria.effective_search() else {
        return true;
    };

    if recipe.title().to_lowercase().contains(&needle) {
        return true;
    }

    criteria.search_scope == SearchScope::TitleAndIngredients
        && recipe
            .ingredients()
            .iter()
            .any(|ingredient| ingredient.to_lowercase().contains(&needle))
}

/// Filter a collection, preserving relative order
///
/// Returns an empty vector when nothing matches.
#[must_use]
pub fn apply_filter<R: RecipeView + Clone>(recipes: &[R], criteria: &FilterCriteria) -> Vec<R> {
    let filtered: Vec<R> = recipes
        .iter()
        .filter(|recipe| matches_criteria(*recipe, criteria))
        .cloned()
        .collect();

    debug!(
        total = recipes.len(),
        matched = filtered.len(),
        "Applied recipe filter"
    );
    filtered
}
