// ABOUTME: Output formatting helpers for pantrypal-cli
// ABOUTME: Tables for pantry items and recipes, plus detail views for matches and suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PantryPal

use pantrypal::catalog::Favorites;
use pantrypal::pantry::{PantryItemView, PantrySummary};
use pantrypal::suggestions::SuggestionOutcome;
use pantrypal_core::models::{format_display_date, ExpirationStatus, FilterCriteria, RecipeRecord};
use pantrypal_intelligence::{IngredientMatch, RankedRecipe};

use super::ids::short_id;

fn status_text(item: &PantryItemView) -> String {
    match item.status {
        ExpirationStatus::Expired => format!("expired {}d ago", -item.days_left),
        ExpirationStatus::Expiring if item.days_left == 0 => "expires today".to_owned(),
        ExpirationStatus::Expiring => format!("expiring in {}d", item.days_left),
        ExpirationStatus::Fresh => format!("fresh ({}d)", item.days_left),
    }
}

/// Pantry table
pub fn print_pantry(items: &[PantryItemView]) {
    if items.is_empty() {
        println!("No pantry items.");
        return;
    }

    println!(
        "    {:<8}  {:<18} {:<16} {:<12} {:<11} Status",
        "ID", "Name", "Brand", "Quantity", "Expires"
    );
    println!("{}", "-".repeat(90));
    for item in items {
        let entry = &item.entry;
        println!(
            "{} {:<8}  {:<18} {:<16} {:<12} {:<11} {}",
            if entry.selected { "[x]" } else { "[ ]" },
            short_id(&entry.id),
            entry.name,
            entry.brand,
            entry.quantity,
            format_display_date(entry.expiration_date),
            status_text(item)
        );
    }
}

/// Pantry status counts
pub fn print_summary(summary: &PantrySummary) {
    println!("Pantry: {} items", summary.total);
    println!("   Fresh:    {}", summary.fresh);
    println!("   Expiring: {}", summary.expiring);
    println!("   Expired:  {}", summary.expired);
    println!("   Selected: {}", summary.selected);
}

/// Active filter, one line
pub fn print_criteria(criteria: &FilterCriteria) {
    let skill = criteria
        .skill_level
        .map_or_else(|| "any".to_owned(), |s| s.to_string());
    let time = criteria
        .cook_time
        .map_or_else(|| "any".to_owned(), |t| format!("{t} min"));
    let diet = criteria.effective_dietary_label().unwrap_or("any");
    let search = criteria.effective_search().unwrap_or_default();

    print!("Filter: skill={skill} time={time} diet={diet}");
    if search.is_empty() {
        println!();
    } else {
        println!(" search=\"{search}\" ({:?})", criteria.search_scope);
    }
}

fn recipe_line(recipe: &RecipeRecord, favorite: bool) -> String {
    format!(
        "{} {:>3}  {:<34} {:>3} min  {:<12} {}",
        if favorite { "*" } else { " " },
        recipe.id,
        recipe.title,
        recipe.cook_time_minutes,
        recipe.skill_level,
        recipe.dietary_labels.join(", ")
    )
}

/// Recipe table; favorites are starred
pub fn print_recipes(recipes: &[RecipeRecord], favorites: &Favorites) {
    if recipes.is_empty() {
        println!("No recipes match.");
        return;
    }
    for recipe in recipes {
        println!("{}", recipe_line(recipe, favorites.contains(&recipe.id)));
    }
}

/// Full recipe
pub fn print_recipe_detail(recipe: &RecipeRecord, favorite: bool) {
    println!("{}{}", recipe.title, if favorite { "  (favorite)" } else { "" });
    println!("{}", "=".repeat(60));
    println!(
        "{} min | {} | {}",
        recipe.cook_time_minutes,
        recipe.skill_level,
        recipe.dietary_labels.join(", ")
    );
    println!("\nIngredients:");
    for ingredient in &recipe.ingredients {
        println!("  - {ingredient}");
    }
    println!("\nInstructions:");
    for (index, step) in recipe.instructions.iter().enumerate() {
        println!("  Step {}: {step}", index + 1);
    }
}

/// One recipe's overlap with the pantry
pub fn print_match(recipe: &RecipeRecord, matched: &IngredientMatch) {
    println!(
        "{}: {}/{} ingredients available ({}%)",
        recipe.title,
        matched.available_count(),
        matched.total_ingredients,
        matched.readiness_percent()
    );
    for ingredient in &recipe.ingredients {
        let have = matched.available_ingredients.contains(ingredient);
        println!("  {} {ingredient}", if have { "[x]" } else { "[ ]" });
    }
    if !matched.used_pantry_items.is_empty() {
        println!("Uses from pantry: {}", matched.used_pantry_items.join(", "));
    }
}

/// Recipes ordered by readiness
pub fn print_ranked(ranked: &[RankedRecipe<RecipeRecord>]) {
    for entry in ranked {
        println!(
            "{:>4}%  {:>3}  {:<34} {}/{}",
            entry.matched.readiness_percent(),
            entry.recipe.id,
            entry.recipe.title,
            entry.matched.available_count(),
            entry.matched.total_ingredients
        );
    }
}

/// Suggestion list with its source
pub fn print_suggestions(outcome: &SuggestionOutcome) {
    println!("Suggestions: {}", outcome.source);
    println!("{}", "=".repeat(60));
    for (index, recipe) in outcome.recipes.iter().enumerate() {
        println!("\n{}. {} [{}]", index + 1, recipe.title, recipe.difficulty);
        if !recipe.description.is_empty() {
            println!("   {}", recipe.description);
        }
        if !recipe.cooking_time.is_empty() {
            println!("   Time: {}", recipe.cooking_time);
        }
        if !recipe.dietary_labels.is_empty() {
            println!("   Labels: {}", recipe.dietary_labels.join(", "));
        }
        println!("   Ingredients:");
        for ingredient in &recipe.ingredients {
            println!("     - {ingredient}");
        }
        println!("   Instructions:");
        for (step, text) in recipe.instructions.iter().enumerate() {
            println!("     {}. {text}", step + 1);
        }
    }
}
