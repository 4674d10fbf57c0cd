// ABOUTME: Fixed suggestion list returned when the generation service cannot be used
// ABOUTME: Three simple recipes built from common pantry staples
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PantryPal

use pantrypal_core::models::{SkillLevel, SuggestionRecord};

/// The built-in fallback suggestions
#[must_use]
pub fn fallback_suggestions() -> Vec<SuggestionRecord> {
    vec![
        SuggestionRecord::new("Chicken Stir-Fry", SkillLevel::Beginner)
            .with_description(
                "A quick and easy stir-fry using chicken and vegetables from your pantry.",
            )
            .with_ingredients([
                "2 chicken breasts, sliced",
                "1 cup mixed vegetables",
                "2 tbsp soy sauce",
                "1 tbsp olive oil",
                "2 cloves garlic, minced",
                "1 tbsp ginger, grated",
                "1 bell pepper, sliced",
                "1 cup mushrooms, sliced",
            ])
            .with_instructions([
                "Heat oil in a large pan over medium-high heat.",
                "Add chicken and cook until browned, about 5 minutes.",
                "Add garlic and ginger, cook for 1 minute until fragrant.",
                "Add vegetables and stir-fry for 3-4 minutes until tender-crisp.",
                "Add soy sauce and stir to combine.",
                "Serve hot over rice if desired.",
            ])
            .with_cooking_time("25 minutes")
            .with_labels(["High Protein"]),
        SuggestionRecord::new("Vegetable Fried Rice", SkillLevel::Beginner)
            .with_description("A flavorful vegetarian fried rice using pantry staples.")
            .with_ingredients([
                "2 cups cooked rice",
                "1 cup mixed vegetables",
                "2 eggs, beaten",
                "2 tbsp soy sauce",
                "1 tbsp olive oil",
                "2 cloves garlic, minced",
                "1 onion, diced",
                "1 tbsp ginger, grated",
            ])
            .with_instructions([
                "Heat oil in a large pan or wok over medium-high heat.",
                "Add onion, garlic, and ginger, cook until fragrant.",
                "Add vegetables and stir-fry for 3-4 minutes.",
                "Push ingredients to one side, add beaten eggs to empty space.",
                "Scramble eggs, then mix with vegetables.",
                "Add cooked rice and soy sauce, stir to combine.",
                "Cook for 3-4 minutes until everything is heated through.",
            ])
            .with_cooking_time("20 minutes")
            .with_labels(["Vegetarian"]),
        SuggestionRecord::new("Garlic Mushroom Pasta", SkillLevel::Beginner)
            .with_description(
                "A simple yet delicious pasta dish featuring garlic and mushrooms.",
            )
            .with_ingredients([
                "8 oz pasta",
                "2 cups mushrooms, sliced",
                "4 cloves garlic, minced",
                "2 tbsp olive oil",
                "1 tbsp butter",
                "Salt and pepper to taste",
                "Fresh herbs (optional)",
            ])
            .with_instructions([
                "Cook pasta according to package instructions.",
                "While pasta cooks, heat oil and butter in a large pan.",
                "Add garlic and cook for 1 minute until fragrant.",
                "Add mushrooms and cook until browned and tender, about 5-7 minutes.",
                "Season with salt and pepper.",
                "Drain pasta and add to the pan with mushrooms.",
                "Toss to combine and serve hot with fresh herbs if desired.",
            ])
            .with_cooking_time("15 minutes")
            .with_labels(["Vegetarian"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_list_is_fixed() {
        let recipes = fallback_suggestions();
        let titles: Vec<&str> = recipes.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(
            titles,
            ["Chicken Stir-Fry", "Vegetable Fried Rice", "Garlic Mushroom Pasta"]
        );
        assert_eq!(recipes[0].cook_time_minutes(), Some(25));
        assert!(recipes.iter().all(|r| r.difficulty == SkillLevel::Beginner));
    }
}
