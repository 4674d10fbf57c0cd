// ABOUTME: Recipe data model with skill levels, dietary labels, and ingredient lists
// ABOUTME: Defines RecipeRecord, SkillLevel, and the RecipeView trait used by the filter engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PantryPal

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Cooking skill level for recipe complexity filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SkillLevel {
    /// Simple recipes, basic techniques
    #[default]
    Beginner,
    /// Moderate complexity, some techniques required
    Intermediate,
    /// Complex recipes, advanced techniques
    #[serde(alias = "Expert")]
    Advanced,
}

impl SkillLevel {
    /// All skill levels in ascending order
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    /// Display label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }

    /// Lenient conversion used for generated content
    ///
    /// Anything other than a recognizable intermediate or advanced level
    /// becomes `Beginner`.
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        raw.parse().unwrap_or_default()
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            // The filter chips label the top level "Expert"
            "advanced" | "expert" => Ok(Self::Advanced),
            other => Err(AppError::invalid_input(format!(
                "Unknown skill level '{other}' (expected beginner, intermediate, or advanced)"
            ))),
        }
    }
}

/// Read access shared by catalog recipes and generated suggestions
///
/// The filter engine works against this trait so the same criteria apply to
/// both collections.
pub trait RecipeView {
    /// Recipe title
    fn title(&self) -> &str;

    /// Ingredient lines, in recipe order
    fn ingredients(&self) -> &[String];

    /// Dietary labels
    fn dietary_labels(&self) -> &[String];

    /// Skill level
    fn skill_level(&self) -> SkillLevel;

    /// Cook time in minutes, if known
    fn cook_time_minutes(&self) -> Option<u32>;

    /// Exact membership test against the dietary labels
    fn has_dietary_label(&self, label: &str) -> bool {
        self.dietary_labels().iter().any(|l| l == label)
    }
}

/// A read-only catalog recipe
///
/// Favorite status is not stored here; see the favorites set in the root crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRecord {
    /// Catalog identifier
    pub id: String,
    /// Recipe title
    pub title: String,
    /// Cook time in minutes
    pub cook_time_minutes: u32,
    /// Dietary labels (no duplicates)
    pub dietary_labels: Vec<String>,
    /// Required skill level
    pub skill_level: SkillLevel,
    /// Ingredient lines (quantity and preparation included)
    pub ingredients: Vec<String>,
    /// Ordered instruction steps
    pub instructions: Vec<String>,
}

impl RecipeRecord {
    /// Create a recipe with no labels, ingredients, or instructions
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        cook_time_minutes: u32,
        skill_level: SkillLevel,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            cook_time_minutes,
            dietary_labels: Vec::new(),
            skill_level,
            ingredients: Vec::new(),
            instructions: Vec::new(),
        }
    }

    /// Add a dietary label, ignoring duplicates
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        let label = label.into();
        if !self.dietary_labels.contains(&label) {
            self.dietary_labels.push(label);
        }
        self
    }

    /// Add an ingredient line
    #[must_use]
    pub fn with_ingredient(mut self, ingredient: impl Into<String>) -> Self {
        self.ingredients.push(ingredient.into());
        self
    }

    /// Add multiple ingredient lines
    #[must_use]
    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients
            .extend(ingredients.into_iter().map(Into::into));
        self
    }

    /// Add multiple instruction steps
    #[must_use]
    pub fn with_instructions<I, S>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.instructions.extend(steps.into_iter().map(Into::into));
        self
    }
}

impl RecipeView for RecipeRecord {
    fn title(&self) -> &str {
        &self.title
    }

    fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    fn dietary_labels(&self) -> &[String] {
        &self.dietary_labels
    }

    fn skill_level(&self) -> SkillLevel {
        self.skill_level
    }

    fn cook_time_minutes(&self) -> Option<u32> {
        Some(self.cook_time_minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_level_parsing() {
        assert_eq!("beginner".parse::<SkillLevel>().unwrap(), SkillLevel::Beginner);
        assert_eq!(" Intermediate ".parse::<SkillLevel>().unwrap(), SkillLevel::Intermediate);
        assert_eq!("Expert".parse::<SkillLevel>().unwrap(), SkillLevel::Advanced);
        assert!("chef".parse::<SkillLevel>().is_err());
    }

    #[test]
    fn test_skill_level_normalize_defaults_to_beginner() {
        assert_eq!(SkillLevel::normalize("Advanced"), SkillLevel::Advanced);
        assert_eq!(SkillLevel::normalize("Easy"), SkillLevel::Beginner);
        assert_eq!(SkillLevel::normalize(""), SkillLevel::Beginner);
    }

    #[test]
    fn test_with_label_deduplicates() {
        let recipe = RecipeRecord::new("1", "Toast", 5, SkillLevel::Beginner)
            .with_label("Vegan")
            .with_label("Vegan")
            .with_label("Keto");
        assert_eq!(recipe.dietary_labels, vec!["Vegan", "Keto"]);
        assert!(recipe.has_dietary_label("Keto"));
        assert!(!recipe.has_dietary_label("keto"));
    }
}
