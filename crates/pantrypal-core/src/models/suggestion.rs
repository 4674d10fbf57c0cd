// ABOUTME: Recipe suggestion records produced by the generation service or the fallback list
// ABOUTME: Lenient JSON shape with difficulty normalization and cook-time text parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PantryPal

use serde::{Deserialize, Deserializer, Serialize};

use super::recipe::{RecipeView, SkillLevel};

/// A generated recipe; identity is its position in the returned list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionRecord {
    /// Recipe title
    pub title: String,
    /// Short description
    #[serde(default)]
    pub description: String,
    /// Ingredient lines
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Instruction steps
    #[serde(default)]
    pub instructions: Vec<String>,
    /// Free-form cooking time ("25 minutes")
    #[serde(default)]
    pub cooking_time: String,
    /// Difficulty; unknown values become `Beginner`
    #[serde(default, deserialize_with = "deserialize_difficulty")]
    pub difficulty: SkillLevel,
    /// Dietary labels
    #[serde(default)]
    pub dietary_labels: Vec<String>,
}

fn deserialize_difficulty<'de, D>(deserializer: D) -> Result<SkillLevel, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().map_or(SkillLevel::Beginner, SkillLevel::normalize))
}

impl SuggestionRecord {
    /// Create a suggestion with the given title and difficulty
    #[must_use]
    pub fn new(title: impl Into<String>, difficulty: SkillLevel) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            ingredients: Vec::new(),
            instructions: Vec::new(),
            cooking_time: String::new(),
            difficulty,
            dietary_labels: Vec::new(),
        }
    }

    /// Set the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the cooking time text
    #[must_use]
    pub fn with_cooking_time(mut self, text: impl Into<String>) -> Self {
        self.cooking_time = text.into();
        self
    }

    /// Set the ingredient lines
    #[must_use]
    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }

    /// Set the instruction steps
    #[must_use]
    pub fn with_instructions<I, S>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.instructions = steps.into_iter().map(Into::into).collect();
        self
    }

    /// Set the dietary labels
    #[must_use]
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dietary_labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Total minutes described by the cooking time text
    ///
    /// Understands "25 minutes", "1 hour 15 mins", "1.5 hours", and ranges
    /// such as "20-25 minutes" (upper end wins). Returns `None` when no number
    /// is present.
    #[must_use]
    pub fn cook_time_minutes(&self) -> Option<u32> {
        parse_duration_minutes(&self.cooking_time)
    }
}

impl RecipeView for SuggestionRecord {
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
        self.difficulty
    }

    fn cook_time_minutes(&self) -> Option<u32> {
        Self::cook_time_minutes(self)
    }
}

fn parse_duration_minutes(text: &str) -> Option<u32> {
    let chars: Vec<char> = text.to_lowercase().chars().collect();
    let mut total = 0.0_f64;
    let mut found = false;
    let mut i = 0;

    while i < chars.len() {
        if !chars[i].is_ascii_digit() {
            i += 1;
            continue;
        }

        let start = i;
        while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
            i += 1;
        }
        let number: String = chars[start..i].iter().collect();
        let Ok(value) = number.trim_end_matches('.').parse::<f64>() else {
            continue;
        };

        while i < chars.len() && chars[i].is_whitespace() {
            i += 1;
        }

        // Lower end of a range
        if i < chars.len() && (chars[i] == '-' || chars[i] == '\u{2013}') {
            i += 1;
            continue;
        }
        if chars[i..].starts_with(&['t', 'o', ' ']) {
            i += 2;
            continue;
        }

        let unit_start = i;
        while i < chars.len() && chars[i].is_alphabetic() {
            i += 1;
        }
        let unit: String = chars[unit_start..i].iter().collect();

        total += if unit.starts_with('h') { value * 60.0 } else { value };
        found = true;
    }

    found.then(|| total.round() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_time(text: &str) -> SuggestionRecord {
        SuggestionRecord::new("Test", SkillLevel::Beginner).with_cooking_time(text)
    }

    #[test]
    fn test_cook_time_parsing() {
        assert_eq!(with_time("25 minutes").cook_time_minutes(), Some(25));
        assert_eq!(with_time("1 hour 15 minutes").cook_time_minutes(), Some(75));
        assert_eq!(with_time("1.5 hours").cook_time_minutes(), Some(90));
        assert_eq!(with_time("20-25 minutes").cook_time_minutes(), Some(25));
        assert_eq!(with_time("10 to 15 mins").cook_time_minutes(), Some(15));
        assert_eq!(with_time("45min").cook_time_minutes(), Some(45));
        assert_eq!(with_time("quick").cook_time_minutes(), None);
        assert_eq!(with_time("").cook_time_minutes(), None);
    }

    #[test]
    fn test_lenient_difficulty() {
        let json = r#"{"title":"Soup","difficulty":"Expert"}"#;
        let record: SuggestionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.difficulty, SkillLevel::Advanced);

        let json = r#"{"title":"Soup","difficulty":"Easy peasy"}"#;
        let record: SuggestionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.difficulty, SkillLevel::Beginner);

        let json = r#"{"title":"Soup","difficulty":null}"#;
        let record: SuggestionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.difficulty, SkillLevel::Beginner);
    }

    #[test]
    fn test_wire_field_names() {
        let json = r#"{
            "title": "Rice Bowl",
            "description": "Quick",
            "ingredients": ["1 cup rice"],
            "instructions": ["Cook"],
            "cookingTime": "20 minutes",
            "difficulty": "Intermediate",
            "dietaryLabels": ["Vegan"]
        }"#;
        let record: SuggestionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.cooking_time, "20 minutes");
        assert_eq!(record.dietary_labels, vec!["Vegan"]);
        assert_eq!(record.difficulty, SkillLevel::Intermediate);
    }
}
