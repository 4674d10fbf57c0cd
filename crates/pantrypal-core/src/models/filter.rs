// ABOUTME: Recipe filter criteria with skill, cook-time bucket, dietary, and search predicates
// ABOUTME: Serialized form is the persisted filter preference value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PantryPal

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::recipe::SkillLevel;
use crate::constants::filters::NO_DIETARY_PREFERENCE;
use crate::errors::AppError;

/// Cook-time range used by the recipe filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CookTimeBucket {
    /// 0 to 20 minutes
    #[serde(rename = "0-20")]
    UpTo20,
    /// 20 to 40 minutes
    #[serde(rename = "20-40")]
    From20To40,
    /// 40 to 60 minutes
    #[serde(rename = "40-60")]
    From40To60,
    /// 60 minutes or more
    #[serde(rename = "60+")]
    Over60,
}

impl CookTimeBucket {
    /// All buckets in ascending order
    pub const ALL: [Self; 4] = [Self::UpTo20, Self::From20To40, Self::From40To60, Self::Over60];

    /// Inclusive bounds; the upper bound is `None` for the open bucket
    #[must_use]
    pub const fn bounds(&self) -> (u32, Option<u32>) {
        match self {
            Self::UpTo20 => (0, Some(20)),
            Self::From20To40 => (20, Some(40)),
            Self::From40To60 => (40, Some(60)),
            Self::Over60 => (60, None),
        }
    }

    /// Whether a cook time falls in this bucket (bounds inclusive)
    #[must_use]
    pub const fn contains(&self, minutes: u32) -> bool {
        match self.bounds() {
            (min, Some(max)) => minutes >= min && minutes <= max,
            (min, None) => minutes >= min,
        }
    }

    /// Wire label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UpTo20 => "0-20",
            Self::From20To40 => "20-40",
            Self::From40To60 => "40-60",
            Self::Over60 => "60+",
        }
    }
}

impl fmt::Display for CookTimeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CookTimeBucket {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|bucket| bucket.as_str() == trimmed)
            .ok_or_else(|| {
                AppError::invalid_input(format!(
                    "Unknown cook time '{trimmed}' (expected 0-20, 20-40, 40-60, or 60+)"
                ))
            })
    }
}

/// Which recipe text the search predicate looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SearchScope {
    /// Title only
    #[default]
    Title,
    /// Title and every ingredient line
    TitleAndIngredients,
}

/// Recipe filter predicates, AND-ed together
///
/// Absent fields match everything. Serialized as the persisted filter
/// preference (`{"skill": null, "time": "20-40", "diet": "No preference"}`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Exact skill level
    #[serde(rename = "skill", default)]
    pub skill_level: Option<SkillLevel>,
    /// Cook-time bucket
    #[serde(rename = "time", default)]
    pub cook_time: Option<CookTimeBucket>,
    /// Dietary label; "No preference" disables the predicate
    #[serde(rename = "diet", default)]
    pub dietary_label: Option<String>,
    /// Case-insensitive substring
    #[serde(rename = "search", default, skip_serializing_if = "Option::is_none")]
    pub search_text: Option<String>,
    /// What the search text is matched against
    #[serde(default)]
    pub search_scope: SearchScope,
}

impl FilterCriteria {
    /// Defaults used when no preference has been saved
    #[must_use]
    pub fn dashboard_defaults() -> Self {
        Self {
            skill_level: None,
            cook_time: Some(CookTimeBucket::From20To40),
            dietary_label: Some(NO_DIETARY_PREFERENCE.to_owned()),
            search_text: None,
            search_scope: SearchScope::Title,
        }
    }

    /// Set the skill level
    #[must_use]
    pub const fn with_skill_level(mut self, level: SkillLevel) -> Self {
        self.skill_level = Some(level);
        self
    }

    /// Set the cook-time bucket
    #[must_use]
    pub const fn with_cook_time(mut self, bucket: CookTimeBucket) -> Self {
        self.cook_time = Some(bucket);
        self
    }

    /// Set the dietary label
    #[must_use]
    pub fn with_dietary_label(mut self, label: impl Into<String>) -> Self {
        self.dietary_label = Some(label.into());
        self
    }

    /// Set the search text
    #[must_use]
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = Some(text.into());
        self
    }

    /// Set the search scope
    #[must_use]
    pub const fn with_search_scope(mut self, scope: SearchScope) -> Self {
        self.search_scope = scope;
        self
    }

    /// Effective dietary label, with the "No preference" sentinel removed
    #[must_use]
    pub fn effective_dietary_label(&self) -> Option<&str> {
        self.dietary_label
            .as_deref()
            .map(str::trim)
            .filter(|label| !label.is_empty() && *label != NO_DIETARY_PREFERENCE)
    }

    /// Effective search text, lowercased, or `None` when blank
    #[must_use]
    pub fn effective_search(&self) -> Option<String> {
        self.search_text
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_lowercase)
    }

    /// Whether no predicate is active
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.skill_level.is_none()
            && self.cook_time.is_none()
            && self.effective_dietary_label().is_none()
            && self.effective_search().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_bounds_are_inclusive() {
        assert!(CookTimeBucket::UpTo20.contains(0));
        assert!(CookTimeBucket::UpTo20.contains(20));
        assert!(CookTimeBucket::From20To40.contains(20));
        assert!(CookTimeBucket::From20To40.contains(40));
        assert!(!CookTimeBucket::From40To60.contains(61));
        assert!(CookTimeBucket::Over60.contains(60));
        assert!(CookTimeBucket::Over60.contains(240));
        assert!(!CookTimeBucket::Over60.contains(59));
    }

    #[test]
    fn test_bucket_parse_and_wire_names() {
        assert_eq!("60+".parse::<CookTimeBucket>().unwrap(), CookTimeBucket::Over60);
        assert!("10-30".parse::<CookTimeBucket>().is_err());
        let json = serde_json::to_string(&CookTimeBucket::From20To40).unwrap();
        assert_eq!(json, "\"20-40\"");
    }

    #[test]
    fn test_dashboard_defaults_serialized_shape() {
        let value = serde_json::to_value(FilterCriteria::dashboard_defaults()).unwrap();
        assert_eq!(value["skill"], serde_json::Value::Null);
        assert_eq!(value["time"], "20-40");
        assert_eq!(value["diet"], "No preference");
        assert!(value.get("search").is_none());
    }

    #[test]
    fn test_no_preference_is_unrestricted() {
        let criteria = FilterCriteria::default().with_dietary_label("No preference");
        assert!(criteria.effective_dietary_label().is_none());
        assert!(criteria.is_unrestricted());
        assert!(!FilterCriteria::dashboard_defaults().is_unrestricted());
    }
}
