// ABOUTME: Application constants organized by domain
// ABOUTME: Storage keys, expiration window, selection minimums, and filter defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PantryPal

//! Application-wide constants.

/// Keys used in the key-value preference store
///
/// These are the bit-exact contracts shared with any other client reading the
/// same store, so they never change between releases.
pub mod storage_keys {
    /// Saved API key for the recipe generation service
    pub const OPENAI_API_KEY: &str = "pantrypal_openai_key";
    /// Last-used recipe filter criteria (JSON)
    pub const FILTER_PREFERENCES: &str = "pantrypal_filter_preferences";
    /// Persisted pantry entries (JSON array)
    pub const PANTRY_ITEMS: &str = "pantrypal_pantry";
    /// Favorite recipe ids (JSON array)
    pub const FAVORITE_RECIPES: &str = "pantrypal_favorite_recipes";
}

/// Expiration classification
pub mod expiration {
    /// Items expiring within this many days (inclusive) count as expiring
    pub const EXPIRING_WINDOW_DAYS: i64 = 7;
}

/// Selection rules for user actions
pub mod selection {
    /// Looking up recipes from the pantry needs at least this many checked items
    pub const MIN_ITEMS_FOR_RECIPE_SEARCH: usize = 2;
    /// Requesting AI suggestions needs at least this many pantry items
    pub const MIN_ITEMS_FOR_SUGGESTIONS: usize = 1;
}

/// Filter defaults and sentinels
pub mod filters {
    /// Dietary choice that disables dietary filtering
    pub const NO_DIETARY_PREFERENCE: &str = "No preference";

    /// Dietary choices offered by the recipe filter
    pub const DIETARY_CHOICES: &[&str] = &[
        NO_DIETARY_PREFERENCE,
        "Vegan",
        "Vegetarian",
        "Gluten-Free",
        "Keto",
        "Paleo",
    ];
}

/// Recipe generation service defaults
pub mod llm {
    /// Service name used in error messages and logs
    pub const SERVICE_NAME: &str = "RecipeGenerator";
    /// Default OpenAI-compatible endpoint
    pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
    /// Default chat model
    pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
    /// Default whole-request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
    /// Connection timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 15;
    /// Number of recipes requested per suggestion call
    pub const SUGGESTION_COUNT: usize = 3;
}

/// Service identifiers for structured logging
pub mod service_names {
    /// Name reported by the CLI in log records
    pub const PANTRYPAL_CLI: &str = "pantrypal-cli";
}
