// ABOUTME: Core data models for pantry entries, recipes, suggestions, and filters
// ABOUTME: Re-exports the domain types shared across the workspace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PantryPal

//! # Data Models
//!
//! Plain data types. Derived values such as an entry's expiration status are
//! computed on demand by `pantrypal-intelligence` and never stored here.

/// Recipe filter criteria and cook-time buckets
pub mod filter;
/// Pantry entries, expiration status, and date parsing
pub mod pantry;
/// Catalog recipes, skill levels, and the shared recipe view trait
pub mod recipe;
/// Pantry sort field, direction, and cycling state
pub mod sort;
/// Recipe suggestions returned by the generation service
pub mod suggestion;

pub use filter::{CookTimeBucket, FilterCriteria, SearchScope};
pub use pantry::{
    format_display_date, parse_expiration_date, ExpirationStatus, NewPantryEntry, PantryEntry,
};
pub use recipe::{RecipeRecord, RecipeView, SkillLevel};
pub use sort::{SortDirection, SortField, SortState};
pub use suggestion::SuggestionRecord;
