// ABOUTME: Matching and filtering engine for pantry entries and recipes
// ABOUTME: Expiration classification, recipe filtering, pantry sorting, and ingredient overlap
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PantryPal

#![deny(unsafe_code)]

//! # `PantryPal` Intelligence
//!
//! Every function here is a single pass over a small in-memory collection.
//! Inputs are borrowed and outputs are new collections; nothing is mutated in
//! place, so callers can hand the results straight to a view.

/// Fresh / expiring / expired classification
pub mod expiration;
/// Stable multi-predicate recipe filter
pub mod filter;
/// Ingredient overlap between recipes and pantry contents
pub mod matching;
/// Pantry list sort with a distinct unsorted state
pub mod sort;

pub use expiration::{classify, classify_instant, days_until, days_until_instant};
pub use filter::{apply_filter, matches_criteria};
pub use matching::{match_ingredients, rank_by_readiness, IngredientMatch, RankedRecipe};
pub use sort::{compare_names, sort_entries};
