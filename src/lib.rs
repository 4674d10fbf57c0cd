// ABOUTME: Main library entry point for the PantryPal pantry and recipe platform
// ABOUTME: Wires configuration, storage, pantry, catalog, and the suggestion gateway
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PantryPal

#![recursion_limit = "256"]
#![deny(unsafe_code)]

//! # `PantryPal`
//!
//! Household food inventory tracking, recipe browsing, and AI-generated
//! recipe suggestions from whatever is already in the pantry.
//!
//! ## Features
//!
//! - **Pantry store**: add, remove, select, search, and sort pantry entries
//!   with expiration status computed at read time
//! - **Recipe catalog**: built-in recipes, favorites, filtering, and
//!   readiness ranking against the pantry
//! - **Suggestion gateway**: asks an `OpenAI`-compatible endpoint for recipes
//!   and falls back to a fixed list when it cannot
//! - **Key-value storage**: swappable backends for preferences, credentials,
//!   and pantry state
//!
//! ## Example
//!
//! ```rust,no_run
//! use chrono::Local;
//! use pantrypal::pantry::PantryStore;
//! use pantrypal_core::models::{parse_expiration_date, NewPantryEntry};
//!
//! # fn main() -> Result<(), pantrypal_core::errors::AppError> {
//! let mut pantry = PantryStore::new();
//! pantry.add(NewPantryEntry::new("Milk", parse_expiration_date("2030-01-01")?))?;
//! for item in pantry.view(Local::now().date_naive()) {
//!     println!("{} ({})", item.entry.name, item.status);
//! }
//! # Ok(())
//! # }
//! ```

/// Built-in recipe catalog and favorites
pub mod catalog;

/// Environment-based configuration
pub mod config;

/// Saved API key for the generation service
pub mod credentials;

/// LLM provider abstraction and the `OpenAI`-compatible client
pub mod llm;

/// Structured logging setup
pub mod logging;

/// Pantry store, donation flow, and demo data
pub mod pantry;

/// Persisted recipe filter preference
pub mod preferences;

/// Key-value storage backends
pub mod storage;

/// Recipe suggestion gateway with fallback
pub mod suggestions;

pub use pantrypal_core::errors::{AppError, AppResult, ErrorCode};
