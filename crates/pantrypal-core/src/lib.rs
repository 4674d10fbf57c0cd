// ABOUTME: Core types and constants for the PantryPal pantry and recipe platform
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PantryPal

#![deny(unsafe_code)]

//! # `PantryPal` Core
//!
//! Foundation crate providing shared types and constants for `PantryPal`.
//! Nothing in here performs I/O; the engines in `pantrypal-intelligence`
//! and the services in the root crate build on these types.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Storage keys, expiration window, and defaults
//! - **models**: Pantry entries, recipes, suggestions, and filter criteria

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (pantry entries, recipes, suggestions, filters)
pub mod models;
