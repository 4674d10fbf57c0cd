// ABOUTME: Pantry inventory module
// ABOUTME: Entry collection, donation picker, and demo data generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PantryPal

//! # Pantry
//!
//! [`PantryStore`] owns the user's entries in insertion order. Expiration
//! status is never stored; every view classifies against the `today` passed
//! in, so a pantry loaded tomorrow reports tomorrow's statuses.

mod demo;
mod donation;
mod store;

pub use demo::{demo_pantry, DEFAULT_DEMO_ITEMS};
pub use donation::DonationSelection;
pub use store::{view_entry, PantryItemView, PantryStore, PantrySummary};
