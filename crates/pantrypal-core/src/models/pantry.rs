// ABOUTME: Pantry entry data model with expiration status and date parsing helpers
// ABOUTME: Defines PantryEntry, NewPantryEntry, and ExpirationStatus
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PantryPal

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

/// Freshness of a pantry entry relative to a reference day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpirationStatus {
    /// More than a week left
    Fresh,
    /// Expires today or within the next seven days
    Expiring,
    /// Expiration date is in the past
    Expired,
}

impl ExpirationStatus {
    /// Display label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fresh => "fresh",
            Self::Expiring => "expiring",
            Self::Expired => "expired",
        }
    }
}

impl fmt::Display for ExpirationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One tracked food item
///
/// The expiration status is deliberately absent: it depends on "today" and is
/// computed at read time by the expiration classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PantryEntry {
    /// Unique identifier (UUID v4 string)
    pub id: String,
    /// Item name, used for ingredient matching
    pub name: String,
    /// Brand, may be empty
    #[serde(default)]
    pub brand: String,
    /// Free-form quantity ("2 lbs", "1 dozen")
    #[serde(default)]
    pub quantity: String,
    /// Calendar expiration date
    pub expiration_date: NaiveDate,
    /// Checked in the pantry list
    #[serde(default)]
    pub selected: bool,
}

/// Fields supplied by the add-item flow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPantryEntry {
    /// Item name
    pub name: String,
    /// Brand
    #[serde(default)]
    pub brand: String,
    /// Quantity
    #[serde(default)]
    pub quantity: String,
    /// Expiration date
    pub expiration_date: NaiveDate,
}

impl NewPantryEntry {
    /// Create a new entry request
    #[must_use]
    pub fn new(name: impl Into<String>, expiration_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            brand: String::new(),
            quantity: String::new(),
            expiration_date,
        }
    }

    /// Set the brand
    #[must_use]
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    /// Set the quantity
    #[must_use]
    pub fn with_quantity(mut self, quantity: impl Into<String>) -> Self {
        self.quantity = quantity.into();
        self
    }

    /// Validate and materialize into an unselected entry with a fresh id
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the name is blank.
    pub fn into_entry(self) -> AppResult<PantryEntry> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AppError::invalid_input("Pantry item name cannot be empty"));
        }

        Ok(PantryEntry {
            id: Uuid::new_v4().to_string(),
            name: name.to_owned(),
            brand: self.brand.trim().to_owned(),
            quantity: self.quantity.trim().to_owned(),
            expiration_date: self.expiration_date,
            selected: false,
        })
    }
}

/// Parse an expiration date in ISO (`2025-03-14`) or US (`3/14/2025`) form
///
/// # Errors
///
/// Returns `InvalidFormat` if neither form matches.
pub fn parse_expiration_date(raw: &str) -> AppResult<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%m/%d/%Y"))
        .map_err(|e| {
            AppError::invalid_format(format!(
                "Invalid date '{raw}' (expected YYYY-MM-DD or M/D/YYYY)"
            ))
            .with_source(e)
        })
}

/// Format a date the way the pantry list shows it (`3/14/2025`, no padding)
#[must_use]
pub fn format_display_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}
