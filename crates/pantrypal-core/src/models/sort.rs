// ABOUTME: Sort state for the pantry list with the ascending/descending/none cycle
// ABOUTME: Defines SortField, SortDirection, and SortState
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PantryPal

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::AppError;

/// Pantry column to sort by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    /// Item name
    Name,
    /// Expiration date
    Date,
}

impl FromStr for SortField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "date" | "expiration" => Ok(Self::Date),
            other => Err(AppError::invalid_input(format!(
                "Unknown sort field '{other}' (expected name or date)"
            ))),
        }
    }
}

/// Sort direction; `None` keeps insertion order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first
    Ascending,
    /// Largest first
    Descending,
    /// Original order
    #[default]
    None,
}

/// Current sort of the pantry list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortState {
    /// Active field, if any
    pub field: Option<SortField>,
    /// Active direction
    pub direction: SortDirection,
}

impl SortState {
    /// Unsorted state
    #[must_use]
    pub const fn unsorted() -> Self {
        Self {
            field: None,
            direction: SortDirection::None,
        }
    }

    /// Explicit state
    #[must_use]
    pub const fn new(field: SortField, direction: SortDirection) -> Self {
        Self {
            field: Some(field),
            direction,
        }
    }

    /// Apply a "sort by `field`" request and return the new state
    ///
    /// Repeating the same field cycles ascending, descending, none. A
    /// different field starts over at ascending.
    #[must_use]
    pub const fn request(self, field: SortField) -> Self {
        let same_field = matches!(
            (self.field, field),
            (Some(SortField::Name), SortField::Name) | (Some(SortField::Date), SortField::Date)
        );

        let direction = if same_field {
            match self.direction {
                SortDirection::Ascending => SortDirection::Descending,
                SortDirection::Descending => SortDirection::None,
                SortDirection::None => SortDirection::Ascending,
            }
        } else {
            SortDirection::Ascending
        };

        Self {
            field: Some(field),
            direction,
        }
    }

    /// Whether this state leaves the collection in original order
    #[must_use]
    pub const fn is_unsorted(&self) -> bool {
        self.field.is_none() || matches!(self.direction, SortDirection::None)
    }
}
