// ABOUTME: Resolves pantry item ids typed on the command line
// ABOUTME: Accepts a full id or any unique prefix, as shown by `pantry list`
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PantryPal

use pantrypal::pantry::PantryStore;
use pantrypal_core::errors::{AppError, AppResult};

/// Characters of the id shown in listings
pub const SHORT_ID_LEN: usize = 8;

/// Leading part of an id for display
pub fn short_id(id: &str) -> &str {
    id.get(..SHORT_ID_LEN).unwrap_or(id)
}

/// Full id of the entry matching `raw` exactly or by unique prefix
pub fn resolve(pantry: &PantryStore, raw: &str) -> AppResult<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(AppError::invalid_input("Item id cannot be empty"));
    }
    if let Some(entry) = pantry.get(raw) {
        return Ok(entry.id.clone());
    }

    let mut matches = pantry.entries().iter().filter(|e| e.id.starts_with(raw));
    match (matches.next(), matches.next()) {
        (Some(entry), None) => Ok(entry.id.clone()),
        (Some(_), Some(_)) => Err(AppError::invalid_input(format!(
            "Id prefix '{raw}' matches more than one item"
        ))),
        (None, _) => Err(AppError::not_found(format!("Pantry item '{raw}'"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pantrypal_core::models::PantryEntry;

    fn entry(id: &str) -> PantryEntry {
        PantryEntry {
            id: id.to_owned(),
            name: "Milk".to_owned(),
            brand: String::new(),
            quantity: String::new(),
            expiration_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            selected: false,
        }
    }

    #[test]
    fn test_prefix_resolution() {
        let pantry = PantryStore::from_entries(vec![entry("abc123"), entry("abd456")]);
        assert_eq!(resolve(&pantry, "abc").unwrap(), "abc123");
        assert_eq!(resolve(&pantry, "abd456").unwrap(), "abd456");
        assert!(resolve(&pantry, "ab").is_err());
        assert!(resolve(&pantry, "zz").is_err());
    }
}
