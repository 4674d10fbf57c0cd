// ABOUTME: Pantry list sort by name or expiration date in either direction
// ABOUTME: Stable ordering; the unsorted state returns the original insertion order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PantryPal

use std::cmp::Ordering;

use pantrypal_core::models::{PantryEntry, SortDirection, SortField, SortState};

/// Case-insensitive name comparison with the raw string as a tie breaker
#[must_use]
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Return a sorted copy of `entries`
///
/// Equal keys keep their original relative order in both directions.
#[must_use]
pub fn sort_entries(entries: &[PantryEntry], state: &SortState) -> Vec<PantryEntry> {
    let mut sorted = entries.to_vec();
    let Some(field) = state.field else {
        return sorted;
    };

    let compare = |a: &PantryEntry, b: &PantryEntry| match field {
        SortField::Name => compare_names(&a.name, &b.name),
        SortField::Date => a.expiration_date.cmp(&b.expiration_date),
    };

    match state.direction {
        SortDirection::Ascending => sorted.sort_by(compare),
        SortDirection::Descending => sorted.sort_by(|a, b| compare(b, a)),
        SortDirection::None => {}
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(name: &str, day: u32) -> PantryEntry {
        PantryEntry {
            id: name.to_owned(),
            name: name.to_owned(),
            brand: String::new(),
            quantity: String::new(),
            expiration_date: NaiveDate::from_ymd_opt(2025, 5, day).unwrap(),
            selected: false,
        }
    }

    fn names(entries: &[PantryEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_name_sort_ignores_case() {
        let entries = vec![entry("banana", 1), entry("Apple", 2), entry("cherry", 3)];
        let asc = sort_entries(&entries, &SortState::new(SortField::Name, SortDirection::Ascending));
        assert_eq!(names(&asc), vec!["Apple", "banana", "cherry"]);
    }

    #[test]
    fn test_date_ties_keep_original_order() {
        let entries = vec![entry("b", 5), entry("a", 3), entry("c", 5)];
        let desc = sort_entries(&entries, &SortState::new(SortField::Date, SortDirection::Descending));
        assert_eq!(names(&desc), vec!["b", "c", "a"]);
    }
}
