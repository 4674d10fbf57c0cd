// ABOUTME: Donation picker over the items that expire within the next week
// ABOUTME: Holds its own checkbox state independent of the pantry selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PantryPal

use std::collections::BTreeSet;

use chrono::NaiveDate;
use pantrypal_core::errors::{AppError, AppResult};
use pantrypal_core::models::PantryEntry;
use tracing::info;

use super::PantryStore;

/// Items offered for donation and which of them are checked
///
/// Confirming a donation does not touch the pantry; removing donated items
/// is a separate, explicit step.
#[derive(Debug, Clone, Default)]
pub struct DonationSelection {
    candidates: Vec<PantryEntry>,
    checked: BTreeSet<String>,
}

impl DonationSelection {
    /// Start a donation from the pantry's expiring items, nothing checked
    ///
    /// # Errors
    ///
    /// Returns `EmptySelection` when no item expires within the next week
    pub fn start(pantry: &PantryStore, today: NaiveDate) -> AppResult<Self> {
        let candidates = pantry.donation_candidates(today);
        if candidates.is_empty() {
            return Err(AppError::empty_selection(
                "No items expiring within a week to donate",
            ));
        }
        Ok(Self {
            candidates,
            checked: BTreeSet::new(),
        })
    }

    /// Items that can be donated
    #[must_use]
    pub fn candidates(&self) -> &[PantryEntry] {
        &self.candidates
    }

    /// Whether an item is checked
    #[must_use]
    pub fn is_checked(&self, id: &str) -> bool {
        self.checked.contains(id)
    }

    /// Flip an item; ids outside the candidate list are ignored and return `false`
    pub fn toggle(&mut self, id: &str) -> bool {
        if !self.candidates.iter().any(|c| c.id == id) {
            return false;
        }
        if self.checked.remove(id) {
            false
        } else {
            self.checked.insert(id.to_owned());
            true
        }
    }

    /// Check every candidate
    pub fn check_all(&mut self) {
        self.checked = self.candidates.iter().map(|c| c.id.clone()).collect();
    }

    /// Number of checked items
    #[must_use]
    pub fn checked_count(&self) -> usize {
        self.checked.len()
    }

    /// Checked items in candidate order
    ///
    /// # Errors
    ///
    /// Returns `EmptySelection` when nothing is checked
    pub fn confirm(&self) -> AppResult<Vec<PantryEntry>> {
        let chosen: Vec<PantryEntry> = self
            .candidates
            .iter()
            .filter(|c| self.checked.contains(&c.id))
            .cloned()
            .collect();
        if chosen.is_empty() {
            return Err(AppError::empty_selection(
                "Please select at least one item to donate",
            ));
        }
        info!(count = chosen.len(), "Confirmed donation");
        Ok(chosen)
    }
}
