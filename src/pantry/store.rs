// ABOUTME: Ordered pantry collection with selection, search, sort, and status views
// ABOUTME: Expiration status is computed on every read against the caller's "today"
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PantryPal

use chrono::NaiveDate;
use pantrypal_core::constants::{selection, storage_keys};
use pantrypal_core::errors::{AppError, AppResult};
use pantrypal_core::models::{ExpirationStatus, NewPantryEntry, PantryEntry, SortState};
use pantrypal_intelligence::{classify, days_until, sort_entries};
use serde::Serialize;
use tracing::{debug, info};

use crate::storage::{load_json, save_json, KeyValueStore};

/// An entry paired with its status for one particular day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PantryItemView {
    /// The entry
    #[serde(flatten)]
    pub entry: PantryEntry,
    /// Status as of the requested day
    pub status: ExpirationStatus,
    /// Days left (negative once expired)
    pub days_left: i64,
}

impl PantryItemView {
    fn at(entry: &PantryEntry, today: NaiveDate) -> Self {
        Self {
            entry: entry.clone(),
            status: classify(entry.expiration_date, today),
            days_left: days_until(entry.expiration_date, today),
        }
    }
}

/// Counts by status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PantrySummary {
    /// All entries
    pub total: usize,
    /// More than a week left
    pub fresh: usize,
    /// Within the next week
    pub expiring: usize,
    /// Past their date
    pub expired: usize,
    /// Currently checked
    pub selected: usize,
}

/// The pantry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PantryStore {
    entries: Vec<PantryEntry>,
}

impl PantryStore {
    /// Empty pantry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pantry with existing entries, in the given order
    #[must_use]
    pub fn from_entries(entries: Vec<PantryEntry>) -> Self {
        Self { entries }
    }

    /// Load the persisted pantry; an absent key is an empty pantry
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails or the stored value is corrupt
    pub async fn load(store: &dyn KeyValueStore) -> AppResult<Self> {
        let entries: Vec<PantryEntry> = load_json(store, storage_keys::PANTRY_ITEMS)
            .await?
            .unwrap_or_default();
        debug!(count = entries.len(), "Loaded pantry");
        Ok(Self { entries })
    }

    /// Persist the pantry
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the backend fails
    pub async fn save(&self, store: &dyn KeyValueStore) -> AppResult<()> {
        save_json(store, storage_keys::PANTRY_ITEMS, &self.entries).await
    }

    /// Entries in insertion order
    #[must_use]
    pub fn entries(&self) -> &[PantryEntry] {
        &self.entries
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the pantry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&PantryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Add an entry and return its id
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the name is blank
    pub fn add(&mut self, new_entry: NewPantryEntry) -> AppResult<String> {
        let entry = new_entry.into_entry()?;
        let id = entry.id.clone();
        info!(id = %id, name = %entry.name, "Added pantry item");
        self.entries.push(entry);
        Ok(id)
    }

    /// Append already-materialized entries
    pub fn extend(&mut self, entries: impl IntoIterator<Item = PantryEntry>) {
        self.entries.extend(entries);
    }

    /// Remove an entry; unknown ids are ignored
    pub fn remove(&mut self, id: &str) -> Option<PantryEntry> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        let removed = self.entries.remove(index);
        info!(id = %id, name = %removed.name, "Removed pantry item");
        Some(removed)
    }

    /// Flip the selection flag and return the new state; unknown ids return `false`
    pub fn toggle_selected(&mut self, id: &str) -> bool {
        self.entries
            .iter_mut()
            .find(|e| e.id == id)
            .is_some_and(|entry| {
                entry.selected = !entry.selected;
                entry.selected
            })
    }

    /// Uncheck everything
    pub fn clear_selection(&mut self) {
        for entry in &mut self.entries {
            entry.selected = false;
        }
    }

    /// Checked entries in pantry order
    #[must_use]
    pub fn selected(&self) -> Vec<&PantryEntry> {
        self.entries.iter().filter(|e| e.selected).collect()
    }

    /// Names of all entries in pantry order
    #[must_use]
    pub fn item_names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name.clone()).collect()
    }

    /// Names of the checked entries, for a recipe lookup
    ///
    /// # Errors
    ///
    /// Returns `EmptySelection` when fewer than two items are checked
    pub fn recipe_selection(&self) -> AppResult<Vec<String>> {
        let names: Vec<String> = self.selected().iter().map(|e| e.name.clone()).collect();
        if names.len() < selection::MIN_ITEMS_FOR_RECIPE_SEARCH {
            return Err(AppError::empty_selection(format!(
                "Please select at least {} items",
                selection::MIN_ITEMS_FOR_RECIPE_SEARCH
            )));
        }
        Ok(names)
    }

    /// Entries whose name or brand contains `query`, ignoring case
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<PantryEntry> {
        let needle = query.trim().to_lowercase();
        self.entries
            .iter()
            .filter(|e| {
                needle.is_empty()
                    || e.name.to_lowercase().contains(&needle)
                    || e.brand.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    /// Sorted copy of the entries
    #[must_use]
    pub fn sorted(&self, state: &SortState) -> Vec<PantryEntry> {
        sort_entries(&self.entries, state)
    }

    /// Entries with their status as of `today`
    #[must_use]
    pub fn view(&self, today: NaiveDate) -> Vec<PantryItemView> {
        self.entries
            .iter()
            .map(|e| PantryItemView::at(e, today))
            .collect()
    }

    /// Entries with the given status as of `today`
    #[must_use]
    pub fn with_status(&self, status: ExpirationStatus, today: NaiveDate) -> Vec<PantryEntry> {
        self.entries
            .iter()
            .filter(|e| classify(e.expiration_date, today) == status)
            .cloned()
            .collect()
    }

    /// Entries expiring within the next week, which can be offered for donation
    #[must_use]
    pub fn donation_candidates(&self, today: NaiveDate) -> Vec<PantryEntry> {
        self.with_status(ExpirationStatus::Expiring, today)
    }

    /// Counts by status as of `today`
    #[must_use]
    pub fn summary(&self, today: NaiveDate) -> PantrySummary {
        self.entries
            .iter()
            .fold(PantrySummary::default(), |mut summary, entry| {
                summary.total += 1;
                match classify(entry.expiration_date, today) {
                    ExpirationStatus::Fresh => summary.fresh += 1,
                    ExpirationStatus::Expiring => summary.expiring += 1,
                    ExpirationStatus::Expired => summary.expired += 1,
                }
                if entry.selected {
                    summary.selected += 1;
                }
                summary
            })
    }
}

/// Build a view for a single entry (used by list renderers)
#[must_use]
pub fn view_entry(entry: &PantryEntry, today: NaiveDate) -> PantryItemView {
    PantryItemView::at(entry, today)
}
