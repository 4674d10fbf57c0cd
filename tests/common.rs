// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Quiet logging, date helpers, pantry and recipe builders, and stub suggesters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PantryPal
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `pantrypal`

use std::env;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use pantrypal::storage::memory::InMemoryStore;
use pantrypal::storage::KeyValueStore;
use pantrypal::suggestions::RecipeSuggester;
use pantrypal_core::errors::{AppError, AppResult};
use pantrypal_core::models::{PantryEntry, RecipeRecord, SkillLevel, SuggestionRecord};
use tokio::sync::Notify;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fixed reference day used across tests
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
}

/// `today()` shifted by `days`
pub fn days_from_today(days: i64) -> NaiveDate {
    today() + Duration::days(days)
}

/// Pantry entry with a fixed id
pub fn entry(id: &str, name: &str, expires_in_days: i64) -> PantryEntry {
    PantryEntry {
        id: id.to_owned(),
        name: name.to_owned(),
        brand: String::new(),
        quantity: String::new(),
        expiration_date: days_from_today(expires_in_days),
        selected: false,
    }
}

/// Recipe with the given cook time and ingredient lines
pub fn recipe(id: &str, title: &str, minutes: u32, ingredients: &[&str]) -> RecipeRecord {
    RecipeRecord::new(id, title, minutes, SkillLevel::Beginner)
        .with_ingredients(ingredients.iter().copied())
}

/// Fresh in-memory store behind the trait object
pub fn memory_store() -> Arc<dyn KeyValueStore> {
    Arc::new(InMemoryStore::new())
}

/// Suggester returning a canned result and recording what it was asked
pub struct StubSuggester {
    result: Mutex<Option<AppResult<Vec<SuggestionRecord>>>>,
    pub calls: AtomicUsize,
    pub last_items: Mutex<Vec<String>>,
}

impl StubSuggester {
    pub fn succeeding(titles: &[&str]) -> Self {
        let recipes = titles
            .iter()
            .map(|t| SuggestionRecord::new(*t, SkillLevel::Intermediate))
            .collect();
        Self::with_result(Ok(recipes))
    }

    pub fn failing(error: AppError) -> Self {
        Self::with_result(Err(error))
    }

    fn with_result(result: AppResult<Vec<SuggestionRecord>>) -> Self {
        Self {
            result: Mutex::new(Some(result)),
            calls: AtomicUsize::new(0),
            last_items: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecipeSuggester for StubSuggester {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn suggest(&self, pantry_items: &[String]) -> AppResult<Vec<SuggestionRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_items.lock().unwrap() = pantry_items.to_vec();
        self.result
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(AppError::internal("stub already used")))
    }
}

/// Suggester that blocks until released, for in-flight tests
pub struct GatedSuggester {
    pub started: Notify,
    pub release: Notify,
}

impl GatedSuggester {
    pub fn new() -> Self {
        Self {
            started: Notify::new(),
            release: Notify::new(),
        }
    }
}

#[async_trait]
impl RecipeSuggester for GatedSuggester {
    fn name(&self) -> &'static str {
        "gated"
    }

    async fn suggest(&self, _pantry_items: &[String]) -> AppResult<Vec<SuggestionRecord>> {
        self.started.notify_one();
        self.release.notified().await;
        Ok(vec![SuggestionRecord::new("Slow Soup", SkillLevel::Beginner)])
    }
}
