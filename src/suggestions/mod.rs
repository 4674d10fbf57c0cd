// ABOUTME: Recipe suggestion gateway with a single in-flight guard and a fixed fallback
// ABOUTME: Remote failures never reach the caller as errors; they become the fallback list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PantryPal

//! # Suggestion Gateway
//!
//! [`SuggestionService`] turns a list of pantry item names into recipe
//! suggestions. Outcomes:
//!
//! - no credential configured: the fallback list, flagged so the caller can
//!   prompt for a key
//! - remote call fails (network, bad payload, rejected key): the fallback
//!   list, with the failure reason logged at `warn`
//! - otherwise: the generated recipes
//!
//! Only two requests are rejected outright: an empty item list, and a second
//! request while one is still running.

mod fallback;
mod generator;

pub use fallback::fallback_suggestions;
pub use generator::{parse_recipes, LlmRecipeSuggester};

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use pantrypal_core::constants::selection::MIN_ITEMS_FOR_SUGGESTIONS;
use pantrypal_core::errors::{AppError, AppResult};
use pantrypal_core::models::SuggestionRecord;
use serde::Serialize;
use tracing::{info, warn};

use crate::config::LlmSettings;
use crate::credentials::ResolvedKey;
use crate::llm::{OpenAiCompatibleConfig, OpenAiCompatibleProvider};

/// Something that can produce recipe suggestions from pantry item names
#[async_trait]
pub trait RecipeSuggester: Send + Sync {
    /// Backend identifier for logs
    fn name(&self) -> &'static str;

    /// Suggest recipes for the given items
    async fn suggest(&self, pantry_items: &[String]) -> AppResult<Vec<SuggestionRecord>>;
}

/// Why the fallback list was returned
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", content = "detail", rename_all = "snake_case")]
pub enum FallbackReason {
    /// No API key is configured
    MissingCredential,
    /// The remote call failed
    RemoteFailure(String),
}

/// Where the returned suggestions came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum SuggestionSource {
    /// The generation service
    Generated,
    /// The built-in list
    Fallback(FallbackReason),
}

impl fmt::Display for SuggestionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generated => write!(f, "generated"),
            Self::Fallback(FallbackReason::MissingCredential) => {
                write!(f, "fallback (no API key configured)")
            }
            Self::Fallback(FallbackReason::RemoteFailure(reason)) => {
                write!(f, "fallback ({reason})")
            }
        }
    }
}

/// Suggestions plus their origin
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestionOutcome {
    /// Suggested recipes, never empty
    pub recipes: Vec<SuggestionRecord>,
    /// Origin of the recipes
    pub source: SuggestionSource,
}

impl SuggestionOutcome {
    fn generated(recipes: Vec<SuggestionRecord>) -> Self {
        Self {
            recipes,
            source: SuggestionSource::Generated,
        }
    }

    fn fallback(reason: FallbackReason) -> Self {
        Self {
            recipes: fallback_suggestions(),
            source: SuggestionSource::Fallback(reason),
        }
    }

    /// Whether the recipes are the built-in list
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self.source, SuggestionSource::Fallback(_))
    }

    /// Whether the caller should ask the user for an API key
    #[must_use]
    pub const fn needs_credential(&self) -> bool {
        matches!(
            self.source,
            SuggestionSource::Fallback(FallbackReason::MissingCredential)
        )
    }
}

/// Values needed to reach the generation service
#[derive(Debug, Clone)]
pub struct SuggestionContext {
    /// Endpoint, model, and timeout
    pub llm: LlmSettings,
    /// Effective API key, if any
    pub api_key: Option<ResolvedKey>,
}

impl SuggestionContext {
    /// Bundle settings with the resolved key
    #[must_use]
    pub const fn new(llm: LlmSettings, api_key: Option<ResolvedKey>) -> Self {
        Self { llm, api_key }
    }

    /// Build the service; without a key it only ever returns the fallback list
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created
    pub fn into_service(self) -> AppResult<SuggestionService> {
        let Some(key) = self.api_key else {
            return Ok(SuggestionService::without_credential());
        };

        info!(key_source = %key.source, key = %key.masked(), "Using generation service key");
        let config = OpenAiCompatibleConfig::from_settings(&self.llm, Some(key.value));
        let provider = OpenAiCompatibleProvider::new(config)?;
        let suggester = LlmRecipeSuggester::new(Arc::new(provider));
        Ok(SuggestionService::new(Arc::new(suggester)))
    }
}

/// Clears the in-flight flag when dropped
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// The suggestion gateway
pub struct SuggestionService {
    suggester: Option<Arc<dyn RecipeSuggester>>,
    in_flight: AtomicBool,
}

impl SuggestionService {
    /// Gateway over a configured suggester
    #[must_use]
    pub fn new(suggester: Arc<dyn RecipeSuggester>) -> Self {
        Self {
            suggester: Some(suggester),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Gateway with no credential; every request returns the fallback list
    #[must_use]
    pub const fn without_credential() -> Self {
        Self {
            suggester: None,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Whether a suggester is configured
    #[must_use]
    pub const fn has_credential(&self) -> bool {
        self.suggester.is_some()
    }

    /// Whether a request is currently running
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Suggest recipes for `pantry_items`
    ///
    /// Blank names are dropped before the request is made. Neither the
    /// items nor any pantry state are modified.
    ///
    /// # Errors
    ///
    /// Returns `EmptySelection` when no usable item names are given and
    /// `RequestInFlight` when another request has not finished yet.
    pub async fn request<S: AsRef<str> + Sync>(
        &self,
        pantry_items: &[S],
    ) -> AppResult<SuggestionOutcome> {
        let items: Vec<String> = pantry_items
            .iter()
            .map(|item| item.as_ref().trim())
            .filter(|item| !item.is_empty())
            .map(str::to_owned)
            .collect();
        if items.len() < MIN_ITEMS_FOR_SUGGESTIONS {
            return Err(AppError::empty_selection(
                "Add at least one pantry item to get recipe suggestions",
            ));
        }

        let _guard = InFlightGuard::acquire(&self.in_flight)
            .ok_or_else(|| AppError::request_in_flight("Recipe suggestion"))?;

        let Some(suggester) = self.suggester.as_ref() else {
            info!("No generation service key configured, returning fallback recipes");
            return Ok(SuggestionOutcome::fallback(FallbackReason::MissingCredential));
        };

        match suggester.suggest(&items).await {
            Ok(recipes) => Ok(SuggestionOutcome::generated(recipes)),
            Err(e) => {
                warn!(
                    suggester = suggester.name(),
                    error_code = ?e.code,
                    error = %e,
                    "Recipe generation failed, returning fallback recipes"
                );
                Ok(SuggestionOutcome::fallback(FallbackReason::RemoteFailure(
                    e.message,
                )))
            }
        }
    }
}
