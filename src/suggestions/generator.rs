// ABOUTME: Recipe suggester backed by a chat completion provider
// ABOUTME: Builds the chef prompt and parses the JSON "recipes" payload
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PantryPal

use std::sync::Arc;

use async_trait::async_trait;
use pantrypal_core::constants::llm::{SERVICE_NAME, SUGGESTION_COUNT};
use pantrypal_core::errors::{AppError, AppResult};
use pantrypal_core::models::SuggestionRecord;
use serde::Deserialize;
use tracing::{debug, info, instrument};

use super::RecipeSuggester;
use crate::llm::prompts::{chef_system_prompt, recipe_request_prompt};
use crate::llm::{ChatMessage, ChatRequest, LlmProvider};

#[derive(Debug, Deserialize)]
struct RecipesPayload {
    #[serde(default)]
    recipes: Option<Vec<SuggestionRecord>>,
}

/// Asks a chat model for recipes
pub struct LlmRecipeSuggester {
    provider: Arc<dyn LlmProvider>,
    recipe_count: usize,
}

impl LlmRecipeSuggester {
    /// Suggester over `provider`, requesting the standard number of recipes
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            provider,
            recipe_count: SUGGESTION_COUNT,
        }
    }

    /// Override how many recipes are requested
    #[must_use]
    pub const fn with_recipe_count(mut self, count: usize) -> Self {
        self.recipe_count = count;
        self
    }

    fn build_request(&self, pantry_items: &[String]) -> ChatRequest {
        let capabilities = self.provider.capabilities();
        let user_prompt = recipe_request_prompt(pantry_items, self.recipe_count);

        let messages = if capabilities.supports_system_messages() {
            vec![
                ChatMessage::system(chef_system_prompt()),
                ChatMessage::user(user_prompt),
            ]
        } else {
            vec![ChatMessage::user(format!(
                "{}\n\n{user_prompt}",
                chef_system_prompt()
            ))]
        };

        let request = ChatRequest::new(messages);
        if capabilities.supports_json_mode() {
            request.with_json_mode()
        } else {
            request
        }
    }
}

#[async_trait]
impl RecipeSuggester for LlmRecipeSuggester {
    fn name(&self) -> &'static str {
        self.provider.name()
    }

    #[instrument(skip(self, pantry_items), fields(provider = self.provider.name(), items = pantry_items.len()))]
    async fn suggest(&self, pantry_items: &[String]) -> AppResult<Vec<SuggestionRecord>> {
        let request = self.build_request(pantry_items);
        let response = self.provider.complete(&request).await?;
        debug!(
            model = %response.model,
            finish_reason = ?response.finish_reason,
            "Received recipe completion"
        );

        let recipes = parse_recipes(&response.content)?;
        info!(count = recipes.len(), "Generated recipe suggestions");
        Ok(recipes)
    }
}

/// Parse the model's reply into suggestion records
///
/// Accepts a bare JSON object or one wrapped in a markdown code fence.
///
/// # Errors
///
/// Returns an external service error when the reply is empty, is not JSON,
/// or carries no recipes.
pub fn parse_recipes(content: &str) -> AppResult<Vec<SuggestionRecord>> {
    let body = strip_code_fence(content.trim());
    if body.is_empty() {
        return Err(AppError::external_service(SERVICE_NAME, "Empty response"));
    }

    let payload: RecipesPayload = serde_json::from_str(body).map_err(|e| {
        AppError::external_service(SERVICE_NAME, format!("Response was not valid JSON: {e}"))
            .with_source(e)
    })?;

    match payload.recipes {
        Some(recipes) if !recipes.is_empty() => Ok(recipes),
        Some(_) => Err(AppError::external_service(
            SERVICE_NAME,
            "Response contained no recipes",
        )),
        None => Err(AppError::external_service(
            SERVICE_NAME,
            "Response is missing the \"recipes\" array",
        )),
    }
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
