// ABOUTME: OpenAI-compatible chat completions client used for recipe generation
// ABOUTME: Bounded connect/request timeouts, JSON mode, and status-aware error mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PantryPal

//! # `OpenAI`-Compatible Provider
//!
//! Works with any endpoint implementing `POST {base_url}/chat/completions`.
//! Every call has a connect timeout and a whole-request timeout, so a
//! suggestion request always ends in a response or an error.

use async_trait::async_trait;
use pantrypal_core::constants::llm::{CONNECT_TIMEOUT_SECS, SERVICE_NAME};
use pantrypal_core::errors::{AppError, AppResult, ErrorCode};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

use super::{ChatMessage, ChatRequest, ChatResponse, LlmCapabilities, LlmProvider, TokenUsage};
use crate::config::LlmSettings;

// ============================================================================
// API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
struct OpenAiRequest {
    model: String,
    messages: Vec<OpenAiMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct OpenAiMessage {
    role: String,
    content: String,
}

impl From<&ChatMessage> for OpenAiMessage {
    fn from(msg: &ChatMessage) -> Self {
        Self {
            role: msg.role.as_str().to_owned(),
            content: msg.content.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
    #[serde(default)]
    usage: Option<OpenAiUsage>,
    #[serde(default)]
    model: String,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorResponse {
    error: OpenAiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorDetail {
    message: String,
    #[serde(rename = "type")]
    error_type: Option<String>,
}

// ============================================================================
// Provider Configuration
// ============================================================================

/// Configuration for the `OpenAI`-compatible provider
#[derive(Clone)]
pub struct OpenAiCompatibleConfig {
    /// Base URL for the API (e.g., <https://api.openai.com/v1>)
    pub base_url: String,
    /// Bearer key; optional for local servers
    pub api_key: Option<String>,
    /// Default model to use
    pub default_model: String,
    /// Whole-request timeout
    pub request_timeout: Duration,
    /// Capabilities of this endpoint
    pub capabilities: LlmCapabilities,
}

impl OpenAiCompatibleConfig {
    /// Build from configuration settings and the resolved key
    #[must_use]
    pub fn from_settings(settings: &LlmSettings, api_key: Option<String>) -> Self {
        Self {
            base_url: settings.base_url.clone(),
            api_key,
            default_model: settings.model.clone(),
            request_timeout: Duration::from_secs(settings.timeout_secs),
            capabilities: LlmCapabilities::SYSTEM_MESSAGES | LlmCapabilities::JSON_MODE,
        }
    }
}

impl fmt::Debug for OpenAiCompatibleConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiCompatibleConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("default_model", &self.default_model)
            .field("request_timeout", &self.request_timeout)
            .field("capabilities", &self.capabilities)
            .finish()
    }
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// `OpenAI`-compatible chat completion client
pub struct OpenAiCompatibleProvider {
    client: Client,
    config: OpenAiCompatibleConfig,
}

impl OpenAiCompatibleProvider {
    /// Create a new provider with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: OpenAiCompatibleConfig) -> AppResult<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AppError::internal(format!("Failed to create HTTP client: {e}")))?;

        info!(
            base_url = %config.base_url,
            model = %config.default_model,
            timeout_secs = config.request_timeout.as_secs(),
            "Initialized recipe generation provider"
        );
        Ok(Self { client, config })
    }

    fn api_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint
        )
    }

    fn add_auth_header(&self, request: RequestBuilder) -> RequestBuilder {
        if let Some(ref api_key) = self.config.api_key {
            request.bearer_auth(api_key)
        } else {
            request
        }
    }

    fn map_send_error(&self, e: &reqwest::Error) -> AppError {
        error!("Failed to send request to {}: {e}", self.config.base_url);
        if e.is_timeout() {
            AppError::external_unavailable(
                SERVICE_NAME,
                format!(
                    "Request timed out after {}s",
                    self.config.request_timeout.as_secs()
                ),
            )
        } else if e.is_connect() {
            AppError::external_unavailable(
                SERVICE_NAME,
                format!("Cannot connect to {}", self.config.base_url),
            )
        } else {
            AppError::external_service(SERVICE_NAME, format!("Failed to send request: {e}"))
        }
    }

    /// Map a non-success status and body to an error
    fn parse_error_response(status: StatusCode, body: &str) -> AppError {
        let Ok(error_response) = serde_json::from_str::<OpenAiErrorResponse>(body) else {
            return match status.as_u16() {
                502..=504 => AppError::external_unavailable(
                    SERVICE_NAME,
                    format!("Service is not responding ({status})"),
                ),
                _ => AppError::external_service(
                    SERVICE_NAME,
                    format!(
                        "API error ({status}): {}",
                        body.chars().take(200).collect::<String>()
                    ),
                ),
            };
        };

        let detail = error_response.error;
        match status.as_u16() {
            401 | 403 => AppError::auth_invalid(format!(
                "API key was rejected: {}",
                detail.message
            )),
            429 => AppError::new(
                ErrorCode::ExternalRateLimited,
                rate_limit_message(&detail.message),
            ),
            404 => AppError::external_service(
                SERVICE_NAME,
                format!("Model or endpoint not found: {}", detail.message),
            ),
            503 => AppError::external_unavailable(SERVICE_NAME, detail.message),
            _ => AppError::external_service(
                SERVICE_NAME,
                format!(
                    "{} - {}",
                    detail.error_type.as_deref().unwrap_or("unknown"),
                    detail.message
                ),
            ),
        }
    }
}

/// User-facing rate limit message, keeping any "try again in N" hint
fn rate_limit_message(message: &str) -> String {
    const MARKER: &str = "try again in ";
    let lower = message.to_lowercase();
    let seconds = lower.find(MARKER).and_then(|pos| {
        let rest = &lower[pos + MARKER.len()..];
        let end = rest
            .find(|c: char| !c.is_ascii_digit() && c != '.')
            .unwrap_or(rest.len());
        rest[..end].parse::<f64>().ok()
    });

    seconds.map_or_else(
        || "Rate limit reached. Please wait a moment and try again.".to_owned(),
        |secs| {
            format!(
                "Rate limit reached. Please try again in {} seconds.",
                secs.ceil() as u64
            )
        },
    )
}

#[async_trait]
impl LlmProvider for OpenAiCompatibleProvider {
    fn name(&self) -> &'static str {
        "openai-compatible"
    }

    fn capabilities(&self) -> LlmCapabilities {
        self.config.capabilities
    }

    fn default_model(&self) -> &str {
        &self.config.default_model
    }

    #[instrument(skip(self, request), fields(model = %request.model.as_deref().unwrap_or(&self.config.default_model)))]
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        let model = request
            .model
            .as_deref()
            .unwrap_or(&self.config.default_model);

        let response_format = (request.json_mode && self.config.capabilities.supports_json_mode())
            .then_some(ResponseFormat {
                format_type: "json_object",
            });

        let openai_request = OpenAiRequest {
            model: model.to_owned(),
            messages: request.messages.iter().map(OpenAiMessage::from).collect(),
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            response_format,
        };

        debug!(
            messages = openai_request.messages.len(),
            json_mode = openai_request.response_format.is_some(),
            "Sending chat completion request"
        );

        let http_request = self
            .client
            .post(self.api_url("chat/completions"))
            .json(&openai_request);

        let response = self
            .add_auth_header(http_request)
            .send()
            .await
            .map_err(|e| self.map_send_error(&e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("Failed to read API response: {e}");
            AppError::external_service(SERVICE_NAME, format!("Failed to read response: {e}"))
        })?;

        if !status.is_success() {
            return Err(Self::parse_error_response(status, &body));
        }

        let openai_response: OpenAiResponse = serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse API response: {e}");
            AppError::external_service(SERVICE_NAME, format!("Failed to parse response: {e}"))
        })?;

        let choice = openai_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AppError::external_service(SERVICE_NAME, "API returned no choices"))?;

        let content = choice.message.content.unwrap_or_default();
        debug!(
            chars = content.len(),
            finish_reason = ?choice.finish_reason,
            "Received chat completion"
        );

        Ok(ChatResponse {
            content,
            model: openai_response.model,
            usage: openai_response.usage.map(|u| TokenUsage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
                total_tokens: u.total_tokens,
            }),
            finish_reason: choice.finish_reason,
        })
    }

    async fn health_check(&self) -> Result<bool, AppError> {
        debug!("Performing health check at {}", self.config.base_url);

        let response = self
            .add_auth_header(self.client.get(self.api_url("models")))
            .send()
            .await
            .map_err(|e| self.map_send_error(&e))?;

        let healthy = response.status().is_success();
        if healthy {
            debug!("Health check passed");
        } else {
            warn!("Health check failed with status: {}", response.status());
        }
        Ok(healthy)
    }
}
