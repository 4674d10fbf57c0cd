// ABOUTME: Unit tests for the OpenAI-compatible chat completion provider
// ABOUTME: Validates configuration from settings, key redaction, and connection failure mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PantryPal

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::time::Duration;

use pantrypal::config::LlmSettings;
use pantrypal::llm::{
    ChatMessage, ChatRequest, LlmCapabilities, LlmProvider, OpenAiCompatibleConfig,
    OpenAiCompatibleProvider,
};
use pantrypal::ErrorCode;

fn unreachable_settings() -> LlmSettings {
    LlmSettings {
        base_url: "http://127.0.0.1:9/v1".to_owned(),
        model: "test-model".to_owned(),
        timeout_secs: 2,
        api_key: None,
    }
}

#[test]
fn test_config_from_settings() {
    let config = OpenAiCompatibleConfig::from_settings(&unreachable_settings(), Some("sk-abc".to_owned()));

    assert_eq!(config.base_url, "http://127.0.0.1:9/v1");
    assert_eq!(config.default_model, "test-model");
    assert_eq!(config.request_timeout, Duration::from_secs(2));
    assert_eq!(config.api_key.as_deref(), Some("sk-abc"));
    assert!(config.capabilities.supports_system_messages());
    assert!(config.capabilities.supports_json_mode());
}

#[test]
fn test_config_debug_redacts_key() {
    let config = OpenAiCompatibleConfig::from_settings(&unreachable_settings(), Some("sk-abc".to_owned()));
    let debug = format!("{config:?}");
    assert!(debug.contains("<redacted>"));
    assert!(!debug.contains("sk-abc"));
}

#[test]
fn test_provider_identity() {
    let config = OpenAiCompatibleConfig::from_settings(&LlmSettings::default(), None);
    let provider = OpenAiCompatibleProvider::new(config).unwrap();

    assert_eq!(provider.name(), "openai-compatible");
    assert_eq!(provider.default_model(), "gpt-3.5-turbo");
    assert_eq!(
        provider.capabilities(),
        LlmCapabilities::SYSTEM_MESSAGES | LlmCapabilities::JSON_MODE
    );
}

#[tokio::test]
async fn test_connection_refused_is_unavailable() {
    let config = OpenAiCompatibleConfig::from_settings(&unreachable_settings(), Some("sk-abc".to_owned()));
    let provider = OpenAiCompatibleProvider::new(config).unwrap();

    let request = ChatRequest::new(vec![ChatMessage::user("Hello")]).with_json_mode();
    let err = provider.complete(&request).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceUnavailable);
    assert!(err.message.contains("Cannot connect"));

    let err = provider.health_check().await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceUnavailable);
}
