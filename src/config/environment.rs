// ABOUTME: Environment configuration for data location, LLM endpoint, and deployment mode
// ABOUTME: Parses environment variables into a typed AppConfig passed explicitly to services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PantryPal

//! Environment-based configuration

use pantrypal_core::constants::llm;
use pantrypal_core::errors::{AppError, AppResult, ErrorCode};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, info};

/// Directory of the file-backed key-value store
pub const DATA_DIR_ENV: &str = "PANTRYPAL_DATA_DIR";
/// Optional API key seed for the generation service
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
/// `OpenAI`-compatible base URL
pub const LLM_BASE_URL_ENV: &str = "LLM_BASE_URL";
/// Chat model name
pub const LLM_MODEL_ENV: &str = "LLM_MODEL";
/// Whole-request timeout in seconds
pub const LLM_TIMEOUT_ENV: &str = "LLM_TIMEOUT_SECS";
/// Deployment environment
pub const ENVIRONMENT_ENV: &str = "ENVIRONMENT";

/// File name of the JSON key-value store inside the data directory
const STORE_FILE_NAME: &str = "pantrypal.json";

/// Environment type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if this is a testing environment
    #[must_use]
    pub const fn is_testing(&self) -> bool {
        matches!(self, Self::Testing)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Generation service endpoint settings
#[derive(Clone, PartialEq, Eq)]
pub struct LlmSettings {
    /// `OpenAI`-compatible base URL
    pub base_url: String,
    /// Chat model
    pub model: String,
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
    /// Key from the environment, if any; a saved key takes precedence
    pub api_key: Option<String>,
}

impl fmt::Debug for LlmSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmSettings")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            base_url: llm::DEFAULT_BASE_URL.to_owned(),
            model: llm::DEFAULT_MODEL.to_owned(),
            timeout_secs: llm::DEFAULT_TIMEOUT_SECS,
            api_key: None,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding the key-value store file
    pub data_dir: PathBuf,
    /// Generation service settings
    pub llm: LlmSettings,
    /// Deployment environment
    pub environment: Environment,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if a variable is present but malformed.
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if a variable is present but malformed.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let data_dir = non_empty(DATA_DIR_ENV).map_or_else(default_data_dir, PathBuf::from);

        let timeout_secs = match non_empty(LLM_TIMEOUT_ENV) {
            Some(raw) => parse_timeout(&raw)?,
            None => llm::DEFAULT_TIMEOUT_SECS,
        };

        let base_url = non_empty(LLM_BASE_URL_ENV).unwrap_or_else(|| llm::DEFAULT_BASE_URL.to_owned());
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(AppError::new(
                ErrorCode::ConfigInvalid,
                format!("{LLM_BASE_URL_ENV} must be an http(s) URL, got '{base_url}'"),
            ));
        }

        let config = Self {
            data_dir,
            llm: LlmSettings {
                base_url,
                model: non_empty(LLM_MODEL_ENV).unwrap_or_else(|| llm::DEFAULT_MODEL.to_owned()),
                timeout_secs,
                api_key: non_empty(API_KEY_ENV).map(|k| k.trim().to_owned()),
            },
            environment: non_empty(ENVIRONMENT_ENV)
                .map(|e| Environment::from_str_or_default(&e))
                .unwrap_or_default(),
        };

        debug!(
            data_dir = %config.data_dir.display(),
            model = %config.llm.model,
            env_key = config.llm.api_key.is_some(),
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Path of the JSON key-value store file
    #[must_use]
    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(STORE_FILE_NAME)
    }

    /// One-line human-readable summary; never includes the key itself
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "environment={} data_dir={} model={} base_url={} timeout={}s env_key={}",
            self.environment,
            self.data_dir.display(),
            self.llm.model,
            self.llm.base_url,
            self.llm.timeout_secs,
            if self.llm.api_key.is_some() {
                "present"
            } else {
                "absent"
            }
        )
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(|| PathBuf::from(".pantrypal"), |dir| dir.join("pantrypal"))
}

fn parse_timeout(raw: &str) -> AppResult<u64> {
    match raw.trim().parse::<u64>() {
        Ok(0) | Err(_) => Err(AppError::new(
            ErrorCode::ConfigInvalid,
            format!("{LLM_TIMEOUT_ENV} must be a positive number of seconds, got '{raw}'"),
        )),
        Ok(secs) => Ok(secs),
    }
}
