// ABOUTME: Unified error handling with standard error codes for PantryPal
// ABOUTME: Defines AppError, ErrorCode, and conversions from common library errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PantryPal

//! # Unified Error Handling System
//!
//! Every fallible operation in the workspace returns [`AppResult`]. Errors
//! carry an [`ErrorCode`] so callers can tell user-facing rejections
//! (an empty selection, a missing API key) apart from internal failures
//! without matching on message text.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::error::Error as StdError;
use std::fmt;
use std::io;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input failed validation
    InvalidInput = 3000,
    /// Input could not be parsed
    InvalidFormat = 3002,
    /// A user action needs at least one (or more) selected items
    EmptySelection = 3010,

    // Resource Management (4000-4999)
    /// Referenced resource does not exist
    ResourceNotFound = 4000,
    /// A suggestion request is already running
    RequestInFlight = 4010,

    // External Services (5000-5999)
    /// The generation service returned an error or unusable payload
    ExternalServiceError = 5000,
    /// The generation service could not be reached
    ExternalServiceUnavailable = 5001,
    /// The generation service rejected the credential
    ExternalAuthFailed = 5002,
    /// The generation service rate limited the request
    ExternalRateLimited = 5003,
    /// No credential is configured for the generation service
    MissingCredential = 5010,

    // Configuration (6000-6999)
    /// Configuration error encountered
    ConfigError = 6000,
    /// Configuration value is invalid
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    InternalError = 9000,
    /// Key-value storage failure
    StorageError = 9002,
    /// Serialization or deserialization failure
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::InvalidFormat => "The data format is invalid",
            Self::EmptySelection => "Not enough items are selected",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::RequestInFlight => "A request is already in progress",
            Self::ExternalServiceError => "The recipe generation service encountered an error",
            Self::ExternalServiceUnavailable => "The recipe generation service is unavailable",
            Self::ExternalAuthFailed => "Authentication with the recipe generation service failed",
            Self::ExternalRateLimited => "The recipe generation service rate limit was exceeded",
            Self::MissingCredential => "No API key is configured for recipe generation",
            Self::ConfigError => "Configuration error encountered",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::StorageError => "Storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }

    /// Whether the error should be shown to the user as an actionable message
    ///
    /// These are rejections of the user's own action (nothing selected, no key
    /// saved, a request still running) rather than system failures.
    #[must_use]
    pub const fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput
                | Self::InvalidFormat
                | Self::EmptySelection
                | Self::ResourceNotFound
                | Self::RequestInFlight
                | Self::MissingCredential
        )
    }

    /// Whether the failure came from the remote generation service
    #[must_use]
    pub const fn is_external(&self) -> bool {
        matches!(
            self,
            Self::ExternalServiceError
                | Self::ExternalServiceUnavailable
                | Self::ExternalAuthFailed
                | Self::ExternalRateLimited
        )
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Unparseable input
    #[must_use]
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// Not enough items selected for the requested action
    #[must_use]
    pub fn empty_selection(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::EmptySelection, message)
    }

    /// Resource not found
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// A request of the same kind is already running
    #[must_use]
    pub fn request_in_flight(what: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::RequestInFlight,
            format!("{} is already in progress", what.into()),
        )
    }

    /// Missing credential for an external service
    #[must_use]
    pub fn missing_credential(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MissingCredential, message)
    }

    /// External service error
    #[must_use]
    pub fn external_service(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceError,
            format!("{}: {}", service.into(), message.into()),
        )
    }

    /// External service unreachable
    #[must_use]
    pub fn external_unavailable(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceUnavailable,
            format!("{}: {}", service.into(), message.into()),
        )
    }

    /// Credential rejected by an external service
    #[must_use]
    pub fn auth_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ExternalAuthFailed, message)
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Storage error
    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Serialization error
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }

    /// Internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        let message = format!("JSON error: {error}");
        Self::serialization(message).with_source(error)
    }
}

impl From<Infallible> for AppError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        let message = format!("I/O error: {error}");
        Self::storage(message).with_source(error)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::internal(format!("{error:#}"))
    }
}
