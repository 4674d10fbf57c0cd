// ABOUTME: Logging configuration and structured logging setup for the PantryPal CLI
// ABOUTME: Configures log level, output format, and noise reduction for HTTP dependencies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PantryPal

//! Structured logging with `tracing-subscriber`
//!
//! Log records go to stderr so command output on stdout stays scriptable.

use anyhow::{anyhow, Result};
use pantrypal_core::constants::service_names;
use std::env;
use std::io;
use tracing::{info, Level};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::Environment;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level or filter directive (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include span enter/exit events
    pub include_spans: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Deployment environment
    pub environment: Environment,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact single-line format
    Compact,
}

impl LogFormat {
    /// Parse from string, defaulting to compact
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            "pretty" => Self::Pretty,
            _ => Self::Compact,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Compact,
            include_location: false,
            include_spans: false,
            service_name: service_names::PANTRYPAL_CLI.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: Environment::Development,
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    ///
    /// Reads `RUST_LOG`, `LOG_FORMAT`, `ENVIRONMENT`, and the optional
    /// `LOG_INCLUDE_LOCATION` / `LOG_INCLUDE_SPANS` switches.
    #[must_use]
    pub fn from_env() -> Self {
        let environment = env::var("ENVIRONMENT")
            .map(|e| Environment::from_str_or_default(&e))
            .unwrap_or_default();
        let is_production = environment.is_production();

        Self {
            level: env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
            format: env::var("LOG_FORMAT").map_or_else(
                |_| {
                    if is_production {
                        LogFormat::Json
                    } else {
                        LogFormat::Compact
                    }
                },
                |f| LogFormat::from_str_or_default(&f),
            ),
            include_location: is_production || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_spans: env::var("LOG_INCLUDE_SPANS").is_ok(),
            service_name: service_names::PANTRYPAL_CLI.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment,
        }
    }

    /// Build the filter, always applying noise reduction for HTTP crates
    fn env_filter(&self) -> EnvFilter {
        let quiet = |directive: &str, fallback: Level| -> Directive {
            directive.parse().unwrap_or_else(|_| fallback.into())
        };

        EnvFilter::new(&self.level)
            .add_directive(quiet("hyper=warn", Level::WARN))
            .add_directive(quiet("hyper_util=warn", Level::WARN))
            .add_directive(quiet("reqwest=warn", Level::WARN))
            .add_directive(quiet("rustls=warn", Level::WARN))
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());
        let span_events = if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };

        let result = match self.format {
            LogFormat::Json => registry
                .with(
                    fmt::layer()
                        .json()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_target(true)
                        .with_writer(io::stderr)
                        .with_span_events(span_events),
                )
                .try_init(),
            LogFormat::Pretty => registry
                .with(
                    fmt::layer()
                        .pretty()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_target(true)
                        .with_writer(io::stderr)
                        .with_span_events(span_events),
                )
                .try_init(),
            LogFormat::Compact => registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_target(false)
                        .with_writer(io::stderr)
                        .with_span_events(FmtSpan::NONE),
                )
                .try_init(),
        };
        result.map_err(|e| anyhow!("Failed to initialize logging: {e}"))?;

        self.log_startup_info();
        Ok(())
    }

    fn log_startup_info(&self) {
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "PantryPal starting up"
        );
    }
}

/// Initialize logging from environment
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}
