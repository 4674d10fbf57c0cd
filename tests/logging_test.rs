// ABOUTME: Unit tests for logging configuration
// ABOUTME: Validates format parsing and environment variable handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PantryPal

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pantrypal::config::Environment;
use pantrypal::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;

#[test]
#[serial]
fn test_logging_config_from_env() {
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");

    let config = LoggingConfig::from_env();

    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.environment, Environment::Production);
    assert_eq!(config.service_name, "pantrypal-cli");
    assert!(config.include_location); // Should be true for production

    // Clean up
    env::remove_var("RUST_LOG");
    env::remove_var("LOG_FORMAT");
    env::remove_var("ENVIRONMENT");
}

#[test]
#[serial]
fn test_production_defaults_to_json() {
    env::remove_var("LOG_FORMAT");
    env::set_var("ENVIRONMENT", "prod");

    let config = LoggingConfig::from_env();
    assert_eq!(config.format, LogFormat::Json);

    env::remove_var("ENVIRONMENT");
}

#[test]
fn test_default_logging_config() {
    let config = LoggingConfig::default();

    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Compact);
    assert_eq!(config.environment, Environment::Development);
    assert!(!config.include_location);
}

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str_or_default("JSON"), LogFormat::Json);
    assert_eq!(LogFormat::from_str_or_default("pretty"), LogFormat::Pretty);
    assert_eq!(LogFormat::from_str_or_default("anything"), LogFormat::Compact);
}
