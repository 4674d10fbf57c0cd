// ABOUTME: Configuration module root for environment-driven settings
// ABOUTME: Re-exports AppConfig, LlmSettings, and Environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PantryPal

//! Configuration is read from the environment only; there are no config files.

/// Environment variable parsing
pub mod environment;

pub use environment::{AppConfig, Environment, LlmSettings};
