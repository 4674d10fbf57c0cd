// ABOUTME: Prompts for recipe generation loaded at compile time
// ABOUTME: Chef system prompt plus the pantry-driven recipe request template
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PantryPal

//! # Prompts
//!
//! Prompt text lives in markdown files next to this module so it can be
//! edited without touching code.

/// Chef persona used as the system message
pub const CHEF_SYSTEM_PROMPT: &str = include_str!("chef_system.md");

/// Recipe request template with `{pantry_items}` and `{recipe_count}` slots
pub const RECIPE_REQUEST_TEMPLATE: &str = include_str!("recipe_request.md");

/// System prompt for recipe generation
#[must_use]
pub fn chef_system_prompt() -> &'static str {
    CHEF_SYSTEM_PROMPT.trim_end()
}

/// User prompt asking for `count` recipes built from `pantry_items`
#[must_use]
pub fn recipe_request_prompt<S: AsRef<str>>(pantry_items: &[S], count: usize) -> String {
    let items = pantry_items
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ");

    RECIPE_REQUEST_TEMPLATE
        .replace("{pantry_items}", &items)
        .replace("{recipe_count}", &count.to_string())
}
