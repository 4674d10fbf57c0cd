// ABOUTME: API key and filter preference commands for pantrypal-cli
// ABOUTME: Keys are only ever printed masked
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PantryPal

use pantrypal::credentials::CredentialStore;
use pantrypal::preferences::FilterPreferenceStore;
use pantrypal_core::errors::AppResult;

use crate::context::CliContext;
use crate::helpers::display::print_criteria;

/// Save an API key
pub async fn set_key(ctx: &CliContext, key: &str) -> AppResult<()> {
    CredentialStore::new(ctx.store.clone()).save(key).await?;
    println!("API key saved");
    Ok(())
}

/// Delete the saved API key
pub async fn remove_key(ctx: &CliContext) -> AppResult<()> {
    CredentialStore::new(ctx.store.clone()).remove().await?;
    println!("API key removed");
    Ok(())
}

/// Show the effective key, masked
pub async fn key_status(ctx: &CliContext) -> AppResult<()> {
    let resolved = CredentialStore::new(ctx.store.clone())
        .resolve(&ctx.config.llm)
        .await?;
    match resolved {
        Some(key) => println!("API key: {} ({})", key.masked(), key.source),
        None => println!("No API key configured; suggestions use the built-in list"),
    }
    println!("Endpoint: {} (model {})", ctx.config.llm.base_url, ctx.config.llm.model);
    Ok(())
}

/// Show the saved filter preference
pub async fn show_prefs(ctx: &CliContext) -> AppResult<()> {
    let criteria = FilterPreferenceStore::new(ctx.store.clone()).load().await?;
    print_criteria(&criteria);
    Ok(())
}

/// Forget the saved filter preference
pub async fn reset_prefs(ctx: &CliContext) -> AppResult<()> {
    let preferences = FilterPreferenceStore::new(ctx.store.clone());
    preferences.reset().await?;
    println!("Filter preference reset");
    print_criteria(&preferences.load().await?);
    Ok(())
}
