// ABOUTME: Suggestion command for pantrypal-cli
// ABOUTME: Picks the item names, resolves the API key, and prints the outcome
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PantryPal

use pantrypal::credentials::CredentialStore;
use pantrypal::suggestions::SuggestionContext;
use pantrypal_core::errors::AppResult;
use tracing::debug;

use crate::context::CliContext;
use crate::helpers::display::print_suggestions;

/// Request suggestions for explicit items, the selected items, or the whole pantry
pub async fn run(ctx: &CliContext, items: Option<Vec<String>>) -> AppResult<()> {
    let items = match items {
        Some(items) => items,
        None => {
            let pantry = ctx.load_pantry().await?;
            let selected: Vec<String> = pantry
                .selected()
                .into_iter()
                .map(|entry| entry.name.clone())
                .collect();
            if selected.is_empty() {
                pantry.item_names()
            } else {
                selected
            }
        }
    };
    debug!(count = items.len(), "Requesting suggestions");

    let key = CredentialStore::new(ctx.store.clone())
        .resolve(&ctx.config.llm)
        .await?;
    let service = SuggestionContext::new(ctx.config.llm.clone(), key).into_service()?;

    let outcome = service.request(&items).await?;
    print_suggestions(&outcome);
    if outcome.needs_credential() {
        println!("\nSet an API key with `pantrypal-cli key set <KEY>` to get personalized recipes.");
    }
    Ok(())
}
