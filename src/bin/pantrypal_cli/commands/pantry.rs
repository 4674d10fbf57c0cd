// ABOUTME: Pantry commands for pantrypal-cli
// ABOUTME: List, add, remove, select, demo data, donation, and summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PantryPal

use chrono::NaiveDate;
use pantrypal::pantry::{demo_pantry, view_entry, DonationSelection, PantryItemView, PantryStore};
use pantrypal_core::errors::{AppError, AppResult};
use pantrypal_core::models::{NewPantryEntry, SortField, SortState};
use pantrypal_intelligence::sort_entries;
use tracing::{info, warn};

use crate::context::CliContext;
use crate::helpers::display::{print_pantry, print_summary};
use crate::helpers::ids::{resolve, short_id};

/// List items, optionally searched and sorted
pub async fn list(ctx: &CliContext, search: Option<&str>, sort: &[SortField]) -> AppResult<()> {
    let pantry = ctx.load_pantry().await?;

    let state = sort
        .iter()
        .fold(SortState::unsorted(), |state, field| state.request(*field));
    let entries = search.map_or_else(|| pantry.entries().to_vec(), |q| pantry.search(q));
    let views: Vec<PantryItemView> = sort_entries(&entries, &state)
        .iter()
        .map(|entry| view_entry(entry, ctx.today))
        .collect();

    print_pantry(&views);
    if !state.is_unsorted() {
        println!("\nSorted by {:?} {:?}", state.field, state.direction);
    }
    Ok(())
}

/// Add one item
pub async fn add(
    ctx: &CliContext,
    name: String,
    expires: NaiveDate,
    brand: String,
    quantity: String,
) -> AppResult<()> {
    let mut pantry = ctx.load_pantry().await?;
    let id = pantry.add(
        NewPantryEntry::new(name, expires)
            .with_brand(brand)
            .with_quantity(quantity),
    )?;
    ctx.save_pantry(&pantry).await?;

    if let Some(entry) = pantry.get(&id) {
        println!("Added {} ({})", entry.name, short_id(&id));
        print_pantry(&[view_entry(entry, ctx.today)]);
    }
    Ok(())
}

/// Remove one item
pub async fn remove(ctx: &CliContext, raw_id: &str) -> AppResult<()> {
    let mut pantry = ctx.load_pantry().await?;
    let id = resolve(&pantry, raw_id)?;
    if let Some(removed) = pantry.remove(&id) {
        ctx.save_pantry(&pantry).await?;
        println!("Removed {}", removed.name);
    }
    Ok(())
}

/// Toggle selection on each id
pub async fn select(ctx: &CliContext, raw_ids: &[String]) -> AppResult<()> {
    let mut pantry = ctx.load_pantry().await?;
    for raw in raw_ids {
        match resolve(&pantry, raw) {
            Ok(id) => {
                let now_selected = pantry.toggle_selected(&id);
                let name = pantry.get(&id).map_or("", |e| e.name.as_str());
                println!("{} {name}", if now_selected { "Selected" } else { "Unselected" });
            }
            Err(e) => {
                warn!(id = %raw, error = %e, "Skipping selection");
                println!("Skipped '{raw}': {}", e.message);
            }
        }
    }
    ctx.save_pantry(&pantry).await?;
    println!("{} item(s) selected", pantry.selected().len());
    Ok(())
}

/// Uncheck everything
pub async fn clear_selection(ctx: &CliContext) -> AppResult<()> {
    let mut pantry = ctx.load_pantry().await?;
    pantry.clear_selection();
    ctx.save_pantry(&pantry).await?;
    println!("Selection cleared");
    Ok(())
}

/// Add generated demo items
pub async fn demo(ctx: &CliContext, count: usize, seed: Option<u64>, replace: bool) -> AppResult<()> {
    if count == 0 {
        return Err(AppError::invalid_input("Demo item count must be at least 1"));
    }
    let seed = seed.unwrap_or_else(rand::random);
    let mut pantry = if replace {
        PantryStore::new()
    } else {
        ctx.load_pantry().await?
    };

    pantry.extend(demo_pantry(count, seed, ctx.today));
    ctx.save_pantry(&pantry).await?;
    info!(count, seed, replace, "Generated demo pantry");
    println!("Added {count} demo items (seed {seed}); pantry now has {}", pantry.len());
    Ok(())
}

/// Items that could be donated
pub async fn donate_candidates(ctx: &CliContext) -> AppResult<()> {
    let pantry = ctx.load_pantry().await?;
    let views: Vec<PantryItemView> = pantry
        .donation_candidates(ctx.today)
        .iter()
        .map(|entry| view_entry(entry, ctx.today))
        .collect();
    if views.is_empty() {
        println!("No items expiring within a week to donate");
        return Ok(());
    }
    print_pantry(&views);
    Ok(())
}

/// Confirm a donation; the pantry is not modified
pub async fn donate(ctx: &CliContext, raw_ids: &[String], all: bool) -> AppResult<()> {
    let pantry = ctx.load_pantry().await?;
    let mut selection = DonationSelection::start(&pantry, ctx.today)?;

    if all {
        selection.check_all();
    } else {
        for raw in raw_ids {
            let id = resolve(&pantry, raw)?;
            if !selection.toggle(&id) && !selection.is_checked(&id) {
                println!("Skipped '{raw}': not expiring within a week");
            }
        }
    }

    let donated = selection.confirm()?;
    println!("Ready to donate {} item(s):", donated.len());
    for entry in &donated {
        println!("  - {} {} ({})", entry.quantity, entry.name, entry.brand);
    }
    println!("Remove them with `pantry remove <id>` once dropped off.");
    Ok(())
}

/// Status counts
pub async fn summary(ctx: &CliContext) -> AppResult<()> {
    let pantry = ctx.load_pantry().await?;
    print_summary(&pantry.summary(ctx.today));
    Ok(())
}
