// ABOUTME: PantryPal CLI - pantry, recipe, and suggestion commands over the local store
// ABOUTME: Parses arguments, wires configuration and storage, and dispatches to command modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PantryPal
//!
//! Usage:
//! ```bash
//! # Fill the pantry with demo data
//! pantrypal-cli pantry demo --count 30 --seed 7
//!
//! # List items expiring soonest first
//! pantrypal-cli pantry list --sort date
//!
//! # Add an item
//! pantrypal-cli pantry add "Greek Yogurt" --expires 2025-03-20 --brand Fage --quantity "32 oz"
//!
//! # Browse recipes with the saved filter; overrides are saved
//! pantrypal-cli recipes list --skill beginner --time 0-20
//! pantrypal-cli recipes list --time any
//!
//! # Rank recipes by what is already in the pantry
//! pantrypal-cli recipes rank
//!
//! # Ask for AI suggestions from the selected items
//! pantrypal-cli pantry select 3f2a 9bc1
//! pantrypal-cli suggest
//! ```

mod commands;
mod context;
mod helpers;

use std::path::PathBuf;
use std::process;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use pantrypal::config::AppConfig;
use pantrypal::logging::LoggingConfig;
use pantrypal::pantry::DEFAULT_DEMO_ITEMS;
use pantrypal::storage::open_store;
use pantrypal_core::errors::AppResult;
use pantrypal_core::models::{parse_expiration_date, CookTimeBucket, SkillLevel, SortField};
use tracing::debug;

use commands::recipes::FieldOverride;
use context::CliContext;

#[derive(Parser)]
#[command(
    name = "pantrypal-cli",
    about = "PantryPal pantry and recipe CLI",
    long_about = "Track pantry items and expiration dates, browse and rank recipes, and request AI recipe suggestions."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Directory holding the local store (overrides PANTRYPAL_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Evaluate expiration status as of this date instead of today
    #[arg(long, global = true, value_parser = parse_expiration_date)]
    today: Option<NaiveDate>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Pantry inventory commands
    Pantry {
        #[command(subcommand)]
        action: PantryCommand,
    },

    /// Recipe catalog commands
    Recipes {
        #[command(subcommand)]
        action: RecipeCommand,
    },

    /// Ask the generation service for recipes (falls back to a built-in list)
    Suggest {
        /// Comma-separated item names; defaults to the selected pantry items, else all items
        #[arg(long, value_delimiter = ',')]
        items: Option<Vec<String>>,
    },

    /// Generation service API key
    Key {
        #[command(subcommand)]
        action: KeyCommand,
    },

    /// Saved recipe filter preference
    Prefs {
        #[command(subcommand)]
        action: PrefsCommand,
    },
}

#[derive(Subcommand)]
enum PantryCommand {
    /// List pantry items with their expiration status
    List {
        /// Only items whose name or brand contains this text
        #[arg(long, short = 's')]
        search: Option<String>,

        /// Sort requests applied in order; repeating a field cycles asc, desc, unsorted
        #[arg(long)]
        sort: Vec<SortField>,
    },

    /// Add an item
    Add {
        /// Item name
        name: String,

        /// Expiration date (YYYY-MM-DD or M/D/YYYY)
        #[arg(long, short = 'e', value_parser = parse_expiration_date)]
        expires: NaiveDate,

        /// Brand
        #[arg(long, short = 'b', default_value = "")]
        brand: String,

        /// Quantity, free text
        #[arg(long, short = 'q', default_value = "")]
        quantity: String,
    },

    /// Remove an item by id (or unique id prefix)
    Remove {
        /// Item id
        id: String,
    },

    /// Toggle selection on one or more items
    Select {
        /// Item ids (or unique id prefixes)
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Uncheck every item
    ClearSelection,

    /// Add generated demo items
    Demo {
        /// Number of items to generate
        #[arg(long, short = 'n', default_value_t = DEFAULT_DEMO_ITEMS)]
        count: usize,

        /// RNG seed for a reproducible pantry
        #[arg(long)]
        seed: Option<u64>,

        /// Replace the current pantry instead of appending
        #[arg(long)]
        replace: bool,
    },

    /// Show items expiring within the next week
    DonateCandidates,

    /// Pick expiring items to donate (the pantry is left unchanged)
    Donate {
        /// Item ids to donate; omit with --all to take every candidate
        ids: Vec<String>,

        /// Donate every candidate
        #[arg(long)]
        all: bool,
    },

    /// Counts by expiration status
    Summary,
}

#[derive(Subcommand)]
enum RecipeCommand {
    /// List catalog recipes through the filter
    List {
        /// Skill level (beginner, intermediate, advanced, or any); saved
        #[arg(long)]
        skill: Option<FieldOverride<SkillLevel>>,

        /// Cook-time bucket (0-20, 20-40, 40-60, 60+, or any); saved
        #[arg(long)]
        time: Option<FieldOverride<CookTimeBucket>>,

        /// Dietary label, or any; saved
        #[arg(long)]
        diet: Option<FieldOverride<String>>,

        /// Search text
        #[arg(long, short = 's')]
        search: Option<String>,

        /// Match search text against ingredients as well as titles
        #[arg(long)]
        ingredients: bool,

        /// Ignore the saved preference and start from no filter
        #[arg(long)]
        all: bool,

        /// Save the resulting filter even when no field was changed
        #[arg(long)]
        save: bool,
    },

    /// Show one recipe in full
    Show {
        /// Recipe id
        id: String,
    },

    /// Compare one recipe's ingredients with the pantry
    Match {
        /// Recipe id
        id: String,
    },

    /// Order every recipe by readiness against the pantry
    Rank,

    /// Toggle a recipe as favorite
    Favorite {
        /// Recipe id
        id: String,
    },

    /// List favorite recipes
    Favorites,
}

#[derive(Subcommand)]
enum KeyCommand {
    /// Save an API key
    Set {
        /// API key
        key: String,
    },

    /// Delete the saved API key
    Remove,

    /// Show which key would be used
    Status,
}

#[derive(Subcommand)]
enum PrefsCommand {
    /// Show the saved filter preference
    Show,

    /// Forget the saved filter preference
    Reset,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".into();
    }
    logging.init()?;

    if let Err(e) = run(cli).await {
        if e.code.is_user_facing() {
            eprintln!("{}", e.message);
            process::exit(1);
        }
        return Err(e.into());
    }
    Ok(())
}

async fn run(cli: Cli) -> AppResult<()> {
    let mut config = AppConfig::from_env()?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    debug!(config = %config.summary(), "Resolved configuration");

    let store = open_store(&config);
    let ctx = CliContext::new(config, store, cli.today);

    match cli.command {
        Command::Pantry { action } => run_pantry(&ctx, action).await,
        Command::Recipes { action } => run_recipes(&ctx, action).await,
        Command::Suggest { items } => commands::suggest::run(&ctx, items).await,
        Command::Key { action } => match action {
            KeyCommand::Set { key } => commands::settings::set_key(&ctx, &key).await,
            KeyCommand::Remove => commands::settings::remove_key(&ctx).await,
            KeyCommand::Status => commands::settings::key_status(&ctx).await,
        },
        Command::Prefs { action } => match action {
            PrefsCommand::Show => commands::settings::show_prefs(&ctx).await,
            PrefsCommand::Reset => commands::settings::reset_prefs(&ctx).await,
        },
    }
}

async fn run_pantry(ctx: &CliContext, action: PantryCommand) -> AppResult<()> {
    match action {
        PantryCommand::List { search, sort } => {
            commands::pantry::list(ctx, search.as_deref(), &sort).await
        }
        PantryCommand::Add {
            name,
            expires,
            brand,
            quantity,
        } => commands::pantry::add(ctx, name, expires, brand, quantity).await,
        PantryCommand::Remove { id } => commands::pantry::remove(ctx, &id).await,
        PantryCommand::Select { ids } => commands::pantry::select(ctx, &ids).await,
        PantryCommand::ClearSelection => commands::pantry::clear_selection(ctx).await,
        PantryCommand::Demo {
            count,
            seed,
            replace,
        } => commands::pantry::demo(ctx, count, seed, replace).await,
        PantryCommand::DonateCandidates => commands::pantry::donate_candidates(ctx).await,
        PantryCommand::Donate { ids, all } => commands::pantry::donate(ctx, &ids, all).await,
        PantryCommand::Summary => commands::pantry::summary(ctx).await,
    }
}

async fn run_recipes(ctx: &CliContext, action: RecipeCommand) -> AppResult<()> {
    match action {
        RecipeCommand::List {
            skill,
            time,
            diet,
            search,
            ingredients,
            all,
            save,
        } => {
            let overrides = commands::recipes::FilterOverrides {
                skill,
                time,
                diet,
                search,
                ingredients,
                ignore_saved: all,
            };
            commands::recipes::list(ctx, overrides, save).await
        }
        RecipeCommand::Show { id } => commands::recipes::show(ctx, &id).await,
        RecipeCommand::Match { id } => commands::recipes::match_pantry(ctx, &id).await,
        RecipeCommand::Rank => commands::recipes::rank(ctx).await,
        RecipeCommand::Favorite { id } => commands::recipes::toggle_favorite(ctx, &id).await,
        RecipeCommand::Favorites => commands::recipes::favorites(ctx).await,
    }
}
