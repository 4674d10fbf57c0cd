// ABOUTME: Recipe catalog commands for pantrypal-cli
// ABOUTME: Filtered listing, detail, pantry matching, readiness ranking, and favorites
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PantryPal

use std::str::FromStr;

use pantrypal::catalog::Favorites;
use pantrypal::preferences::FilterPreferenceStore;
use pantrypal_core::errors::{AppError, AppResult};
use pantrypal_core::models::{CookTimeBucket, FilterCriteria, SearchScope, SkillLevel};
use tracing::info;

use crate::context::CliContext;
use crate::helpers::display::{
    print_criteria, print_match, print_ranked, print_recipe_detail, print_recipes,
};

/// A filter field typed on the command line; `any` clears the field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldOverride<T> {
    /// No restriction on this field
    Any,
    /// Restrict to this value
    Value(T),
}

impl<T> FieldOverride<T> {
    fn into_option(self) -> Option<T> {
        match self {
            Self::Any => None,
            Self::Value(value) => Some(value),
        }
    }
}

impl<T> FromStr for FieldOverride<T>
where
    T: FromStr,
    AppError: From<T::Err>,
{
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("any") {
            return Ok(Self::Any);
        }
        Ok(Self::Value(s.parse()?))
    }
}

/// Command-line overrides layered on the saved filter
pub struct FilterOverrides {
    pub skill: Option<FieldOverride<SkillLevel>>,
    pub time: Option<FieldOverride<CookTimeBucket>>,
    pub diet: Option<FieldOverride<String>>,
    pub search: Option<String>,
    pub ingredients: bool,
    pub ignore_saved: bool,
}

impl FilterOverrides {
    /// Whether a persisted field (skill, time, diet) is being changed
    const fn changes_preference(&self) -> bool {
        self.skill.is_some() || self.time.is_some() || self.diet.is_some()
    }

    fn apply(self, base: FilterCriteria) -> FilterCriteria {
        let mut criteria = base;
        if let Some(skill) = self.skill {
            criteria.skill_level = skill.into_option();
        }
        if let Some(time) = self.time {
            criteria.cook_time = time.into_option();
        }
        if let Some(diet) = self.diet {
            criteria.dietary_label = diet.into_option();
        }
        if let Some(search) = self.search {
            criteria = criteria.with_search(search);
        }
        if self.ingredients {
            criteria = criteria.with_search_scope(SearchScope::TitleAndIngredients);
        }
        criteria
    }
}

/// List recipes through the saved filter plus overrides
///
/// Any skill, time, or diet override becomes the new saved preference;
/// `save` also stores an unchanged filter (e.g. the `--all` one).
pub async fn list(ctx: &CliContext, overrides: FilterOverrides, save: bool) -> AppResult<()> {
    let preferences = FilterPreferenceStore::new(ctx.store.clone());
    let base = if overrides.ignore_saved {
        FilterCriteria::default()
    } else {
        preferences.load().await?
    };
    let persist = save || overrides.changes_preference();
    let criteria = overrides.apply(base);

    if persist {
        // Search text is per-query and is not part of the saved preference
        let mut saved = criteria.clone();
        saved.search_text = None;
        saved.search_scope = SearchScope::default();
        preferences.save(&saved).await?;
        info!("Saved recipe filter preference");
    }

    let catalog = CliContext::catalog()?;
    let favorites = Favorites::load(ctx.store.as_ref()).await?;

    print_criteria(&criteria);
    print_recipes(&catalog.filter(&criteria), &favorites);
    Ok(())
}

/// Show one recipe
pub async fn show(ctx: &CliContext, id: &str) -> AppResult<()> {
    let catalog = CliContext::catalog()?;
    let recipe = catalog
        .get(id)
        .ok_or_else(|| AppError::not_found(format!("Recipe {id}")))?;
    let favorites = Favorites::load(ctx.store.as_ref()).await?;
    print_recipe_detail(recipe, favorites.contains(id));
    Ok(())
}

/// Compare a recipe with the pantry
pub async fn match_pantry(ctx: &CliContext, id: &str) -> AppResult<()> {
    let catalog = CliContext::catalog()?;
    let pantry = ctx.load_pantry().await?;
    let matched = catalog.match_recipe(id, &pantry.item_names())?;
    if let Some(recipe) = catalog.get(id) {
        print_match(recipe, &matched);
    }
    Ok(())
}

/// Rank recipes by readiness
pub async fn rank(ctx: &CliContext) -> AppResult<()> {
    let catalog = CliContext::catalog()?;
    let pantry = ctx.load_pantry().await?;
    if pantry.is_empty() {
        println!("Pantry is empty; every recipe is at 0%.");
    }
    print_ranked(&catalog.rank(&pantry.item_names()));
    Ok(())
}

/// Toggle a favorite
pub async fn toggle_favorite(ctx: &CliContext, id: &str) -> AppResult<()> {
    let catalog = CliContext::catalog()?;
    let mut favorites = Favorites::load(ctx.store.as_ref()).await?;
    let now_favorite = favorites
        .toggle_in(&catalog, id)
        .ok_or_else(|| AppError::not_found(format!("Recipe {id}")))?;
    favorites.save(ctx.store.as_ref()).await?;

    let title = catalog.get(id).map_or(id, |r| r.title.as_str());
    if now_favorite {
        println!("Added {title} to favorites");
    } else {
        println!("Removed {title} from favorites");
    }
    Ok(())
}

/// List favorites
pub async fn favorites(ctx: &CliContext) -> AppResult<()> {
    let catalog = CliContext::catalog()?;
    let mut favorites = Favorites::load(ctx.store.as_ref()).await?;
    if favorites.prune(&catalog) > 0 {
        favorites.save(ctx.store.as_ref()).await?;
    }

    let recipes: Vec<_> = favorites.resolve(&catalog).into_iter().cloned().collect();
    if recipes.is_empty() {
        println!("No favorite recipes yet.");
        return Ok(());
    }
    print_recipes(&recipes, &favorites);
    Ok(())
}
