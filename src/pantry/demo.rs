// ABOUTME: Seeded generator for a realistic demo pantry
// ABOUTME: Produces a mix of fresh, expiring, and expired grocery items
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PantryPal

use chrono::{Duration, NaiveDate};
use pantrypal_core::models::PantryEntry;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

/// Default number of generated items
pub const DEFAULT_DEMO_ITEMS: usize = 30;

const BRANDS: &[&str] = &[
    "Organic Valley",
    "Heinz",
    "Kraft",
    "General Mills",
    "Kellogg's",
    "Campbell's",
    "Nestlé",
    "Tyson",
    "Barilla",
    "Whole Foods",
];

// Names and quantities are paired by index
const GROCERIES: &[(&str, &str)] = &[
    ("Milk", "1 gallon"),
    ("Eggs", "12 count"),
    ("Bread", "1 loaf"),
    ("Chicken Breast", "2 lbs"),
    ("Rice", "5 lbs"),
    ("Pasta", "16 oz"),
    ("Tomato Sauce", "24 oz"),
    ("Beans", "15 oz can"),
    ("Cereal", "18 oz box"),
    ("Yogurt", "32 oz"),
    ("Apple Juice", "64 fl oz"),
    ("Cheese", "8 oz"),
    ("Ground Beef", "1 lb"),
    ("Salmon", "1 lb"),
    ("Spinach", "10 oz bag"),
    ("Bell Peppers", "3 count"),
    ("Onions", "2 lb bag"),
    ("Garlic", "1 bulb"),
    ("Potatoes", "5 lb bag"),
    ("Carrots", "2 lb bag"),
    ("Bananas", "1 bunch"),
    ("Apples", "6 count"),
    ("Oranges", "4 count"),
    ("Strawberries", "1 pint"),
    ("Blueberries", "6 oz"),
    ("Almonds", "12 oz bag"),
    ("Peanut Butter", "16 oz jar"),
    ("Jelly", "12 oz jar"),
    ("Flour", "5 lb bag"),
    ("Sugar", "4 lb bag"),
];

/// Generate `count` demo items relative to `today`
///
/// About 60% are fresh (20-49 days out), 25% expiring (1-6 days out) and
/// the rest expired (1-10 days ago). The same seed always yields the same
/// pantry, including ids.
#[must_use]
pub fn demo_pantry(count: usize, seed: u64, today: NaiveDate) -> Vec<PantryEntry> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    (0..count)
        .map(|index| {
            let (name, quantity) = GROCERIES[index % GROCERIES.len()];
            let brand = BRANDS.choose(&mut rng).copied().unwrap_or_default();

            let roll: f64 = rng.gen();
            let offset_days = if roll < 0.6 {
                rng.gen_range(20..50)
            } else if roll < 0.85 {
                rng.gen_range(1..7)
            } else {
                -rng.gen_range(1..11)
            };

            PantryEntry {
                id: Uuid::from_u128(rng.gen()).to_string(),
                name: name.to_owned(),
                brand: brand.to_owned(),
                quantity: quantity.to_owned(),
                expiration_date: today + Duration::days(offset_days),
                selected: false,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantrypal_core::models::ExpirationStatus;
    use pantrypal_intelligence::classify;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    #[test]
    fn test_same_seed_same_pantry() {
        assert_eq!(demo_pantry(10, 7, today()), demo_pantry(10, 7, today()));
    }

    #[test]
    fn test_names_follow_catalog_order() {
        let items = demo_pantry(32, 1, today());
        assert_eq!(items[0].name, "Milk");
        assert_eq!(items[29].name, "Sugar");
        assert_eq!(items[30].name, "Milk");
        assert_eq!(items[3].quantity, "2 lbs");
    }

    #[test]
    fn test_offsets_stay_in_status_ranges() {
        for item in demo_pantry(200, 42, today()) {
            let days = (item.expiration_date - today()).num_days();
            match classify(item.expiration_date, today()) {
                ExpirationStatus::Fresh => assert!((20..50).contains(&days)),
                ExpirationStatus::Expiring => assert!((1..7).contains(&days)),
                ExpirationStatus::Expired => assert!((-10..0).contains(&days)),
            }
        }
    }
}
