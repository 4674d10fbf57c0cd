// ABOUTME: Integration tests for expiration classification
// ABOUTME: Covers the inclusive expiring window and read-time reclassification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PantryPal

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{Duration, TimeZone, Utc};
use common::{days_from_today, entry, today};
use pantrypal::pantry::PantryStore;
use pantrypal_core::models::ExpirationStatus;
use pantrypal_intelligence::{classify, classify_instant, days_until, days_until_instant};

#[test]
fn test_window_boundaries() {
    assert_eq!(classify(days_from_today(-1), today()), ExpirationStatus::Expired);
    assert_eq!(classify(today(), today()), ExpirationStatus::Expiring);
    assert_eq!(classify(days_from_today(7), today()), ExpirationStatus::Expiring);
    assert_eq!(classify(days_from_today(8), today()), ExpirationStatus::Fresh);
}

#[test]
fn test_classification_matches_day_delta_everywhere() {
    for offset in -30..=30 {
        let status = classify(days_from_today(offset), today());
        let expected = if offset < 0 {
            ExpirationStatus::Expired
        } else if offset <= 7 {
            ExpirationStatus::Expiring
        } else {
            ExpirationStatus::Fresh
        };
        assert_eq!(status, expected, "offset {offset}");
        assert_eq!(days_until(days_from_today(offset), today()), offset);
    }
}

#[test]
fn test_instant_classification_uses_whole_days() {
    let now = Utc.with_ymd_and_hms(2025, 3, 14, 18, 0, 0).unwrap();
    assert_eq!(
        classify_instant(now - Duration::hours(1), now),
        ExpirationStatus::Expired
    );
    assert_eq!(
        classify_instant(now + Duration::days(7) + Duration::hours(23), now),
        ExpirationStatus::Expiring
    );
    assert_eq!(
        classify_instant(now + Duration::days(8), now),
        ExpirationStatus::Fresh
    );
}

#[test]
fn test_instant_window_runs_until_the_eighth_day() {
    let now = Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap();
    let last_expiring = now + Duration::days(8) - Duration::seconds(1);

    assert_eq!(days_until_instant(last_expiring, now), 7);
    assert_eq!(classify_instant(last_expiring, now), ExpirationStatus::Expiring);
    assert_eq!(
        classify_instant(last_expiring + Duration::seconds(1), now),
        ExpirationStatus::Fresh
    );
    assert_eq!(days_until_instant(now - Duration::minutes(1), now), -1);
}

#[test]
fn test_status_is_recomputed_for_each_day() {
    let pantry = PantryStore::from_entries(vec![entry("milk", "Milk", 8)]);

    let status_on = |day| pantry.view(day)[0].status;
    assert_eq!(status_on(today()), ExpirationStatus::Fresh);
    assert_eq!(status_on(days_from_today(1)), ExpirationStatus::Expiring);
    assert_eq!(status_on(days_from_today(8)), ExpirationStatus::Expiring);
    assert_eq!(status_on(days_from_today(9)), ExpirationStatus::Expired);
}
