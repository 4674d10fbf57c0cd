// ABOUTME: Expiration classifier mapping a date and a reference "now" to a freshness status
// ABOUTME: Works on calendar days and on exact instants floored to whole days
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PantryPal

use chrono::{DateTime, NaiveDate, Utc};
use pantrypal_core::constants::expiration::EXPIRING_WINDOW_DAYS;
use pantrypal_core::models::ExpirationStatus;

/// Whole days from `today` until `expires_on` (negative once past)
#[must_use]
pub fn days_until(expires_on: NaiveDate, today: NaiveDate) -> i64 {
    expires_on.signed_duration_since(today).num_days()
}

const SECONDS_PER_DAY: i64 = 86_400;

fn classify_days(days_left: i64) -> ExpirationStatus {
    match days_left {
        delta if delta < 0 => ExpirationStatus::Expired,
        delta if delta <= EXPIRING_WINDOW_DAYS => ExpirationStatus::Expiring,
        _ => ExpirationStatus::Fresh,
    }
}

/// Classify a calendar expiration date against `today`
///
/// Expired before today, expiring from today through seven days out, fresh
/// after that. The result is only valid for the given `today`; callers
/// recompute it at read time.
#[must_use]
pub fn classify(expires_on: NaiveDate, today: NaiveDate) -> ExpirationStatus {
    classify_days(days_until(expires_on, today))
}

/// Whole days from `now` until `expires_at`, rounded toward negative infinity
///
/// One second past `now` is day 0; one second before is day -1.
#[must_use]
pub fn days_until_instant(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    expires_at
        .signed_duration_since(now)
        .num_seconds()
        .div_euclid(SECONDS_PER_DAY)
}

/// Classify an exact instant against `now`
///
/// The gap is floored to whole days and then classified like a calendar
/// date, so anything up to (but not including) eight days out is expiring.
#[must_use]
pub fn classify_instant(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> ExpirationStatus {
    classify_days(days_until_instant(expires_at, now))
}
