//! Rotation arithmetic.
//!
//! Every group advances one slot order per elapsed week, counted from the
//! Monday of the anchor week. The functions here are pure and total over
//! every date `chrono` can represent.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::config::SLOT_COUNT;

/// Whole weeks from the anchor Monday to `date`, floored.
///
/// Negative for dates before the anchor week: the Sunday just before the
/// anchor is week `-1`, not week `0`.
///
/// # Example
///
/// ```
/// use shift_rota::rotation::weeks_passed;
/// use chrono::NaiveDate;
///
/// let anchor = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// assert_eq!(weeks_passed(anchor, NaiveDate::from_ymd_opt(2024, 1, 7).unwrap()), 0);
/// assert_eq!(weeks_passed(anchor, NaiveDate::from_ymd_opt(2024, 1, 8).unwrap()), 1);
/// assert_eq!(weeks_passed(anchor, NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()), -1);
/// ```
pub fn weeks_passed(anchor_week_start: NaiveDate, date: NaiveDate) -> i64 {
    date.signed_duration_since(anchor_week_start)
        .num_days()
        .div_euclid(7)
}

/// Applies forward rotation to an anchor order, returning a value in `0..=3`.
///
/// `rem_euclid` keeps the result non-negative when `weeks_passed` is
/// negative; a plain `%` would not.
pub fn rotate(anchor_order: u8, weeks_passed: i64) -> u8 {
    let raw = i64::from(anchor_order) + weeks_passed;
    // bounded by SLOT_COUNT, cannot truncate
    raw.rem_euclid(SLOT_COUNT as i64) as u8
}

/// Maps an instant to the plant's calendar day.
///
/// The day is taken in the plant's reference zone, never the host's local
/// zone, so a deployment in another zone resolves the same day.
pub fn plant_date(instant: DateTime<Utc>, zone: Tz) -> NaiveDate {
    instant.with_timezone(&zone).date_naive()
}
