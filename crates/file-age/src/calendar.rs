//! Calendar-aware date arithmetic.
//!
//! Provides pure functions for shifting an instant by whole months or years
//! in local calendar terms. All functions take and return immutable
//! [`NaiveDateTime`] values — there is no hidden broken-down-time state, and
//! no system clock access. Normalization (month carries into years, clamping
//! the day-of-month to the target month's length) is explicit.
//!
//! # Supported Range
//!
//! Results whose year falls outside [`MIN_YEAR`]..=[`MAX_YEAR`] are rejected
//! as [`AgeError::Unrepresentable`] rather than wrapped or clamped.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::error::AgeError;

/// Earliest year a shifted result may land in.
pub const MIN_YEAR: i32 = 0;
/// Latest year a shifted result may land in.
pub const MAX_YEAR: i32 = 3000;

/// Beyond this magnitude, year shifts are decomposed into bounded steps.
const DIRECT_YEAR_LIMIT: i64 = 100;
/// Step size used when decomposing a large year shift.
const YEAR_STEP: i64 = 50;

/// Check whether a year is a leap year.
///
/// Gregorian rule: divisible by 4 and not by 100, unless also divisible
/// by 400.
///
/// # Examples
///
/// ```
/// use file_age_core::calendar::is_leap_year;
///
/// assert!(is_leap_year(2000));
/// assert!(!is_leap_year(1900));
/// assert!(is_leap_year(2024));
/// ```
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a month of a given year, or `None` for a month
/// outside 1–12. February accounts for leap years.
pub fn days_in_month(month: u32, year: i32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => Some(if is_leap_year(year) { 29 } else { 28 }),
        _ => None,
    }
}

/// Add `delta` months to an instant (negative `delta` subtracts).
///
/// Month overflow and underflow carry into the year field, and the
/// day-of-month is clamped to the target month's actual length, so
/// Jan 31 + 1 month is Feb 28 (or Feb 29 in a leap year), never Mar 3.
/// The time-of-day is preserved. `delta == 0` returns the input unchanged.
///
/// # Errors
///
/// Returns [`AgeError::Unrepresentable`] if the resulting year falls
/// outside the supported range.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use file_age_core::calendar::add_months;
///
/// let jan31 = NaiveDate::from_ymd_opt(2023, 1, 31)
///     .unwrap()
///     .and_hms_opt(12, 0, 0)
///     .unwrap();
/// let shifted = add_months(jan31, 1).unwrap();
/// assert_eq!(shifted.to_string(), "2023-02-28 12:00:00");
/// ```
pub fn add_months(instant: NaiveDateTime, delta: i64) -> Result<NaiveDateTime, AgeError> {
    if delta == 0 {
        return Ok(instant);
    }

    // Work in zero-based month counts so the carry into years is a plain
    // euclidean division (month 13 → next year, month 0 → previous year).
    let total = i64::from(instant.year()) * 12 + i64::from(instant.month0()) + delta;
    let year = total.div_euclid(12);
    let month = total.rem_euclid(12) as u32 + 1;

    if year < i64::from(MIN_YEAR) || year > i64::from(MAX_YEAR) {
        return Err(AgeError::Unrepresentable(format!(
            "shifting {} by {delta} months lands in year {year}",
            instant.date()
        )));
    }
    let year = year as i32;

    let max_day = days_in_month(month, year).ok_or_else(|| {
        AgeError::Unrepresentable(format!("month {month} out of range after normalization"))
    })?;
    let day = instant.day().min(max_day);

    NaiveDate::from_ymd_opt(year, month, day)
        .map(|date| date.and_time(instant.time()))
        .ok_or_else(|| {
            AgeError::Unrepresentable(format!("{year:04}-{month:02}-{day:02} is not a valid date"))
        })
}

/// Add `delta` years to an instant (negative `delta` subtracts).
///
/// Feb 29 on the source date maps to Feb 28 when the target year is not a
/// leap year. Shifts beyond 100 years are decomposed into steps of 50 so no
/// single jump strays far from the source date; any intermediate failure
/// aborts the decomposition immediately.
///
/// # Errors
///
/// Returns [`AgeError::Unrepresentable`] if the resulting year (or any
/// intermediate year during decomposition) falls outside the supported
/// range.
pub fn add_years(instant: NaiveDateTime, delta: i64) -> Result<NaiveDateTime, AgeError> {
    if delta.abs() <= DIRECT_YEAR_LIMIT {
        return add_years_direct(instant, delta);
    }

    let mut current = instant;
    let mut remaining = delta;
    while remaining != 0 {
        let step = remaining.clamp(-YEAR_STEP, YEAR_STEP);
        current = add_years_direct(current, step)?;
        remaining -= step;
    }
    Ok(current)
}

/// Single bounded year shift.
fn add_years_direct(instant: NaiveDateTime, delta: i64) -> Result<NaiveDateTime, AgeError> {
    if delta == 0 {
        return Ok(instant);
    }

    let year = i64::from(instant.year()) + delta;
    if year < i64::from(MIN_YEAR) || year > i64::from(MAX_YEAR) {
        return Err(AgeError::Unrepresentable(format!(
            "shifting {} by {delta} years lands in year {year}",
            instant.date()
        )));
    }
    let year = year as i32;

    let month = instant.month();
    let mut day = instant.day();
    if month == 2 && day == 29 && !is_leap_year(year) {
        day = 28;
    }

    NaiveDate::from_ymd_opt(year, month, day)
        .map(|date| date.and_time(instant.time()))
        .ok_or_else(|| {
            AgeError::Unrepresentable(format!("{year:04}-{month:02}-{day:02} is not a valid date"))
        })
}

// ── Tests ───────────────────────────────────────────────────────────────────
