//! Age threshold resolution.
//!
//! Combines a reference mode and a threshold specification into the single
//! target instant a file's modification time is compared against. The "now"
//! anchor is always passed in by the caller — nothing here reads the system
//! clock — so resolution is deterministic under test.

use chrono::{Duration, NaiveDateTime};
use serde::Serialize;

use crate::calendar::{add_months, add_years};
use crate::error::AgeError;

/// Months subtracted when no threshold is specified.
pub const DEFAULT_MONTHS: i64 = 6;
/// Seconds in a calendar day.
pub const SECONDS_PER_DAY: i64 = 86_400;
/// Days in a week.
pub const DAYS_PER_WEEK: i64 = 7;

/// A caller-specified age threshold.
///
/// Exactly one variant applies per invocation. `MonthsYears` carries both
/// fields so a combined `--months`/`--years` request subtracts years first,
/// then months; a field of zero means that unit was not requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ThresholdSpec {
    /// Fixed number of days.
    Days(i64),
    /// Fixed number of weeks.
    Weeks(i64),
    /// Calendar months and/or years.
    MonthsYears { months: i64, years: i64 },
    /// No threshold given: six calendar months.
    Default,
}

/// Which instant the threshold is subtracted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ReferenceMode {
    /// 23:59:59 on the calendar day before `now`.
    #[default]
    EndOfPreviousDay,
    /// `now` verbatim.
    ExactNow,
}

/// Resolve a reference mode and threshold into the target instant.
///
/// # Arguments
///
/// * `mode` — Which anchor instant the threshold is subtracted from
/// * `spec` — The threshold to subtract
/// * `now` — The current instant in local calendar terms, injected by
///   the caller
///
/// # Errors
///
/// Returns [`AgeError::Unrepresentable`] if the anchor cannot be computed,
/// a day/week multiplication would overflow, or the month/year shift lands
/// outside the supported date range. Overflow is detected before any
/// subtraction happens — the result never wraps.
pub fn resolve(
    mode: ReferenceMode,
    spec: &ThresholdSpec,
    now: NaiveDateTime,
) -> Result<NaiveDateTime, AgeError> {
    let anchor = anchor_instant(mode, now)?;

    match *spec {
        ThresholdSpec::Days(days) => {
            let seconds = days.checked_mul(SECONDS_PER_DAY).ok_or_else(|| {
                AgeError::Unrepresentable(format!("{days} days overflows second arithmetic"))
            })?;
            subtract_seconds(anchor, seconds)
        }
        ThresholdSpec::Weeks(weeks) => {
            let seconds = weeks
                .checked_mul(DAYS_PER_WEEK)
                .and_then(|days| days.checked_mul(SECONDS_PER_DAY))
                .ok_or_else(|| {
                    AgeError::Unrepresentable(format!("{weeks} weeks overflows second arithmetic"))
                })?;
            subtract_seconds(anchor, seconds)
        }
        ThresholdSpec::MonthsYears { months, years } => {
            // Years first: the base year is established before any
            // month-level day clamping occurs.
            let mut target = anchor;
            if years > 0 {
                target = add_years(target, -years)?;
            }
            if months > 0 {
                target = add_months(target, -months)?;
            }
            Ok(target)
        }
        ThresholdSpec::Default => add_months(anchor, -DEFAULT_MONTHS),
    }
}

/// Compute the anchor instant for a reference mode.
fn anchor_instant(mode: ReferenceMode, now: NaiveDateTime) -> Result<NaiveDateTime, AgeError> {
    match mode {
        ReferenceMode::ExactNow => Ok(now),
        ReferenceMode::EndOfPreviousDay => now
            .date()
            .pred_opt()
            .and_then(|date| date.and_hms_opt(23, 59, 59))
            .ok_or_else(|| {
                AgeError::Unrepresentable(format!("no calendar day precedes {}", now.date()))
            }),
    }
}

/// Checked subtraction of whole seconds from an instant.
fn subtract_seconds(anchor: NaiveDateTime, seconds: i64) -> Result<NaiveDateTime, AgeError> {
    Duration::try_seconds(seconds)
        .and_then(|delta| anchor.checked_sub_signed(delta))
        .ok_or_else(|| {
            AgeError::Unrepresentable(format!("subtracting {seconds}s from {anchor} overflows"))
        })
}

// ── Tests ───────────────────────────────────────────────────────────────────
