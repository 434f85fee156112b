//! Threshold option validation.
//!
//! Turns the raw string-valued options collected by the command line into a
//! validated ([`ThresholdSpec`], [`ReferenceMode`]) pair, or reports which
//! rule was violated. Validation is a pure function of the option set and
//! fails closed: any malformed or conflicting input is rejected before the
//! filesystem is touched.
//!
//! Value errors surface before combination errors, matching the order in
//! which a user would fix them — first each option must hold a sane number,
//! then the set as a whole must be coherent.

use crate::error::AgeError;
use crate::threshold::{ReferenceMode, ThresholdSpec};

/// Upper bound for `--days` (roughly 1000 years).
pub const MAX_DAYS: i64 = 365_000;
/// Upper bound for `--weeks` (roughly 1000 years).
pub const MAX_WEEKS: i64 = 52_000;
/// Upper bound for `--months` when given alone (roughly 1000 years).
pub const MAX_MONTHS: i64 = 12_000;
/// Upper bound for `--years`.
pub const MAX_YEARS: i64 = 1_000;
/// Upper bound for `--months` when `--years` is also present.
pub const MAX_MONTHS_WITH_YEARS: i64 = 11;

/// Threshold options exactly as tokenized from the command line.
///
/// Values are kept as raw strings so numeric validation (full parse, no
/// trailing garbage, magnitude bound) stays in one place and is testable
/// without a process boundary.
#[derive(Debug, Clone, Default)]
pub struct RawOptions {
    pub days: Option<String>,
    pub weeks: Option<String>,
    pub months: Option<String>,
    pub years: Option<String>,
    pub exact: bool,
}

/// Validate a raw option set into a threshold spec and reference mode.
///
/// # Rules
///
/// - `--days` and `--weeks` each exclude every other threshold option.
/// - `--months` and `--years` may coexist; months is capped at 11 when
///   years is also present (a twelfth month would roll into a year).
/// - Every value must parse in full as a positive integer within its
///   magnitude bound.
/// - `--exact` selects [`ReferenceMode::ExactNow`] and never conflicts.
/// - No threshold option at all yields [`ThresholdSpec::Default`].
///
/// # Errors
///
/// [`AgeError::InvalidValue`] for a malformed or out-of-range number,
/// [`AgeError::InvalidCombination`] for a conflicting option set.
pub fn validate(raw: &RawOptions) -> Result<(ThresholdSpec, ReferenceMode), AgeError> {
    let days = parse_count("days", raw.days.as_deref(), MAX_DAYS)?;
    let weeks = parse_count("weeks", raw.weeks.as_deref(), MAX_WEEKS)?;
    let months = parse_count("months", raw.months.as_deref(), MAX_MONTHS)?;
    let years = parse_count("years", raw.years.as_deref(), MAX_YEARS)?;

    let mode = if raw.exact {
        ReferenceMode::ExactNow
    } else {
        ReferenceMode::EndOfPreviousDay
    };

    if days.is_some() && (weeks.is_some() || months.is_some() || years.is_some()) {
        return Err(AgeError::InvalidCombination(
            "--days excludes all other threshold options".into(),
        ));
    }
    if weeks.is_some() && (months.is_some() || years.is_some()) {
        return Err(AgeError::InvalidCombination(
            "--weeks excludes all other threshold options".into(),
        ));
    }
    if let (Some(months), Some(_)) = (months, years) {
        if months > MAX_MONTHS_WITH_YEARS {
            return Err(AgeError::InvalidCombination(format!(
                "--months is capped at {MAX_MONTHS_WITH_YEARS} when combined with --years"
            )));
        }
    }

    let spec = if let Some(days) = days {
        ThresholdSpec::Days(days)
    } else if let Some(weeks) = weeks {
        ThresholdSpec::Weeks(weeks)
    } else if months.is_some() || years.is_some() {
        ThresholdSpec::MonthsYears {
            months: months.unwrap_or(0),
            years: years.unwrap_or(0),
        }
    } else {
        ThresholdSpec::Default
    };

    Ok((spec, mode))
}

/// Parse one option value as a bounded positive integer.
fn parse_count(name: &str, value: Option<&str>, max: i64) -> Result<Option<i64>, AgeError> {
    let Some(value) = value else {
        return Ok(None);
    };

    let count: i64 = value.parse().map_err(|_| {
        AgeError::InvalidValue(format!("{name} must be a positive integer, got '{value}'"))
    })?;
    if count <= 0 {
        return Err(AgeError::InvalidValue(format!(
            "{name} must be positive, got {count}"
        )));
    }
    if count > max {
        return Err(AgeError::InvalidValue(format!(
            "{name} must be at most {max}, got {count}"
        )));
    }
    Ok(Some(count))
}

// ── Tests ───────────────────────────────────────────────────────────────────
