//! # file-age
//!
//! Calendar-aware file age verification.
//!
//! Determines whether a file's last-modification timestamp is older than a
//! caller-specified age threshold — days, weeks, or a months/years
//! combination, defaulting to six calendar months. Month and year
//! subtraction is calendar-correct (leap years, variable month lengths,
//! day-of-month clamping) and guarded against overflow and out-of-range
//! dates. The "now" anchor is injected by the caller, keeping resolution
//! deterministic under test.
//!
//! ## Modules
//!
//! - [`calendar`] — leap-year test, days-in-month lookup, month/year shifts
//! - [`threshold`] — threshold spec, reference mode, target-instant resolution
//! - [`options`] — validation of raw threshold options
//! - [`probe`] — file modification time lookup
//! - [`decision`] — file-vs-target comparison and verdict
//! - [`error`] — error types

pub mod calendar;
pub mod decision;
pub mod error;
pub mod options;
pub mod probe;
pub mod threshold;

pub use calendar::{add_months, add_years, days_in_month, is_leap_year};
pub use decision::{decide, Outcome, Verdict};
pub use error::AgeError;
pub use options::{validate, RawOptions};
pub use probe::file_modified_time;
pub use threshold::{resolve, ReferenceMode, ThresholdSpec, DEFAULT_MONTHS};
