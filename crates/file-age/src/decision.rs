//! Age verdict.

use chrono::NaiveDateTime;
use serde::Serialize;

/// Whether the file predates the resolved target instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Older,
    NotOlder,
}

/// The result of comparing a file's modification time to the target
/// instant, carrying both instants for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub outcome: Outcome,
    /// The file's last-modification instant.
    pub file_time: NaiveDateTime,
    /// The resolved threshold instant it was compared against.
    pub reference_time: NaiveDateTime,
}

impl Verdict {
    pub fn is_older(&self) -> bool {
        self.outcome == Outcome::Older
    }
}

/// Compare a file instant against the target instant.
///
/// The comparison is strict: a file modified exactly at the target instant
/// is [`Outcome::NotOlder`].
pub fn decide(file_time: NaiveDateTime, reference_time: NaiveDateTime) -> Verdict {
    let outcome = if file_time < reference_time {
        Outcome::Older
    } else {
        Outcome::NotOlder
    };
    Verdict {
        outcome,
        file_time,
        reference_time,
    }
}
