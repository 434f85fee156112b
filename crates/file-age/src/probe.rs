//! File modification time lookup.

use std::io::ErrorKind;
use std::path::Path;

use chrono::{DateTime, Local, NaiveDateTime};

use crate::error::AgeError;

/// Read a file's last-modification instant in local calendar terms.
///
/// # Errors
///
/// [`AgeError::FileNotFound`] when the path does not exist,
/// [`AgeError::FileAccess`] for any other metadata failure (permissions,
/// I/O errors, platforms without modification timestamps).
pub fn file_modified_time(path: &Path) -> Result<NaiveDateTime, AgeError> {
    let metadata = std::fs::metadata(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => AgeError::FileNotFound(path.display().to_string()),
        _ => AgeError::FileAccess(format!("{}: {err}", path.display())),
    })?;

    let modified = metadata
        .modified()
        .map_err(|err| AgeError::FileAccess(format!("{}: {err}", path.display())))?;

    Ok(DateTime::<Local>::from(modified).naive_local())
}
