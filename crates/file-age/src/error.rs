//! Error types for file-age operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgeError {
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("invalid parameter value: {0}")]
    InvalidValue(String),

    #[error("invalid parameter combination: {0}")]
    InvalidCombination(String),

    #[error("unrepresentable date: {0}")]
    Unrepresentable(String),

    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("cannot access file: {0}")]
    FileAccess(String),
}

pub type Result<T> = std::result::Result<T, AgeError>;
