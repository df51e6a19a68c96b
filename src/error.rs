//! Crate error type.

use thiserror::Error;

use crate::validation::ValidationError;

/// Convenience alias for results returned by this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by simulation, policy parsing and export.
#[derive(Debug, Error)]
pub enum Error {
    /// The process list failed validation.
    #[error("invalid input: {}", summarize(.0))]
    InvalidInput(Vec<ValidationError>),
    /// A policy selector did not name a known policy.
    #[error("unknown scheduling policy: {0}")]
    UnknownPolicy(String),
    /// Round-robin quantum must be positive.
    #[error("time quantum must be positive, got {0}")]
    InvalidQuantum(i64),
    /// Attempted to export an empty process list.
    #[error("no processes to export")]
    EmptyExport,
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl Error {
    /// Validation errors carried by [`Error::InvalidInput`], if any.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Error::InvalidInput(errors) => errors,
            _ => &[],
        }
    }
}
