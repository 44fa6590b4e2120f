//! Unified error types for evrcmp
//!
//! This module defines all error types used throughout the application.
//! Uses thiserror for ergonomic error definitions.

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from EVR string parsing
    #[error("Invalid EVR string: {0}")]
    Parse(#[from] ParseError),

    /// IO error (output plumbing)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from parsing an `[epoch:]version[-release]` string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input string was empty
    #[error("empty version string")]
    Empty,

    /// Nothing left for the version component (e.g. "3:" or "3:-1")
    #[error("missing version component")]
    EmptyVersion,

    /// Epoch was present but not an integer
    #[error("non-numeric epoch: '{0}'")]
    InvalidEpoch(String),

    /// Epoch parsed to a negative integer
    #[error("negative epoch: {0}")]
    NegativeEpoch(i64),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
