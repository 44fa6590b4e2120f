//! evrcmp - RPM EVR comparison library
//!
//! This library provides parsing and ordering of RPM-style
//! `[epoch:]version[-release]` strings, bit-compatible with rpm's
//! `labelCompare`.
//!
//! # Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`commands`]: Command handlers
//! - [`compare`]: The rpmvercmp segment comparison algorithm
//! - [`error`]: Error types
//! - [`evr`]: The EVR domain type and parser

pub mod cli;
pub mod commands;
pub mod compare;
pub mod error;
pub mod evr;

pub use compare::{compare_evr, rpmvercmp};
pub use error::{AppError, ParseError, Result};
pub use evr::Evr;
