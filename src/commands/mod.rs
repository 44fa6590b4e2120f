//! Command handlers
//!
//! The compare handler orchestrates parsing, comparison, and output.

pub mod compare;

pub use compare::run_compare;
