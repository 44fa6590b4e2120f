//! Compare command implementation
//!
//! Parses both EVR strings and reports their ordering.

use crate::cli::args::OutputFormat;
use crate::cli::output::{print_output, CompareReport};
use crate::compare::compare_evr;
use crate::error::Result;
use crate::evr::Evr;
use std::cmp::Ordering;

/// Execute the comparison
///
/// Returns the ordering of `evr1` relative to `evr2` for the caller to map
/// onto an exit code.
///
/// # Errors
/// Returns `AppError::Parse` when either argument is not a valid EVR
/// string.
pub fn run_compare(evr1: &str, evr2: &str, format: OutputFormat) -> Result<Ordering> {
    let left = Evr::parse(evr1)?;
    let right = Evr::parse(evr2)?;

    let ordering = compare_evr(&left, &right);

    match ordering {
        Ordering::Greater => log::debug!("{} is newer", left),
        Ordering::Less => log::debug!("{} is newer", right),
        Ordering::Equal => log::debug!("{} and {} are equal", left, right),
    }

    let report = CompareReport::new(&left, &right, ordering);
    print_output(&report, format)?;

    Ok(ordering)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_compare_verdicts() {
        let fmt = OutputFormat::Plain;
        assert_eq!(
            run_compare("2:1.5-3", "2:1.5-3", fmt).unwrap(),
            Ordering::Equal
        );
        assert_eq!(
            run_compare("1:1.0-1", "0:99.0-1", fmt).unwrap(),
            Ordering::Greater
        );
        assert_eq!(run_compare("1.0~rc1", "1.0", fmt).unwrap(), Ordering::Less);
    }

    #[test]
    fn test_run_compare_rejects_malformed_input() {
        assert!(run_compare("x:1.0", "1.0", OutputFormat::Plain).is_err());
        assert!(run_compare("1.0", "", OutputFormat::Plain).is_err());
    }
}
