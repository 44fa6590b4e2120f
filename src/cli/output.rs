//! Output formatting utilities
//!
//! The comparison path is silent by default; JSON output is opt-in.

use crate::cli::args::OutputFormat;
use crate::evr::Evr;
use serde::Serialize;
use std::cmp::Ordering;
use std::io::{self, Write};

/// Comparison result for display
#[derive(Debug, Clone, Serialize)]
pub struct CompareReport<'a> {
    /// First (left-hand) EVR as parsed
    pub left: &'a Evr,
    /// Second (right-hand) EVR as parsed
    pub right: &'a Evr,
    /// Relation of the first EVR to the second
    pub ordering: &'static str,
}

impl<'a> CompareReport<'a> {
    /// Build a report from the comparator's verdict
    pub fn new(left: &'a Evr, right: &'a Evr, ordering: Ordering) -> Self {
        Self {
            left,
            right,
            ordering: ordering_label(ordering),
        }
    }
}

/// Human-readable label for an ordering, first operand relative to second
pub fn ordering_label(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "older",
        Ordering::Equal => "equal",
        Ordering::Greater => "newer",
    }
}

/// Print the report based on the selected format
pub fn print_output(report: &CompareReport<'_>, format: OutputFormat) -> io::Result<()> {
    match format {
        // Plain mode stays silent; the exit code is the interface
        OutputFormat::Plain => Ok(()),
        OutputFormat::Json => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            let json =
                serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string());
            writeln!(handle, "{}", json)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_labels() {
        assert_eq!(ordering_label(Ordering::Greater), "newer");
        assert_eq!(ordering_label(Ordering::Equal), "equal");
        assert_eq!(ordering_label(Ordering::Less), "older");
    }

    #[test]
    fn test_report_serialization() {
        let left = Evr::parse("1:2.0-1").unwrap();
        let right = Evr::parse("2.0-1").unwrap();
        let report = CompareReport::new(&left, &right, Ordering::Greater);
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"ordering\":\"newer\""));
        assert!(json.contains("\"epoch\":1"));
    }
}
