//! CLI argument definitions using clap derive
//!
//! Defines the two positional EVR arguments and the output options.

use clap::{Parser, ValueEnum};

/// RPM EVR comparison tool
///
/// Compares two `[epoch:]version[-release]` strings with rpm's ordering
/// rules. The exit code reports the verdict: 255 when the first argument
/// is newer, 0 when both are equal, 1 when the second argument is newer.
#[derive(Parser, Debug)]
#[command(name = "evrcmp")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// First EVR string ([epoch:]version[-release])
    #[arg(value_name = "EVR1")]
    pub evr1: String,

    /// Second EVR string ([epoch:]version[-release])
    #[arg(value_name = "EVR2")]
    pub evr2: String,

    /// Enable verbose output (logs which EVR is newer)
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

/// Output format for the comparison result
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// No output; the exit code carries the verdict
    Plain,
    /// JSON document with both parsed EVRs and the ordering
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_two_positionals_required() {
        assert!(Cli::try_parse_from(["evrcmp", "1.0"]).is_err());
        assert!(Cli::try_parse_from(["evrcmp", "1.0", "2.0", "3.0"]).is_err());
        let cli = Cli::try_parse_from(["evrcmp", "1.0", "2.0"]).unwrap();
        assert_eq!(cli.evr1, "1.0");
        assert_eq!(cli.evr2, "2.0");
        assert_eq!(cli.format, OutputFormat::Plain);
    }
}
