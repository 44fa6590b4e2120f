//! evrcmp - RPM EVR comparison tool
//!
//! Compares two `[epoch:]version[-release]` strings using rpm's ordering
//! rules and reports the verdict through the process exit code.

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use evrcmp::cli::args::Cli;
use evrcmp::commands::run_compare;
use evrcmp::error::AppError;
use std::cmp::Ordering;

fn main() {
    // Parse CLI arguments; any argv problem becomes a usage message on
    // stdout and exit status 1 (the historical interface of this tool)
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err)
            if matches!(
                err.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            ) =>
        {
            let _ = err.print();
            return;
        }
        Err(_) => {
            println!("{}", Cli::command().render_usage());
            std::process::exit(1);
        }
    };

    // Initialize logging; --verbose raises the default filter to debug
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();

    match run_compare(&cli.evr1, &cli.evr2, cli.format) {
        Ok(ordering) => std::process::exit(exit_code(ordering)),
        Err(e) => {
            log::error!("{}", e);
            print_error(&e);
            std::process::exit(1);
        }
    }
}

/// Map the comparison verdict onto the tool's exit-code convention
///
/// `-1` (255 on POSIX) when the first EVR is newer, `0` when equal, `1`
/// when the second EVR is newer. The negative code is kept for
/// compatibility with shell scripts written against the original tool.
fn exit_code(ordering: Ordering) -> i32 {
    match ordering {
        Ordering::Greater => -1,
        Ordering::Equal => 0,
        Ordering::Less => 1,
    }
}

fn print_error(err: &AppError) {
    eprintln!("Error: {}", err);

    if let AppError::Parse(_) = err {
        eprintln!();
        eprintln!("Hint: EVR strings look like [epoch:]version[-release],");
        eprintln!("      e.g. 1.2.3, 1.2.3-4.fc38, or 2:1.2.3-4.");
    }
}
