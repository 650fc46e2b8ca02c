//! # uic CLI Entry Point
//!
//! Parses arguments, sets up tracing, and dispatches to the check command.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use uic_cli::check::{run_check, CheckArgs};

/// Validate UIC rolling stock numbers and compute their check digits.
///
/// Prints `<checksum> : <identifier>` for each number that passes. With no
/// identifiers, runs the built-in reference corpus as a smoke test.
#[derive(Parser, Debug)]
#[command(name = "uic", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(flatten)]
    check: CheckArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // An explicit RUST_LOG wins over the verbosity flag.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "uic CLI starting");

    match run_check(&cli.check) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
