//! # dahao-validate entry point
//!
//! Parses command-line arguments, initialises tracing, and runs the
//! structure validation.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use dahao_cli::validate::{run_validate, ValidateArgs};

/// DAHAO structure validator.
///
/// Checks required directories and files, YAML syntax, and the keys of
/// `.dahao/config.yaml` in a DAHAO template repository.
#[derive(Parser, Debug)]
#[command(name = "dahao-validate", version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging on stderr. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(flatten)]
    validate: ValidateArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("dahao-validate v{} starting", env!("CARGO_PKG_VERSION"));

    match run_validate(&cli.validate) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
