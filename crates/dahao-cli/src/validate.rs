//! # Validate Command
//!
//! Resolves the repository root, runs the [`Validator`], and prints the
//! report in the requested format.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use serde::Serialize;

use dahao_core::{resolve_repo_root, ValidationReport, Validator};

/// Report format written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable listing.
    #[default]
    Text,
    /// A single JSON object.
    Json,
}

/// Arguments for the validate command.
#[derive(Args, Debug, Default)]
pub struct ValidateArgs {
    /// Repository to validate. Defaults to the current directory.
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Output format for the report.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Execute the validate command.
///
/// Returns exit code: 0 when every check passed, 1 on validation errors.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let requested = match &args.path {
        Some(path) => path.clone(),
        None => std::env::current_dir().context("failed to determine current directory")?,
    };
    let repo_root = resolve_repo_root(&requested);
    tracing::debug!(repo_root = %repo_root.display(), "resolved repository root");

    let (validator, success) = validate_root(&repo_root, args.format)?;
    tracing::debug!(
        success,
        errors = validator.errors().len(),
        "validate command finished"
    );

    Ok(exit_code(success))
}

fn validate_root(repo_root: &Path, format: OutputFormat) -> Result<(Validator, bool)> {
    let mut validator = Validator::new(repo_root);

    match format {
        OutputFormat::Text => {
            println!("🔍 Validating DAHAO structure...");
            let success = validator.run();
            validator.report().context("failed to write report")?;
            Ok((validator, success))
        }
        OutputFormat::Json => {
            let success = validator.run();
            println!("{}", render_json(&validator, success)?);
            Ok((validator, success))
        }
    }
}

/// JSON shape of a finished run: the report plus where it ran and whether
/// it passed.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    repo_path: String,
    success: bool,
    #[serde(flatten)]
    report: &'a ValidationReport,
}

/// Render the outcome of a finished run as pretty JSON.
pub fn render_json(validator: &Validator, success: bool) -> Result<String> {
    let doc = JsonReport {
        repo_path: validator.repo_path().display().to_string(),
        success,
        report: validator.validation_report(),
    };
    serde_json::to_string_pretty(&doc).context("failed to serialize report")
}

fn exit_code(success: bool) -> u8 {
    if success {
        0
    } else {
        1
    }
}
