//! # Validator
//!
//! Runs the structure checks against one repository root and keeps the
//! accumulated messages. A validator is single-use: its report only grows
//! and is reset by constructing a new instance.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::checks::{
    check_config_keys, check_directories, check_required_files, check_yaml_syntax, Findings,
};
use crate::report::ValidationReport;

/// Validates the structure of a DAHAO template repository.
#[derive(Debug)]
pub struct Validator {
    repo_path: PathBuf,
    report: ValidationReport,
}

impl Validator {
    /// Create a validator for the repository rooted at `repo_path`.
    pub fn new(repo_path: impl Into<PathBuf>) -> Self {
        Self {
            repo_path: repo_path.into(),
            report: ValidationReport::new(),
        }
    }

    /// Run every check in order and return whether no errors were recorded.
    ///
    /// Checks never gate one another: directories, YAML syntax, required
    /// files and config keys all run even after earlier failures.
    pub fn run(&mut self) -> bool {
        let root = self.repo_path.as_path();
        tracing::debug!(repo_path = %root.display(), "validating repository structure");

        if !root.is_dir() {
            self.report.add_warning(format!(
                "Repository path {} is not a directory",
                root.display()
            ));
        }

        let checks: [fn(&Path) -> Findings; 4] = [
            check_directories,
            check_yaml_syntax,
            check_required_files,
            check_config_keys,
        ];
        for check in checks {
            let findings = check(root);
            self.report.merge(findings.into_report());
        }

        tracing::info!(
            errors = self.report.errors.len(),
            warnings = self.report.warnings.len(),
            "validation finished"
        );
        self.report.is_success()
    }

    /// Print the accumulated errors and warnings to stdout.
    pub fn report(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.report.write_text(&mut out)?;
        out.flush()
    }

    /// The repository root being validated.
    pub fn repo_path(&self) -> &Path {
        &self.repo_path
    }

    /// Errors recorded so far.
    pub fn errors(&self) -> &[String] {
        &self.report.errors
    }

    /// Warnings recorded so far.
    pub fn warnings(&self) -> &[String] {
        &self.report.warnings
    }

    /// The full report.
    pub fn validation_report(&self) -> &ValidationReport {
        &self.report
    }
}
