//! # Validation Report
//!
//! Accumulates the error and warning messages of a validation run and
//! renders them for the console.

use std::io::{self, Write};

use serde::Serialize;

/// Ordered error and warning messages from one validation run.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Validation errors. Any error fails the run.
    pub errors: Vec<String>,
    /// Non-fatal warnings.
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an error.
    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
    }

    /// Add a warning (does not affect success).
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Append another report's messages, preserving order.
    pub fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    /// True when no errors were recorded.
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    /// Render the report as console text.
    ///
    /// Prints the error listing or the success line, then the warning
    /// listing if there are any warnings.
    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.errors.is_empty() {
            writeln!(out, "\n✅ All validation checks passed!")?;
        } else {
            writeln!(out, "\n❌ Validation failed with errors:")?;
            for error in &self.errors {
                writeln!(out, "  - {error}")?;
            }
        }

        if !self.warnings.is_empty() {
            writeln!(out, "\n⚠️  Warnings:")?;
            for warning in &self.warnings {
                writeln!(out, "  - {warning}")?;
            }
        }
        Ok(())
    }
}
