//! # Structure Checks
//!
//! The four independent checks run by the validator. Each takes the
//! repository root and returns what it found; none of them mutate anything
//! or stop early on a failure.
//!
//! | Check                     | Produces                                       |
//! |---------------------------|------------------------------------------------|
//! | [`check_directories`]     | missing / not-a-directory errors               |
//! | [`check_yaml_syntax`]     | parse and read errors, traversal warnings      |
//! | [`check_required_files`]  | missing file errors                            |
//! | [`check_config_keys`]     | missing key errors, or one config read error   |

use std::path::Path;

use serde_yaml::Value;

use crate::error::Issue;
use crate::layout::{CONFIG_FILE, REQUIRED_DIRS, REQUIRED_FILES};
use crate::report::ValidationReport;
use crate::yaml::{discover_yaml_files, load_yaml};

/// What a single check found.
#[derive(Debug, Default)]
pub struct Findings {
    /// Validation failures, in detection order.
    pub issues: Vec<Issue>,
    /// Non-fatal observations.
    pub warnings: Vec<String>,
}

impl Findings {
    fn from_issues(issues: Vec<Issue>) -> Self {
        Self {
            issues,
            warnings: Vec::new(),
        }
    }

    /// True if the check found neither issues nor warnings.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty() && self.warnings.is_empty()
    }

    /// Convert into report messages.
    pub fn into_report(self) -> ValidationReport {
        ValidationReport {
            errors: self.issues.iter().map(ToString::to_string).collect(),
            warnings: self.warnings,
        }
    }
}

/// Check that every required top-level directory exists and is a directory.
pub fn check_directories(root: &Path) -> Findings {
    let mut issues = Vec::new();
    for name in REQUIRED_DIRS {
        let path = root.join(name);
        if !path.exists() {
            issues.push(Issue::MissingDirectory {
                name: name.to_string(),
            });
        } else if !path.is_dir() {
            issues.push(Issue::NotADirectory {
                name: name.to_string(),
            });
        }
    }
    tracing::debug!(issues = issues.len(), "checked required directories");
    Findings::from_issues(issues)
}

/// Try to parse every YAML file under `root`.
///
/// All files are attempted regardless of earlier failures. Paths in the
/// resulting messages are relative to `root`.
pub fn check_yaml_syntax(root: &Path) -> Findings {
    let discovery = discover_yaml_files(root);
    let mut issues = Vec::new();

    for path in &discovery.files {
        if let Err(e) = load_yaml(path) {
            let rel = path.strip_prefix(root).unwrap_or(path).to_path_buf();
            tracing::debug!(file = %rel.display(), error = %e, "YAML file failed to load");
            issues.push(e.into_issue(rel));
        }
    }

    tracing::debug!(
        files = discovery.files.len(),
        issues = issues.len(),
        "checked YAML syntax"
    );
    Findings {
        issues,
        warnings: discovery.skipped,
    }
}

/// Check that every required file exists.
pub fn check_required_files(root: &Path) -> Findings {
    let issues: Vec<Issue> = REQUIRED_FILES
        .iter()
        .filter(|rel| !root.join(rel).exists())
        .map(|rel| Issue::MissingFile {
            path: rel.to_string(),
        })
        .collect();
    tracing::debug!(issues = issues.len(), "checked required files");
    Findings::from_issues(issues)
}

/// Check the required keys of `.dahao/config.yaml`.
///
/// Skipped silently when the config file is absent, since the required
/// files check already reports that. A config that cannot be loaded, or
/// whose root is not a mapping, yields a single error.
pub fn check_config_keys(root: &Path) -> Findings {
    let config_path = root.join(CONFIG_FILE);
    if !config_path.exists() {
        tracing::debug!("config file absent; skipping key check");
        return Findings::default();
    }

    let config = match load_yaml(&config_path) {
        Ok(v) => v,
        Err(e) => {
            return Findings::from_issues(vec![Issue::ConfigUnreadable {
                reason: e.to_string(),
            }]);
        }
    };

    let issues = config_key_issues(&config);
    tracing::debug!(issues = issues.len(), "checked config keys");
    Findings::from_issues(issues)
}

/// Missing-key issues for an already parsed config document.
///
/// Nested keys are only checked when their section exists. A section that
/// is a string or sequence counts as missing its nested key. A null, boolean
/// or numeric section cannot hold keys at all; it ends the check with the
/// catch-all error, keeping any issues already found.
fn config_key_issues(config: &Value) -> Vec<Issue> {
    let reason = match config {
        Value::Mapping(_) => None,
        Value::Null => Some("the document is empty".to_string()),
        other => Some(format!(
            "expected a mapping at the document root, found {}",
            value_kind(other)
        )),
    };
    if let Some(reason) = reason {
        return vec![Issue::ConfigUnreadable { reason }];
    }

    let mut issues = Vec::new();
    let sections = [
        (
            "dahao",
            "version",
            Issue::MissingDahaoSection,
            Issue::MissingDahaoVersion,
        ),
        (
            "organization",
            "name",
            Issue::MissingOrganizationSection,
            Issue::MissingOrganizationName,
        ),
    ];

    for (section_key, nested_key, missing_section, missing_key) in sections {
        let Some(section) = config.get(section_key) else {
            issues.push(missing_section);
            continue;
        };
        match section {
            Value::Null | Value::Bool(_) | Value::Number(_) => {
                issues.push(Issue::ConfigUnreadable {
                    reason: format!(
                        "'{section_key}' section is {}, not a mapping",
                        value_kind(section)
                    ),
                });
                return issues;
            }
            _ if section.get(nested_key).is_none() => issues.push(missing_key),
            _ => {}
        }
    }

    issues
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
