//! # Validation Issues
//!
//! Every problem a check can detect, built with `thiserror`. The `Display`
//! output of an [`Issue`] is the exact message recorded in the report.
//!
//! None of these are fatal: each is caught where it is detected, converted
//! to a message, and the run continues.

use std::path::PathBuf;

use thiserror::Error;

/// A single validation failure found by one of the checks.
#[derive(Error, Debug)]
pub enum Issue {
    /// A required directory does not exist.
    #[error("Missing required directory: {name}")]
    MissingDirectory { name: String },

    /// A required directory path exists but is some other kind of file.
    #[error("{name} exists but is not a directory")]
    NotADirectory { name: String },

    /// A YAML file could not be parsed.
    #[error("Invalid YAML in {}: {source}", .path.display())]
    InvalidYaml {
        /// Path relative to the repository root.
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// A YAML file could not be read.
    #[error("Error reading {}: {source}", .path.display())]
    ReadFailed {
        /// Path relative to the repository root.
        path: PathBuf,
        source: std::io::Error,
    },

    /// A required file does not exist.
    #[error("Missing required file: {path}")]
    MissingFile { path: String },

    /// The config has no top-level `dahao` section.
    #[error("config.yaml missing 'dahao' section")]
    MissingDahaoSection,

    /// The `dahao` section has no `version` key.
    #[error("config.yaml missing 'dahao.version'")]
    MissingDahaoVersion,

    /// The config has no top-level `organization` section.
    #[error("config.yaml missing 'organization' section")]
    MissingOrganizationSection,

    /// The `organization` section has no `name` key.
    #[error("config.yaml missing 'organization.name'")]
    MissingOrganizationName,

    /// The config could not be loaded or is not a mapping.
    #[error("Error validating config.yaml: {reason}")]
    ConfigUnreadable { reason: String },
}

/// Errors from loading a single YAML document.
#[derive(Error, Debug)]
pub enum YamlLoadError {
    /// The file could not be read as UTF-8 text.
    #[error("{0}")]
    Read(#[from] std::io::Error),

    /// The contents are not valid YAML.
    #[error("{0}")]
    Parse(#[from] serde_yaml::Error),
}

impl YamlLoadError {
    /// Convert into the matching [`Issue`], naming `rel_path`.
    pub fn into_issue(self, rel_path: PathBuf) -> Issue {
        match self {
            YamlLoadError::Read(source) => Issue::ReadFailed {
                path: rel_path,
                source,
            },
            YamlLoadError::Parse(source) => Issue::InvalidYaml {
                path: rel_path,
                source,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_messages() {
        let missing = Issue::MissingDirectory {
            name: "terms".to_string(),
        };
        assert_eq!(missing.to_string(), "Missing required directory: terms");

        let wrong = Issue::NotADirectory {
            name: "tokens".to_string(),
        };
        assert_eq!(wrong.to_string(), "tokens exists but is not a directory");
    }

    #[test]
    fn config_key_messages_are_distinct() {
        let messages = [
            Issue::MissingDahaoSection.to_string(),
            Issue::MissingDahaoVersion.to_string(),
            Issue::MissingOrganizationSection.to_string(),
            Issue::MissingOrganizationName.to_string(),
        ];
        assert_eq!(messages[1], "config.yaml missing 'dahao.version'");
        for (i, a) in messages.iter().enumerate() {
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn parse_error_becomes_invalid_yaml_issue() {
        let err = serde_yaml::from_str::<serde_yaml::Value>("a: {b: 1").unwrap_err();
        let issue = YamlLoadError::Parse(err).into_issue(PathBuf::from("terms/x.yaml"));
        assert!(matches!(issue, Issue::InvalidYaml { .. }));
        assert!(issue.to_string().starts_with("Invalid YAML in terms/x.yaml: "));
    }

    #[test]
    fn read_error_becomes_read_failed_issue() {
        let err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let issue = YamlLoadError::Read(err).into_issue(PathBuf::from("a.yml"));
        assert_eq!(issue.to_string(), "Error reading a.yml: denied");
    }
}
