//! # Repository Layout
//!
//! The fixed set of paths a DAHAO template repository must contain, and the
//! resolution of the repository root from a user-supplied path.

use std::path::{Path, PathBuf};

/// Directory name of the template inside a parent checkout.
pub const TEMPLATE_DIR_NAME: &str = "dahao-template";

/// Top-level directories every repository must contain, in check order.
pub const REQUIRED_DIRS: [&str; 5] = [".dahao", "constitution", "terms", "governance", "tokens"];

/// Files every repository must contain, relative to the root, in check order.
pub const REQUIRED_FILES: [&str; 4] = [
    ".dahao/config.yaml",
    ".dahao/version",
    "constitution/manifest.yaml",
    "tokens/economics.yaml",
];

/// The configuration file whose keys are checked.
pub const CONFIG_FILE: &str = ".dahao/config.yaml";

/// File extensions treated as YAML. Matching is case-sensitive.
pub const YAML_EXTENSIONS: [&str; 2] = ["yaml", "yml"];

/// Resolve the repository root to validate.
///
/// When the last segment of `path` is not [`TEMPLATE_DIR_NAME`] and a
/// `dahao-template/` directory exists directly beneath it, the template
/// directory is returned instead. This lets the validator be run from a
/// parent checkout.
pub fn resolve_repo_root(path: &Path) -> PathBuf {
    let is_template = path.file_name().and_then(|n| n.to_str()) == Some(TEMPLATE_DIR_NAME);
    if !is_template {
        let nested = path.join(TEMPLATE_DIR_NAME);
        if nested.is_dir() {
            tracing::debug!(
                from = %path.display(),
                to = %nested.display(),
                "descending into template directory"
            );
            return nested;
        }
    }
    path.to_path_buf()
}

/// True if `path` has one of the [`YAML_EXTENSIONS`].
pub fn has_yaml_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| YAML_EXTENSIONS.contains(&ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_descends_into_template_dir() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join(TEMPLATE_DIR_NAME);
        std::fs::create_dir_all(&template).unwrap();

        assert_eq!(resolve_repo_root(dir.path()), template);
    }

    #[test]
    fn resolve_keeps_path_without_template_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(resolve_repo_root(dir.path()), dir.path());
    }

    #[test]
    fn resolve_does_not_descend_twice() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join(TEMPLATE_DIR_NAME);
        std::fs::create_dir_all(template.join(TEMPLATE_DIR_NAME)).unwrap();

        assert_eq!(resolve_repo_root(&template), template);
    }

    #[test]
    fn resolve_ignores_template_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(TEMPLATE_DIR_NAME), b"not a dir").unwrap();

        assert_eq!(resolve_repo_root(dir.path()), dir.path());
    }

    #[test]
    fn yaml_extension_matching() {
        assert!(has_yaml_extension(Path::new("a/b.yaml")));
        assert!(has_yaml_extension(Path::new("c.yml")));
        assert!(!has_yaml_extension(Path::new("c.YAML")));
        assert!(!has_yaml_extension(Path::new("version")));
        assert!(!has_yaml_extension(Path::new("notes.yaml.bak")));
    }
}
