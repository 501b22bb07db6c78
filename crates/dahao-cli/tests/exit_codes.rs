//! Runs the compiled `dahao-validate` binary and checks its exit codes and
//! stdout.

use std::path::Path;
use std::process::Command;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_dahao-validate"))
}

fn write(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, contents).unwrap();
}

fn valid_repo(root: &Path) {
    for name in dahao_core::layout::REQUIRED_DIRS {
        std::fs::create_dir_all(root.join(name)).unwrap();
    }
    write(
        root,
        ".dahao/config.yaml",
        "dahao:\n  version: '1'\norganization:\n  name: Test\n",
    );
    write(root, ".dahao/version", "1\n");
    write(root, "constitution/manifest.yaml", "principles: []\n");
    write(root, "tokens/economics.yaml", "supply: 10\n");
}

#[test]
fn empty_directory_exits_1_and_lists_errors() {
    let dir = tempfile::tempdir().unwrap();
    let output = bin().arg(dir.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("🔍 Validating DAHAO structure...\n"));
    assert!(stdout.contains("❌ Validation failed with errors:"));
    assert!(stdout.contains("  - Missing required directory: terms\n"));
    assert!(stdout.contains("  - Missing required file: tokens/economics.yaml\n"));
}

#[test]
fn valid_repo_exits_0() {
    let dir = tempfile::tempdir().unwrap();
    valid_repo(dir.path());
    let output = bin().arg(dir.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("✅ All validation checks passed!"));
}

#[test]
fn defaults_to_current_directory() {
    let dir = tempfile::tempdir().unwrap();
    valid_repo(&dir.path().join("dahao-template"));
    let output = bin().current_dir(dir.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn json_format_prints_only_json() {
    let dir = tempfile::tempdir().unwrap();
    let output = bin()
        .args(["--format", "json"])
        .arg(dir.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["success"], false);
    assert_eq!(value["errors"].as_array().unwrap().len(), 9);
}
