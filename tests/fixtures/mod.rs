//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Every filename a full run must produce.
pub const EXPECTED_FILES: [&str; 9] = [
    "nebula-x-mark.svg",
    "nebula-x-splash.svg",
    "nebula-x-wordmark.svg",
    "nebula-x-logo-light.svg",
    "nebula-x-logo-dark.svg",
    "nebula-x-logo-ornate-light.svg",
    "nebula-x-logo-ornate-dark.svg",
    "space-bg-pattern.svg",
    "favicon.svg",
];

/// Path to the nebulagen binary
pub fn nebulagen_bin() -> &'static str {
    env!("CARGO_BIN_EXE_nebulagen")
}

/// Runs the binary with `args` from inside `cwd`.
pub fn run_in(cwd: &Path, args: &[&str]) -> Output {
    Command::new(nebulagen_bin())
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

/// Asserts a successful exit, showing stderr otherwise.
pub fn assert_success(output: &Output) {
    assert_eq!(
        output.status.code(),
        Some(0),
        "Command should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Writes a config file into a fresh temp directory.
pub fn temp_config(content: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("nebulagen.toml");
    fs::write(&path, content).expect("Failed to write config file");
    (path, temp_dir)
}

/// Reads every expected file from `dir`, in `EXPECTED_FILES` order.
pub fn read_all(dir: &Path) -> Vec<String> {
    EXPECTED_FILES
        .iter()
        .map(|name| {
            fs::read_to_string(dir.join(name))
                .unwrap_or_else(|e| panic!("Failed to read {name}: {e}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_expected_files_unique() {
        let mut names = EXPECTED_FILES.to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), EXPECTED_FILES.len());
    }

    #[test]
    fn test_fixture_temp_config() {
        let (path, _temp) = temp_config("output_dir = \"x\"\n");
        assert_eq!(fs::read_to_string(path).unwrap(), "output_dir = \"x\"\n");
    }
}
