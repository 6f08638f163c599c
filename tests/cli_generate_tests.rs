//! End-to-end tests for the `nebulagen` binary.

use std::fs;
use tempfile::TempDir;

mod fixtures;
use fixtures::*;

#[test]
fn test_no_arguments_creates_default_directory() {
    let temp = TempDir::new().unwrap();
    let out_dir = temp.path().join("nebula-x-assets");
    assert!(!out_dir.exists());

    let output = run_in(temp.path(), &[]);
    assert_success(&output);

    assert!(out_dir.is_dir(), "Output directory should be created");
    for name in EXPECTED_FILES {
        assert!(out_dir.join(name).is_file(), "Missing {name}");
    }
}

#[test]
fn test_prints_one_line_per_file() {
    let temp = TempDir::new().unwrap();

    let output = run_in(temp.path(), &[]);
    assert_success(&output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    let expected: Vec<String> = EXPECTED_FILES
        .iter()
        .map(|name| format!("Created {name}"))
        .collect();
    assert_eq!(lines, expected);
}

#[test]
fn test_rerun_overwrites_with_identical_bytes() {
    let temp = TempDir::new().unwrap();
    let out_dir = temp.path().join("nebula-x-assets");

    assert_success(&run_in(temp.path(), &[]));
    let first = read_all(&out_dir);

    // Corrupt one file; the next run must restore it
    fs::write(out_dir.join("favicon.svg"), "stale").unwrap();

    assert_success(&run_in(temp.path(), &[]));
    let second = read_all(&out_dir);

    assert_eq!(first, second);
}

#[test]
fn test_independent_runs_are_deterministic() {
    let a = TempDir::new().unwrap();
    let b = TempDir::new().unwrap();

    assert_success(&run_in(a.path(), &[]));
    assert_success(&run_in(b.path(), &[]));

    assert_eq!(
        read_all(&a.path().join("nebula-x-assets")),
        read_all(&b.path().join("nebula-x-assets"))
    );
}

#[test]
fn test_generated_documents_are_well_formed() {
    let temp = TempDir::new().unwrap();
    assert_success(&run_in(temp.path(), &[]));

    for (name, content) in EXPECTED_FILES
        .iter()
        .zip(read_all(&temp.path().join("nebula-x-assets")))
    {
        assert!(content.starts_with("<svg width=\""), "{name} header");
        assert!(
            content.contains("xmlns=\"http://www.w3.org/2000/svg\""),
            "{name} namespace"
        );
        assert!(content.trim_end().ends_with("</svg>"), "{name} footer");
        assert_eq!(
            content.matches("<g").count(),
            content.matches("</g>").count(),
            "{name} groups balanced"
        );
        assert!(!content.contains("NaN"), "{name} has invalid numbers");
    }
}

#[test]
fn test_frame_sizes() {
    let temp = TempDir::new().unwrap();
    assert_success(&run_in(temp.path(), &[]));
    let dir = temp.path().join("nebula-x-assets");

    let header = |name: &str| {
        let content = fs::read_to_string(dir.join(name)).unwrap();
        content.lines().next().unwrap().to_string()
    };

    assert!(header("nebula-x-mark.svg").contains("viewBox=\"0 0 100 100\""));
    assert!(header("nebula-x-splash.svg").contains("viewBox=\"0 0 400 400\""));
    assert!(header("nebula-x-wordmark.svg").contains("viewBox=\"0 0 400 60\""));
    assert!(header("nebula-x-logo-light.svg").contains("viewBox=\"0 0 470 80\""));
    assert!(header("nebula-x-logo-ornate-dark.svg").contains("viewBox=\"0 0 470 80\""));
    assert!(header("space-bg-pattern.svg").contains("viewBox=\"0 0 400 400\""));
    assert!(header("favicon.svg").contains("viewBox=\"0 0 100 100\""));
}

#[test]
fn test_favicon_identical_to_mark() {
    let temp = TempDir::new().unwrap();
    assert_success(&run_in(temp.path(), &[]));
    let dir = temp.path().join("nebula-x-assets");

    assert_eq!(
        fs::read(dir.join("favicon.svg")).unwrap(),
        fs::read(dir.join("nebula-x-mark.svg")).unwrap()
    );
}

#[test]
fn test_out_dir_flag() {
    let temp = TempDir::new().unwrap();
    let out_dir = temp.path().join("dist").join("brand");

    let output = run_in(temp.path(), &["--out-dir", out_dir.to_str().unwrap()]);
    assert_success(&output);

    assert!(out_dir.join("nebula-x-mark.svg").is_file());
    assert!(!temp.path().join("nebula-x-assets").exists());
}

#[test]
fn test_only_flag_limits_output() {
    let temp = TempDir::new().unwrap();

    let output = run_in(temp.path(), &["--only", "mark", "--only", "favicon.svg"]);
    assert_success(&output);

    let mut names: Vec<String> = fs::read_dir(temp.path().join("nebula-x-assets"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["favicon.svg", "nebula-x-mark.svg"]);
}

#[test]
fn test_unknown_only_name_fails_before_writing() {
    let temp = TempDir::new().unwrap();

    let output = run_in(temp.path(), &["--only", "banner"]);

    assert_ne!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown asset"));
    assert!(!temp.path().join("nebula-x-assets").exists());
}

#[test]
fn test_list_flag() {
    let temp = TempDir::new().unwrap();

    let output = run_in(temp.path(), &["--list"]);
    assert_success(&output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().collect::<Vec<_>>(), EXPECTED_FILES.to_vec());
    assert!(!temp.path().join("nebula-x-assets").exists());
}

#[test]
fn test_config_file_overrides_palette_and_dir() {
    let work = TempDir::new().unwrap();
    let (config_path, _config_temp) = temp_config(
        r##"
output_dir = "custom"

[palette]
starlight_white = "#FFFFFF"
"##,
    );

    let output = run_in(work.path(), &["--config", config_path.to_str().unwrap()]);
    assert_success(&output);

    let wordmark =
        fs::read_to_string(work.path().join("custom").join("nebula-x-wordmark.svg")).unwrap();
    assert!(wordmark.contains("color:#FFFFFF"));
    assert!(!wordmark.contains("#F1F5F9"));
}

#[test]
fn test_out_dir_flag_beats_config_file() {
    let work = TempDir::new().unwrap();
    let (config_path, _config_temp) = temp_config("output_dir = \"from-config\"\n");

    let output = run_in(
        work.path(),
        &[
            "--config",
            config_path.to_str().unwrap(),
            "--out-dir",
            "from-flag",
        ],
    );
    assert_success(&output);

    assert!(work.path().join("from-flag").join("favicon.svg").is_file());
    assert!(!work.path().join("from-config").exists());
}

#[test]
fn test_invalid_config_reports_path() {
    let work = TempDir::new().unwrap();
    let (config_path, _config_temp) = temp_config("[palette]\nmars_red = \"red\"\n");

    let output = run_in(work.path(), &["--config", config_path.to_str().unwrap()]);

    assert_ne!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stderr).contains("nebulagen.toml"));
}

#[test]
fn test_print_config_defaults() {
    let temp = TempDir::new().unwrap();

    let output = run_in(temp.path(), &["--print-config"]);
    assert_success(&output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("output_dir = \"nebula-x-assets\""));
    assert!(stdout.contains("nebula_purple = \"#7C3AED\""));
    assert!(!temp.path().join("nebula-x-assets").exists());
}

#[test]
fn test_unwritable_output_fails() {
    let temp = TempDir::new().unwrap();
    // A regular file where the directory should go
    fs::write(temp.path().join("nebula-x-assets"), "blocker").unwrap();

    let output = run_in(temp.path(), &[]);

    assert_ne!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to create output directory"));
}
