use std::{fs, path::PathBuf};

use tempfile::tempdir;

use venn_cli::{Args, run};

/// Collects all .venn files from a directory
fn collect_script_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("venn")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn demos_path() -> PathBuf {
    // Demos are at workspace root, relative to workspace not the crate
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

fn args(script: Option<String>, output: &PathBuf, report: Option<&PathBuf>) -> Args {
    Args {
        script,
        output: output.to_string_lossy().to_string(),
        report: report.map(|path| path.to_string_lossy().to_string()),
        config: None,
        step: Some(4.0),
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_without_script() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("default.svg");
    let report = temp_dir.path().join("default.txt");

    let regions = run(&args(None, &output, Some(&report))).expect("default diagram should export");

    let svg = fs::read_to_string(&output).expect("SVG written");
    assert!(svg.contains("<svg"));
    assert!(svg.contains("Clear Strategic Intent"));

    let report = fs::read_to_string(&report).expect("report written");
    assert!(report.starts_with("Venn Diagram"));
    assert!(report.contains("Applicable Intersection Labels"));
    assert!(regions > 0);
    assert!(report.contains(&format!("Unique Intersections: {regions}")));
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let valid_demos = collect_script_files(demos_path());

    assert!(!valid_demos.is_empty(), "No demo scripts found in demos/");

    let mut failed_demos = Vec::new();

    for demo_path in &valid_demos {
        let stem = demo_path.file_stem().unwrap().to_string_lossy().to_string();
        let output = temp_dir.path().join(format!("{stem}.svg"));
        let report = temp_dir.path().join(format!("{stem}.txt"));

        let script = Some(demo_path.to_string_lossy().to_string());
        if let Err(e) = run(&args(script, &output, Some(&report))) {
            failed_demos.push((demo_path.clone(), e));
        } else if !output.exists() || !report.exists() {
            panic!("{} produced no output", demo_path.display());
        }
    }

    if !failed_demos.is_empty() {
        eprintln!("\nDemo scripts that failed:");
        for (path, err) in &failed_demos {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} demo script(s) failed unexpectedly", failed_demos.len());
    }
}

#[test]
fn e2e_smoke_test_error_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let error_demos = collect_script_files(demos_path().join("errors"));

    assert!(
        !error_demos.is_empty(),
        "No error scripts found in demos/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for demo_path in &error_demos {
        let output = temp_dir.path().join(format!(
            "error_{}.svg",
            demo_path.file_stem().unwrap().to_string_lossy()
        ));

        let script = Some(demo_path.to_string_lossy().to_string());
        if run(&args(script, &output, None)).is_ok() {
            unexpectedly_succeeded.push(demo_path.clone());
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError scripts that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error script(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }
}

#[test]
fn e2e_missing_script_is_io_error() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("never.svg");
    let script = Some(temp_dir.path().join("absent.venn").to_string_lossy().to_string());

    let err = run(&args(script, &output, None)).unwrap_err();
    assert!(matches!(err, venn::VennError::Io(_)));
    assert!(!output.exists());
}

#[test]
fn e2e_explicit_config() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("venn.toml");
    fs::write(
        &config_path,
        r#"
[export]
title = "Quarterly Review"

[[ellipses]]
id = "solo"
centerX = 400.0
centerY = 300.0
radiusX = 100.0
radiusY = 80.0
label = "Solo"
"#,
    )
    .expect("config written");

    let output = temp_dir.path().join("solo.svg");
    let report = temp_dir.path().join("solo.txt");
    let mut args = args(None, &output, Some(&report));
    args.config = Some(config_path.to_string_lossy().to_string());

    run(&args).expect("configured diagram should export");

    let report = fs::read_to_string(&report).expect("report written");
    assert!(report.starts_with("Quarterly Review"));
    assert!(report.contains("Unique Intersections: 1"));
}
