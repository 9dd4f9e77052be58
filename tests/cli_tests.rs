use std::fs;
use std::path::Path;
use std::process::Command;

const OUTPUTS: [&str; 3] = [
    "market_growth_mena.png",
    "employment_stats.png",
    "pain_points_heatmap.png",
];

fn run_in(dir: &Path) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_market_charts"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to launch binary")
}

#[test]
fn writes_three_charts_into_docs() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("docs")).unwrap();

    let output = run_in(dir.path());
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let mut entries: Vec<String> = fs::read_dir(dir.path().join("docs"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    entries.sort();
    let mut expected: Vec<String> = OUTPUTS.iter().map(|s| s.to_string()).collect();
    expected.sort();
    assert_eq!(entries, expected);

    for name in OUTPUTS {
        let len = fs::metadata(dir.path().join("docs").join(name)).unwrap().len();
        assert!(len > 0, "{name} is empty");
    }
}

#[test]
fn fails_without_docs_directory() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_in(dir.path());
    assert!(!output.status.success());
    assert!(!dir.path().join("docs").exists());
}

#[test]
fn config_file_redirects_output() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("charts.json"),
        r#"{ "output_dir": "out/charts", "create_output_dir": true }"#,
    )
    .unwrap();

    let output = run_in(dir.path());
    assert!(output.status.success());
    for name in OUTPUTS {
        assert!(dir.path().join("out/charts").join(name).exists());
    }
}

#[test]
fn malformed_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("docs")).unwrap();
    fs::write(dir.path().join("charts.json"), "{ output_dir").unwrap();

    let output = run_in(dir.path());
    assert!(!output.status.success());
    assert_eq!(fs::read_dir(dir.path().join("docs")).unwrap().count(), 0);
}
