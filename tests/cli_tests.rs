//! CLI integration tests.
//!
//! Runs the `clexer` binary end-to-end using `std::process::Command`.

use std::path::PathBuf;
use std::process::Command;

fn clexer_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_clexer"))
}

fn fixture(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    path
}

#[test]
fn test_cli_prints_both_tables() {
    let output = Command::new(clexer_bin())
        .arg(fixture("program.txt"))
        .output()
        .expect("failed to execute clexer");
    assert!(output.status.success(), "clexer program.txt should exit 0");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Source read successfully:"));
    assert!(stdout.contains("TOKENS:"));
    assert!(stdout.contains("SYMBOL TABLE:"));
    assert!(stdout.contains("| IDENTIFIER | total  |"));
}

#[test]
fn test_cli_quiet_skips_echo() {
    let output = Command::new(clexer_bin())
        .arg("--quiet")
        .arg(fixture("program.txt"))
        .output()
        .expect("failed to execute clexer");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Source read successfully:"));
    assert!(stdout.contains("TOKENS:"));
}

#[test]
fn test_cli_default_input_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("input.txt"), "int answer = 42;\n").unwrap();

    let output = Command::new(clexer_bin())
        .current_dir(dir.path())
        .output()
        .expect("failed to execute clexer");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("| 1 | answer |"));
}

#[test]
fn test_cli_missing_file() {
    let output = Command::new(clexer_bin())
        .arg(fixture("does_not_exist.txt"))
        .output()
        .expect("failed to execute clexer");
    assert!(!output.status.success(), "missing file should exit nonzero");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: FileNotFound"));
}

#[test]
fn test_cli_empty_file() {
    let output = Command::new(clexer_bin())
        .arg(fixture("blank.txt"))
        .output()
        .expect("failed to execute clexer");
    assert!(!output.status.success(), "blank file should exit nonzero");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: EmptyFile"));
}

#[test]
fn test_cli_invalid_character() {
    let output = Command::new(clexer_bin())
        .args(["-q"])
        .arg(fixture("fraction.txt"))
        .output()
        .expect("failed to execute clexer");
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("TOKENS:"), "no tables on failure");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: InvalidCharacter"));
    assert!(stderr.contains("1 | int x = 3.5;"));
}
