//! Smoke tests driving the compiled binary, mirroring how users invoke
//! the CLI.

use std::path::PathBuf;
use std::process::Command;

fn get_binary_path() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("target");
    path.push("debug");
    path.push("keyrake");
    path
}

#[test]
fn test_crack_recovers_demo_plaintext() {
    let output = Command::new(get_binary_path())
        .args([
            "crack",
            "--plaintext",
            "ab",
            "--alphabet",
            "ab",
            "--max-len",
            "2",
            "--prefix-len",
            "1",
            "--workers",
            "2",
        ])
        .output()
        .expect("Failed to execute keyrake");

    assert!(
        output.status.success(),
        "crack failed\nstderr: {}\nstdout: {}",
        String::from_utf8_lossy(&output.stderr),
        String::from_utf8_lossy(&output.stdout)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("found \"ab\""),
        "should report the recovered candidate, got:\n{}",
        stdout
    );
}

#[test]
fn test_crack_sequential_baseline() {
    let output = Command::new(get_binary_path())
        .args([
            "crack",
            "--plaintext",
            "ba",
            "--alphabet",
            "ab",
            "--max-len",
            "2",
            "--sequential",
        ])
        .output()
        .expect("Failed to execute keyrake");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("found \"ba\""), "got:\n{}", stdout);
}

#[test]
fn test_bench_prints_rows() {
    let output = Command::new(get_binary_path())
        .args([
            "bench",
            "--alphabet",
            "ab",
            "--max-lens",
            "1,2",
            "--workers",
            "1,2",
            "--trials",
            "1",
        ])
        .output()
        .expect("Failed to execute keyrake");

    assert!(
        output.status.success(),
        "bench failed\nstderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("method"), "missing header:\n{}", stdout);
    assert!(stdout.contains("sequential"), "got:\n{}", stdout);
    assert!(stdout.contains("partitioned"), "got:\n{}", stdout);
}

#[test]
fn test_rejects_invalid_configuration() {
    // prefix length exceeding max length must fail before any search
    let output = Command::new(get_binary_path())
        .args([
            "crack",
            "--plaintext",
            "ab",
            "--alphabet",
            "ab",
            "--max-len",
            "1",
            "--prefix-len",
            "3",
        ])
        .output()
        .expect("Failed to execute keyrake");

    assert!(!output.status.success());
}
