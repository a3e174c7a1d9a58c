use std::io::Write;
use std::process::{Command, Output, Stdio};

fn seqsearch() -> Command {
    Command::new(env!("CARGO_BIN_EXE_seqsearch"))
}

fn run(args: &[&str]) -> Output {
    seqsearch()
        .args(args)
        .output()
        .expect("Failed to execute seqsearch")
}

fn assert_success(output: &Output) -> String {
    assert!(
        output.status.success(),
        "Command failed with status: {:?}\nstderr: {}\nstdout: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr),
        String::from_utf8_lossy(&output.stdout)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_search_all_algorithms() {
    let output = run(&["search", "--values", "0,15,17,20,25", "--target", "20"]);
    let stdout = assert_success(&output);

    for algorithm in ["linear", "binary", "bisect", "interpolation", "set", "recursive"] {
        assert!(
            stdout.contains(&format!("{}: found at position 3", algorithm)),
            "missing {} line in:\n{}",
            algorithm,
            stdout
        );
    }
}

#[test]
fn test_search_absent_value() {
    let output = run(&[
        "search",
        "--values",
        "0,1,2,3,4",
        "--target",
        "6",
        "--algorithm",
        "binary",
    ]);
    let stdout = assert_success(&output);
    assert_eq!(stdout.trim(), "binary: not found");
}

#[test]
fn test_search_negative_values() {
    let output = run(&[
        "search",
        "--values",
        "-30,-4,0,9",
        "--target",
        "-4",
        "--algorithm",
        "interpolation",
    ]);
    let stdout = assert_success(&output);
    assert!(stdout.contains("interpolation: found at position 1"));
}

#[test]
fn test_search_unsorted_input_fails() {
    let output = run(&[
        "search",
        "--values",
        "5,1,3",
        "--target",
        "3",
        "--algorithm",
        "binary",
    ]);
    assert!(!output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stdout.contains("binary: error: Invalid input"));
    assert!(stderr.contains("Error: 1 of 1 searches failed"));
}

#[test]
fn test_search_with_partitioned_harness() {
    let output = run(&[
        "search",
        "--values",
        "1,2,3,4,5,6,7,8,9,10",
        "--target",
        "9",
        "--algorithm",
        "binary",
        "--workers",
        "3",
    ]);
    let stdout = assert_success(&output);

    assert!(stdout.contains("Partitioned binary search with 3 workers"));
    assert!(stdout.contains("partition 0 [0..3): not found"));
    assert!(stdout.contains("partition 1 [3..6): not found"));
    assert!(stdout.contains("partition 2 [6..10): found at position 2"));
    assert!(stdout.contains("global: found at position 8"));
}

#[test]
fn test_search_too_many_workers() {
    let output = run(&[
        "search", "--values", "1,2,3", "--target", "2", "--workers", "4",
    ]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("worker count 4 exceeds sequence length 3"),
        "stderr: {}",
        stderr
    );
}

#[test]
fn test_timing_and_profile_reports() {
    let output = run(&[
        "search",
        "--values",
        "0,5,7,10,15",
        "--target",
        "7",
        "--algorithm",
        "all",
        "--timing",
        "--profile",
    ]);
    let stdout = assert_success(&output);

    assert!(stdout.contains("7 found at position 2, took "));
    assert!(stdout.contains("Profile:"));
    let table_rows = stdout
        .lines()
        .skip_while(|line| !line.starts_with("name"))
        .skip(1)
        .count();
    assert_eq!(table_rows, 6, "stdout:\n{}", stdout);
}

#[test]
fn test_run_generates_and_searches() {
    let output = run(&["run", "--size", "100", "--seed", "7", "--workers", "4"]);
    let stdout = assert_success(&output);

    assert!(stdout.contains("search value is "));
    for algorithm in ["linear", "binary", "bisect", "interpolation", "set", "recursive"] {
        assert!(
            stdout.contains(&format!("{}: found at position", algorithm)),
            "missing {} line in:\n{}",
            algorithm,
            stdout
        );
    }
    assert!(stdout.contains("Partitioned binary search with 4 workers"));
    assert_eq!(stdout.matches("  partition ").count(), 4);
    assert!(stdout.contains("global: found at position"));
}

#[test]
fn test_run_default_workers_capped_by_size() {
    let output = run(&["run", "--size", "1", "--seed", "2"]);
    let stdout = assert_success(&output);
    assert!(stdout.contains("search value is 1"));
    assert!(stdout.contains("Partitioned binary search with 1 workers"));
    assert!(stdout.contains("global: found at position 0"));
}

#[test]
fn test_run_with_absent_target() {
    let output = run(&[
        "run", "--size", "20", "--seed", "1", "--target", "500", "--workers", "2",
    ]);
    let stdout = assert_success(&output);
    assert!(stdout.contains("search value is 500"));
    assert!(stdout.contains("linear: not found"));
    assert!(stdout.contains("global: not found"));
}

#[test]
fn test_run_prompts_for_size() {
    let mut child = seqsearch()
        .args(["run", "--seed", "3", "--workers", "2"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn seqsearch");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"12\n")
        .unwrap();

    let output = child.wait_with_output().unwrap();
    let stdout = assert_success(&output);
    assert!(stdout.starts_with("Please enter number of items to randomly generate:"));
    assert!(stdout.contains("binary: found at position"));
}

#[test]
fn test_run_rejects_bad_size() {
    let mut child = seqsearch()
        .arg("run")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn seqsearch");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"lots\n")
        .unwrap();

    let output = child.wait_with_output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid item count: 'lots'"));
}

#[test]
fn test_requires_subcommand() {
    let output = run(&[]);
    assert!(!output.status.success());
}
