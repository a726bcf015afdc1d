//! CLI integration tests driving the interactive menu through stdin.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_session(args: &[&str], script: &str) -> Output {
    let bin = env!("CARGO_BIN_EXE_piece_inventory");
    let mut child = Command::new(bin)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn session");
    child
        .stdin
        .take()
        .expect("stdin piped")
        .write_all(script.as_bytes())
        .expect("write script");
    child.wait_with_output().expect("session did not finish")
}

#[test]
fn swap_scenario_through_menu() {
    let script = "7\nQ1\n7\nQ2\n8\nS1\n8\nS2\n4\n9\n0\n";
    let output = run_session(&[], script);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[Swap] Stack top and queue front exchanged."));
    assert!(stdout.contains("  [0] S2\n  [1] Q2\n"));
    assert!(stdout.contains("  (1) Q1\n  (0) S1\n"));
    assert!(stdout.contains("Exiting. Good luck!"));
}

#[test]
fn invert_rejection_and_bad_input_leave_state() {
    // Queue capacity 1 cannot take two stack pieces.
    let script = "7\nA\n8\nX\n8\nY\n6\nnope\n99\n9\n0\n";
    let output = run_session(&["play", "1", "3"], script);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[Invert] Failed: invert would overflow"));
    assert!(stdout.contains("Invalid input."));
    assert!(stdout.contains("Invalid option."));
    assert!(stdout.contains("Queue (count=1/1):\n  [0] A\n"));
    assert!(stdout.contains("Stack (count=2/3):\n  (1) Y\n  (0) X\n"));
}

#[test]
fn end_of_input_exits_normally() {
    let output = run_session(&[], "1\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[Play] Failed: container is empty."));
}
