//! Integration tests for random mode.

use crate::helpers::{printed_list_after, run_chunksort};

#[test]
fn test_random_mode_prints_sorted_result() {
    let output = run_chunksort(&["-r", "30", "--seed", "11"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8(output.stdout).unwrap();
    let original = printed_list_after(&stdout, "Original numbers (unsorted):");
    let result = printed_list_after(&stdout, "Final merged sorted result:");

    assert_eq!(original.len(), 30);
    assert!(original.iter().all(|v| (0..1000).contains(v)));

    let mut expected = original.clone();
    expected.sort_unstable();
    assert_eq!(result, expected);

    // 30 values -> 6 chunks printed before and after sorting
    assert_eq!(stdout.matches("Chunk 6:").count(), 2);
    assert!(!stdout.contains("Chunk 7:"));
}

#[test]
fn test_random_mode_seed_is_reproducible() {
    let first = run_chunksort(&["-r", "15", "--seed", "99"]);
    let second = run_chunksort(&["-r", "15", "--seed", "99"]);
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_random_mode_rejects_fewer_than_ten() {
    let output = run_chunksort(&["-r", "9"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("at least 10"));
}

#[test]
fn test_no_mode_is_usage_error() {
    let output = run_chunksort(&[]);
    assert!(!output.status.success());
}

#[test]
fn test_two_modes_is_usage_error() {
    let output = run_chunksort(&["-r", "20", "-d", "somewhere"]);
    assert!(!output.status.success());
}
