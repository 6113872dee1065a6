//! Integration tests for input-file mode.

use std::fs;
use tempfile::TempDir;

use crate::helpers::{printed_list_after, run_chunksort, write_numbers};

#[test]
fn test_input_file_mode_prints_stages() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("input.txt");
    write_numbers(&input, &[5, 3, 8, 1, 9, 2, 7, 4, 6, 0]);

    let output = run_chunksort(&["-i", input.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Chunks before sorting:\nChunk 1: [5, 3, 8]\nChunk 2: [1, 9, 2]"));
    assert!(stdout.contains("Chunks after sorting:\nChunk 1: [3, 5, 8]\nChunk 2: [1, 2, 9]"));
    assert!(stdout.contains("Chunk 4: [0, 6]"));
    assert_eq!(
        printed_list_after(&stdout, "Final merged sorted result:"),
        vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9]
    );
}

#[test]
fn test_input_file_mode_malformed_line() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("input.txt");
    fs::write(&input, "1\n2\n3\n4\nabc\n6\n7\n8\n9\n10\n").unwrap();

    let output = run_chunksort(&["-i", input.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("line 5"), "stderr: {stderr}");
    assert!(stderr.contains("abc"));
}

#[test]
fn test_input_file_mode_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("missing.txt");

    let output = run_chunksort(&["-i", input.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("does not exist"));
}
