//! Integration tests for directory mode.

use std::fs;
use tempfile::TempDir;

use crate::helpers::{read_numbers, run_chunksort, write_numbers};

#[test]
fn test_directory_mode_writes_sibling_directory() {
    let temp_dir = TempDir::new().unwrap();
    let input_dir = temp_dir.path().join("incoming");
    fs::create_dir(&input_dir).unwrap();
    write_numbers(&input_dir.join("first.txt"), &[10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0, -1]);
    write_numbers(&input_dir.join("second.txt"), &[4, 4, 4, 1, 1, 1, 9, 9, 9, 0]);
    fs::write(input_dir.join("readme.md"), "ignored\n").unwrap();

    let output = run_chunksort(&[
        "-d",
        input_dir.to_str().unwrap(),
        "--first-name",
        "Ada",
        "--surname",
        "Lovelace",
        "--id",
        "1815",
    ]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let output_dir = temp_dir.path().join("incoming_sorted_ada_lovelace_1815");
    assert!(output_dir.is_dir());
    assert_eq!(read_numbers(&output_dir.join("first.txt")), (-1..=10).collect::<Vec<i64>>());
    assert_eq!(read_numbers(&output_dir.join("second.txt")), vec![0, 1, 1, 1, 4, 4, 4, 9, 9, 9]);
    assert!(!output_dir.join("readme.md").exists());
}

#[test]
fn test_directory_mode_aborts_on_bad_file() {
    let temp_dir = TempDir::new().unwrap();
    let input_dir = temp_dir.path().join("incoming");
    fs::create_dir(&input_dir).unwrap();
    write_numbers(&input_dir.join("a.txt"), &[1, 2, 3]);

    let output = run_chunksort(&["-d", input_dir.to_str().unwrap()]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error in a.txt"), "stderr: {stderr}");
}

#[test]
fn test_directory_mode_missing_directory() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_chunksort(&["-d", temp_dir.path().join("nope").to_str().unwrap()]);
    assert!(!output.status.success());
}
