//! Helper utilities for integration tests.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Path of the built chunksort binary.
pub fn chunksort_binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_chunksort"))
}

/// Runs chunksort with `args`, capturing stdout and stderr.
pub fn run_chunksort(args: &[&str]) -> Output {
    Command::new(chunksort_binary_path())
        .args(args)
        .env("RUST_LOG", "info")
        .output()
        .expect("Failed to run chunksort")
}

/// Writes `values` one per line to `path`.
pub fn write_numbers(path: &Path, values: &[i64]) {
    let text: String = values.iter().map(|v| format!("{v}\n")).collect();
    fs::write(path, text).expect("Failed to write numbers");
}

/// Reads one integer per line from `path`.
pub fn read_numbers(path: &Path) -> Vec<i64> {
    fs::read_to_string(path)
        .expect("Failed to read numbers")
        .lines()
        .map(|l| l.trim().parse().expect("Not an integer"))
        .collect()
}

/// Parses the `[a, b, c]` line printed after `header` in stdout.
pub fn printed_list_after(stdout: &str, header: &str) -> Vec<i64> {
    let mut lines = stdout.lines().skip_while(|l| *l != header);
    lines.next().expect("header not found");
    let list = lines.next().expect("list not found");
    list.trim_matches(|c| c == '[' || c == ']')
        .split(", ")
        .filter(|s| !s.is_empty())
        .map(|s| s.parse().expect("Not an integer"))
        .collect()
}
