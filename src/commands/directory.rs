//! Directory mode: sort every `.txt` file in a directory.
//!
//! Results are written, one integer per line and under the same file name, into a
//! sibling directory named `<dir>_sorted_<first>_<surname>_<id>`. The first file
//! that cannot be read, parsed, sorted or written aborts the whole batch.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::{debug, info};

use chunksort_lib::errors::ChunkSortError;
use chunksort_lib::logging::OperationTimer;
use chunksort_lib::progress::ProgressTracker;
use chunksort_lib::text_io::{
    OutputIdentity, list_text_files, read_ints_from_file, sorted_output_dir, write_ints_to_file,
};
use chunksort_lib::validation::validate_directory_exists;

use crate::commands::command::Command;
use crate::commands::common::ThreadingOptions;

/// Sort every `.txt` file in a directory into a sibling output directory.
#[derive(Debug, Clone)]
pub struct SortDirectory {
    pub input_dir: PathBuf,
    pub identity: OutputIdentity,
    pub threading: ThreadingOptions,
}

/// Totals from a directory run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DirectoryStats {
    pub files: u64,
    pub values: u64,
    pub output_dir: PathBuf,
}

impl Command for SortDirectory {
    fn execute(&self) -> Result<()> {
        self.run().map(|_| ())
    }
}

impl SortDirectory {
    /// Sorts every file and returns the totals.
    pub fn run(&self) -> Result<DirectoryStats> {
        validate_directory_exists(&self.input_dir, "Input directory")?;

        let output_dir = sorted_output_dir(&self.input_dir, &self.identity)?;
        info!("Mode: directory");
        info!("Input: {}", self.input_dir.display());
        info!("Output: {}", output_dir.display());

        fs::create_dir_all(&output_dir).map_err(|e| {
            ChunkSortError::io(&output_dir, "cannot create output directory", e)
        })?;

        let files = list_text_files(&self.input_dir)?;
        info!("Found {} .txt files", files.len());

        let sorter = self.threading.build_sorter()?;
        let timer = OperationTimer::new("Sorting directory");
        let progress = ProgressTracker::new("Sorted files").with_interval(100);
        let mut stats = DirectoryStats { output_dir: output_dir.clone(), ..Default::default() };

        for input in &files {
            let Some(file_name) = input.file_name() else { continue };
            let name = file_name.to_string_lossy();

            let values =
                read_ints_from_file(input).with_context(|| format!("Error in {name}"))?;
            let sorted = sorter.sort(values).with_context(|| format!("Error in {name}"))?;

            let output = output_dir.join(file_name);
            write_ints_to_file(&output, &sorted)
                .with_context(|| format!("Error writing {}", output.display()))?;
            debug!("Sorted {} values from {name}", sorted.len());

            stats.files += 1;
            stats.values += sorted.len() as u64;
            progress.log_if_needed(1);
        }
        progress.log_final();

        info!("=== Summary ===");
        info!("Files sorted: {}", stats.files);
        info!("Output: {}", output_dir.display());
        timer.log_completion(stats.values);
        Ok(stats)
    }
}
