//! Input-file mode: sort the numbers in one file and print every stage.

use std::path::PathBuf;

use anyhow::{Context, Result};
use log::info;

use chunksort_lib::logging::OperationTimer;
use chunksort_lib::text_io::read_ints_from_file;
use chunksort_lib::validation::validate_file_exists;

use crate::commands::command::Command;
use crate::commands::common::{ThreadingOptions, sort_and_print};

/// Sort the integers in a newline-delimited file.
#[derive(Debug, Clone)]
pub struct SortFile {
    pub input: PathBuf,
    pub threading: ThreadingOptions,
}

impl Command for SortFile {
    fn execute(&self) -> Result<()> {
        validate_file_exists(&self.input, "Input file")?;
        info!("Mode: input file");
        info!("Input: {}", self.input.display());

        let values = read_ints_from_file(&self.input)?;
        info!("Read {} values", values.len());

        let sorter = self.threading.build_sorter()?;
        let timer = OperationTimer::new("Sorting input file");
        let stats = sort_and_print(&sorter, values)
            .with_context(|| format!("Cannot sort {}", self.input.display()))?;
        timer.log_completion(stats.total_values);
        Ok(())
    }
}
