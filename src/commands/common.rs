//! Common CLI options and helpers shared across modes.
//!
//! This module provides shared argument structures that are composed into the
//! top-level arguments using `#[command(flatten)]`.

use std::io;

use anyhow::{Context, Result};
use clap::Args;
use log::info;

use chunksort_lib::logging::log_sort_summary;
use chunksort_lib::sort::{ChunkSorter, MIN_SEQUENCE_LEN, SortStats};
use chunksort_lib::text_io::OutputIdentity;
use chunksort_lib::validation::validate_min_len;

use crate::commands::console::ConsolePrinter;

/// Threading options for the concurrent sort stage.
#[derive(Debug, Clone, Default, Args)]
pub struct ThreadingOptions {
    /// Number of threads for sorting chunks (defaults to all available cores).
    #[arg(short = 't', long = "threads")]
    pub threads: Option<usize>,
}

impl ThreadingOptions {
    /// Builds a sorter using a dedicated pool when `--threads` was given.
    pub fn build_sorter(&self) -> Result<ChunkSorter> {
        let sorter = match self.threads {
            Some(threads) => ChunkSorter::with_threads(threads)?,
            None => ChunkSorter::new(),
        };
        info!("Threads: {}", sorter.threads());
        Ok(sorter)
    }
}

/// Identity fields used to name the batch-mode output directory.
#[derive(Debug, Clone, Args)]
pub struct IdentityOptions {
    /// First name used in the output directory name (lowercased).
    #[arg(long = "first-name", default_value = "chunk")]
    pub first_name: String,

    /// Surname used in the output directory name (lowercased).
    #[arg(long = "surname", default_value = "sort")]
    pub surname: String,

    /// Identifier used in the output directory name.
    #[arg(long = "id", default_value = "0")]
    pub id: String,
}

impl From<&IdentityOptions> for OutputIdentity {
    fn from(opts: &IdentityOptions) -> Self {
        Self {
            first_name: opts.first_name.clone(),
            surname: opts.surname.clone(),
            id: opts.id.clone(),
        }
    }
}

/// Sorts `values`, printing every stage to stdout.
///
/// Nothing is printed if `values` is too short to sort.
pub fn sort_and_print(sorter: &ChunkSorter, values: Vec<i64>) -> Result<SortStats> {
    validate_min_len(values.len(), MIN_SEQUENCE_LEN)?;

    let mut printer = ConsolePrinter::new(io::stdout().lock());
    printer.print_original(&values);

    let (sorted, stats) = sorter.sort_observed(values, &mut printer)?;

    printer.print_result(&sorted);
    printer.finish().context("Failed to write to stdout")?;

    log_sort_summary(&stats);
    Ok(stats)
}
