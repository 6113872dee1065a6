#![deny(unsafe_code)]
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

//! # chunksort - concurrent chunk sorting library
//!
//! Sorts integer sequences by splitting them into roughly `sqrt(n)` chunks, sorting
//! every chunk concurrently and merging the sorted chunks with a min-heap.
//!
//! ## Overview
//!
//! ### Core Functionality
//!
//! - **[`sort`]** - Partitioning, concurrent chunk sort, k-way merge and the pipeline driver
//!
//! ### Sources and Sinks
//!
//! - **[`text_io`]** - Newline-delimited integer files and batch directories
//! - **[`generate`]** - Random input generation
//!
//! ### Utilities
//!
//! - **[`errors`]** - Typed errors shared by the library
//! - **[`validation`]** - Parameter and path validation
//! - **[`logging`]** - Count, duration and rate formatting, operation timing
//! - **[`progress`]** - Interval-based progress logging
//!
//! ## Quick Start
//!
//! ```
//! use chunksort_lib::sort::sort_pipeline;
//!
//! # fn main() -> anyhow::Result<()> {
//! let sorted = sort_pipeline(vec![5, 3, 8, 1, 9, 2, 7, 4, 6, 0])?;
//! assert_eq!(sorted, vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
//! # Ok(())
//! # }
//! ```
//!
//! ### Sorting a File
//!
//! ```no_run
//! use chunksort_lib::sort::ChunkSorter;
//! use chunksort_lib::text_io::{read_ints_from_file, write_ints_to_file};
//!
//! # fn main() -> anyhow::Result<()> {
//! let sorter = ChunkSorter::with_threads(4)?;
//! let sorted = sorter.sort(read_ints_from_file("numbers.txt")?)?;
//! write_ints_to_file("sorted.txt", &sorted)?;
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod generate;
pub mod logging;
pub mod progress;
pub mod sort;
pub mod text_io;
pub mod validation;
