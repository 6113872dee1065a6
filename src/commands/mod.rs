//! CLI mode implementations for chunksort.
//!
//! Exactly one mode runs per invocation:
//!
//! - [`random`] - Sort generated random numbers and print every stage
//! - [`input_file`] - Sort the numbers in one file and print every stage
//! - [`directory`] - Sort every `.txt` file in a directory into a sibling directory

#![allow(clippy::missing_errors_doc, clippy::must_use_candidate)]

pub mod command;
pub mod common;
pub mod console;
pub mod directory;
pub mod input_file;
pub mod random;
