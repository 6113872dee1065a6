//! Integration tests for the chunksort binary.
//!
//! These tests run the built binary in each mode and check its output.

mod helpers;
mod test_directory_mode;
mod test_input_file_mode;
mod test_random_mode;
