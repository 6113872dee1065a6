//! Command trait definition for CLI modes.
//!
//! This module defines the [`Command`] trait that every chunksort mode implements.
//! The trait uses `enum_dispatch` for dispatch across the mode variants.

use anyhow::Result;
use enum_dispatch::enum_dispatch;

/// Trait implemented by all chunksort modes.
#[enum_dispatch]
pub trait Command {
    #[allow(clippy::missing_errors_doc)]
    fn execute(&self) -> Result<()>;
}
