//! Console output for the interactive modes.
//!
//! Prints the original sequence, every chunk before and after its sort, and the
//! merged result. Output goes to any [`Write`]; the first write error is kept and
//! reported by [`ConsolePrinter::finish`], since the pipeline hooks cannot fail.

use std::io::{self, Write};

use chunksort_lib::sort::ChunkObserver;

/// Prints pipeline stages to a writer.
pub struct ConsolePrinter<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> ConsolePrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Prints the unsorted input.
    pub fn print_original(&mut self, values: &[i64]) {
        self.emit(|out| writeln!(out, "Original numbers (unsorted):\n{values:?}"));
    }

    /// Prints the merged result.
    pub fn print_result(&mut self, values: &[i64]) {
        self.emit(|out| writeln!(out, "\nFinal merged sorted result:\n{values:?}"));
    }

    /// Flushes the writer and returns the first error seen, if any.
    pub fn finish(&mut self) -> io::Result<()> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.out.flush()
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }

    fn print_chunks(&mut self, title: &str, chunks: &[&mut [i64]]) {
        self.emit(|out| {
            writeln!(out, "\n{title}")?;
            for (i, chunk) in chunks.iter().enumerate() {
                writeln!(out, "Chunk {}: {:?}", i + 1, chunk)?;
            }
            Ok(())
        });
    }

    fn emit(&mut self, f: impl FnOnce(&mut W) -> io::Result<()>) {
        if self.error.is_none() {
            if let Err(e) = f(&mut self.out) {
                self.error = Some(e);
            }
        }
    }
}

impl<W: Write> ChunkObserver for ConsolePrinter<W> {
    fn on_partitioned(&mut self, chunks: &[&mut [i64]]) {
        self.print_chunks("Chunks before sorting:", chunks);
    }

    fn on_sorted(&mut self, chunks: &[&mut [i64]]) {
        self.print_chunks("Chunks after sorting:", chunks);
    }
}
