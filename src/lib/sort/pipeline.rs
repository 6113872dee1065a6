//! Chunk-sort-merge pipeline driver.
//!
//! Runs the three stages strictly in order:
//!
//! 1. **Partition**: split the sequence into `max(4, ceil(sqrt(n)))` windows
//! 2. **Sort**: sort every window concurrently, one rayon task per window
//! 3. **Merge**: k-way merge of the sorted windows with a min-heap
//!
//! The pipeline itself cannot fail once it has a sequence of at least
//! [`MIN_SEQUENCE_LEN`] values; shorter input is rejected up front.

use log::debug;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::errors::{ChunkSortError, Result};
use crate::sort::concurrent::{sort_chunks_concurrently, sort_chunks_in_pool};
use crate::sort::merge::merge_sorted_chunks;
use crate::sort::partition::split_into_chunks;
use crate::validation::{validate_at_least, validate_min_len};

/// Fewest values the pipeline accepts.
pub const MIN_SEQUENCE_LEN: usize = 10;

/// Sorts `values` with the default [`ChunkSorter`].
///
/// # Errors
///
/// Returns [`ChunkSortError::PreconditionViolation`] if `values` holds fewer
/// than [`MIN_SEQUENCE_LEN`] numbers.
///
/// # Examples
///
/// ```
/// use chunksort_lib::sort::sort_pipeline;
///
/// let sorted = sort_pipeline(vec![5, 3, 8, 1, 9, 2, 7, 4, 6, 0]).unwrap();
/// assert_eq!(sorted, (0..10).collect::<Vec<i64>>());
///
/// assert!(sort_pipeline(vec![3, 2, 1]).is_err());
/// ```
pub fn sort_pipeline(values: Vec<i64>) -> Result<Vec<i64>> {
    ChunkSorter::new().sort(values)
}

/// Hooks into the pipeline between stages.
///
/// Both hooks see the chunk windows in order; the default implementations do
/// nothing.
pub trait ChunkObserver {
    /// Called after partitioning, before any chunk is sorted.
    fn on_partitioned(&mut self, _chunks: &[&mut [i64]]) {}

    /// Called after every chunk has been sorted, before the merge.
    fn on_sorted(&mut self, _chunks: &[&mut [i64]]) {}
}

/// Observer that ignores every stage.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ChunkObserver for NoopObserver {}

/// Statistics from a pipeline run.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortStats {
    /// Values sorted.
    pub total_values: u64,
    /// Chunks the sequence was split into.
    pub chunks: usize,
    /// Chunks that held no values.
    pub empty_chunks: usize,
}

/// Chunk-sort-merge sorter for integer sequences.
#[derive(Default)]
pub struct ChunkSorter {
    /// Dedicated pool for the sort stage; `None` uses the global rayon pool.
    pool: Option<ThreadPool>,
}

impl ChunkSorter {
    /// Create a sorter that runs on the global rayon pool.
    #[must_use]
    pub fn new() -> Self {
        Self { pool: None }
    }

    /// Create a sorter whose sort stage runs on a dedicated pool of `threads`.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkSortError::InvalidParameter`] if `threads` is zero or the
    /// pool cannot be created.
    pub fn with_threads(threads: usize) -> Result<Self> {
        validate_at_least(threads, 1, "threads")?;
        let pool = ThreadPoolBuilder::new().num_threads(threads).build().map_err(|e| {
            ChunkSortError::InvalidParameter {
                parameter: "threads".to_string(),
                reason: format!("cannot build thread pool: {e}"),
            }
        })?;
        Ok(Self { pool: Some(pool) })
    }

    /// Number of threads available to the sort stage.
    #[must_use]
    pub fn threads(&self) -> usize {
        self.pool.as_ref().map_or_else(rayon::current_num_threads, ThreadPool::current_num_threads)
    }

    /// Sort a sequence.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkSortError::PreconditionViolation`] for sequences shorter
    /// than [`MIN_SEQUENCE_LEN`].
    pub fn sort(&self, values: Vec<i64>) -> Result<Vec<i64>> {
        self.sort_observed(values, &mut NoopObserver).map(|(sorted, _)| sorted)
    }

    /// Sort a sequence, reporting the chunks to `observer` between stages.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkSortError::PreconditionViolation`] for sequences shorter
    /// than [`MIN_SEQUENCE_LEN`].
    pub fn sort_observed<O: ChunkObserver + ?Sized>(
        &self,
        mut values: Vec<i64>,
        observer: &mut O,
    ) -> Result<(Vec<i64>, SortStats)> {
        validate_min_len(values.len(), MIN_SEQUENCE_LEN)?;

        let mut chunks = split_into_chunks(&mut values);
        let stats = SortStats {
            total_values: chunks.iter().map(|c| c.len() as u64).sum(),
            chunks: chunks.len(),
            empty_chunks: chunks.iter().filter(|c| c.is_empty()).count(),
        };
        debug!(
            "Partitioned {} values into {} chunks ({} empty)",
            stats.total_values, stats.chunks, stats.empty_chunks
        );
        observer.on_partitioned(&chunks);

        match &self.pool {
            Some(pool) => sort_chunks_in_pool(pool, &mut chunks),
            None => sort_chunks_concurrently(&mut chunks),
        }
        observer.on_sorted(&chunks);

        let sorted = merge_sorted_chunks(&chunks);
        debug!("Merged {} chunks into {} values", stats.chunks, sorted.len());

        Ok((sorted, stats))
    }
}
