//! Concurrent per-chunk sorting.
//!
//! Each chunk is sorted by its own rayon task. The call forks one task per chunk
//! and returns only after all of them have joined, so the caller never observes a
//! partially sorted chunk list. Chunks are disjoint `&mut` windows, so the tasks
//! share no mutable state.

use rayon::ThreadPool;
use rayon::prelude::*;

/// Sorts every chunk ascending, in parallel, on the current rayon pool.
///
/// Empty and single-element chunks are left untouched.
///
/// # Examples
///
/// ```
/// use chunksort_lib::sort::{sort_chunks_concurrently, split_into_chunks};
///
/// let mut values = vec![5, 3, 8, 1, 9, 2, 7, 4, 6, 0];
/// let mut chunks = split_into_chunks(&mut values);
/// sort_chunks_concurrently(&mut chunks);
/// assert_eq!(chunks[0], &[3, 5, 8]);
/// ```
pub fn sort_chunks_concurrently<T: Ord + Send>(chunks: &mut [&mut [T]]) {
    chunks.par_iter_mut().with_max_len(1).for_each(|chunk| chunk.sort_unstable());
}

/// Same as [`sort_chunks_concurrently`], but runs the tasks on `pool`.
pub fn sort_chunks_in_pool<T: Ord + Send>(pool: &ThreadPool, chunks: &mut [&mut [T]]) {
    pool.install(|| sort_chunks_concurrently(chunks));
}
