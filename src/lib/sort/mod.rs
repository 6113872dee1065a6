//! Chunk-sort-merge sorting.
//!
//! Sorts an integer sequence in three stages:
//!
//! 1. **Partition** ([`partition`]): split into `max(4, ceil(sqrt(n)))` contiguous windows
//! 2. **Concurrent sort** ([`concurrent`]): sort each window in its own rayon task, then join
//! 3. **Merge** ([`merge`]): k-way merge of the sorted windows with a binary min-heap
//!
//! [`pipeline`] drives the stages in order. Windows are `&mut` slices over the
//! caller's `Vec`, so partitioning and sorting never copy values; the merge is the
//! only stage that allocates.

pub mod concurrent;
pub mod merge;
pub mod partition;
pub mod pipeline;

pub use concurrent::{sort_chunks_concurrently, sort_chunks_in_pool};
pub use merge::merge_sorted_chunks;
pub use partition::{MIN_CHUNKS, chunk_sizes, num_chunks, split_into_chunks};
pub use pipeline::{
    ChunkObserver, ChunkSorter, MIN_SEQUENCE_LEN, NoopObserver, SortStats, sort_pipeline,
};
