//! K-way merge of sorted chunks.
//!
//! A min-heap holds one entry per non-exhausted chunk: the chunk's current head,
//! the chunk index, and the head's position. Each step pops the smallest entry,
//! emits its value and pushes the next value from the same chunk. With `N` values
//! spread over `k` chunks the merge costs `O(N log k)`.
//!
//! Equal values are emitted in ascending chunk order, so output is reproducible.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Merges sorted chunks into a single ascending `Vec`.
///
/// Every chunk must already be sorted ascending; empty chunks are skipped. The
/// result has exactly as many values as all chunks combined.
///
/// # Examples
///
/// ```
/// use chunksort_lib::sort::merge_sorted_chunks;
///
/// let chunks: Vec<Vec<i64>> = vec![vec![1, 4, 9], vec![2, 3], vec![], vec![0, 10]];
/// assert_eq!(merge_sorted_chunks(&chunks), vec![0, 1, 2, 3, 4, 9, 10]);
/// ```
#[must_use]
pub fn merge_sorted_chunks<T, C>(chunks: &[C]) -> Vec<T>
where
    T: Ord + Copy,
    C: AsRef<[T]>,
{
    let total: usize = chunks.iter().map(|c| c.as_ref().len()).sum();
    let mut heap: BinaryHeap<Reverse<HeapEntry<T>>> = BinaryHeap::with_capacity(chunks.len());

    for (chunk_idx, chunk) in chunks.iter().enumerate() {
        if let Some(&value) = chunk.as_ref().first() {
            heap.push(Reverse(HeapEntry { value, chunk_idx, pos: 0 }));
        }
    }

    let mut out = Vec::with_capacity(total);
    while let Some(Reverse(entry)) = heap.pop() {
        out.push(entry.value);

        let next = entry.pos + 1;
        if let Some(&value) = chunks[entry.chunk_idx].as_ref().get(next) {
            heap.push(Reverse(HeapEntry { value, chunk_idx: entry.chunk_idx, pos: next }));
        }
    }

    debug_assert_eq!(out.len(), total);
    out
}

/// Entry in the merge heap: a chunk head and where it came from.
#[derive(Debug, Clone, Copy)]
struct HeapEntry<T> {
    value: T,
    chunk_idx: usize,
    pos: usize,
}

impl<T: Ord> PartialEq for HeapEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: Ord> Eq for HeapEntry<T> {}

impl<T: Ord> PartialOrd for HeapEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> Ord for HeapEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value).then_with(|| self.chunk_idx.cmp(&other.chunk_idx))
    }
}
