//! Chunk partitioning.
//!
//! Splits a sequence into `k = max(4, ceil(sqrt(n)))` contiguous, non-overlapping
//! windows. Sizes differ by at most one: the first `n % k` chunks hold
//! `n / k + 1` values and the rest hold `n / k`. When `k > n` the trailing chunks
//! are empty.

/// Smallest number of chunks any sequence is split into.
pub const MIN_CHUNKS: usize = 4;

/// Number of chunks used for a sequence of length `n`.
///
/// # Examples
///
/// ```
/// use chunksort_lib::sort::num_chunks;
///
/// assert_eq!(num_chunks(10), 4);
/// assert_eq!(num_chunks(17), 5);
/// assert_eq!(num_chunks(100), 10);
/// ```
#[must_use]
pub fn num_chunks(n: usize) -> usize {
    ceil_sqrt(n).max(MIN_CHUNKS)
}

/// Sizes of each chunk for a sequence of length `n`, in chunk order.
///
/// The sizes always sum to `n` and there are always [`num_chunks`]`(n)` of them.
#[must_use]
pub fn chunk_sizes(n: usize) -> Vec<usize> {
    let k = num_chunks(n);
    let base = n / k;
    let rem = n % k;
    (0..k).map(|i| if i < rem { base + 1 } else { base }).collect()
}

/// Splits `values` into [`num_chunks`] mutable windows over the same storage.
///
/// Concatenating the returned chunks in order reproduces `values` exactly.
#[must_use]
pub fn split_into_chunks<T>(values: &mut [T]) -> Vec<&mut [T]> {
    let sizes = chunk_sizes(values.len());
    let mut chunks = Vec::with_capacity(sizes.len());
    let mut rest = values;
    for size in sizes {
        let (head, tail) = std::mem::take(&mut rest).split_at_mut(size);
        chunks.push(head);
        rest = tail;
    }
    debug_assert!(rest.is_empty());
    chunks
}

/// Integer ceiling of the square root, exact at perfect squares.
fn ceil_sqrt(n: usize) -> usize {
    let root = n.isqrt();
    if root * root < n { root + 1 } else { root }
}
