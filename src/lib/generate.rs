//! Random input generation.
//!
//! Provides seeded RNG creation for reproducible runs and a generator of random
//! integers in `[0, 1000)`.

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use crate::errors::Result;
use crate::sort::MIN_SEQUENCE_LEN;
use crate::validation::validate_min_len;

/// Exclusive upper bound of generated values; the lower bound is zero.
pub const RANDOM_VALUE_BOUND: i64 = 1000;

/// Create a random number generator, optionally seeded for reproducibility.
///
/// With `None` the generator is seeded from OS entropy.
///
/// # Examples
///
/// ```
/// use chunksort_lib::generate::create_rng;
///
/// let mut rng1 = create_rng(Some(42));
/// let mut rng2 = create_rng(Some(42));
/// // rng1 and rng2 will produce identical sequences
/// ```
#[must_use]
pub fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => rand::make_rng(),
    }
}

/// Generates `count` random integers in `[0, 1000)`.
///
/// # Errors
///
/// Returns [`crate::errors::ChunkSortError::PreconditionViolation`] if `count`
/// is below the pipeline minimum of ten.
///
/// # Examples
///
/// ```
/// use chunksort_lib::generate::{create_rng, generate_random_numbers};
///
/// let values = generate_random_numbers(20, &mut create_rng(Some(1))).unwrap();
/// assert_eq!(values.len(), 20);
/// assert!(values.iter().all(|v| (0..1000).contains(v)));
/// ```
pub fn generate_random_numbers(count: usize, rng: &mut StdRng) -> Result<Vec<i64>> {
    validate_min_len(count, MIN_SEQUENCE_LEN)?;
    Ok((0..count).map(|_| rng.random_range(0..RANDOM_VALUE_BOUND)).collect())
}
