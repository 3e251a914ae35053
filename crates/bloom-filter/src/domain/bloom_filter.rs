//! Core Bloom filter implementation
//!
//! INVARIANTS:
//! - Bits are only ever set, never cleared
//! - No false negatives: after `put(e)`, `test(e)` MUST return true
//! - The word array is sized `ceil(bit_count / 64)` at construction and never
//!   reallocated

use bitvec::prelude::*;
use tracing::debug;

use super::config::FilterConfig;
use super::hash_functions::{compute_base_hashes, location, Murmur3, SeededHash};
use super::parameters::{calculate_fpr, estimate_parameters};
use crate::error::FilterError;

/// Largest bit count the backing bit vector can address
pub const MAX_BIT_COUNT: u64 = BitSlice::<u64, Lsb0>::MAX_BITS as u64;

/// Bloom filter for probabilistic membership testing
///
/// Bits live in 64-bit words: bit `i` is bit `i % 64` (least significant
/// first) of word `i / 64`.
///
/// `put` takes `&mut self`, so sharing a filter across threads needs an
/// external lock such as `RwLock<Filter>`. Setting a bit is a
/// read-modify-write of a whole word, and unsynchronized writers would lose
/// each other's bits.
#[derive(Clone, Debug)]
pub struct Filter<H = Murmur3> {
    /// Bit array storing the filter state
    bits: BitVec<u64, Lsb0>,
    /// Size in bits (m)
    bit_count: u64,
    /// Number of probes per element (k)
    hash_count: u64,
    hasher: H,
}

impl Filter<Murmur3> {
    /// Create an empty filter with `bit_count` bits and `hash_count` probes
    ///
    /// # Errors
    /// Fails if either count is zero, or if `bit_count` exceeds
    /// [`MAX_BIT_COUNT`].
    pub fn new(bit_count: u64, hash_count: u64) -> Result<Self, FilterError> {
        Self::with_hasher(bit_count, hash_count, Murmur3)
    }

    /// Create a filter sized for `expected_elements` at `false_positive_rate`
    pub fn with_estimate(
        expected_elements: u64,
        false_positive_rate: f64,
    ) -> Result<Self, FilterError> {
        let params = estimate_parameters(expected_elements, false_positive_rate)?;
        debug!(
            expected_elements,
            false_positive_rate,
            expected_fpr = params.expected_fpr,
            "sizing bloom filter from estimate"
        );
        Self::new(params.bit_count, params.hash_count)
    }

    /// Create a filter sized by a validated [`FilterConfig`]
    pub fn from_config(config: &FilterConfig) -> Result<Self, FilterError> {
        config.validate()?;
        Self::with_estimate(config.expected_elements, config.false_positive_rate)
    }
}

impl<H: SeededHash> Filter<H> {
    /// Create an empty filter that hashes with `hasher`
    pub fn with_hasher(bit_count: u64, hash_count: u64, hasher: H) -> Result<Self, FilterError> {
        if bit_count == 0 {
            return Err(FilterError::ZeroBitCount);
        }
        if hash_count == 0 {
            return Err(FilterError::ZeroHashCount);
        }
        if bit_count > MAX_BIT_COUNT {
            return Err(FilterError::CapacityOverflow { bit_count });
        }

        let bits = bitvec![u64, Lsb0; 0; bit_count as usize];
        debug!(
            bit_count,
            hash_count,
            words = bits.as_raw_slice().len(),
            "created bloom filter"
        );

        Ok(Self {
            bits,
            bit_count,
            hash_count,
            hasher,
        })
    }

    /// Insert an element into the filter
    ///
    /// Inserting the same element again has no effect.
    pub fn put(&mut self, data: &[u8]) {
        let hashes = compute_base_hashes(&self.hasher, data);
        for i in 0..self.hash_count {
            let pos = self.location(&hashes, i);
            self.set_bit(pos);
        }
    }

    /// Insert a string element; equivalent to `put(s.as_bytes())`
    pub fn put_str(&mut self, s: &str) {
        self.put(s.as_bytes());
    }

    /// Test if an element might be in the filter
    ///
    /// Returns:
    /// - `true` if the element might be in the set (could be false positive)
    /// - `false` if the element is definitely NOT in the set
    pub fn test(&self, data: &[u8]) -> bool {
        let hashes = compute_base_hashes(&self.hasher, data);
        (0..self.hash_count).all(|i| self.bit_is_set(self.location(&hashes, i)))
    }

    /// Test a string element; equivalent to `test(s.as_bytes())`
    pub fn test_str(&self, s: &str) -> bool {
        self.test(s.as_bytes())
    }

    #[inline]
    fn location(&self, hashes: &[u64; 4], i: u64) -> u64 {
        location(hashes, i) % self.bit_count
    }

    #[inline]
    pub(crate) fn set_bit(&mut self, i: u64) {
        self.bits.set(i as usize, true);
    }

    #[inline]
    pub(crate) fn bit_is_set(&self, i: u64) -> bool {
        self.bits[i as usize]
    }

    /// Get the filter size in bits
    pub fn bit_count(&self) -> u64 {
        self.bit_count
    }

    /// Get the number of probes per element
    pub fn hash_count(&self) -> u64 {
        self.hash_count
    }

    /// The packed 64-bit words backing the filter
    pub fn words(&self) -> &[u64] {
        self.bits.as_raw_slice()
    }

    /// Get the number of bits set in the filter
    pub fn bits_set(&self) -> u64 {
        self.bits.count_ones() as u64
    }

    /// Fraction of bits currently set
    pub fn fill_ratio(&self) -> f64 {
        self.bits_set() as f64 / self.bit_count as f64
    }

    /// Theoretical false positive rate after `inserted` distinct insertions
    ///
    /// Formula: FPR = (1 - e^(-kn/m))^k
    pub fn false_positive_rate(&self, inserted: u64) -> f64 {
        calculate_fpr(self.bit_count, inserted, self.hash_count)
    }

    pub fn hasher(&self) -> &H {
        &self.hasher
    }
}
