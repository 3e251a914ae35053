//! Hash functions for the Bloom filter
//!
//! Every element is hashed four times with the same seeded function, once per
//! salt in [`SALTS`]. The k probe positions are then derived from those four
//! base values by [`location`], so the cost of an operation is four hash
//! passes no matter how large k is.
//!
//! The default hasher is MurmurHash3 (x64, 128-bit, low half). A SipHash-1-3
//! hasher is provided for callers who want keyed hashing instead.

use std::hash::Hasher;
use std::io::Cursor;

use siphasher::sip::SipHasher13;

/// Fixed seeds for the four base hashes
pub const SALTS: [u32; 4] = [0xab12_3456, 0xccdd_aa32, 0x34dd_acdd, 0x1255_abdd];

/// A deterministic 64-bit hash over bytes, parameterized by a seed
///
/// Implementations must return the same output for the same `(data, seed)`
/// pair on every call.
pub trait SeededHash {
    fn hash_with_seed(&self, data: &[u8], seed: u32) -> u64;
}

/// MurmurHash3 x64/128, truncated to the lower 64 bits
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Murmur3;

impl SeededHash for Murmur3 {
    fn hash_with_seed(&self, data: &[u8], seed: u32) -> u64 {
        let mut cursor = Cursor::new(data);
        // Reads from an in-memory cursor never fail.
        let hash = murmur3::murmur3_x64_128(&mut cursor, seed).unwrap_or(0);
        hash as u64
    }
}

/// SipHash-1-3 keyed with `(seed, 0)`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SipHash13;

impl SeededHash for SipHash13 {
    fn hash_with_seed(&self, data: &[u8], seed: u32) -> u64 {
        let mut hasher = SipHasher13::new_with_keys(u64::from(seed), 0);
        hasher.write(data);
        hasher.finish()
    }
}

/// Compute the four base hash values for an element
pub fn compute_base_hashes<H: SeededHash + ?Sized>(hasher: &H, data: &[u8]) -> [u64; 4] {
    [
        hasher.hash_with_seed(data, SALTS[0]),
        hasher.hash_with_seed(data, SALTS[1]),
        hasher.hash_with_seed(data, SALTS[2]),
        hasher.hash_with_seed(data, SALTS[3]),
    ]
}

/// The i-th raw probe value, before reduction modulo the bit count
///
/// `h[i % 2] + i * h[2 + ((i + i % 2) % 4) / 2]`, in wrapping u64 arithmetic.
/// Even and odd probes start from different base values and draw their
/// multiplier from alternating halves of the second pair.
#[inline]
pub fn location(hashes: &[u64; 4], i: u64) -> u64 {
    let base = hashes[(i % 2) as usize];
    let step = hashes[2 + (((i + (i % 2)) % 4) / 2) as usize];
    base.wrapping_add(i.wrapping_mul(step))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_murmur3_hash_deterministic() {
        let element = b"test_element_0xABCD";

        let hash1 = Murmur3.hash_with_seed(element, SALTS[0]);
        let hash2 = Murmur3.hash_with_seed(element, SALTS[0]);

        assert_eq!(hash1, hash2, "Same input with same seed must produce same output");
    }

    #[test]
    fn test_murmur3_different_seed_different_output() {
        let element = b"test_element_0xABCD";

        let hash1 = Murmur3.hash_with_seed(element, SALTS[0]);
        let hash2 = Murmur3.hash_with_seed(element, SALTS[1]);

        assert_ne!(hash1, hash2, "Different seeds must produce different outputs");
    }

    #[test]
    fn test_murmur3_reference_vector() {
        // Low half of MurmurHash3_x64_128("hello", 0)
        assert_eq!(Murmur3.hash_with_seed(b"hello", 0), 0xcbd8_a7b3_41bd_9b02);
    }

    #[test]
    fn test_siphash_deterministic_and_seeded() {
        let element = b"test_element_0xABCD";

        assert_eq!(
            SipHash13.hash_with_seed(element, 7),
            SipHash13.hash_with_seed(element, 7)
        );
        assert_ne!(
            SipHash13.hash_with_seed(element, 7),
            SipHash13.hash_with_seed(element, 8)
        );
    }

    #[test]
    fn test_base_hashes_are_distinct() {
        let hashes = compute_base_hashes(&Murmur3, b"element-1");
        let unique: std::collections::HashSet<_> = hashes.iter().collect();
        assert_eq!(unique.len(), 4, "Four salts should yield four distinct values");
    }

    #[test]
    fn test_location_index_selection() {
        let h = [1, 10, 100, 1000];

        // i=0: h[0] + 0
        assert_eq!(location(&h, 0), 1);
        // i=1: h[1] + 1 * h[2 + ((1 + 1) % 4) / 2] = h[1] + h[3]
        assert_eq!(location(&h, 1), 10 + 1000);
        // i=2: h[0] + 2 * h[2 + (2 % 4) / 2] = h[0] + 2 * h[3]
        assert_eq!(location(&h, 2), 1 + 2 * 1000);
        // i=3: h[1] + 3 * h[2 + (4 % 4) / 2] = h[1] + 3 * h[2]
        assert_eq!(location(&h, 3), 10 + 3 * 100);
        // i=4: h[0] + 4 * h[2 + (4 % 4) / 2] = h[0] + 4 * h[2]
        assert_eq!(location(&h, 4), 1 + 4 * 100);
        // i=5: h[1] + 5 * h[2 + (6 % 4) / 2] = h[1] + 5 * h[3]
        assert_eq!(location(&h, 5), 10 + 5 * 1000);
    }

    #[test]
    fn test_location_wraps_on_overflow() {
        let h = [u64::MAX, 0, 0, 2];
        // u64::MAX + 2 * 2 wraps to 3
        assert_eq!(location(&h, 2), 3);
    }

    #[test]
    fn test_hash_uniformity() {
        let m = 1000u64;
        let k = 7u64;
        let mut counts = vec![0usize; 10];

        for i in 0..1000 {
            let element = format!("element_{}", i);
            let hashes = compute_base_hashes(&Murmur3, element.as_bytes());
            for j in 0..k {
                let pos = location(&hashes, j) % m;
                counts[(pos / 100) as usize] += 1;
            }
        }

        // Each bucket should hold roughly 1000 * 7 / 10 = 700 entries
        let expected = 700;
        let min_acceptable = expected / 2;
        let max_acceptable = expected * 3 / 2;

        for (i, count) in counts.iter().enumerate() {
            assert!(
                *count >= min_acceptable && *count <= max_acceptable,
                "Bucket {} has {} entries, expected ~{}",
                i,
                count,
                expected
            );
        }
    }
}
