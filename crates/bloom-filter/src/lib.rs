//! # Bloom Filter
//!
//! A probabilistic set-membership structure: a fixed-size bit array answers
//! "have I possibly seen this element?" with no false negatives and a
//! bounded false positive rate.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure logic, no I/O
//!   - `Filter`: packed 64-bit-word bit array with `put` / `test`
//!   - `hash_functions`: four salted base hashes and the probe location formula
//!   - `parameters`: bit count and hash count estimation from capacity
//!   - `FilterConfig` / `FilterConfigBuilder`: validated sizing configuration
//!
//! - **Errors** (`error`): `FilterError`, raised only at construction
//!
//! ## Hashing
//!
//! Each element is hashed four times (MurmurHash3 by default), once per fixed
//! salt, giving `h[0..4]`. Probe `i` of `k` lands on
//!
//! ```text
//! (h[i % 2] + i * h[2 + ((i + i % 2) % 4) / 2]) mod m
//! ```
//!
//! computed with wrapping 64-bit arithmetic.
//!
//! ## Invariants
//!
//! - No false negatives - after `put(e)`, `test(e)` MUST return true
//! - Bits are never cleared; there is no removal, merge or resize
//! - FPR after n insertions approaches (1 - e^(-kn/m))^k
//!
//! ## Thread safety
//!
//! A `Filter` has no internal synchronization. `put` needs `&mut self`;
//! wrap the filter in a `RwLock` to share it between writers.
//!
//! ## Usage Example
//!
//! ```
//! use bloom_filter::{estimate_parameters, Filter};
//!
//! let params = estimate_parameters(1_000, 0.01)?;
//! let mut filter = Filter::new(params.bit_count, params.hash_count)?;
//!
//! filter.put(b"element-1");
//! filter.put_str("element-2");
//!
//! assert!(filter.test_str("element-1"));
//! assert!(filter.test(b"element-2"));
//! # Ok::<(), bloom_filter::FilterError>(())
//! ```

pub mod domain;
pub mod error;

// Re-exports for convenience
pub use domain::{
    calculate_fpr, estimate_parameters, Filter, FilterConfig, FilterConfigBuilder, FilterParams,
    Murmur3, SeededHash, SipHash13, MAX_BIT_COUNT,
};
pub use error::FilterError;
