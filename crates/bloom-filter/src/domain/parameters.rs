//! Bloom filter parameter estimation
//!
//! Formulas:
//! - m = ceil(-n * ln(p) / (ln(2)^2))  -- bits
//! - k = ceil(ln(2) * m / n)           -- hash functions
//!
//! Both are rounded up, so the estimate never undershoots the requested
//! capacity.

use std::f64::consts::LN_2;

use tracing::trace;

use super::bloom_filter::MAX_BIT_COUNT;
use crate::error::FilterError;

/// Filter dimensions derived from a target capacity
#[derive(Clone, Debug, PartialEq)]
pub struct FilterParams {
    /// Number of bits in the filter (m)
    pub bit_count: u64,
    /// Number of hash probes per element (k)
    pub hash_count: u64,
    /// Theoretical false positive rate at the requested element count
    pub expected_fpr: f64,
}

/// Estimate bit count and hash count for `n` elements at false positive rate `p`
///
/// # Errors
/// - [`FilterError::ZeroElements`] if `n == 0`
/// - [`FilterError::InvalidFalsePositiveRate`] unless `0 < p < 1`
/// - [`FilterError::CapacityOverflow`] if the estimated bit count exceeds
///   [`MAX_BIT_COUNT`]
pub fn estimate_parameters(n: u64, p: f64) -> Result<FilterParams, FilterError> {
    check_estimate_inputs(n, p)?;

    let n_f = n as f64;
    let ln2_squared = LN_2 * LN_2;

    let bits = (-n_f * p.ln() / ln2_squared).ceil();
    // MAX_BIT_COUNT rounds up to 2^61 as f64, hence `>=`.
    if !bits.is_finite() || bits >= MAX_BIT_COUNT as f64 {
        return Err(FilterError::CapacityOverflow {
            bit_count: bits as u64,
        });
    }
    let bit_count = bits as u64;
    let hash_count = (LN_2 * bit_count as f64 / n_f).ceil() as u64;
    let expected_fpr = calculate_fpr(bit_count, n, hash_count);

    trace!(n, p, bit_count, hash_count, expected_fpr, "estimated filter parameters");

    Ok(FilterParams {
        bit_count,
        hash_count,
        expected_fpr,
    })
}

pub(crate) fn check_estimate_inputs(n: u64, p: f64) -> Result<(), FilterError> {
    if n == 0 {
        return Err(FilterError::ZeroElements);
    }
    // Negated so that NaN is rejected too.
    if !(p > 0.0 && p < 1.0) {
        return Err(FilterError::InvalidFalsePositiveRate { fpr: p });
    }
    Ok(())
}

/// Theoretical false positive rate after `n` insertions
///
/// Formula: FPR = (1 - e^(-kn/m))^k
pub fn calculate_fpr(m: u64, n: u64, k: u64) -> f64 {
    if m == 0 {
        return 1.0;
    }
    let exponent = -(k as f64) * (n as f64) / (m as f64);
    (1.0 - exponent.exp()).powi(k.min(i32::MAX as u64) as i32)
}
