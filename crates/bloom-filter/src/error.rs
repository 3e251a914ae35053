//! Error types for filter construction and parameter estimation

use thiserror::Error;

/// Errors raised when a filter or its parameters are built from invalid input
///
/// Only construction can fail. Once a `Filter` exists, `put` and `test`
/// are total.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum FilterError {
    #[error("Bit count must be at least 1")]
    ZeroBitCount,

    #[error("Hash count must be at least 1")]
    ZeroHashCount,

    #[error("Bit count {bit_count} is not addressable on this platform")]
    CapacityOverflow { bit_count: u64 },

    #[error("Expected element count must be at least 1")]
    ZeroElements,

    #[error("Invalid false positive rate: {fpr} (must be strictly between 0 and 1)")]
    InvalidFalsePositiveRate { fpr: f64 },
}
