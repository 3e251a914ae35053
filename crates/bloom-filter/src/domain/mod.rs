//! Domain Layer - Pure filter logic
//!
//! This layer contains:
//! - Core Bloom filter implementation
//! - Seeded hash functions and probe location derivation
//! - Parameter estimation
//! - Configuration
//!
//! RULES:
//! - No I/O operations
//! - No async code
//! - Pure functions where possible

pub mod bloom_filter;
pub mod config;
pub mod hash_functions;
pub mod parameters;

pub use bloom_filter::{Filter, MAX_BIT_COUNT};
pub use config::{FilterConfig, FilterConfigBuilder};
pub use hash_functions::{compute_base_hashes, location, Murmur3, SeededHash, SipHash13, SALTS};
pub use parameters::{calculate_fpr, estimate_parameters, FilterParams};
