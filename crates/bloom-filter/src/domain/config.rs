//! Filter configuration and validation
//!
//! # Example
//!
//! ```
//! use bloom_filter::{Filter, FilterConfigBuilder};
//!
//! let config = FilterConfigBuilder::new()
//!     .expected_elements(10_000)
//!     .false_positive_rate(0.01)
//!     .build()
//!     .expect("valid config");
//!
//! let filter = Filter::from_config(&config).expect("valid dimensions");
//! assert_eq!(filter.hash_count(), 7);
//! ```

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::parameters::{check_estimate_inputs, estimate_parameters, FilterParams};
use crate::error::FilterError;

/// Target capacity of a filter
///
/// Missing fields fall back to [`FilterConfig::default`] when deserializing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Number of elements the filter is sized for (n)
    pub expected_elements: u64,
    /// Target false positive rate at `expected_elements` (p)
    pub false_positive_rate: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            expected_elements: 1_000_000,
            false_positive_rate: 0.001, // ~1.7 MiB, 10 probes
        }
    }
}

impl FilterConfig {
    /// Create a new configuration with validation
    pub fn new(expected_elements: u64, false_positive_rate: f64) -> Result<Self, FilterError> {
        let config = Self {
            expected_elements,
            false_positive_rate,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that the estimator can size a filter from this configuration
    pub fn validate(&self) -> Result<(), FilterError> {
        check_estimate_inputs(self.expected_elements, self.false_positive_rate).map_err(|err| {
            warn!(
                expected_elements = self.expected_elements,
                false_positive_rate = self.false_positive_rate,
                %err,
                "rejected filter config"
            );
            err
        })
    }

    /// Estimated filter dimensions for this configuration
    pub fn params(&self) -> Result<FilterParams, FilterError> {
        self.validate()?;
        estimate_parameters(self.expected_elements, self.false_positive_rate)
    }

    pub fn with_expected_elements(mut self, n: u64) -> Self {
        self.expected_elements = n;
        self
    }

    pub fn with_false_positive_rate(mut self, p: f64) -> Self {
        self.false_positive_rate = p;
        self
    }
}

/// Builder for [`FilterConfig`] with validation
#[derive(Default)]
pub struct FilterConfigBuilder {
    expected_elements: Option<u64>,
    false_positive_rate: Option<f64>,
}

impl FilterConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of elements the filter should hold
    pub fn expected_elements(mut self, n: u64) -> Self {
        self.expected_elements = Some(n);
        self
    }

    /// Set the target false positive rate (strictly between 0 and 1)
    pub fn false_positive_rate(mut self, p: f64) -> Self {
        self.false_positive_rate = Some(p);
        self
    }

    /// Build the config, filling unset fields from the defaults
    pub fn build(self) -> Result<FilterConfig, FilterError> {
        let defaults = FilterConfig::default();

        let config = FilterConfig {
            expected_elements: self.expected_elements.unwrap_or(defaults.expected_elements),
            false_positive_rate: self
                .false_positive_rate
                .unwrap_or(defaults.false_positive_rate),
        };

        config.validate()?;
        Ok(config)
    }
}
