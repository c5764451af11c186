//! Reproducible specification for a filter run.
//!
//! A [`Recipe`] captures everything needed to recreate a filtered image from
//! the same input: operator name, integration parameters, PRNG seed, and
//! operator parameter overrides.

use crate::error::FilterError;
use serde::{Deserialize, Serialize};

/// Reproducible specification for a filter run.
///
/// Two identical `Recipe` values applied to the same input image produce
/// bit-identical output (the stochastic operator draws from a seeded PRNG).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    /// Registry name of the spatial operator.
    pub operator: String,
    /// Integration start time.
    pub t0: f64,
    /// Fixed RK4 step size. Must be positive and finite.
    pub step: f64,
    /// Number of RK4 steps.
    pub iterations: usize,
    /// PRNG seed (only the stochastic operator consumes it).
    pub seed: u64,
    /// Operator parameter overrides.
    pub params: serde_json::Value,
}

impl Recipe {
    /// Creates a recipe with default params (`{}`), `t0 = 0`, and no steps.
    pub fn new(operator: &str, step: f64, seed: u64) -> Self {
        Self {
            operator: operator.to_string(),
            t0: 0.0,
            step,
            iterations: 0,
            seed,
            params: serde_json::Value::Object(serde_json::Map::new()),
        }
    }

    /// Validates the integration parameters.
    ///
    /// Returns `FilterError::InvalidStep` unless `step` is positive and
    /// finite. Iteration count needs no check: zero is the identity run.
    pub fn validate(&self) -> Result<(), FilterError> {
        if !(self.step > 0.0 && self.step.is_finite()) {
            return Err(FilterError::InvalidStep(self.step));
        }
        Ok(())
    }
}
