//! Stochastic pattern generator ("Prince de Galles" noise weave).
//!
//! The one operator that is not a spatial derivative at all: it ignores the
//! field's values entirely and returns fresh per-pixel, per-channel noise on
//! every invocation, scaled by an amplitude. Run through the RK4 stepper the
//! noise accumulates into a woven check pattern over the original image.
//!
//! Randomness comes from an owned [`Xorshift64`] seeded at construction, so a
//! fixed seed reproduces the pattern bit-for-bit while two different seeds
//! diverge immediately.

use pde_filter_core::params::param_f64;
use pde_filter_core::{ImageField, SpatialOperator, Xorshift64};
use serde_json::{json, Value};

/// Default noise amplitude.
const DEFAULT_AMPLITUDE: f64 = 1.0;

/// Parameters for [`StochasticPattern`].
#[derive(Debug, Clone, Copy)]
pub struct StochasticPatternParams {
    /// Noise values are uniform in `[-amplitude, amplitude)`.
    pub amplitude: f64,
}

impl Default for StochasticPatternParams {
    fn default() -> Self {
        Self {
            amplitude: DEFAULT_AMPLITUDE,
        }
    }
}

impl StochasticPatternParams {
    /// Extracts parameters from a JSON object, falling back to defaults.
    pub fn from_json(params: &Value) -> Self {
        Self {
            amplitude: param_f64(params, "amplitude", DEFAULT_AMPLITUDE),
        }
    }
}

/// Seeded noise-injection operator.
pub struct StochasticPattern {
    params: StochasticPatternParams,
    rng: Xorshift64,
}

impl StochasticPattern {
    pub fn new(seed: u64, params: StochasticPatternParams) -> Self {
        Self {
            params,
            rng: Xorshift64::new(seed),
        }
    }

    pub fn from_json(seed: u64, json_params: &Value) -> Self {
        Self::new(seed, StochasticPatternParams::from_json(json_params))
    }
}

impl SpatialOperator for StochasticPattern {
    fn derivative(&mut self, _t: f64, u: &ImageField) -> ImageField {
        let mut out = u.clone();
        let amp = self.params.amplitude;
        for v in out.data_mut() {
            *v = amp * self.rng.next_signed();
        }
        out
    }

    fn params(&self) -> Value {
        json!({"amplitude": self.params.amplitude})
    }

    fn param_schema(&self) -> Value {
        json!({
            "amplitude": {
                "type": "number",
                "default": DEFAULT_AMPLITUDE,
                "min": 0.0,
                "max": 255.0,
                "description": "Noise values are uniform in [-amplitude, amplitude)"
            }
        })
    }
}
