//! Brightness drift expressed as a PDE right-hand side.
//!
//! The derivative is `offset + gain * u`, applied uniformly to every pixel
//! and channel: a constant additive drift plus an optional multiplicative
//! term. Routing a plain brightness adjustment through the same RK4 stepper
//! keeps one code path for every filter and makes the adjustment strength a
//! function of `step * iterations`, like every other operator.

use pde_filter_core::params::param_f64;
use pde_filter_core::{ImageField, SpatialOperator};
use serde_json::{json, Value};

/// Default additive drift per unit of synthetic time.
const DEFAULT_OFFSET: f64 = 1.0;
/// Default multiplicative rate (0 = purely additive drift).
const DEFAULT_GAIN: f64 = 0.0;

/// Parameters for [`Brightness`].
#[derive(Debug, Clone, Copy)]
pub struct BrightnessParams {
    /// Additive drift per unit time.
    pub offset: f64,
    /// Multiplicative rate: `gain * u` contribution to the derivative.
    pub gain: f64,
}

impl Default for BrightnessParams {
    fn default() -> Self {
        Self {
            offset: DEFAULT_OFFSET,
            gain: DEFAULT_GAIN,
        }
    }
}

impl BrightnessParams {
    /// Extracts parameters from a JSON object, falling back to defaults.
    pub fn from_json(params: &Value) -> Self {
        Self {
            offset: param_f64(params, "offset", DEFAULT_OFFSET),
            gain: param_f64(params, "gain", DEFAULT_GAIN),
        }
    }
}

/// Brightness/luminosity adjustment operator.
pub struct Brightness {
    params: BrightnessParams,
}

impl Brightness {
    pub fn new(params: BrightnessParams) -> Self {
        Self { params }
    }

    pub fn from_json(json_params: &Value) -> Self {
        Self::new(BrightnessParams::from_json(json_params))
    }
}

impl SpatialOperator for Brightness {
    fn derivative(&mut self, _t: f64, u: &ImageField) -> ImageField {
        let mut out = u.clone();
        let BrightnessParams { offset, gain } = self.params;
        for (dst, &src) in out.data_mut().iter_mut().zip(u.data().iter()) {
            *dst = offset + gain * src;
        }
        out
    }

    fn params(&self) -> Value {
        json!({
            "offset": self.params.offset,
            "gain": self.params.gain,
        })
    }

    fn param_schema(&self) -> Value {
        json!({
            "offset": {
                "type": "number",
                "default": DEFAULT_OFFSET,
                "min": -255.0,
                "max": 255.0,
                "description": "Additive brightness drift per unit time"
            },
            "gain": {
                "type": "number",
                "default": DEFAULT_GAIN,
                "min": -1.0,
                "max": 1.0,
                "description": "Multiplicative rate applied to the current value"
            }
        })
    }
}
