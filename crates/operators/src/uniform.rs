//! Uniform (isotropic) diffusion: the discrete heat equation.
//!
//! The derivative is the 5-point Laplacian of the field, optionally scaled by
//! a constant diffusivity. Driving the RK4 stepper with this operator smooths
//! the image uniformly, with strength growing with `step * iterations`.

use crate::stencil::laplacian;
use pde_filter_core::params::param_f64;
use pde_filter_core::{ImageField, SpatialOperator, CHANNELS};
use serde_json::{json, Value};

/// Default constant diffusivity (unscaled Laplacian).
const DEFAULT_DIFFUSIVITY: f64 = 1.0;

/// Parameters for [`UniformDiffusion`].
#[derive(Debug, Clone, Copy)]
pub struct UniformDiffusionParams {
    /// Constant multiplier applied to the Laplacian.
    pub diffusivity: f64,
}

impl Default for UniformDiffusionParams {
    fn default() -> Self {
        Self {
            diffusivity: DEFAULT_DIFFUSIVITY,
        }
    }
}

impl UniformDiffusionParams {
    /// Extracts parameters from a JSON object, falling back to defaults.
    pub fn from_json(params: &Value) -> Self {
        Self {
            diffusivity: param_f64(params, "diffusivity", DEFAULT_DIFFUSIVITY),
        }
    }
}

/// Isotropic heat-equation smoothing operator.
pub struct UniformDiffusion {
    params: UniformDiffusionParams,
}

impl UniformDiffusion {
    pub fn new(params: UniformDiffusionParams) -> Self {
        Self { params }
    }

    pub fn from_json(json_params: &Value) -> Self {
        Self::new(UniformDiffusionParams::from_json(json_params))
    }
}

impl SpatialOperator for UniformDiffusion {
    fn derivative(&mut self, _t: f64, u: &ImageField) -> ImageField {
        let mut out = u.clone();
        let d = self.params.diffusivity;
        for y in 0..u.height() as isize {
            for x in 0..u.width() as isize {
                for c in 0..CHANNELS {
                    out.set(x, y, c, d * laplacian(u, x, y, c));
                }
            }
        }
        out
    }

    fn params(&self) -> Value {
        json!({"diffusivity": self.params.diffusivity})
    }

    fn param_schema(&self) -> Value {
        json!({
            "diffusivity": {
                "type": "number",
                "default": DEFAULT_DIFFUSIVITY,
                "min": 0.0,
                "max": 10.0,
                "description": "Constant multiplier applied to the Laplacian"
            }
        })
    }
}
