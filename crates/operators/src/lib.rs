#![deny(unsafe_code)]
//! Spatial-derivative operators for the PDE image filter, plus a string-keyed
//! registry and image I/O.
//!
//! This crate sits between `pde-filter-core` (which defines the
//! `SpatialOperator` trait and the RK4 stepper) and the CLI. The registry
//! keeps operator dispatch in one place so every front end selects filters
//! the same way.

pub mod anisotropic;
pub mod brightness;
pub mod conductance;
pub mod gradient_norm;
pub mod laplacian_norm;
pub mod pixel;
pub mod stochastic;
mod stencil;
pub mod uniform;

#[cfg(feature = "png")]
pub mod snapshot;

use pde_filter_core::{FilterError, ImageField, SpatialOperator};
use serde_json::Value;

pub use anisotropic::{AnisotropicDiffusion, AnisotropicParams};
pub use brightness::{Brightness, BrightnessParams};
pub use conductance::Conductance;
pub use gradient_norm::{GradientNormDiffusion, GradientNormParams};
pub use laplacian_norm::{LaplacianNormDiffusion, LaplacianNormParams};
pub use stochastic::{StochasticPattern, StochasticPatternParams};
pub use uniform::{UniformDiffusion, UniformDiffusionParams};

/// All available operator names.
const OPERATOR_NAMES: &[&str] = &[
    "uniform-diffusion",
    "gradient-norm",
    "laplacian-norm",
    "anisotropic",
    "brightness",
    "stochastic-pattern",
];

/// Enumeration of all available spatial operators.
///
/// Wraps each operator implementation and delegates `SpatialOperator` trait
/// methods. Use [`OperatorKind::from_name`] for string-based construction.
pub enum OperatorKind {
    /// Isotropic heat-equation smoothing.
    Uniform(UniformDiffusion),
    /// Edge-preserving diffusion weighted by gradient magnitude.
    GradientNorm(GradientNormDiffusion),
    /// Diffusion weighted by Laplacian magnitude.
    LaplacianNorm(LaplacianNormDiffusion),
    /// Per-direction Perona-Malik diffusion.
    Anisotropic(AnisotropicDiffusion),
    /// Brightness drift.
    Brightness(Brightness),
    /// Seeded noise accumulation ("Prince de Galles" pattern).
    Stochastic(StochasticPattern),
}

impl OperatorKind {
    /// Constructs an operator by name.
    ///
    /// `seed` is consumed only by the stochastic operator; `params` carries
    /// the operator-specific overrides (missing keys fall back to defaults).
    ///
    /// Returns `FilterError::UnknownOperator` if the name is not recognized.
    pub fn from_name(name: &str, seed: u64, params: &Value) -> Result<Self, FilterError> {
        match name {
            "uniform-diffusion" => Ok(OperatorKind::Uniform(UniformDiffusion::from_json(params))),
            "gradient-norm" => Ok(OperatorKind::GradientNorm(GradientNormDiffusion::from_json(
                params,
            ))),
            "laplacian-norm" => Ok(OperatorKind::LaplacianNorm(
                LaplacianNormDiffusion::from_json(params),
            )),
            "anisotropic" => Ok(OperatorKind::Anisotropic(AnisotropicDiffusion::from_json(
                params,
            ))),
            "brightness" => Ok(OperatorKind::Brightness(Brightness::from_json(params))),
            "stochastic-pattern" => Ok(OperatorKind::Stochastic(StochasticPattern::from_json(
                seed, params,
            ))),
            _ => Err(FilterError::UnknownOperator(name.to_string())),
        }
    }

    /// Returns a slice of all recognized operator names.
    pub fn list_operators() -> &'static [&'static str] {
        OPERATOR_NAMES
    }
}

impl SpatialOperator for OperatorKind {
    fn derivative(&mut self, t: f64, u: &ImageField) -> ImageField {
        match self {
            OperatorKind::Uniform(o) => o.derivative(t, u),
            OperatorKind::GradientNorm(o) => o.derivative(t, u),
            OperatorKind::LaplacianNorm(o) => o.derivative(t, u),
            OperatorKind::Anisotropic(o) => o.derivative(t, u),
            OperatorKind::Brightness(o) => o.derivative(t, u),
            OperatorKind::Stochastic(o) => o.derivative(t, u),
        }
    }

    fn params(&self) -> Value {
        match self {
            OperatorKind::Uniform(o) => o.params(),
            OperatorKind::GradientNorm(o) => o.params(),
            OperatorKind::LaplacianNorm(o) => o.params(),
            OperatorKind::Anisotropic(o) => o.params(),
            OperatorKind::Brightness(o) => o.params(),
            OperatorKind::Stochastic(o) => o.params(),
        }
    }

    fn param_schema(&self) -> Value {
        match self {
            OperatorKind::Uniform(o) => o.param_schema(),
            OperatorKind::GradientNorm(o) => o.param_schema(),
            OperatorKind::LaplacianNorm(o) => o.param_schema(),
            OperatorKind::Anisotropic(o) => o.param_schema(),
            OperatorKind::Brightness(o) => o.param_schema(),
            OperatorKind::Stochastic(o) => o.param_schema(),
        }
    }
}
