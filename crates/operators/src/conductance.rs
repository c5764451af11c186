//! Conductance (diffusivity decay) functions for edge-preserving diffusion.
//!
//! A conductance maps a local magnitude `s` (gradient or Laplacian norm) to a
//! factor in (0, 1] that suppresses diffusion where `s` is large. The exact
//! functional form is a configuration choice, not a fixed constant; both
//! classic Perona-Malik forms are offered.

/// Decreasing conductance function `g(s)` with contrast scale `lambda`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conductance {
    /// `g(s) = 1 / (1 + s^2 / lambda^2)`.
    Rational,
    /// `g(s) = exp(-s^2 / lambda^2)`.
    Exponential,
}

impl Conductance {
    /// Parses a conductance name, falling back to `Rational` for anything
    /// unrecognized (operator params never fail; see `pde_filter_core::params`).
    pub fn from_name(name: &str) -> Self {
        match name {
            "exponential" => Conductance::Exponential,
            _ => Conductance::Rational,
        }
    }

    /// The registry name of this conductance.
    pub fn name(&self) -> &'static str {
        match self {
            Conductance::Rational => "rational",
            Conductance::Exponential => "exponential",
        }
    }

    /// Evaluates `g(s)` for magnitude `s >= 0` and contrast scale `lambda`.
    pub fn eval(&self, s: f64, lambda: f64) -> f64 {
        let r = (s / lambda).powi(2);
        match self {
            Conductance::Rational => 1.0 / (1.0 + r),
            Conductance::Exponential => (-r).exp(),
        }
    }
}
