//! The `SpatialOperator` trait: the right-hand side of the image PDE.
//!
//! An operator maps the current field state to its instantaneous rate of
//! change, `dU/dt = operator(t, U)`. The trait is object-safe so operators
//! can be selected at runtime (`Box<dyn SpatialOperator>`, registry dispatch).

use crate::field::ImageField;
use serde_json::Value;

/// Spatial-derivative operator driving the RK4 stepper.
///
/// Implementations must return a field of the **same shape** as their input;
/// the stepper rejects violations when combining stages. Channels must be
/// treated independently (never mixed).
///
/// `derivative` takes `&mut self` only so the stochastic pattern operator can
/// own and advance its PRNG; every deterministic operator is a pure function
/// of `(t, u)` and retains no state between calls.
pub trait SpatialOperator {
    /// Computes the derivative field for state `u` at time `t`.
    fn derivative(&mut self, t: f64, u: &ImageField) -> ImageField;

    /// Current parameter values as a JSON object.
    fn params(&self) -> Value;

    /// Schema describing all available parameters, their types, ranges, and defaults.
    fn param_schema(&self) -> Value;
}
