//! Classical 4th-order Runge-Kutta time integration of an image field.
//!
//! `integrate` advances `dU/dt = operator(t, U)` by `nbiter` fixed-size steps.
//! Steps are strictly sequential and each step's four stages are
//! data-dependent; no reordering preserves the numeric result. No clamping or
//! finiteness checking happens during integration: out-of-range intermediates
//! are expected, and blow-up from an oversized step is a caller-observable
//! outcome (see [`ImageField::is_finite`]).

use crate::error::FilterError;
use crate::field::ImageField;
use crate::operator::SpatialOperator;

/// Integrates `u0` forward by `nbiter` RK4 steps of size `h` starting at `t0`.
///
/// The caller's field is never mutated; integration runs on an internal copy
/// and the final state is returned. `nbiter == 0` returns a copy of `u0`
/// unchanged.
///
/// # Errors
///
/// - `FilterError::InvalidStep` if `h` is non-positive or non-finite,
///   reported before any stepping occurs.
/// - `FilterError::OperatorContract` if the operator returns a derivative
///   whose shape differs from the field's.
pub fn integrate(
    operator: &mut dyn SpatialOperator,
    u0: &ImageField,
    t0: f64,
    h: f64,
    nbiter: usize,
) -> Result<ImageField, FilterError> {
    if !(h > 0.0 && h.is_finite()) {
        return Err(FilterError::InvalidStep(h));
    }

    let mut u = u0.clone();
    let mut t = t0;
    let half = h / 2.0;

    for _ in 0..nbiter {
        let k1 = stage(operator, t, &u)?;
        let p1 = u.axpy(half, &k1)?;
        let k2 = stage(operator, t + half, &p1)?;
        let p2 = u.axpy(half, &k2)?;
        let k3 = stage(operator, t + half, &p2)?;
        let p3 = u.axpy(h, &k3)?;
        let k4 = stage(operator, t + h, &p3)?;

        u = u.rk4_combine(h, &k1, &k2, &k3, &k4)?;
        t += h;
    }

    Ok(u)
}

/// Evaluates one stage derivative and enforces the operator shape contract.
fn stage(
    operator: &mut dyn SpatialOperator,
    t: f64,
    u: &ImageField,
) -> Result<ImageField, FilterError> {
    let k = operator.derivative(t, u);
    if !u.same_shape(&k) {
        return Err(FilterError::OperatorContract {
            expected_w: u.width(),
            expected_h: u.height(),
            got_w: k.width(),
            got_h: k.height(),
        });
    }
    Ok(k)
}
