//! Error types for the PDE filter core.

use thiserror::Error;

/// Errors produced by field and integration operations.
#[derive(Debug, Error)]
pub enum FilterError {
    /// Width or height was zero when creating a field, or the pixel count
    /// overflowed `usize`.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// Two fields had incompatible dimensions for an element-wise operation.
    #[error("shape mismatch: ({lhs_w}, {lhs_h}) vs ({rhs_w}, {rhs_h})")]
    ShapeMismatch {
        lhs_w: usize,
        lhs_h: usize,
        rhs_w: usize,
        rhs_h: usize,
    },

    /// An operator returned a derivative field whose shape differs from its
    /// input. Caught inside the RK4 stepper when combining stages.
    #[error(
        "operator contract violation: derivative shape ({got_w}, {got_h}) \
         does not match field shape ({expected_w}, {expected_h})"
    )]
    OperatorContract {
        expected_w: usize,
        expected_h: usize,
        got_w: usize,
        got_h: usize,
    },

    /// The integration step size was non-positive or non-finite.
    #[error("invalid step size: {0} (must be positive and finite)")]
    InvalidStep(f64),

    /// A requested operator name was not found in the registry.
    #[error("unknown operator: {0}")]
    UnknownOperator(String),

    /// An I/O error (image decode/encode, file write).
    #[error("i/o error: {0}")]
    Io(String),

    /// The integrated field contains NaN or infinite values, indicating
    /// numerical blow-up (step size too large for the chosen operator).
    #[error("field contains non-finite values: integration diverged")]
    NonFiniteField,
}
