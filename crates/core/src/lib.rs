#![deny(unsafe_code)]
//! Core types for the PDE image filter.
//!
//! Provides the `SpatialOperator` trait, the `ImageField` state type, the
//! classical RK4 `integrate` stepper, `FilterError`, the `Xorshift64` PRNG,
//! the reproducible `Recipe`, and JSON parameter helpers.

pub mod error;
pub mod field;
pub mod operator;
pub mod params;
pub mod prng;
pub mod recipe;
pub mod rk4;

pub use error::FilterError;
pub use field::{ImageField, CHANNELS};
pub use operator::SpatialOperator;
pub use prng::Xorshift64;
pub use recipe::Recipe;
pub use rk4::integrate;
