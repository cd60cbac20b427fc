//! Arithmetic utilities for pool calculations.
//!
//! This module provides [`CheckedArithmetic`] for overflow-safe operations
//! on domain types, [`mul_div`] for the `a × b / c` shape every pool
//! formula takes, and the constant-product / proportional-share formulas
//! themselves.  Nothing here uses floating point.

mod checked;
pub mod curve;
mod rounding;

pub use checked::CheckedArithmetic;
pub use curve::isqrt;
pub use rounding::mul_div;
