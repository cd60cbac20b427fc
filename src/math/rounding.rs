//! Multiply-then-divide with explicit rounding.
//!
//! Every pool formula has the shape `a × b / c`.  [`mul_div`] evaluates it
//! in 256-bit checked arithmetic, multiplying first so no precision is lost
//! before the single truncating division.
//!
//! # Convention
//!
//! **Always round against the caller** (pool-favourable):
//!
//! | Quantity | Direction |
//! |----------|-----------|
//! | Swap output | [`Rounding::Down`] |
//! | Withdrawal amounts | [`Rounding::Down`] |
//! | Minted shares | [`Rounding::Down`] |
//! | Upper tolerance bound | [`Rounding::Up`] |
//!
//! # Examples
//!
//! ```
//! use cp_amm::domain::{Amount, Rounding};
//! use cp_amm::math::mul_div;
//!
//! let r = mul_div(Amount::new(10), Amount::new(10), Amount::new(3), Rounding::Down);
//! assert_eq!(r, Ok(Amount::new(33)));
//! ```

use crate::domain::{Amount, Rounding};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;

/// Computes `a × b / c` with the given rounding.
///
/// # Errors
///
/// - [`AmmError::Overflow`] if `a × b` exceeds 256 bits.
/// - [`AmmError::DivisionByZero`] if `c` is zero.
pub fn mul_div(a: Amount, b: Amount, c: Amount, rounding: Rounding) -> Result<Amount, AmmError> {
    a.safe_mul(&b)?.safe_div(&c, rounding)
}
