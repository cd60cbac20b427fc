//! Checked arithmetic trait for domain wrapper types.
//!
//! The [`CheckedArithmetic`] trait provides fallible arithmetic operations
//! that return [`Result<Self, AmmError>`](crate::error::AmmError) instead
//! of panicking on overflow, underflow, or division by zero.
//!
//! # Implementations
//!
//! - [`Amount`]: asset quantities
//!
//! # Examples
//!
//! ```
//! use cp_amm::domain::Amount;
//! use cp_amm::math::CheckedArithmetic;
//!
//! let a = Amount::new(100);
//! assert_eq!(a.safe_add(&Amount::new(200)), Ok(Amount::new(300)));
//! assert!(a.safe_sub(&Amount::new(200)).is_err());
//! ```

use crate::domain::{Amount, Rounding};
use crate::error::AmmError;

/// Fallible arithmetic for domain wrapper types.
///
/// Every method returns [`Result<Self, AmmError>`] with a specific error
/// variant so callers can distinguish overflow from underflow from
/// division by zero.
///
/// # Contract
///
/// - **No panics**: all error conditions produce `Err`.
/// - **No saturation**: saturation hides bugs; errors propagate instead.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the result exceeds 256 bits.
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Underflow`] if the result would be negative.
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked multiplication.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the result exceeds 256 bits.
    fn safe_mul(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked division with explicit [`Rounding`] direction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if `other` is zero.
    fn safe_div(&self, other: &Self, rounding: Rounding) -> Result<Self, AmmError>;
}

// ---------------------------------------------------------------------------
// Amount
// ---------------------------------------------------------------------------

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::Overflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::Underflow("amount subtraction underflow"))
    }

    #[inline]
    fn safe_mul(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_mul(other)
            .ok_or(AmmError::Overflow("amount multiplication overflow"))
    }

    #[inline]
    fn safe_div(&self, other: &Self, rounding: Rounding) -> Result<Self, AmmError> {
        self.checked_div(other, rounding)
            .ok_or(AmmError::DivisionByZero)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    mod amount {
        use super::*;

        #[test]
        fn add_ok_and_overflow() {
            assert_eq!(Amount::new(1).safe_add(&Amount::new(2)), Ok(Amount::new(3)));
            let Err(AmmError::Overflow(_)) = Amount::MAX.safe_add(&Amount::new(1)) else {
                panic!("expected Overflow");
            };
        }

        #[test]
        fn sub_ok_and_underflow() {
            assert_eq!(Amount::new(3).safe_sub(&Amount::new(2)), Ok(Amount::new(1)));
            let Err(AmmError::Underflow(_)) = Amount::new(1).safe_sub(&Amount::new(2)) else {
                panic!("expected Underflow");
            };
        }

        #[test]
        fn mul_overflow() {
            let Err(AmmError::Overflow(_)) = Amount::MAX.safe_mul(&Amount::new(2)) else {
                panic!("expected Overflow");
            };
        }

        #[test]
        fn div_rounding_and_zero() {
            assert_eq!(
                Amount::new(10).safe_div(&Amount::new(4), Rounding::Down),
                Ok(Amount::new(2))
            );
            assert_eq!(
                Amount::new(10).safe_div(&Amount::new(4), Rounding::Up),
                Ok(Amount::new(3))
            );
            assert_eq!(
                Amount::new(10).safe_div(&Amount::ZERO, Rounding::Down),
                Err(AmmError::DivisionByZero)
            );
        }
    }
}
