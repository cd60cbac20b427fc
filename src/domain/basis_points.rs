//! Basis-point representation for percentages.

use core::fmt;

use super::{Amount, Rounding};
use crate::error::AmmError;

/// Value that represents 100%.
const BPS_DENOMINATOR: u32 = 10_000;

/// A percentage expressed in basis points (1 bp = 0.01%, 10 000 bp = 100%).
///
/// All `u32` values can be constructed; [`FeeTier`](super::FeeTier)
/// enforces the pool's ceiling.
///
/// # Examples
///
/// ```
/// use cp_amm::domain::{Amount, BasisPoints, Rounding};
///
/// let bp = BasisPoints::new(30);
/// let fee = bp.apply(Amount::new(1_000_000), Rounding::Down).expect("no overflow");
/// assert_eq!(fee, Amount::new(3_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// Zero basis points (0%).
    pub const ZERO: Self = Self(0);

    /// Creates a new `BasisPoints` from a raw `u32` value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the underlying `u32` value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns `10_000 − self`, the share of an amount that is kept.
    ///
    /// Saturates at zero for values above 100%.
    pub const fn complement(&self) -> Self {
        Self(BPS_DENOMINATOR.saturating_sub(self.0))
    }

    /// Computes `amount × self / 10_000` with explicit rounding.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the intermediate multiplication overflows.
    pub fn apply(&self, amount: Amount, rounding: Rounding) -> crate::error::Result<Amount> {
        amount
            .checked_mul(&Amount::from(u64::from(self.0)))
            .ok_or(AmmError::Overflow("basis points apply overflow"))?
            .checked_div(&Amount::from(u64::from(BPS_DENOMINATOR)), rounding)
            .ok_or(AmmError::DivisionByZero)
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn complement() {
        assert_eq!(BasisPoints::new(30).complement(), BasisPoints::new(9_970));
        assert_eq!(BasisPoints::ZERO.complement(), BasisPoints::new(10_000));
        assert_eq!(BasisPoints::new(20_000).complement(), BasisPoints::ZERO);
    }

    #[test]
    fn apply_round_down() {
        let Ok(v) = BasisPoints::new(30).apply(Amount::new(1_000_001), Rounding::Down) else {
            panic!("expected Ok");
        };
        assert_eq!(v, Amount::new(3_000));
    }

    #[test]
    fn apply_round_up() {
        let Ok(v) = BasisPoints::new(30).apply(Amount::new(1_000_001), Rounding::Up) else {
            panic!("expected Ok");
        };
        assert_eq!(v, Amount::new(3_001));
    }

    #[test]
    fn apply_overflow() {
        let result = BasisPoints::new(2).apply(Amount::MAX, Rounding::Down);
        assert!(matches!(result, Err(AmmError::Overflow(_))));
    }

    #[test]
    fn display() {
        assert_eq!(BasisPoints::new(30).to_string(), "30bp");
    }
}
