//! Swap fee bounded to the pool's 10% ceiling.

use core::fmt;

use super::{Amount, BasisPoints, Rounding};
use crate::error::AmmError;

/// A swap fee in basis points, guaranteed to be at most
/// [`FeeTier::MAX`] (1 000 bp = 10%).
///
/// # Examples
///
/// ```
/// use cp_amm::domain::FeeTier;
///
/// let tier = FeeTier::new(50).expect("within ceiling");
/// assert_eq!(tier.basis_points().get(), 50);
/// assert!(FeeTier::new(1_001).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FeeTier(BasisPoints);

impl FeeTier {
    /// Highest fee the pool accepts (10%).
    pub const MAX: Self = Self(BasisPoints::new(1_000));

    /// No fee.
    pub const ZERO: Self = Self(BasisPoints::ZERO);

    /// Fee applied by a freshly configured pool (0.30%).
    pub const DEFAULT: Self = Self(BasisPoints::new(30));

    /// Creates a fee tier from raw basis points.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::FeeTooHigh`] if `bps` exceeds 1 000.
    pub fn new(bps: u32) -> Result<Self, AmmError> {
        if bps > Self::MAX.0.get() {
            return Err(AmmError::FeeTooHigh);
        }
        Ok(Self(BasisPoints::new(bps)))
    }

    /// Returns the underlying [`BasisPoints`].
    #[must_use]
    pub const fn basis_points(&self) -> BasisPoints {
        self.0
    }

    /// Returns the portion of `amount_in` that reaches the pricing curve:
    /// `amount_in × (10 000 − fee) / 10 000`, rounded down.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the intermediate product overflows.
    pub fn net_of_fee(&self, amount_in: Amount) -> crate::error::Result<Amount> {
        self.0.complement().apply(amount_in, Rounding::Down)
    }
}

impl Default for FeeTier {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeeTier({})", self.0)
    }
}
