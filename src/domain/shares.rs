//! Pool ownership units.

use core::fmt;

use primitive_types::U256;

use super::Amount;

/// Fungible ownership units of a pool.
///
/// Distinct from [`Amount`] because a share is a claim on *both* reserves,
/// not a quantity of a single asset.  The sum of every provider's shares
/// always equals the pool's total.
///
/// # Examples
///
/// ```
/// use cp_amm::domain::Shares;
///
/// let a = Shares::new(1_000);
/// let b = Shares::new(2_000);
/// assert_eq!(a.checked_add(&b), Some(Shares::new(3_000)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Shares(U256);

impl Shares {
    /// No shares.
    pub const ZERO: Self = Self(U256([0; 4]));

    /// Creates `Shares` from a `u128` value.
    pub fn new(value: u128) -> Self {
        Self(U256::from(value))
    }

    /// Wraps a raw [`U256`].
    pub const fn from_raw(value: U256) -> Self {
        Self(value)
    }

    /// Returns the underlying [`U256`] value.
    #[must_use]
    pub const fn get(&self) -> U256 {
        self.0
    }

    /// Returns `true` if there are no shares.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Reinterprets the share count as an [`Amount`] for mixed formulas
    /// such as `reserve × shares / total`.
    pub const fn as_amount(&self) -> Amount {
        Amount::from_raw(self.0)
    }

    /// Reinterprets an [`Amount`] computed by a share formula as shares.
    pub const fn from_amount(amount: Amount) -> Self {
        Self(amount.get())
    }
}

impl From<u128> for Shares {
    fn from(value: u128) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Shares {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
