//! Reserve ledger: the pool's balance of each asset.

use core::fmt;

use crate::domain::{Amount, AssetSlot};
use crate::error::AmmError;

/// Balances of token 1 and token 2 held by the pool.
///
/// Mutation is value-returning: [`credit`](Self::credit) and
/// [`debit`](Self::debit) produce a new `Reserves` and leave `self`
/// untouched, so a multi-step update can be staged and committed with one
/// assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Reserves {
    reserve1: Amount,
    reserve2: Amount,
}

impl Reserves {
    /// Empty reserves.
    pub const EMPTY: Self = Self {
        reserve1: Amount::ZERO,
        reserve2: Amount::ZERO,
    };

    /// Creates reserves from explicit balances.
    #[must_use]
    pub const fn new(reserve1: Amount, reserve2: Amount) -> Self {
        Self { reserve1, reserve2 }
    }

    /// Reserve of token 1.
    #[must_use]
    pub const fn reserve1(&self) -> Amount {
        self.reserve1
    }

    /// Reserve of token 2.
    #[must_use]
    pub const fn reserve2(&self) -> Amount {
        self.reserve2
    }

    /// Reserve held in `slot`.
    #[must_use]
    pub const fn get(&self, slot: AssetSlot) -> Amount {
        match slot {
            AssetSlot::First => self.reserve1,
            AssetSlot::Second => self.reserve2,
        }
    }

    /// `true` if either side is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reserve1.is_zero() || self.reserve2.is_zero()
    }

    /// Returns these reserves with `amount` added to `slot`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the reserve exceeds 256 bits.
    pub fn credit(self, slot: AssetSlot, amount: Amount) -> Result<Self, AmmError> {
        let updated = self
            .get(slot)
            .checked_add(&amount)
            .ok_or(AmmError::Overflow("reserve overflow on credit"))?;
        Ok(self.with(slot, updated))
    }

    /// Returns these reserves with `amount` removed from `slot`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InsufficientReserve`] if the reserve would go
    /// negative.
    pub fn debit(self, slot: AssetSlot, amount: Amount) -> Result<Self, AmmError> {
        let updated = self
            .get(slot)
            .checked_sub(&amount)
            .ok_or(AmmError::InsufficientReserve)?;
        Ok(self.with(slot, updated))
    }

    fn with(mut self, slot: AssetSlot, amount: Amount) -> Self {
        match slot {
            AssetSlot::First => self.reserve1 = amount,
            AssetSlot::Second => self.reserve2 = amount,
        }
        self
    }
}

impl fmt::Display for Reserves {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.reserve1, self.reserve2)
    }
}
