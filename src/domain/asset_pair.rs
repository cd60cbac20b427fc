//! The two assets a pool trades.

use super::{Address, SwapDirection};
use crate::error::AmmError;

/// Which side of the pool an asset, reserve, or amount belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetSlot {
    /// Token 1 / reserve 1.
    First,
    /// Token 2 / reserve 2.
    Second,
}

impl AssetSlot {
    /// Returns the opposite slot.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }
}

/// An ordered pair of distinct, non-zero asset addresses.
///
/// Unlike a canonically sorted pair, the order is meaningful: the first
/// address is "token 1" and the second is "token 2" for every pool
/// operation, exactly as bound by the owner.
///
/// # Examples
///
/// ```
/// use cp_amm::domain::{Address, AssetPair, AssetSlot};
///
/// let usdc = Address::repeat(2);
/// let weth = Address::repeat(1);
/// let pair = AssetPair::new(usdc, weth).expect("distinct");
/// assert_eq!(pair.get(AssetSlot::First), usdc);
/// assert_eq!(pair.get(AssetSlot::Second), weth);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetPair {
    token1: Address,
    token2: Address,
}

impl AssetPair {
    /// Creates a pair, keeping the given order.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidAsset`] if either address is zero or both
    /// are the same.
    pub fn new(token1: Address, token2: Address) -> Result<Self, AmmError> {
        if token1.is_zero() || token2.is_zero() {
            return Err(AmmError::InvalidAsset("token address must be non-zero"));
        }
        if token1 == token2 {
            return Err(AmmError::InvalidAsset(
                "pool requires two distinct token addresses",
            ));
        }
        Ok(Self { token1, token2 })
    }

    /// Token 1.
    #[must_use]
    pub const fn token1(&self) -> Address {
        self.token1
    }

    /// Token 2.
    #[must_use]
    pub const fn token2(&self) -> Address {
        self.token2
    }

    /// Returns the address bound to `slot`.
    #[must_use]
    pub const fn get(&self, slot: AssetSlot) -> Address {
        match slot {
            AssetSlot::First => self.token1,
            AssetSlot::Second => self.token2,
        }
    }

    /// Returns `(input, output)` asset addresses for a swap direction.
    #[must_use]
    pub const fn route(&self, direction: SwapDirection) -> (Address, Address) {
        (
            self.get(direction.input_slot()),
            self.get(direction.output_slot()),
        )
    }
}
