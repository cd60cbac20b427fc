//! Swap direction and outcome.

use core::fmt;

use super::{Amount, AssetSlot};
use crate::error::AmmError;

/// Which asset a trader sells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapDirection {
    /// Sell token 1, receive token 2 (`swapToken1`).
    Token1ToToken2,
    /// Sell token 2, receive token 1 (`swapToken2`).
    Token2ToToken1,
}

impl SwapDirection {
    /// Reserve slot credited with the input.
    #[must_use]
    pub const fn input_slot(&self) -> AssetSlot {
        match self {
            Self::Token1ToToken2 => AssetSlot::First,
            Self::Token2ToToken1 => AssetSlot::Second,
        }
    }

    /// Reserve slot debited with the output.
    #[must_use]
    pub const fn output_slot(&self) -> AssetSlot {
        self.input_slot().other()
    }

    /// The opposite direction.
    #[must_use]
    pub const fn reverse(&self) -> Self {
        match self {
            Self::Token1ToToken2 => Self::Token2ToToken1,
            Self::Token2ToToken1 => Self::Token1ToToken2,
        }
    }
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token1ToToken2 => write!(f, "token1->token2"),
            Self::Token2ToToken1 => write!(f, "token2->token1"),
        }
    }
}

/// The outcome of a swap, or of a swap quote.
///
/// # Invariants
///
/// - `amount_in > 0`
/// - `fee = amount_in − net_input`, so `fee < amount_in` whenever the
///   fee tier is below 100%.
///
/// # Examples
///
/// ```
/// use cp_amm::domain::{Amount, SwapDirection, SwapResult};
///
/// let r = SwapResult::new(
///     SwapDirection::Token1ToToken2,
///     Amount::new(1_000),
///     Amount::new(997),
///     Amount::new(990),
/// ).expect("valid");
/// assert_eq!(r.fee(), Amount::new(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapResult {
    direction: SwapDirection,
    amount_in: Amount,
    net_input: Amount,
    amount_out: Amount,
}

impl SwapResult {
    /// Creates a new `SwapResult` with validated invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidAmount`] if `amount_in` is zero and
    /// [`AmmError::Underflow`] if `net_input > amount_in`.
    pub fn new(
        direction: SwapDirection,
        amount_in: Amount,
        net_input: Amount,
        amount_out: Amount,
    ) -> crate::error::Result<Self> {
        if amount_in.is_zero() {
            return Err(AmmError::InvalidAmount);
        }
        if net_input > amount_in {
            return Err(AmmError::Underflow("net input exceeds amount in"));
        }
        Ok(Self {
            direction,
            amount_in,
            net_input,
            amount_out,
        })
    }

    /// Direction of the trade.
    #[must_use]
    pub const fn direction(&self) -> SwapDirection {
        self.direction
    }

    /// Full input pulled from the trader (fee included).
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Input that reached the pricing curve after the fee.
    pub const fn net_input(&self) -> Amount {
        self.net_input
    }

    /// Output sent to the trader.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Fee retained by the pool for its providers.
    pub fn fee(&self) -> Amount {
        // net_input <= amount_in is checked at construction.
        self.amount_in
            .checked_sub(&self.net_input)
            .unwrap_or(Amount::ZERO)
    }
}

impl fmt::Display for SwapResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SwapResult({}, in={}, out={}, fee={})",
            self.direction,
            self.amount_in,
            self.amount_out,
            self.fee()
        )
    }
}
