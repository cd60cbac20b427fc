//! Domain events emitted by committed pool operations.

use core::fmt;

use super::{Address, Amount, AssetPair, FeeTier, Shares, SwapDirection};

/// An event recorded after a state-changing call commits.
///
/// Rejected calls never produce events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolEvent {
    /// The owner bound the two pool assets.
    AssetsBound {
        /// The bound pair.
        assets: AssetPair,
    },
    /// The owner changed the swap fee.
    FeeUpdated {
        /// Fee before the update.
        previous: FeeTier,
        /// Fee after the update.
        current: FeeTier,
    },
    /// Liquidity was provided.
    Mint {
        /// Provider credited with the shares.
        provider: Address,
        /// Token 1 deposited.
        amount1: Amount,
        /// Token 2 deposited.
        amount2: Amount,
        /// Shares minted.
        shares: Shares,
    },
    /// Liquidity was withdrawn.
    Burn {
        /// Provider whose shares were burned.
        provider: Address,
        /// Token 1 returned.
        amount1: Amount,
        /// Token 2 returned.
        amount2: Amount,
        /// Shares burned.
        shares: Shares,
    },
    /// A swap executed.
    Swap {
        /// Trader that sold the input asset.
        trader: Address,
        /// Input pulled from the trader, fee included.
        amount_in: Amount,
        /// Output sent to the trader.
        amount_out: Amount,
        /// Direction of the trade.
        direction: SwapDirection,
    },
}

impl PoolEvent {
    /// Short event name, as used by log consumers.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AssetsBound { .. } => "AssetsBound",
            Self::FeeUpdated { .. } => "FeeUpdated",
            Self::Mint { .. } => "Mint",
            Self::Burn { .. } => "Burn",
            Self::Swap { .. } => "Swap",
        }
    }
}

impl fmt::Display for PoolEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AssetsBound { assets } => write!(
                f,
                "AssetsBound(token1={}, token2={})",
                assets.token1(),
                assets.token2()
            ),
            Self::FeeUpdated { previous, current } => write!(
                f,
                "FeeUpdated({} -> {})",
                previous.basis_points(),
                current.basis_points()
            ),
            Self::Mint {
                provider,
                amount1,
                amount2,
                shares,
            } => write!(f, "Mint({provider}, {amount1}, {amount2}, shares={shares})"),
            Self::Burn {
                provider,
                amount1,
                amount2,
                shares,
            } => write!(f, "Burn({provider}, {amount1}, {amount2}, shares={shares})"),
            Self::Swap {
                trader,
                amount_in,
                amount_out,
                direction,
            } => write!(f, "Swap({trader}, {direction}, in={amount_in}, out={amount_out})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        let mint = PoolEvent::Mint {
            provider: Address::repeat(1),
            amount1: Amount::new(1),
            amount2: Amount::new(2),
            shares: Shares::new(1),
        };
        assert_eq!(mint.name(), "Mint");
        let swap = PoolEvent::Swap {
            trader: Address::repeat(1),
            amount_in: Amount::new(10),
            amount_out: Amount::new(9),
            direction: SwapDirection::Token2ToToken1,
        };
        assert_eq!(swap.name(), "Swap");
        assert!(swap.to_string().contains("token2->token1"));
    }
}
