//! Receipts returned by liquidity operations and the pool snapshot view.

use core::fmt;

use super::{Amount, FeeTier, Shares};

/// Result of a successful `provide`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Deposit {
    /// Token 1 pulled from the provider.
    pub amount1: Amount,
    /// Token 2 pulled from the provider.
    pub amount2: Amount,
    /// Shares minted to the provider.
    pub minted: Shares,
}

/// Result of a successful `withdraw`, or a withdrawal estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Withdrawal {
    /// Shares burned.
    pub burned: Shares,
    /// Token 1 returned to the provider.
    pub amount1: Amount,
    /// Token 2 returned to the provider.
    pub amount2: Amount,
}

/// Read-only snapshot returned by `getPoolDetails`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoolDetails {
    /// Reserve of token 1.
    pub reserve1: Amount,
    /// Reserve of token 2.
    pub reserve2: Amount,
    /// Outstanding shares.
    pub total_shares: Shares,
    /// Current swap fee.
    pub fee: FeeTier,
}

impl PoolDetails {
    /// Constant-product invariant `reserve1 × reserve2`.
    ///
    /// Returns `None` if the product does not fit in 256 bits.
    #[must_use]
    pub fn invariant(&self) -> Option<Amount> {
        self.reserve1.checked_mul(&self.reserve2)
    }
}

impl fmt::Display for PoolDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PoolDetails(reserve1={}, reserve2={}, shares={}, fee={})",
            self.reserve1,
            self.reserve2,
            self.total_shares,
            self.fee.basis_points()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invariant_is_product() {
        let details = PoolDetails {
            reserve1: Amount::new(1_000),
            reserve2: Amount::new(2_000),
            total_shares: Shares::new(1_414),
            fee: FeeTier::DEFAULT,
        };
        assert_eq!(details.invariant(), Some(Amount::new(2_000_000)));
        assert_eq!(
            details.to_string(),
            "PoolDetails(reserve1=1000, reserve2=2000, shares=1414, fee=30bp)"
        );
    }
}
