//! Liquidity provision extending [`SwapPool`].
//!
//! [`LiquidityPool`] adds minting and burning of ownership shares on top
//! of trading.
//!
//! # Share Accounting Invariant
//!
//! The total reported by [`LiquidityPool::total_shares`] changes **only**
//! through [`LiquidityPool::provide`] and [`LiquidityPool::withdraw`], and
//! always equals the sum of every provider's balance:
//!
//! ```text
//! T = Σ balance[provider]
//! T = 0  ⇔  reserve1 = reserve2 = 0
//! ```
//!
//! # Truncation
//!
//! Minted shares and withdrawn amounts are rounded down, so a provide
//! followed by a full withdraw never returns more than was deposited.

use super::SwapPool;
use crate::domain::{Amount, CallContext, Deposit, Shares, Withdrawal};
use crate::error::AmmError;

/// Pools that accept two-sided deposits against ownership shares.
pub trait LiquidityPool: SwapPool {
    /// Deposits `amount1` of token 1 and `amount2` of token 2 and mints
    /// shares to the caller.
    ///
    /// # Errors
    ///
    /// Checks run in this order:
    ///
    /// 1. [`AmmError::DeadlineExpired`]
    /// 2. [`AmmError::InvalidAmount`] if either amount is zero
    /// 3. [`AmmError::AssetsNotBound`]
    /// 4. [`AmmError::RatioMismatch`] under the strict ratio policy
    /// 5. [`AmmError::InvalidAmount`] if the deposit mints zero shares
    /// 6. [`AmmError::TransferFailed`]
    fn provide(
        &mut self,
        ctx: &CallContext,
        amount1: Amount,
        amount2: Amount,
    ) -> Result<Deposit, AmmError>;

    /// Burns `shares` of the caller and returns the proportional part of
    /// both reserves, provided each is at least its minimum.
    ///
    /// # Errors
    ///
    /// Checks run in this order:
    ///
    /// 1. [`AmmError::DeadlineExpired`]
    /// 2. [`AmmError::InvalidAmount`] if `shares` is zero
    /// 3. [`AmmError::AssetsNotBound`]
    /// 4. [`AmmError::InsufficientShares`]
    /// 5. [`AmmError::SlippageToken1TooLow`], then
    ///    [`AmmError::SlippageToken2TooLow`]
    /// 6. [`AmmError::TransferFailed`]
    fn withdraw(
        &mut self,
        ctx: &CallContext,
        shares: Shares,
        min_amount1: Amount,
        min_amount2: Amount,
    ) -> Result<Withdrawal, AmmError>;

    /// Amounts that burning `shares` would return right now.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PoolEmpty`] if no shares are outstanding.
    /// - [`AmmError::InsufficientShares`] if `shares` exceeds the total.
    fn withdraw_estimate(&self, shares: Shares) -> Result<Withdrawal, AmmError>;

    /// Outstanding shares across all providers.
    #[must_use]
    fn total_shares(&self) -> Shares;
}
