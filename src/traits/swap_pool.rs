//! Swap execution and quoting.
//!
//! [`SwapPool`] is the trading surface of a pool:
//!
//! 1. **Execute**: [`SwapPool::swap`] performs the exchange, guarded by a
//!    deadline and a minimum-output bound.
//! 2. **Quote**: [`SwapPool::quote`] computes the same result without
//!    touching state.
//! 3. **Inspect fees**: [`SwapPool::fee`] returns the current fee.
//!
//! # Fee Deduction Invariant
//!
//! Implementations deduct the fee from the input **before** applying the
//! pricing formula, and credit the full input to the reserve:
//!
//! ```text
//! net_input  = amount_in × (10 000 − fee_bps) / 10 000
//! amount_out = reserve_out × net_input / (reserve_in + net_input)
//! reserve_in  += amount_in
//! reserve_out -= amount_out
//! ```

use crate::domain::{Amount, CallContext, FeeTier, SwapDirection, SwapResult};
use crate::error::AmmError;

/// Trading surface of a two-asset pool.
///
/// # Errors
///
/// Common error variants:
///
/// - [`AmmError::DeadlineExpired`]: the call arrived after its deadline
/// - [`AmmError::InvalidAmount`]: zero input
/// - [`AmmError::PoolEmpty`]: no liquidity to trade against
/// - [`AmmError::SlippageTooLow`]: output below the caller's minimum
/// - [`AmmError::TransferFailed`]: an asset ledger rejected a transfer
pub trait SwapPool {
    /// Sells `amount_in` of the direction's input asset for at least
    /// `min_out` of the output asset.
    ///
    /// The swap either completes fully or returns an error with no state
    /// change.
    ///
    /// # Errors
    ///
    /// Checks run in this order, the first failure aborts the call:
    ///
    /// 1. [`AmmError::DeadlineExpired`]
    /// 2. [`AmmError::InvalidAmount`] if `amount_in` is zero
    /// 3. [`AmmError::AssetsNotBound`]
    /// 4. [`AmmError::PoolEmpty`]
    /// 5. [`AmmError::InsufficientOutput`] if the output truncates to zero
    /// 6. [`AmmError::SlippageTooLow`]
    /// 7. [`AmmError::TransferFailed`]
    fn swap(
        &mut self,
        ctx: &CallContext,
        direction: SwapDirection,
        amount_in: Amount,
        min_out: Amount,
    ) -> Result<SwapResult, AmmError>;

    /// Returns what [`swap`](Self::swap) would produce right now.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAmount`] if `amount_in` is zero.
    /// - [`AmmError::PoolEmpty`] if either reserve is zero.
    /// - [`AmmError::Overflow`] if intermediate arithmetic overflows.
    fn quote(&self, direction: SwapDirection, amount_in: Amount) -> Result<SwapResult, AmmError>;

    /// Current swap fee.
    #[must_use]
    fn fee(&self) -> FeeTier;
}
