//! Liquidity engine: share minting on deposit and burning on withdrawal.
//!
//! # Minting
//!
//! ```text
//! first deposit:   minted = isqrt(amount1 × amount2)
//! later deposits:  minted = min(amount1 × T / reserve1, amount2 × T / reserve2)
//! ```
//!
//! Under [`RatioPolicy::Strict`] a later deposit must also match the
//! reserve ratio: `amount2` has to lie in
//! `[⌊amount1 × reserve2 / reserve1⌋, ⌈amount1 × reserve2 / reserve1⌉]`.
//!
//! # Burning
//!
//! ```text
//! out_i = reserve_i × shares / T      (rounded down)
//! ```

use tracing::debug;

use crate::config::RatioPolicy;
use crate::domain::{Address, Amount, AssetPair, AssetSlot, Deposit, Rounding, Shares, Withdrawal};
use crate::error::AmmError;
use crate::math::curve;

use super::Pool;

impl Pool {
    /// Validates a deposit and computes the shares it mints.
    ///
    /// Pure: the pool is not modified.
    pub(crate) fn plan_deposit(
        &self,
        amount1: Amount,
        amount2: Amount,
    ) -> Result<(AssetPair, Deposit), AmmError> {
        if amount1.is_zero() || amount2.is_zero() {
            return Err(AmmError::InvalidAmount);
        }
        let assets = self.bound_assets()?;
        let minted = self.shares_for_deposit(amount1, amount2)?;
        if minted.is_zero() {
            return Err(AmmError::InvalidAmount);
        }
        debug!(%amount1, %amount2, %minted, "deposit planned");
        Ok((
            assets,
            Deposit {
                amount1,
                amount2,
                minted,
            },
        ))
    }

    fn shares_for_deposit(&self, amount1: Amount, amount2: Amount) -> Result<Shares, AmmError> {
        let total = self.total_shares();
        if total.is_zero() {
            return curve::initial_shares(amount1, amount2);
        }
        let reserves = self.reserves();
        if self.ratio_policy() == RatioPolicy::Strict {
            let low = curve::equivalent(
                amount1,
                reserves.reserve1(),
                reserves.reserve2(),
                Rounding::Down,
            )?;
            let high = curve::equivalent(
                amount1,
                reserves.reserve1(),
                reserves.reserve2(),
                Rounding::Up,
            )?;
            if amount2 < low || amount2 > high {
                return Err(AmmError::RatioMismatch);
            }
        }
        let by1 = curve::shares_for(amount1, reserves.reserve1(), total)?;
        let by2 = curve::shares_for(amount2, reserves.reserve2(), total)?;
        Ok(by1.min(by2))
    }

    /// Commits a planned deposit for `provider`.
    pub(crate) fn apply_deposit(
        &mut self,
        provider: Address,
        deposit: &Deposit,
    ) -> Result<(), AmmError> {
        let reserves = self
            .reserves()
            .credit(AssetSlot::First, deposit.amount1)?
            .credit(AssetSlot::Second, deposit.amount2)?;
        self.mint_shares(provider, deposit.minted, reserves)
    }

    /// Amounts that burning `shares` returns at the current reserves.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PoolEmpty`] if no shares are outstanding.
    /// - [`AmmError::InsufficientShares`] if `shares` exceeds the total.
    pub fn estimate_withdrawal(&self, shares: Shares) -> Result<Withdrawal, AmmError> {
        let total = self.total_shares();
        if total.is_zero() {
            return Err(AmmError::PoolEmpty);
        }
        if shares > total {
            return Err(AmmError::InsufficientShares);
        }
        let reserves = self.reserves();
        Ok(Withdrawal {
            burned: shares,
            amount1: curve::share_of_reserve(reserves.reserve1(), shares, total)?,
            amount2: curve::share_of_reserve(reserves.reserve2(), shares, total)?,
        })
    }

    /// Validates a withdrawal by `provider` and computes what it returns.
    ///
    /// Pure: the pool is not modified.
    pub(crate) fn plan_withdrawal(
        &self,
        provider: Address,
        shares: Shares,
        min_amount1: Amount,
        min_amount2: Amount,
    ) -> Result<(AssetPair, Withdrawal), AmmError> {
        if shares.is_zero() {
            return Err(AmmError::InvalidAmount);
        }
        let assets = self.bound_assets()?;
        if self.balance_of(provider) < shares {
            return Err(AmmError::InsufficientShares);
        }
        let withdrawal = self.estimate_withdrawal(shares)?;
        if withdrawal.amount1 < min_amount1 {
            return Err(AmmError::SlippageToken1TooLow);
        }
        if withdrawal.amount2 < min_amount2 {
            return Err(AmmError::SlippageToken2TooLow);
        }
        debug!(
            %shares,
            amount1 = %withdrawal.amount1,
            amount2 = %withdrawal.amount2,
            "withdrawal planned"
        );
        Ok((assets, withdrawal))
    }

    /// Commits a planned withdrawal for `provider`.
    pub(crate) fn apply_withdrawal(
        &mut self,
        provider: Address,
        withdrawal: &Withdrawal,
    ) -> Result<(), AmmError> {
        let reserves = self
            .reserves()
            .debit(AssetSlot::First, withdrawal.amount1)?
            .debit(AssetSlot::Second, withdrawal.amount2)?;
        self.burn_shares(provider, withdrawal.burned, reserves)
    }
}
