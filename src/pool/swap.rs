//! Swap engine.
//!
//! The fee is taken from the input before pricing and stays in the pool:
//!
//! 1. `net_input = amount_in × (10 000 − fee_bps) / 10 000`
//! 2. `amount_out = reserve_out × net_input / (reserve_in + net_input)`
//! 3. `reserve_in += amount_in`
//! 4. `reserve_out -= amount_out`
//!
//! Both divisions truncate, so `reserve_in × reserve_out` never decreases.

use tracing::debug;

use crate::domain::{Amount, AssetPair, SwapDirection, SwapResult};
use crate::error::AmmError;
use crate::math::curve;

use super::Pool;

impl Pool {
    /// What selling `amount_in` in `direction` returns at the current
    /// reserves and fee.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAmount`] if `amount_in` is zero.
    /// - [`AmmError::PoolEmpty`] if either reserve is zero.
    /// - [`AmmError::Overflow`] if intermediate arithmetic overflows.
    pub fn quote_swap(
        &self,
        direction: SwapDirection,
        amount_in: Amount,
    ) -> Result<SwapResult, AmmError> {
        if amount_in.is_zero() {
            return Err(AmmError::InvalidAmount);
        }
        let reserves = self.reserves();
        let (net_input, amount_out) = curve::swap_output(
            amount_in,
            reserves.get(direction.input_slot()),
            reserves.get(direction.output_slot()),
            self.fee(),
        )?;
        debug!(%direction, %amount_in, %net_input, %amount_out, "swap quoted");
        SwapResult::new(direction, amount_in, net_input, amount_out)
    }

    /// Validates a swap and computes its result.
    ///
    /// Pure: the pool is not modified.
    pub(crate) fn plan_swap(
        &self,
        direction: SwapDirection,
        amount_in: Amount,
        min_out: Amount,
    ) -> Result<(AssetPair, SwapResult), AmmError> {
        if amount_in.is_zero() {
            return Err(AmmError::InvalidAmount);
        }
        let assets = self.bound_assets()?;
        let result = self.quote_swap(direction, amount_in)?;
        if result.amount_out().is_zero() {
            return Err(AmmError::InsufficientOutput);
        }
        if result.amount_out() < min_out {
            return Err(AmmError::SlippageTooLow);
        }
        Ok((assets, result))
    }

    /// Commits a planned swap.
    pub(crate) fn apply_swap(&mut self, result: &SwapResult) -> Result<(), AmmError> {
        let direction = result.direction();
        let reserves = self
            .reserves()
            .credit(direction.input_slot(), result.amount_in())?
            .debit(direction.output_slot(), result.amount_out())?;
        self.set_reserves(reserves);
        Ok(())
    }
}
