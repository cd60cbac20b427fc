//! Constant-product and proportional-share formulas.
//!
//! These are pure functions over [`Amount`] / [`Shares`]; the pool engines
//! call them to compute every quantity before any state is touched.
//!
//! # Swap (input asset `x`, output asset `y`)
//!
//! ```text
//! net_in     = amount_in × (10 000 − fee_bps) / 10 000
//! amount_out = reserve_y × net_in / (reserve_x + net_in)
//! ```
//!
//! Both divisions truncate, so `(reserve_x + amount_in) × (reserve_y − amount_out)
//! ≥ reserve_x × reserve_y` after every swap.
//!
//! # Liquidity
//!
//! ```text
//! first deposit:  minted = isqrt(amount1 × amount2)
//! later deposits: minted = min(amount1 × T / reserve1, amount2 × T / reserve2)
//! withdrawal:     out_i  = reserve_i × shares / T
//! ```

use primitive_types::U256;

use crate::domain::{Amount, FeeTier, Rounding, Shares};
use crate::error::AmmError;
use crate::math::{mul_div, CheckedArithmetic};

/// Integer square root (floor) via Newton's method.
///
/// Returns `None` only if an intermediate step overflows, which cannot
/// happen for 256-bit inputs.
#[must_use]
pub fn isqrt(n: U256) -> Option<U256> {
    if n.is_zero() {
        return Some(U256::zero());
    }
    let mut x = n;
    // ceil(n / 2) without the overflow of n + 1
    let mut y = (n >> 1) + (n & U256::one());
    while y < x {
        x = y;
        y = x.checked_add(n / x)? >> 1;
    }
    Some(x)
}

/// Output of selling `amount_in` against `(reserve_in, reserve_out)`.
///
/// Returns `(net_input, amount_out)` where `net_input` is the part of the
/// input left after the fee.
///
/// # Errors
///
/// - [`AmmError::PoolEmpty`] if either reserve is zero.
/// - [`AmmError::Overflow`] if an intermediate product exceeds 256 bits.
pub fn swap_output(
    amount_in: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
    fee: FeeTier,
) -> Result<(Amount, Amount), AmmError> {
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(AmmError::PoolEmpty);
    }
    let net_input = fee.net_of_fee(amount_in)?;
    let denominator = reserve_in.safe_add(&net_input)?;
    let amount_out = mul_div(reserve_out, net_input, denominator, Rounding::Down)?;
    Ok((net_input, amount_out))
}

/// Shares minted by the first deposit into an empty pool.
///
/// # Errors
///
/// - [`AmmError::Overflow`] if `amount1 × amount2` exceeds 256 bits.
/// - [`AmmError::InvalidAmount`] if the square root is zero.
pub fn initial_shares(amount1: Amount, amount2: Amount) -> Result<Shares, AmmError> {
    let product = amount1.safe_mul(&amount2)?;
    let root = isqrt(product.get()).ok_or(AmmError::Overflow("isqrt overflow"))?;
    if root.is_zero() {
        return Err(AmmError::InvalidAmount);
    }
    Ok(Shares::from_raw(root))
}

/// Shares minted for depositing `amount` against `reserve` when `total`
/// shares are outstanding: `amount × total / reserve`, rounded down.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `reserve` is zero.
/// - [`AmmError::Overflow`] if `amount × total` exceeds 256 bits.
pub fn shares_for(amount: Amount, reserve: Amount, total: Shares) -> Result<Shares, AmmError> {
    mul_div(amount, total.as_amount(), reserve, Rounding::Down).map(Shares::from_amount)
}

/// Amount of one reserve owed to `shares` out of `total`:
/// `reserve × shares / total`, rounded down.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `total` is zero.
/// - [`AmmError::Overflow`] if `reserve × shares` exceeds 256 bits.
pub fn share_of_reserve(reserve: Amount, shares: Shares, total: Shares) -> Result<Amount, AmmError> {
    mul_div(reserve, shares.as_amount(), total.as_amount(), Rounding::Down)
}

/// Amount of the other asset equivalent to `amount` at the current
/// reserve ratio: `amount × reserve_other / reserve_this`.
///
/// # Errors
///
/// - [`AmmError::PoolEmpty`] if `reserve_this` is zero.
/// - [`AmmError::Overflow`] if the product exceeds 256 bits.
pub fn equivalent(
    amount: Amount,
    reserve_this: Amount,
    reserve_other: Amount,
    rounding: Rounding,
) -> Result<Amount, AmmError> {
    if reserve_this.is_zero() {
        return Err(AmmError::PoolEmpty);
    }
    mul_div(amount, reserve_other, reserve_this, rounding)
}
