//! Equivalent-value views over the current reserve ratio.

use crate::domain::{Amount, Rounding};
use crate::error::AmmError;
use crate::math::curve;

use super::Pool;

impl Pool {
    /// Amount of token 2 worth `amount1` of token 1 at the current ratio:
    /// `amount1 × reserve2 / reserve1`, rounded down.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolEmpty`] while the pool has no liquidity.
    pub fn equivalent_token2_estimate(&self, amount1: Amount) -> Result<Amount, AmmError> {
        let reserves = self.reserves();
        curve::equivalent(
            amount1,
            reserves.reserve1(),
            reserves.reserve2(),
            Rounding::Down,
        )
    }

    /// Amount of token 1 worth `amount2` of token 2 at the current ratio:
    /// `amount2 × reserve1 / reserve2`, rounded down.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolEmpty`] while the pool has no liquidity.
    pub fn equivalent_token1_estimate(&self, amount2: Amount) -> Result<Amount, AmmError> {
        let reserves = self.reserves();
        curve::equivalent(
            amount2,
            reserves.reserve2(),
            reserves.reserve1(),
            Rounding::Down,
        )
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::config::RatioPolicy;
    use crate::pool::state::tests::{bound_pool, ALICE};

    #[test]
    fn estimates_follow_ratio() {
        let mut pool = bound_pool(30, RatioPolicy::Strict);
        let Ok((_, deposit)) = pool.plan_deposit(Amount::new(1_000), Amount::new(3_000)) else {
            panic!("seed");
        };
        let Ok(()) = pool.apply_deposit(ALICE, &deposit) else {
            panic!("seed applied");
        };
        assert_eq!(
            pool.equivalent_token2_estimate(Amount::new(10)),
            Ok(Amount::new(30))
        );
        assert_eq!(
            pool.equivalent_token1_estimate(Amount::new(10)),
            Ok(Amount::new(3))
        );
    }

    #[test]
    fn estimate_on_empty_pool() {
        let pool = bound_pool(30, RatioPolicy::Strict);
        assert_eq!(
            pool.equivalent_token2_estimate(Amount::new(1)),
            Err(AmmError::PoolEmpty)
        );
        assert_eq!(
            pool.equivalent_token1_estimate(Amount::new(1)),
            Err(AmmError::PoolEmpty)
        );
    }
}
