//! Owner-only administration: asset binding and fee updates.

use crate::domain::{Address, AssetPair, FeeTier};
use crate::error::AmmError;

use super::Pool;

impl Pool {
    fn ensure_owner(&self, caller: Address) -> Result<(), AmmError> {
        if caller == self.owner() {
            Ok(())
        } else {
            Err(AmmError::Unauthorized)
        }
    }

    /// Binds the two tradable assets, exactly once.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    ///
    /// 1. [`AmmError::Unauthorized`] if `caller` is not the owner.
    /// 2. [`AmmError::AlreadyBound`] if assets were bound before.
    /// 3. [`AmmError::InvalidAsset`] if an address is zero or both are
    ///    equal.
    pub fn bind_assets(
        &mut self,
        caller: Address,
        token1: Address,
        token2: Address,
    ) -> Result<AssetPair, AmmError> {
        self.ensure_owner(caller)?;
        if self.assets().is_some() {
            return Err(AmmError::AlreadyBound);
        }
        let pair = AssetPair::new(token1, token2)?;
        self.set_assets(pair);
        Ok(pair)
    }

    /// Replaces the swap fee and returns the previous one.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Unauthorized`] if `caller` is not the owner.
    /// - [`AmmError::FeeTooHigh`] if `bps > 1000`.
    pub fn update_fee(&mut self, caller: Address, bps: u32) -> Result<FeeTier, AmmError> {
        self.ensure_owner(caller)?;
        let fee = FeeTier::new(bps)?;
        let previous = self.fee();
        self.set_fee_tier(fee);
        Ok(previous)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::config::RatioPolicy;
    use crate::pool::state::tests::{empty_pool, ALICE, OWNER, TOKEN1, TOKEN2};

    #[test]
    fn owner_binds_once() {
        let mut pool = empty_pool(30, RatioPolicy::Strict);
        let Ok(pair) = pool.bind_assets(OWNER, TOKEN1, TOKEN2) else {
            panic!("first bind");
        };
        assert_eq!(pool.assets(), Some(pair));
        assert_eq!(
            pool.bind_assets(OWNER, TOKEN2, TOKEN1),
            Err(AmmError::AlreadyBound)
        );
        assert_eq!(pool.assets(), Some(pair));
    }

    #[test]
    fn stranger_cannot_bind() {
        let mut pool = empty_pool(30, RatioPolicy::Strict);
        assert_eq!(
            pool.bind_assets(ALICE, TOKEN1, TOKEN2),
            Err(AmmError::Unauthorized)
        );
        assert_eq!(pool.assets(), None);
    }

    #[test]
    fn unauthorized_wins_over_already_bound() {
        let mut pool = empty_pool(30, RatioPolicy::Strict);
        let Ok(_) = pool.bind_assets(OWNER, TOKEN1, TOKEN2) else {
            panic!("first bind");
        };
        assert_eq!(
            pool.bind_assets(ALICE, TOKEN1, TOKEN2),
            Err(AmmError::Unauthorized)
        );
    }

    #[test]
    fn bind_rejects_bad_addresses() {
        let mut pool = empty_pool(30, RatioPolicy::Strict);
        assert!(matches!(
            pool.bind_assets(OWNER, Address::ZERO, TOKEN2),
            Err(AmmError::InvalidAsset(_))
        ));
        assert!(matches!(
            pool.bind_assets(OWNER, TOKEN1, TOKEN1),
            Err(AmmError::InvalidAsset(_))
        ));
        assert_eq!(pool.assets(), None);
    }

    #[test]
    fn fee_update_bounds() {
        let mut pool = empty_pool(30, RatioPolicy::Strict);
        let Ok(previous) = pool.update_fee(OWNER, 1_000) else {
            panic!("max fee allowed");
        };
        assert_eq!(previous, FeeTier::DEFAULT);
        assert_eq!(pool.fee().basis_points().get(), 1_000);

        assert_eq!(pool.update_fee(OWNER, 1_001), Err(AmmError::FeeTooHigh));
        assert_eq!(pool.fee().basis_points().get(), 1_000);

        let Ok(_) = pool.update_fee(OWNER, 0) else {
            panic!("zero fee allowed");
        };
        assert_eq!(pool.fee(), FeeTier::ZERO);
    }

    #[test]
    fn stranger_cannot_set_fee() {
        let mut pool = empty_pool(30, RatioPolicy::Strict);
        assert_eq!(pool.update_fee(ALICE, 10), Err(AmmError::Unauthorized));
        assert_eq!(pool.update_fee(ALICE, 5_000), Err(AmmError::Unauthorized));
        assert_eq!(pool.fee(), FeeTier::DEFAULT);
    }
}
