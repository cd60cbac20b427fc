//! Configuration for a constant-product pool.

use core::fmt;

use crate::domain::{Address, FeeTier};
use crate::error::AmmError;

/// How non-initial deposits are checked against the reserve ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RatioPolicy {
    /// `amount2` must equal `amount1 × reserve2 / reserve1` rounded either
    /// way; anything else fails with
    /// [`AmmError::RatioMismatch`].
    #[default]
    Strict,
    /// Any ratio is accepted.  Shares are still minted against the smaller
    /// side, so the surplus of the other asset is donated to the pool.
    Lenient,
}

impl fmt::Display for RatioPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Lenient => write!(f, "lenient"),
        }
    }
}

/// Construction parameters of a pool.
///
/// Defines who owns the pool, the identity the pool uses on the asset
/// ledgers, the initial swap fee, and the deposit ratio policy.  The pool
/// assets are *not* part of the configuration: the owner binds them once
/// after construction.
///
/// # Validation
///
/// - `owner` and `pool_address` must both be non-zero.
/// - `owner` and `pool_address` must differ.
///
/// # Examples
///
/// ```
/// use cp_amm::config::{PoolConfig, RatioPolicy};
/// use cp_amm::domain::{Address, FeeTier};
///
/// let cfg = PoolConfig::new(Address::repeat(1), Address::repeat(0xaa))
///     .expect("valid identities")
///     .with_fee(FeeTier::new(50).expect("within ceiling"))
///     .with_ratio_policy(RatioPolicy::Lenient);
/// assert_eq!(cfg.fee().basis_points().get(), 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoolConfig {
    owner: Address,
    pool_address: Address,
    fee: FeeTier,
    ratio_policy: RatioPolicy,
}

impl PoolConfig {
    /// Creates a configuration with the default fee and ratio policy.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if either identity is
    /// zero or both are equal.
    pub fn new(owner: Address, pool_address: Address) -> Result<Self, AmmError> {
        let config = Self {
            owner,
            pool_address,
            fee: FeeTier::DEFAULT,
            ratio_policy: RatioPolicy::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Replaces the initial swap fee.
    #[must_use]
    pub const fn with_fee(mut self, fee: FeeTier) -> Self {
        self.fee = fee;
        self
    }

    /// Replaces the deposit ratio policy.
    #[must_use]
    pub const fn with_ratio_policy(mut self, ratio_policy: RatioPolicy) -> Self {
        self.ratio_policy = ratio_policy;
        self
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] on the first violated
    /// invariant.
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.owner.is_zero() {
            return Err(AmmError::InvalidConfiguration("owner must be non-zero"));
        }
        if self.pool_address.is_zero() {
            return Err(AmmError::InvalidConfiguration(
                "pool address must be non-zero",
            ));
        }
        if self.owner == self.pool_address {
            return Err(AmmError::InvalidConfiguration(
                "owner and pool address must differ",
            ));
        }
        Ok(())
    }

    /// Identity allowed to bind assets and change the fee.
    #[must_use]
    pub const fn owner(&self) -> Address {
        self.owner
    }

    /// Identity the pool holds its reserves under on the asset ledgers.
    #[must_use]
    pub const fn pool_address(&self) -> Address {
        self.pool_address
    }

    /// Initial swap fee.
    #[must_use]
    pub const fn fee(&self) -> FeeTier {
        self.fee
    }

    /// Deposit ratio policy.
    #[must_use]
    pub const fn ratio_policy(&self) -> RatioPolicy {
        self.ratio_policy
    }
}

impl fmt::Display for PoolConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PoolConfig(owner={}, pool={}, fee={}, ratio={})",
            self.owner,
            self.pool_address,
            self.fee.basis_points(),
            self.ratio_policy
        )
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn valid_config_uses_defaults() {
        let Ok(cfg) = PoolConfig::new(Address::repeat(1), Address::repeat(2)) else {
            panic!("expected valid config");
        };
        assert_eq!(cfg.owner(), Address::repeat(1));
        assert_eq!(cfg.pool_address(), Address::repeat(2));
        assert_eq!(cfg.fee(), FeeTier::DEFAULT);
        assert_eq!(cfg.ratio_policy(), RatioPolicy::Strict);
    }

    #[test]
    fn zero_owner_rejected() {
        assert!(matches!(
            PoolConfig::new(Address::ZERO, Address::repeat(2)),
            Err(AmmError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn zero_pool_address_rejected() {
        assert!(matches!(
            PoolConfig::new(Address::repeat(1), Address::ZERO),
            Err(AmmError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn owner_equal_to_pool_rejected() {
        assert!(matches!(
            PoolConfig::new(Address::repeat(5), Address::repeat(5)),
            Err(AmmError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn builders_override() {
        let Ok(cfg) = PoolConfig::new(Address::repeat(1), Address::repeat(2)) else {
            panic!("expected valid config");
        };
        let cfg = cfg
            .with_fee(FeeTier::ZERO)
            .with_ratio_policy(RatioPolicy::Lenient);
        assert_eq!(cfg.fee(), FeeTier::ZERO);
        assert_eq!(cfg.ratio_policy(), RatioPolicy::Lenient);
        assert!(cfg.to_string().contains("ratio=lenient"));
    }
}
