//! The pool record: identities, assets, reserves, shares and fee.
//!
//! [`Pool`] is the single piece of mutable state of an AMM instance.  It
//! is exclusively owned by the [`Amm`](super::Amm) facade, which is the
//! only component that commits changes to it.  Every state transition is
//! staged on copies and assigned at the end, so an error never leaves the
//! record half-updated.
//!
//! # Invariants
//!
//! - `owner` never changes after construction.
//! - `assets` is set at most once.
//! - `0 ≤ fee ≤ 1000 bps`, enforced by [`FeeTier`].
//! - `total_shares = Σ balances[provider]`.
//! - `total_shares = 0  ⇔  reserve1 = reserve2 = 0`.

use std::collections::BTreeMap;

use crate::config::{PoolConfig, RatioPolicy};
use crate::domain::{Address, AssetPair, FeeTier, PoolDetails, Shares};
use crate::error::AmmError;
use crate::traits::FromConfig;

use super::Reserves;

/// State of a two-asset constant-product pool.
///
/// Built from a [`PoolConfig`] via [`FromConfig`]; starts with no assets
/// bound, empty reserves and no shares.
///
/// # Example
///
/// ```rust
/// use cp_amm::config::PoolConfig;
/// use cp_amm::domain::{Address, Shares};
/// use cp_amm::pool::Pool;
/// use cp_amm::traits::FromConfig;
///
/// let cfg = PoolConfig::new(Address::repeat(1), Address::repeat(0xaa)).expect("valid");
/// let pool = Pool::from_config(&cfg).expect("pool created");
///
/// assert!(pool.assets().is_none());
/// assert_eq!(pool.total_shares(), Shares::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    owner: Address,
    address: Address,
    assets: Option<AssetPair>,
    reserves: Reserves,
    total_shares: Shares,
    fee: FeeTier,
    ratio_policy: RatioPolicy,
    balances: BTreeMap<Address, Shares>,
}

impl Pool {
    /// Identity allowed to bind assets and change the fee.
    #[must_use]
    pub const fn owner(&self) -> Address {
        self.owner
    }

    /// Identity the pool holds its balances under on the asset ledgers.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.address
    }

    /// The bound asset pair, if any.
    #[must_use]
    pub const fn assets(&self) -> Option<AssetPair> {
        self.assets
    }

    /// Current reserves.
    #[must_use]
    pub const fn reserves(&self) -> Reserves {
        self.reserves
    }

    /// Outstanding shares.
    #[must_use]
    pub const fn total_shares(&self) -> Shares {
        self.total_shares
    }

    /// Current swap fee.
    #[must_use]
    pub const fn fee(&self) -> FeeTier {
        self.fee
    }

    /// How non-initial deposits are checked against the reserve ratio.
    #[must_use]
    pub const fn ratio_policy(&self) -> RatioPolicy {
        self.ratio_policy
    }

    /// Shares owned by `provider`.
    #[must_use]
    pub fn balance_of(&self, provider: Address) -> Shares {
        self.balances.get(&provider).copied().unwrap_or_default()
    }

    /// Every provider with a non-zero share balance.
    pub fn providers(&self) -> impl Iterator<Item = (Address, Shares)> + '_ {
        self.balances.iter().map(|(addr, shares)| (*addr, *shares))
    }

    /// Snapshot of reserves, shares and fee.
    #[must_use]
    pub const fn details(&self) -> PoolDetails {
        PoolDetails {
            reserve1: self.reserves.reserve1(),
            reserve2: self.reserves.reserve2(),
            total_shares: self.total_shares,
            fee: self.fee,
        }
    }

    /// The bound asset pair.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::AssetsNotBound`] before the owner has bound
    /// the assets.
    pub(crate) fn bound_assets(&self) -> Result<AssetPair, AmmError> {
        self.assets.ok_or(AmmError::AssetsNotBound)
    }

    pub(crate) fn set_assets(&mut self, assets: AssetPair) {
        self.assets = Some(assets);
    }

    pub(crate) fn set_fee_tier(&mut self, fee: FeeTier) {
        self.fee = fee;
    }

    pub(crate) fn set_reserves(&mut self, reserves: Reserves) {
        self.reserves = reserves;
    }

    /// Credits `shares` to `provider` and to the total, together with the
    /// staged `reserves`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if a share count exceeds 256 bits.
    /// Nothing is written on error.
    pub(crate) fn mint_shares(
        &mut self,
        provider: Address,
        shares: Shares,
        reserves: Reserves,
    ) -> Result<(), AmmError> {
        let total = self
            .total_shares
            .checked_add(&shares)
            .ok_or(AmmError::Overflow("total shares overflow"))?;
        let balance = self
            .balance_of(provider)
            .checked_add(&shares)
            .ok_or(AmmError::Overflow("share balance overflow"))?;
        self.total_shares = total;
        self.balances.insert(provider, balance);
        self.reserves = reserves;
        Ok(())
    }

    /// Removes `shares` from `provider` and from the total, together with
    /// the staged `reserves`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InsufficientShares`] if `provider` owns fewer
    /// than `shares`.  Nothing is written on error.
    pub(crate) fn burn_shares(
        &mut self,
        provider: Address,
        shares: Shares,
        reserves: Reserves,
    ) -> Result<(), AmmError> {
        let balance = self
            .balance_of(provider)
            .checked_sub(&shares)
            .ok_or(AmmError::InsufficientShares)?;
        let total = self
            .total_shares
            .checked_sub(&shares)
            .ok_or(AmmError::Underflow("total shares underflow"))?;
        self.total_shares = total;
        if balance.is_zero() {
            self.balances.remove(&provider);
        } else {
            self.balances.insert(provider, balance);
        }
        self.reserves = reserves;
        Ok(())
    }
}

impl FromConfig<PoolConfig> for Pool {
    /// Creates an empty pool owned by `config.owner()`.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`PoolConfig::validate`].
    fn from_config(config: &PoolConfig) -> Result<Self, AmmError> {
        config.validate()?;
        Ok(Self {
            owner: config.owner(),
            address: config.pool_address(),
            assets: None,
            reserves: Reserves::EMPTY,
            total_shares: Shares::ZERO,
            fee: config.fee(),
            ratio_policy: config.ratio_policy(),
            balances: BTreeMap::new(),
        })
    }
}
