//! The AMM contract facade.
//!
//! [`Amm`] owns the [`Pool`] record together with its two external
//! capabilities: a [`TokenLedger`] that moves the pooled assets and a
//! [`Clock`] that supplies the current time.  Every state-changing call
//! follows the same pipeline:
//!
//! ```text
//! deadline guard ─► validate + compute (pure) ─► settle transfers ─► commit ─► event
//! ```
//!
//! A failure at any stage returns before the pool record is written, and a
//! failed settlement rolls the ledger back to its checkpoint, so rejected
//! calls have no effect.

use tracing::{info, warn};

use crate::config::PoolConfig;
use crate::domain::{
    Address, Amount, AssetPair, AssetSlot, CallContext, Deposit, FeeTier, PoolDetails, PoolEvent,
    Shares, SwapDirection, SwapResult, Withdrawal,
};
use crate::error::AmmError;
use crate::traits::{Clock, FromConfig, LiquidityPool, SwapPool, TokenLedger};

use super::guard::ensure_live;
use super::settlement::{settle, Leg};
use super::Pool;

/// A constant-product AMM bound to an asset ledger and a clock.
///
/// # Example
///
/// ```rust
/// use cp_amm::clock::ManualClock;
/// use cp_amm::config::PoolConfig;
/// use cp_amm::domain::{Address, Amount, CallContext, Timestamp};
/// use cp_amm::ledger::InMemoryTokenLedger;
/// use cp_amm::pool::Amm;
/// use cp_amm::traits::LiquidityPool;
///
/// let (owner, pool_addr, alice) = (Address::repeat(1), Address::repeat(0xaa), Address::repeat(0xa1));
/// let (usdc, weth) = (Address::repeat(0x11), Address::repeat(0x22));
///
/// let mut ledger = InMemoryTokenLedger::new();
/// for token in [usdc, weth] {
///     ledger.mint(token, alice, Amount::new(1_000_000)).expect("mint");
///     ledger.approve(token, alice, pool_addr, Amount::new(1_000_000));
/// }
///
/// let config = PoolConfig::new(owner, pool_addr).expect("valid config");
/// let clock = ManualClock::at(Timestamp::from_secs(1_000));
/// let mut amm = Amm::new(&config, ledger, clock).expect("amm created");
/// amm.set_pool_tokens(owner, usdc, weth).expect("owner binds");
///
/// let ctx = CallContext::new(alice, Timestamp::from_secs(1_060));
/// let deposit = amm.provide(&ctx, Amount::new(1_000), Amount::new(4_000)).expect("provided");
/// assert_eq!(amm.balance_of(alice), deposit.minted);
/// ```
#[derive(Debug, Clone)]
pub struct Amm<L, C> {
    pool: Pool,
    ledger: L,
    clock: C,
    events: Vec<PoolEvent>,
}

impl<L: TokenLedger, C: Clock> Amm<L, C> {
    /// Creates an AMM with an empty pool described by `config`.
    ///
    /// # Errors
    ///
    /// Propagates [`PoolConfig::validate`] failures.
    pub fn new(config: &PoolConfig, ledger: L, clock: C) -> Result<Self, AmmError> {
        let pool = Pool::from_config(config)?;
        info!(
            owner = %pool.owner(),
            address = %pool.address(),
            fee = %pool.fee(),
            ratio_policy = %pool.ratio_policy(),
            "pool created"
        );
        Ok(Self {
            pool,
            ledger,
            clock,
            events: Vec::new(),
        })
    }

    /// Identity allowed to run the administrative calls.
    #[must_use]
    pub const fn owner(&self) -> Address {
        self.pool.owner()
    }

    /// The pool's own identity on the asset ledger.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.pool.address()
    }

    /// The bound assets, `None` until [`set_pool_tokens`](Self::set_pool_tokens).
    #[must_use]
    pub const fn assets(&self) -> Option<AssetPair> {
        self.pool.assets()
    }

    /// Read access to the pool record.
    #[must_use]
    pub const fn pool(&self) -> &Pool {
        &self.pool
    }

    /// Reserves, outstanding shares and fee.
    #[must_use]
    pub const fn pool_details(&self) -> PoolDetails {
        self.pool.details()
    }

    /// Shares owned by `provider`.
    #[must_use]
    pub fn balance_of(&self, provider: Address) -> Shares {
        self.pool.balance_of(provider)
    }

    /// Token 2 equivalent to `amount1` of token 1 at the current ratio.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolEmpty`] while the pool has no liquidity.
    pub fn equivalent_token2_estimate(&self, amount1: Amount) -> Result<Amount, AmmError> {
        self.pool.equivalent_token2_estimate(amount1)
    }

    /// Token 1 equivalent to `amount2` of token 2 at the current ratio.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolEmpty`] while the pool has no liquidity.
    pub fn equivalent_token1_estimate(&self, amount2: Amount) -> Result<Amount, AmmError> {
        self.pool.equivalent_token1_estimate(amount2)
    }

    /// Events of committed calls, oldest first.
    #[must_use]
    pub fn events(&self) -> &[PoolEvent] {
        &self.events
    }

    /// Removes and returns every recorded event.
    pub fn drain_events(&mut self) -> Vec<PoolEvent> {
        core::mem::take(&mut self.events)
    }

    /// The asset ledger.
    #[must_use]
    pub const fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Mutable access to the asset ledger, e.g. to fund or approve.
    pub fn ledger_mut(&mut self) -> &mut L {
        &mut self.ledger
    }

    /// The clock.
    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Mutable access to the clock.
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Binds the two tradable assets.  Owner only, once.
    ///
    /// # Errors
    ///
    /// [`AmmError::Unauthorized`], then [`AmmError::AlreadyBound`], then
    /// [`AmmError::InvalidAsset`].
    pub fn set_pool_tokens(
        &mut self,
        caller: Address,
        token1: Address,
        token2: Address,
    ) -> Result<AssetPair, AmmError> {
        let assets = self
            .pool
            .bind_assets(caller, token1, token2)
            .inspect_err(|e| warn!(%caller, error = %e, "set_pool_tokens rejected"))?;
        info!(%caller, token1 = %assets.token1(), token2 = %assets.token2(), "assets bound");
        self.record(PoolEvent::AssetsBound { assets });
        Ok(assets)
    }

    /// Sets the swap fee in basis points.  Owner only.
    ///
    /// # Errors
    ///
    /// [`AmmError::Unauthorized`], then [`AmmError::FeeTooHigh`] if
    /// `bps > 1000`.
    pub fn set_fee(&mut self, caller: Address, bps: u32) -> Result<(), AmmError> {
        let previous = self
            .pool
            .update_fee(caller, bps)
            .inspect_err(|e| warn!(%caller, bps, error = %e, "set_fee rejected"))?;
        let current = self.pool.fee();
        info!(%caller, %previous, %current, "fee updated");
        self.record(PoolEvent::FeeUpdated { previous, current });
        Ok(())
    }

    /// Sells `amount_in` of token 1 for at least `min_out` of token 2.
    ///
    /// # Errors
    ///
    /// See [`SwapPool::swap`].
    pub fn swap_token1(
        &mut self,
        ctx: &CallContext,
        amount_in: Amount,
        min_out: Amount,
    ) -> Result<SwapResult, AmmError> {
        self.swap(ctx, SwapDirection::Token1ToToken2, amount_in, min_out)
    }

    /// Sells `amount_in` of token 2 for at least `min_out` of token 1.
    ///
    /// # Errors
    ///
    /// See [`SwapPool::swap`].
    pub fn swap_token2(
        &mut self,
        ctx: &CallContext,
        amount_in: Amount,
        min_out: Amount,
    ) -> Result<SwapResult, AmmError> {
        self.swap(ctx, SwapDirection::Token2ToToken1, amount_in, min_out)
    }

    fn record(&mut self, event: PoolEvent) {
        self.events.push(event);
    }

    fn execute_swap(
        &mut self,
        ctx: &CallContext,
        direction: SwapDirection,
        amount_in: Amount,
        min_out: Amount,
    ) -> Result<SwapResult, AmmError> {
        ensure_live(&self.clock, ctx)?;
        let (assets, result) = self.pool.plan_swap(direction, amount_in, min_out)?;
        let (token_in, token_out) = assets.route(direction);
        let trader = ctx.caller();
        settle(
            &mut self.ledger,
            self.pool.address(),
            &[
                Leg::Pull {
                    token: token_in,
                    counterparty: trader,
                    amount: result.amount_in(),
                },
                Leg::Push {
                    token: token_out,
                    counterparty: trader,
                    amount: result.amount_out(),
                },
            ],
        )?;
        self.pool.apply_swap(&result)?;
        info!(
            %trader,
            %direction,
            amount_in = %result.amount_in(),
            amount_out = %result.amount_out(),
            fee = %result.fee(),
            "swap"
        );
        self.record(PoolEvent::Swap {
            trader,
            amount_in: result.amount_in(),
            amount_out: result.amount_out(),
            direction,
        });
        Ok(result)
    }

    fn execute_provide(
        &mut self,
        ctx: &CallContext,
        amount1: Amount,
        amount2: Amount,
    ) -> Result<Deposit, AmmError> {
        ensure_live(&self.clock, ctx)?;
        let (assets, deposit) = self.pool.plan_deposit(amount1, amount2)?;
        let provider = ctx.caller();
        settle(
            &mut self.ledger,
            self.pool.address(),
            &[
                Leg::Pull {
                    token: assets.get(AssetSlot::First),
                    counterparty: provider,
                    amount: deposit.amount1,
                },
                Leg::Pull {
                    token: assets.get(AssetSlot::Second),
                    counterparty: provider,
                    amount: deposit.amount2,
                },
            ],
        )?;
        self.pool.apply_deposit(provider, &deposit)?;
        info!(
            %provider,
            amount1 = %deposit.amount1,
            amount2 = %deposit.amount2,
            shares = %deposit.minted,
            "mint"
        );
        self.record(PoolEvent::Mint {
            provider,
            amount1: deposit.amount1,
            amount2: deposit.amount2,
            shares: deposit.minted,
        });
        Ok(deposit)
    }

    fn execute_withdraw(
        &mut self,
        ctx: &CallContext,
        shares: Shares,
        min_amount1: Amount,
        min_amount2: Amount,
    ) -> Result<Withdrawal, AmmError> {
        ensure_live(&self.clock, ctx)?;
        let provider = ctx.caller();
        let (assets, withdrawal) =
            self.pool
                .plan_withdrawal(provider, shares, min_amount1, min_amount2)?;
        settle(
            &mut self.ledger,
            self.pool.address(),
            &[
                Leg::Push {
                    token: assets.get(AssetSlot::First),
                    counterparty: provider,
                    amount: withdrawal.amount1,
                },
                Leg::Push {
                    token: assets.get(AssetSlot::Second),
                    counterparty: provider,
                    amount: withdrawal.amount2,
                },
            ],
        )?;
        self.pool.apply_withdrawal(provider, &withdrawal)?;
        info!(
            %provider,
            amount1 = %withdrawal.amount1,
            amount2 = %withdrawal.amount2,
            shares = %withdrawal.burned,
            "burn"
        );
        self.record(PoolEvent::Burn {
            provider,
            amount1: withdrawal.amount1,
            amount2: withdrawal.amount2,
            shares: withdrawal.burned,
        });
        Ok(withdrawal)
    }
}

impl<L: TokenLedger, C: Clock> SwapPool for Amm<L, C> {
    fn swap(
        &mut self,
        ctx: &CallContext,
        direction: SwapDirection,
        amount_in: Amount,
        min_out: Amount,
    ) -> Result<SwapResult, AmmError> {
        self.execute_swap(ctx, direction, amount_in, min_out)
            .inspect_err(|e| {
                warn!(caller = %ctx.caller(), %direction, %amount_in, error = %e, "swap rejected");
            })
    }

    fn quote(&self, direction: SwapDirection, amount_in: Amount) -> Result<SwapResult, AmmError> {
        self.pool.quote_swap(direction, amount_in)
    }

    fn fee(&self) -> FeeTier {
        self.pool.fee()
    }
}

impl<L: TokenLedger, C: Clock> LiquidityPool for Amm<L, C> {
    fn provide(
        &mut self,
        ctx: &CallContext,
        amount1: Amount,
        amount2: Amount,
    ) -> Result<Deposit, AmmError> {
        self.execute_provide(ctx, amount1, amount2).inspect_err(|e| {
            warn!(caller = %ctx.caller(), %amount1, %amount2, error = %e, "provide rejected");
        })
    }

    fn withdraw(
        &mut self,
        ctx: &CallContext,
        shares: Shares,
        min_amount1: Amount,
        min_amount2: Amount,
    ) -> Result<Withdrawal, AmmError> {
        self.execute_withdraw(ctx, shares, min_amount1, min_amount2)
            .inspect_err(|e| {
                warn!(caller = %ctx.caller(), %shares, error = %e, "withdraw rejected");
            })
    }

    fn withdraw_estimate(&self, shares: Shares) -> Result<Withdrawal, AmmError> {
        self.pool.estimate_withdrawal(shares)
    }

    fn total_shares(&self) -> Shares {
        self.pool.total_shares()
    }
}
