//! # cp-amm
//!
//! A two-asset constant-product automated market maker (`x · y = k`) with
//! owner-administered asset binding and fee, deadline-guarded trading and
//! liquidity operations, slippage bounds, and proportional ownership
//! shares.
//!
//! The pool never holds assets itself.  Funds live on an external
//! [`TokenLedger`](traits::TokenLedger) that the pool moves them through,
//! and time comes from an injected [`Clock`](traits::Clock).  An
//! [`InMemoryTokenLedger`](ledger::InMemoryTokenLedger) and a
//! [`ManualClock`](clock::ManualClock) are provided for tests and
//! simulations.
//!
//! # Quick Start
//!
//! ```rust
//! use cp_amm::prelude::*;
//!
//! let owner = Address::repeat(0x01);
//! let pool_addr = Address::repeat(0xaa);
//! let trader = Address::repeat(0x0b);
//! let usdc: Address = "0x8B0180f2101c8260d49339abfEe87927412494B4".parse().expect("hex");
//! let weth: Address = "0x52eF3d68BaB452a294342DC3e5f464d7f610f72E".parse().expect("hex");
//!
//! // 1. Fund the trader on the asset ledger and approve the pool
//! let mut ledger = InMemoryTokenLedger::new();
//! for token in [usdc, weth] {
//!     ledger.mint(token, trader, Amount::new(10_000_000)).expect("mint");
//!     ledger.approve(token, trader, pool_addr, Amount::MAX);
//! }
//!
//! // 2. Create the pool (0.30% default fee) and bind its assets
//! let config = PoolConfig::new(owner, pool_addr).expect("valid config");
//! let clock = ManualClock::at(Timestamp::from_secs(1_700_000_000));
//! let mut amm = Amm::new(&config, ledger, clock).expect("amm created");
//! amm.set_pool_tokens(owner, usdc, weth).expect("owner binds once");
//!
//! // 3. Provide liquidity, then swap with a deadline and a slippage bound
//! let ctx = CallContext::new(trader, Timestamp::from_secs(1_700_000_060));
//! amm.provide(&ctx, Amount::new(1_000_000), Amount::new(1_000_000)).expect("provided");
//!
//! let quote = amm.quote(SwapDirection::Token1ToToken2, Amount::new(10_000)).expect("quote");
//! let result = amm
//!     .swap_token1(&ctx, Amount::new(10_000), quote.amount_out())
//!     .expect("swap succeeded");
//!
//! assert_eq!(result, quote);
//! assert!(result.fee() > Amount::ZERO);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │    Caller     │  CallContext { caller, deadline }
//! └──────┬───────┘
//!        │ provide / withdraw / swap_token1 / swap_token2
//!        ▼
//! ┌──────────────┐
//! │     Amm       │  deadline guard, settlement, events
//! └──────┬───────┘
//!        │ plan (pure) ─► commit
//!        ▼
//! ┌──────────────┐        ┌──────────────┐
//! │     Pool      │        │ TokenLedger  │  transfer / transfer_from
//! └──────┬───────┘        └──────────────┘
//!        │ curve formulas
//!        ▼
//! ┌──────────────┐
//! │  math/domain  │  Amount (U256), Shares, FeeTier, …
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`Shares`](domain::Shares), [`FeeTier`](domain::FeeTier), [`PoolEvent`](domain::PoolEvent), etc. |
//! | [`traits`] | Core abstractions: [`SwapPool`](traits::SwapPool), [`LiquidityPool`](traits::LiquidityPool), [`FromConfig`](traits::FromConfig), [`TokenLedger`](traits::TokenLedger), [`Clock`](traits::Clock) |
//! | [`config`] | [`PoolConfig`](config::PoolConfig) and [`RatioPolicy`](config::RatioPolicy) |
//! | [`pool`] | [`Pool`](pool::Pool) state record and the [`Amm`](pool::Amm) facade |
//! | [`ledger`] | [`InMemoryTokenLedger`](ledger::InMemoryTokenLedger) |
//! | [`clock`] | [`SystemClock`](clock::SystemClock) and [`ManualClock`](clock::ManualClock) |
//! | [`math`] | Checked arithmetic, `mul_div`, integer square root, curve formulas |
//! | [`error`] | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |
//!
//! # Demos
//!
//! Runnable samples are kept under `demos/` rather than `examples/` and are
//! registered as example targets in `Cargo.toml`:
//!
//! ```text
//! cargo run --example constant_product
//! ```

pub mod clock;
pub mod config;
pub mod domain;
pub mod error;
pub mod ledger;
pub mod math;
pub mod pool;
pub mod prelude;
pub mod traits;
