//! Core trait abstractions.
//!
//! [`SwapPool`] and [`LiquidityPool`] are the operation surfaces a pool
//! exposes; [`FromConfig`] builds pool state from configuration.
//! [`TokenLedger`] and [`Clock`] are the external capabilities a pool is
//! given: asset transfers and the current time.

mod clock;
mod from_config;
mod liquidity_pool;
mod swap_pool;
mod token_ledger;

pub use clock::Clock;
pub use from_config::FromConfig;
pub use liquidity_pool::LiquidityPool;
pub use swap_pool::SwapPool;
pub use token_ledger::TokenLedger;
