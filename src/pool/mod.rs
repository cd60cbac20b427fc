//! The constant-product pool and its contract facade.
//!
//! [`Pool`] is the state record: identities, bound assets, [`Reserves`],
//! share balances and fee.  Its engines are split by concern:
//!
//! | File | Concern |
//! |------|---------|
//! | `access` | owner-only asset binding and fee updates |
//! | `liquidity` | share minting and burning |
//! | `swap` | constant-product pricing with input-side fee |
//! | `estimate` | equivalent-value views |
//! | `guard` | deadline check |
//! | `settlement` | ordered external transfers with reversal on failure |
//!
//! [`Amm`] wires the record to a [`TokenLedger`](crate::traits::TokenLedger)
//! and a [`Clock`](crate::traits::Clock) and exposes the
//! [`SwapPool`](crate::traits::SwapPool) and
//! [`LiquidityPool`](crate::traits::LiquidityPool) surfaces.

mod access;
mod amm;
mod estimate;
mod guard;
mod liquidity;
mod reserves;
mod settlement;
pub(crate) mod state;
mod swap;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use amm::Amm;
pub use reserves::Reserves;
pub use state::Pool;
