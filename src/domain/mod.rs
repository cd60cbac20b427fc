//! Fundamental domain value types used throughout the pool.
//!
//! This module contains the value types that model the AMM domain:
//! identities, amounts, shares, fees, timestamps, swap outcomes, receipts,
//! and events.  Types with invariants use validated constructors.

mod address;
mod amount;
mod asset_pair;
mod basis_points;
mod event;
mod fee_tier;
mod receipts;
mod rounding;
mod shares;
mod swap_result;
mod timestamp;

pub use address::Address;
pub use amount::Amount;
pub use asset_pair::{AssetPair, AssetSlot};
pub use basis_points::BasisPoints;
pub use event::PoolEvent;
pub use fee_tier::FeeTier;
pub use receipts::{Deposit, PoolDetails, Withdrawal};
pub use rounding::Rounding;
pub use shares::Shares;
pub use swap_result::{SwapDirection, SwapResult};
pub use timestamp::{CallContext, Timestamp};
