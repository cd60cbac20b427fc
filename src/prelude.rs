//! Convenience re-exports for common types and traits.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use cp_amm::prelude::*;
//! ```

// Domain types
pub use crate::domain::{
    Address, Amount, AssetPair, BasisPoints, CallContext, Deposit, FeeTier, PoolDetails,
    PoolEvent, Rounding, Shares, SwapDirection, SwapResult, Timestamp, Withdrawal,
};

// Core traits
pub use crate::traits::{Clock, FromConfig, LiquidityPool, SwapPool, TokenLedger};

// Math utilities
pub use crate::math::CheckedArithmetic;

// Configuration
pub use crate::config::{PoolConfig, RatioPolicy};

// Pool and collaborators
pub use crate::clock::{ManualClock, SystemClock};
pub use crate::ledger::InMemoryTokenLedger;
pub use crate::pool::{Amm, Pool};

// Errors
pub use crate::error::{AmmError, Result, TransferError};
