//! Pool configuration.
//!
//! [`PoolConfig`] is the declarative blueprint for a pool: its owner, the
//! identity it holds reserves under, the initial fee, and the
//! [`RatioPolicy`] applied to deposits.  The pool state record is built
//! from it through [`FromConfig`](crate::traits::FromConfig).

mod pool_config;

pub use pool_config::{PoolConfig, RatioPolicy};
