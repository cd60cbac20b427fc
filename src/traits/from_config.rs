//! Construction from a validated configuration.
//!
//! [`FromConfig`] gives every configurable component a uniform
//! constructor.  Implementations **must** validate the configuration and
//! return a value that already satisfies all of its invariants.

use crate::error::AmmError;

/// Builds `Self` from a configuration value.
///
/// # Implementors
///
/// - `impl FromConfig<PoolConfig> for Pool`
///
/// # Errors
///
/// Returns [`AmmError::InvalidConfiguration`] (or a more specific
/// variant) if the configuration is invalid.
pub trait FromConfig<C> {
    /// Creates a new instance from `config`.
    ///
    /// The configuration is taken by reference so it can be reused, for
    /// example to log it after construction.
    ///
    /// # Errors
    ///
    /// Propagates the configuration's validation error.
    fn from_config(config: &C) -> Result<Self, AmmError>
    where
        Self: Sized;
}
