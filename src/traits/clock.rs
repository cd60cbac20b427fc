//! Source of the current time for deadline checks.

use crate::domain::Timestamp;

/// Supplies "now" to the pool's deadline guard.
///
/// On a ledger this is the block timestamp; off-chain it is the wall
/// clock or a simulated time.
pub trait Clock {
    /// The current instant.
    fn now(&self) -> Timestamp;
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}
