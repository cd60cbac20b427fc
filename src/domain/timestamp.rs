//! Wall-clock instants and per-call context.

use core::fmt;

use super::Address;

/// Seconds since the Unix epoch, the resolution of block timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp(u64);

impl Timestamp {
    /// The epoch.
    pub const EPOCH: Self = Self(0);

    /// Latest representable instant; a deadline that never expires.
    pub const MAX: Self = Self(u64::MAX);

    /// Creates a timestamp from seconds since the epoch.
    #[must_use]
    pub const fn from_secs(secs: u64) -> Self {
        Self(secs)
    }

    /// Seconds since the epoch.
    #[must_use]
    pub const fn as_secs(&self) -> u64 {
        self.0
    }

    /// Returns `self + secs`, saturating at [`Timestamp::MAX`].
    #[must_use]
    pub const fn plus_secs(&self, secs: u64) -> Self {
        Self(self.0.saturating_add(secs))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

/// Ephemeral context of one user-facing call: who is calling and until
/// when the call may execute.  Never persisted.
///
/// # Examples
///
/// ```
/// use cp_amm::domain::{Address, CallContext, Timestamp};
///
/// let ctx = CallContext::new(Address::repeat(7), Timestamp::from_secs(1_700_000_000));
/// assert_eq!(ctx.caller(), Address::repeat(7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallContext {
    caller: Address,
    deadline: Timestamp,
}

impl CallContext {
    /// Creates a call context.
    #[must_use]
    pub const fn new(caller: Address, deadline: Timestamp) -> Self {
        Self { caller, deadline }
    }

    /// Identity of the caller.
    #[must_use]
    pub const fn caller(&self) -> Address {
        self.caller
    }

    /// Latest instant at which the call may still execute.
    #[must_use]
    pub const fn deadline(&self) -> Timestamp {
        self.deadline
    }

    /// Returns `true` if `now` is past the deadline.
    #[must_use]
    pub fn is_expired(&self, now: Timestamp) -> bool {
        now > self.deadline
    }
}
