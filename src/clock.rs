//! [`Clock`] implementations.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::domain::Timestamp;
use crate::traits::Clock;

/// Reads the host's wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        // A host clock set before 1970 reads as the epoch.
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Timestamp::from_secs(secs)
    }
}

/// A clock that only moves when told to, for tests and simulations.
///
/// # Examples
///
/// ```
/// use cp_amm::clock::ManualClock;
/// use cp_amm::domain::Timestamp;
/// use cp_amm::traits::Clock;
///
/// let mut clock = ManualClock::at(Timestamp::from_secs(100));
/// clock.advance(20);
/// assert_eq!(clock.now(), Timestamp::from_secs(120));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ManualClock {
    now: Timestamp,
}

impl ManualClock {
    /// Creates a clock reading `now`.
    #[must_use]
    pub const fn at(now: Timestamp) -> Self {
        Self { now }
    }

    /// Sets the current instant.
    pub fn set(&mut self, now: Timestamp) {
        self.now = now;
    }

    /// Moves the clock forward by `secs`.
    pub fn advance(&mut self, secs: u64) {
        self.now = self.now.plus_secs(secs);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_is_after_2020() {
        assert!(SystemClock.now() > Timestamp::from_secs(1_577_836_800));
    }

    #[test]
    fn manual_clock_set_and_advance() {
        let mut clock = ManualClock::default();
        assert_eq!(clock.now(), Timestamp::EPOCH);
        clock.set(Timestamp::from_secs(10));
        clock.advance(5);
        assert_eq!(clock.now(), Timestamp::from_secs(15));
    }

    #[test]
    fn clock_by_reference() {
        let clock = ManualClock::at(Timestamp::from_secs(7));
        let by_ref: &ManualClock = &clock;
        assert_eq!(Clock::now(&by_ref), Timestamp::from_secs(7));
    }
}
