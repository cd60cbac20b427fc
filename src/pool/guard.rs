//! Deadline guard, evaluated before any other check.

use tracing::warn;

use crate::domain::CallContext;
use crate::error::AmmError;
use crate::traits::Clock;

/// Fails with [`AmmError::DeadlineExpired`] if `clock` reads past the
/// call's deadline.  A call whose deadline equals the current time passes.
pub(crate) fn ensure_live<C: Clock>(clock: &C, ctx: &CallContext) -> Result<(), AmmError> {
    let now = clock.now();
    if ctx.is_expired(now) {
        warn!(caller = %ctx.caller(), deadline = %ctx.deadline(), %now, "deadline passed");
        return Err(AmmError::DeadlineExpired);
    }
    Ok(())
}
