//! Settlement of the external transfers of one operation.
//!
//! An operation's transfers run as an ordered list of [`Leg`]s after every
//! check has passed and before the pool record is committed.  The ledger
//! is checkpointed first.  If a leg is rejected, the ledger is rolled back
//! to that checkpoint and the rejection is returned, so a failed call
//! leaves both the pool and the asset ledgers as they were.  Rollback does
//! not go through the counterparty's allowance.

use tracing::{debug, trace};

use crate::domain::{Address, Amount};
use crate::error::{AmmError, TransferError};
use crate::traits::TokenLedger;

/// One transfer between the pool and a counterparty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Leg {
    /// `counterparty → pool`, spending the pool's allowance.
    Pull {
        token: Address,
        counterparty: Address,
        amount: Amount,
    },
    /// `pool → counterparty`.
    Push {
        token: Address,
        counterparty: Address,
        amount: Amount,
    },
}

impl Leg {
    fn execute<L: TokenLedger>(&self, ledger: &mut L, pool: Address) -> Result<(), TransferError> {
        match *self {
            Self::Pull {
                token,
                counterparty,
                amount,
            } => ledger.transfer_from(token, pool, counterparty, pool, amount),
            Self::Push {
                token,
                counterparty,
                amount,
            } => ledger.transfer(token, pool, counterparty, amount),
        }
    }
}

/// Runs `legs` in order on behalf of `pool`.
///
/// # Errors
///
/// Returns [`AmmError::TransferFailed`] carrying the first rejection.
/// The ledger has been rolled back to its state before the first leg.
pub(crate) fn settle<L: TokenLedger>(
    ledger: &mut L,
    pool: Address,
    legs: &[Leg],
) -> Result<(), AmmError> {
    let checkpoint = ledger.checkpoint();
    for (done, leg) in legs.iter().enumerate() {
        if let Err(reason) = leg.execute(ledger, pool) {
            trace!(?leg, %reason, "leg rejected");
            ledger.rollback(checkpoint);
            debug!(discarded = done, "settlement rolled back");
            return Err(AmmError::TransferFailed(reason));
        }
        trace!(?leg, "leg settled");
    }
    Ok(())
}
