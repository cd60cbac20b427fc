//! External fungible-asset capability.
//!
//! The pool never holds balances itself: the two assets live on external
//! ledgers that the pool moves funds through.  [`TokenLedger`] is that
//! capability.  Every call can fail and the pool checks every result.
//!
//! A ledger also hands out checkpoints.  The pool takes one before the
//! transfers of an operation and rolls back to it if any transfer is
//! rejected, so a failed operation never leaves a partial settlement
//! behind, whatever allowances the counterparty holds.

use crate::domain::{Address, Amount};
use crate::error::TransferError;

/// Balances and transfers of fungible assets, keyed by asset address.
///
/// One implementation may serve both pool assets; the `token` argument
/// selects which ledger is addressed.
pub trait TokenLedger {
    /// Saved ledger state that [`rollback`](Self::rollback) restores.
    type Checkpoint;

    /// Moves `amount` of `token` from `sender` to `to`.
    ///
    /// `sender` is the account initiating the call, which for the pool is
    /// its own address.
    ///
    /// # Errors
    ///
    /// Returns a [`TransferError`] describing why the ledger rejected the
    /// transfer.
    fn transfer(
        &mut self,
        token: Address,
        sender: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), TransferError>;

    /// Moves `amount` of `token` from `from` to `to` using an allowance
    /// `from` granted to `spender`.
    ///
    /// # Errors
    ///
    /// Returns a [`TransferError`] describing why the ledger rejected the
    /// transfer, typically an insufficient balance or allowance.
    fn transfer_from(
        &mut self,
        token: Address,
        spender: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), TransferError>;

    /// Balance of `holder` in `token`.
    fn balance_of(&self, token: Address, holder: Address) -> Amount;

    /// Captures the balances and allowances as they are now.
    fn checkpoint(&self) -> Self::Checkpoint;

    /// Restores the state captured by `checkpoint`, discarding every
    /// transfer made since.
    fn rollback(&mut self, checkpoint: Self::Checkpoint);
}

impl<T: TokenLedger + ?Sized> TokenLedger for &mut T {
    type Checkpoint = T::Checkpoint;

    fn transfer(
        &mut self,
        token: Address,
        sender: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), TransferError> {
        (**self).transfer(token, sender, to, amount)
    }

    fn transfer_from(
        &mut self,
        token: Address,
        spender: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), TransferError> {
        (**self).transfer_from(token, spender, from, to, amount)
    }

    fn balance_of(&self, token: Address, holder: Address) -> Amount {
        (**self).balance_of(token, holder)
    }

    fn checkpoint(&self) -> Self::Checkpoint {
        (**self).checkpoint()
    }

    fn rollback(&mut self, checkpoint: Self::Checkpoint) {
        (**self).rollback(checkpoint);
    }
}
