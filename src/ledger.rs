//! In-memory reference implementation of [`TokenLedger`].
//!
//! [`InMemoryTokenLedger`] keeps balances and allowances for any number of
//! assets and behaves like a standard fungible-token contract: transfers
//! fail loudly on insufficient balance or allowance, never truncate.  Each
//! asset can also be paused so every transfer of it is rejected, which is
//! how tests drive the pool's `TransferFailed` paths.
//!
//! Checkpoints are plain copies of the balance and allowance tables.

use std::collections::{HashMap, HashSet};

use tracing::trace;

use crate::domain::{Address, Amount};
use crate::error::TransferError;
use crate::traits::TokenLedger;

/// Balances and allowances of several fungible assets.
///
/// # Examples
///
/// ```
/// use cp_amm::domain::{Address, Amount};
/// use cp_amm::ledger::InMemoryTokenLedger;
/// use cp_amm::traits::TokenLedger;
///
/// let token = Address::repeat(0x10);
/// let (alice, bob) = (Address::repeat(1), Address::repeat(2));
///
/// let mut ledger = InMemoryTokenLedger::new();
/// ledger.mint(token, alice, Amount::new(100)).expect("no overflow");
/// ledger.transfer(token, alice, bob, Amount::new(40)).expect("funded");
/// assert_eq!(ledger.balance_of(token, bob), Amount::new(40));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryTokenLedger {
    tokens: HashSet<Address>,
    balances: HashMap<(Address, Address), Amount>,
    allowances: HashMap<(Address, Address, Address), Amount>,
    supply: HashMap<Address, Amount>,
    paused: HashSet<Address>,
}

/// Balances and allowances captured by
/// [`TokenLedger::checkpoint`] on an [`InMemoryTokenLedger`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerCheckpoint {
    balances: HashMap<(Address, Address), Amount>,
    allowances: HashMap<(Address, Address, Address), Amount>,
}

impl InMemoryTokenLedger {
    /// Creates an empty ledger with no assets.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `token` so transfers of it are accepted.  Minting
    /// registers implicitly.
    pub fn register(&mut self, token: Address) {
        self.tokens.insert(token);
    }

    /// Creates `amount` of `token` in `to`'s balance.
    ///
    /// # Errors
    ///
    /// Returns [`TransferError::Rejected`] if the balance or total supply
    /// would overflow.
    pub fn mint(&mut self, token: Address, to: Address, amount: Amount) -> Result<(), TransferError> {
        let supply = self.supply.get(&token).copied().unwrap_or_default();
        let supply = supply
            .checked_add(&amount)
            .ok_or_else(|| TransferError::Rejected("total supply overflow".to_owned()))?;
        let balance = self
            .balance_of(token, to)
            .checked_add(&amount)
            .ok_or_else(|| TransferError::Rejected("balance overflow".to_owned()))?;
        self.tokens.insert(token);
        self.supply.insert(token, supply);
        self.balances.insert((token, to), balance);
        trace!(%token, %to, %amount, "mint");
        Ok(())
    }

    /// Sets the allowance `owner` grants `spender` in `token`.
    pub fn approve(&mut self, token: Address, owner: Address, spender: Address, amount: Amount) {
        self.allowances.insert((token, owner, spender), amount);
    }

    /// Allowance `owner` granted `spender` in `token`.
    #[must_use]
    pub fn allowance(&self, token: Address, owner: Address, spender: Address) -> Amount {
        self.allowances
            .get(&(token, owner, spender))
            .copied()
            .unwrap_or_default()
    }

    /// Total amount of `token` ever minted.
    #[must_use]
    pub fn total_supply(&self, token: Address) -> Amount {
        self.supply.get(&token).copied().unwrap_or_default()
    }

    /// Rejects every transfer of `token` until [`unpause`](Self::unpause).
    pub fn pause(&mut self, token: Address) {
        self.paused.insert(token);
    }

    /// Lifts a [`pause`](Self::pause).
    pub fn unpause(&mut self, token: Address) {
        self.paused.remove(&token);
    }

    fn ensure_transferable(&self, token: Address) -> Result<(), TransferError> {
        if !self.tokens.contains(&token) {
            return Err(TransferError::UnknownAsset(token));
        }
        if self.paused.contains(&token) {
            return Err(TransferError::Rejected(format!("token {token} is paused")));
        }
        Ok(())
    }

    /// Moves a balance; both legs are computed before either is written.
    fn move_balance(
        &mut self,
        token: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), TransferError> {
        let available = self.balance_of(token, from);
        let debited = available
            .checked_sub(&amount)
            .ok_or(TransferError::InsufficientBalance {
                available,
                required: amount,
            })?;
        if from == to {
            return Ok(());
        }
        let credited = self
            .balance_of(token, to)
            .checked_add(&amount)
            .ok_or_else(|| TransferError::Rejected("balance overflow".to_owned()))?;
        self.balances.insert((token, from), debited);
        self.balances.insert((token, to), credited);
        trace!(%token, %from, %to, %amount, "transfer");
        Ok(())
    }
}

impl TokenLedger for InMemoryTokenLedger {
    type Checkpoint = LedgerCheckpoint;

    fn transfer(
        &mut self,
        token: Address,
        sender: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), TransferError> {
        self.ensure_transferable(token)?;
        self.move_balance(token, sender, to, amount)
    }

    fn transfer_from(
        &mut self,
        token: Address,
        spender: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), TransferError> {
        self.ensure_transferable(token)?;
        let approved = self.allowance(token, from, spender);
        let remaining = approved
            .checked_sub(&amount)
            .ok_or(TransferError::InsufficientAllowance {
                approved,
                required: amount,
            })?;
        self.move_balance(token, from, to, amount)?;
        self.allowances.insert((token, from, spender), remaining);
        Ok(())
    }

    fn balance_of(&self, token: Address, holder: Address) -> Amount {
        self.balances
            .get(&(token, holder))
            .copied()
            .unwrap_or_default()
    }

    fn checkpoint(&self) -> LedgerCheckpoint {
        LedgerCheckpoint {
            balances: self.balances.clone(),
            allowances: self.allowances.clone(),
        }
    }

    fn rollback(&mut self, checkpoint: LedgerCheckpoint) {
        self.balances = checkpoint.balances;
        self.allowances = checkpoint.allowances;
        trace!("rolled back to checkpoint");
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    const TOKEN: Address = Address::repeat(0x10);
    const ALICE: Address = Address::repeat(1);
    const BOB: Address = Address::repeat(2);
    const POOL: Address = Address::repeat(0xaa);

    fn funded() -> InMemoryTokenLedger {
        let mut ledger = InMemoryTokenLedger::new();
        let Ok(()) = ledger.mint(TOKEN, ALICE, Amount::new(1_000)) else {
            panic!("mint");
        };
        ledger
    }

    #[test]
    fn mint_tracks_supply() {
        let ledger = funded();
        assert_eq!(ledger.balance_of(TOKEN, ALICE), Amount::new(1_000));
        assert_eq!(ledger.total_supply(TOKEN), Amount::new(1_000));
    }

    #[test]
    fn transfer_moves_balance() {
        let mut ledger = funded();
        assert_eq!(ledger.transfer(TOKEN, ALICE, BOB, Amount::new(300)), Ok(()));
        assert_eq!(ledger.balance_of(TOKEN, ALICE), Amount::new(700));
        assert_eq!(ledger.balance_of(TOKEN, BOB), Amount::new(300));
    }

    #[test]
    fn transfer_insufficient_balance() {
        let mut ledger = funded();
        let result = ledger.transfer(TOKEN, BOB, ALICE, Amount::new(1));
        assert_eq!(
            result,
            Err(TransferError::InsufficientBalance {
                available: Amount::ZERO,
                required: Amount::new(1),
            })
        );
    }

    #[test]
    fn transfer_from_consumes_allowance() {
        let mut ledger = funded();
        ledger.approve(TOKEN, ALICE, POOL, Amount::new(500));
        assert_eq!(
            ledger.transfer_from(TOKEN, POOL, ALICE, POOL, Amount::new(200)),
            Ok(())
        );
        assert_eq!(ledger.allowance(TOKEN, ALICE, POOL), Amount::new(300));
        assert_eq!(ledger.balance_of(TOKEN, POOL), Amount::new(200));
    }

    #[test]
    fn transfer_from_without_allowance() {
        let mut ledger = funded();
        let result = ledger.transfer_from(TOKEN, POOL, ALICE, POOL, Amount::new(1));
        assert!(matches!(
            result,
            Err(TransferError::InsufficientAllowance { .. })
        ));
        assert_eq!(ledger.balance_of(TOKEN, ALICE), Amount::new(1_000));
    }

    #[test]
    fn failed_transfer_from_keeps_allowance() {
        let mut ledger = funded();
        ledger.approve(TOKEN, ALICE, POOL, Amount::new(5_000));
        let result = ledger.transfer_from(TOKEN, POOL, ALICE, POOL, Amount::new(2_000));
        assert!(matches!(
            result,
            Err(TransferError::InsufficientBalance { .. })
        ));
        assert_eq!(ledger.allowance(TOKEN, ALICE, POOL), Amount::new(5_000));
    }

    #[test]
    fn unknown_token_rejected() {
        let mut ledger = funded();
        let other = Address::repeat(0x77);
        assert_eq!(
            ledger.transfer(other, ALICE, BOB, Amount::ZERO),
            Err(TransferError::UnknownAsset(other))
        );
    }

    #[test]
    fn paused_token_rejects_until_unpaused() {
        let mut ledger = funded();
        ledger.pause(TOKEN);
        assert!(matches!(
            ledger.transfer(TOKEN, ALICE, BOB, Amount::new(1)),
            Err(TransferError::Rejected(_))
        ));
        ledger.unpause(TOKEN);
        assert_eq!(ledger.transfer(TOKEN, ALICE, BOB, Amount::new(1)), Ok(()));
    }

    #[test]
    fn rollback_restores_balances_and_allowances() {
        let mut ledger = funded();
        ledger.approve(TOKEN, ALICE, POOL, Amount::new(500));
        let saved = ledger.checkpoint();

        let Ok(()) = ledger.transfer_from(TOKEN, POOL, ALICE, POOL, Amount::new(500)) else {
            panic!("pull within allowance");
        };
        let Ok(()) = ledger.transfer(TOKEN, POOL, BOB, Amount::new(200)) else {
            panic!("push from pool");
        };
        ledger.rollback(saved.clone());

        assert_eq!(ledger.checkpoint(), saved);
        assert_eq!(ledger.balance_of(TOKEN, ALICE), Amount::new(1_000));
        assert_eq!(ledger.balance_of(TOKEN, BOB), Amount::ZERO);
        assert_eq!(ledger.allowance(TOKEN, ALICE, POOL), Amount::new(500));
    }
}
