//! Unified error types for the constant-product AMM.
//!
//! Every fallible operation in the crate returns [`AmmError`].  Variants
//! that correspond to a rejected call render the exact condition the caller
//! is expected to match on, so UIs and tests can assert on `to_string()`.

use thiserror::Error;

use crate::domain::{Address, Amount};

/// Reason reported by a [`TokenLedger`](crate::traits::TokenLedger) when it
/// rejects a transfer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransferError {
    /// The debited account does not hold enough of the asset.
    #[error("insufficient balance: have {available}, need {required}")]
    InsufficientBalance {
        /// Balance held by the debited account.
        available: Amount,
        /// Amount the transfer tried to move.
        required: Amount,
    },

    /// The spender is not approved for the requested amount.
    #[error("insufficient allowance: approved {approved}, need {required}")]
    InsufficientAllowance {
        /// Allowance granted to the spender.
        approved: Amount,
        /// Amount the transfer tried to move.
        required: Amount,
    },

    /// The asset is not known to the ledger.
    #[error("unknown asset {0}")]
    UnknownAsset(Address),

    /// The ledger refused the transfer for a collaborator-specific reason.
    #[error("transfer rejected: {0}")]
    Rejected(String),
}

/// Errors produced by pool operations.
///
/// The first violated precondition aborts the whole call; the pool state is
/// left exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmmError {
    /// An owner-only operation was invoked by someone else.
    #[error("Caller is not the owner")]
    Unauthorized,

    /// The pool tokens have already been bound.
    #[error("Tokens already set!")]
    AlreadyBound,

    /// The requested fee exceeds the 10% ceiling.
    #[error("Fee too high! Max 10%")]
    FeeTooHigh,

    /// The call's deadline is earlier than the current time.
    #[error("Transaction deadline passed!")]
    DeadlineExpired,

    /// A required amount was zero, or too small to mint or move anything.
    #[error("Amounts must be > 0")]
    InvalidAmount,

    /// The caller tried to burn more shares than it owns.
    #[error("Insufficient shares")]
    InsufficientShares,

    /// A reserve debit would make the reserve negative.
    #[error("Insufficient reserve")]
    InsufficientReserve,

    /// The swap output is below the caller's minimum.
    #[error("Slippage: Output amount too low")]
    SlippageTooLow,

    /// The token-1 amount returned by a withdrawal is below the minimum.
    #[error("Slippage: Token1 amount too low")]
    SlippageToken1TooLow,

    /// The token-2 amount returned by a withdrawal is below the minimum.
    #[error("Slippage: Token2 amount too low")]
    SlippageToken2TooLow,

    /// A deposit does not match the pool's current reserve ratio.
    #[error("Equivalent value of tokens not provided")]
    RatioMismatch,

    /// The swap output truncates to zero.
    #[error("Output amount is zero")]
    InsufficientOutput,

    /// An external asset transfer was rejected.
    #[error("Token transfer failed: {0}")]
    TransferFailed(#[from] TransferError),

    /// The pool holds no liquidity yet.
    #[error("Pool has no liquidity")]
    PoolEmpty,

    /// The pool tokens have not been bound yet.
    #[error("Pool tokens not set")]
    AssetsNotBound,

    /// An asset address is zero or duplicated.
    #[error("Invalid token address: {0}")]
    InvalidAsset(&'static str),

    /// A configuration parameter is out of range or inconsistent.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// Arithmetic overflow.
    #[error("Arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Arithmetic underflow.
    #[error("Arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Division by zero.
    #[error("Division by zero")]
    DivisionByZero,
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, AmmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_facing_messages_are_verbatim() {
        assert_eq!(AmmError::Unauthorized.to_string(), "Caller is not the owner");
        assert_eq!(AmmError::AlreadyBound.to_string(), "Tokens already set!");
        assert_eq!(AmmError::FeeTooHigh.to_string(), "Fee too high! Max 10%");
        assert_eq!(
            AmmError::DeadlineExpired.to_string(),
            "Transaction deadline passed!"
        );
        assert_eq!(AmmError::InvalidAmount.to_string(), "Amounts must be > 0");
        assert_eq!(AmmError::InsufficientShares.to_string(), "Insufficient shares");
        assert_eq!(
            AmmError::SlippageTooLow.to_string(),
            "Slippage: Output amount too low"
        );
        assert_eq!(
            AmmError::SlippageToken1TooLow.to_string(),
            "Slippage: Token1 amount too low"
        );
        assert_eq!(
            AmmError::SlippageToken2TooLow.to_string(),
            "Slippage: Token2 amount too low"
        );
    }

    #[test]
    fn transfer_error_converts_and_keeps_reason() {
        let err: AmmError = TransferError::Rejected("paused".to_owned()).into();
        assert_eq!(
            err,
            AmmError::TransferFailed(TransferError::Rejected("paused".to_owned()))
        );
        assert_eq!(err.to_string(), "Token transfer failed: transfer rejected: paused");
    }

    #[test]
    fn detail_variants_include_context() {
        let err = AmmError::Overflow("reserve credit");
        assert!(err.to_string().contains("reserve credit"));
        let err = AmmError::InvalidConfiguration("owner is zero");
        assert!(err.to_string().contains("owner is zero"));
    }
}
