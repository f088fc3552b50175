//! Community module error types

use thiserror::Error;

/// Errors returned by community pool transitions.
///
/// Every failure aborts the whole transition with no partial mutation; the
/// surrounding transaction framework handles rollback and user reporting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommunityError {
    /// Malformed message content, detected before any state access
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Depositor balance cannot cover the requested transfer
    #[error("insufficient funds: {denom} balance {available}, requested {requested}")]
    InsufficientFunds {
        denom: String,
        available: u128,
        requested: u128,
    },

    /// Claimed authority does not match the configured governance authority
    #[error("unauthorized: expected authority {expected}, got {actual}")]
    Unauthorized { expected: String, actual: String },

    /// Proposed params record fails well-formedness rules
    #[error("invalid params: {0}")]
    InvalidParams(String),
}

pub type Result<T> = std::result::Result<T, CommunityError>;
