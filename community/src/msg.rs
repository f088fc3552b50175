//! Inbound message types
//!
//! Structural validation is stateless and runs before a message reaches the
//! transition handler, so malformed requests never touch the ledger.

use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::coin::Coins;
use crate::error::{CommunityError, Result};
use crate::params::Params;

/// Voluntary deposit into the community pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgFundCommunityPool {
    pub depositor: Address,
    pub amount: Coins,
}

impl MsgFundCommunityPool {
    pub fn new(depositor: Address, amount: Coins) -> Self {
        Self { depositor, amount }
    }

    /// Reject empty or malformed amounts before any state access.
    pub fn validate(&self) -> Result<()> {
        if self.amount.is_empty() {
            return Err(CommunityError::InvalidRequest(
                "amount must not be empty".to_string(),
            ));
        }
        self.amount.validate()
    }
}

/// Whole-record replacement of the module params, restricted to the
/// governance authority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgUpdateParams {
    pub authority: Address,
    pub params: Params,
}

impl MsgUpdateParams {
    pub fn new(authority: Address, params: Params) -> Self {
        Self { authority, params }
    }
}
