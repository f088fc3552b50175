//! Transition handler for community pool messages
//!
//! One entry point per message type, applied sequentially by the chain's
//! block-execution loop. Each transition either fully commits or leaves
//! state untouched; rollback on abort is the surrounding framework's job.

use crate::address::Address;
use crate::bank::BankKeeper;
use crate::error::{CommunityError, Result};
use crate::keeper::Keeper;
use crate::msg::{MsgFundCommunityPool, MsgUpdateParams};

pub struct MsgServer<B> {
    keeper: Keeper<B>,
    authority: Address,
}

impl<B: BankKeeper> MsgServer<B> {
    /// `authority` is the governance account permitted to replace params,
    /// injected here rather than looked up from ambient state.
    pub fn new(keeper: Keeper<B>, authority: Address) -> Self {
        Self { keeper, authority }
    }

    pub fn keeper(&self) -> &Keeper<B> {
        &self.keeper
    }

    /// Deposit `msg.amount` from the depositor into the community pool.
    pub fn fund_community_pool(&mut self, msg: &MsgFundCommunityPool) -> Result<()> {
        msg.validate()?;
        self.keeper.fund_community_pool(&msg.depositor, &msg.amount)?;
        log::debug!(
            "community pool funded: depositor={} amount={}",
            msg.depositor,
            msg.amount
        );
        Ok(())
    }

    /// Replace the module params. Order is fixed: authority match, then
    /// params well-formedness, then persistence.
    pub fn update_params(&mut self, msg: &MsgUpdateParams) -> Result<()> {
        if msg.authority != self.authority {
            return Err(CommunityError::Unauthorized {
                expected: self.authority.to_string(),
                actual: msg.authority.to_string(),
            });
        }
        msg.params.validate()?;
        self.keeper.set_params(msg.params.clone());
        log::debug!("community params updated by {}", msg.authority);
        Ok(())
    }
}
