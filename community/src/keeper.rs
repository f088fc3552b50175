//! Ledger accessor for the community pool
//!
//! The keeper is the sole path through which this module touches chain
//! state: the pool's module account balance (held by the bank) and the
//! params record. The module address is derived once at construction and
//! held as plain configuration.

use crate::address::Address;
use crate::bank::BankKeeper;
use crate::coin::Coins;
use crate::error::Result;
use crate::params::Params;
use crate::MODULE_NAME;

pub struct Keeper<B> {
    bank: B,
    module_address: Address,
    params: Params,
}

impl<B: BankKeeper> Keeper<B> {
    /// Create a keeper over `bank` with default params; genesis replaces
    /// them before the chain serves transactions.
    pub fn new(bank: B) -> Self {
        Self {
            bank,
            module_address: Address::module(MODULE_NAME),
            params: Params::default(),
        }
    }

    /// The pool's keyless module account address.
    pub fn module_address(&self) -> &Address {
        &self.module_address
    }

    pub fn bank(&self) -> &B {
        &self.bank
    }

    /// Current balance of the community pool.
    pub fn module_account_balance(&self) -> Coins {
        self.bank.balance_of(&self.module_address)
    }

    /// Move `amount` from `depositor` into the community pool. Delegates to
    /// the bank's all-or-nothing send; on failure no balance changes.
    pub fn fund_community_pool(&mut self, depositor: &Address, amount: &Coins) -> Result<()> {
        self.bank.send_coins(depositor, &self.module_address, amount)
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Replace the persisted params record in full. Callers validate the
    /// record before persisting; nothing of the previous value survives.
    pub fn set_params(&mut self, params: Params) {
        self.params = params;
    }
}
