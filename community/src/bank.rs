//! Fungible-ledger collaborator seam
//!
//! The community module never moves balances directly; every transfer goes
//! through a `BankKeeper`, which must provide an all-or-nothing send. The
//! chain wires in its real ledger; `InMemoryBank` backs tests and local
//! tooling.

use std::collections::HashMap;

use crate::address::Address;
use crate::coin::Coins;
use crate::error::{CommunityError, Result};

pub trait BankKeeper {
    /// Current balance of `addr`. Unknown accounts read as empty.
    fn balance_of(&self, addr: &Address) -> Coins;

    /// Atomically move `amount` from `from` to `to`. Fails without partial
    /// effect if `from` lacks sufficient balance in any denomination.
    fn send_coins(&mut self, from: &Address, to: &Address, amount: &Coins) -> Result<()>;
}

/// In-memory multi-denom ledger.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBank {
    accounts: HashMap<Address, Coins>,
}

impl InMemoryBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit `amount` to `addr`, creating the account if needed.
    pub fn mint(&mut self, addr: &Address, amount: &Coins) -> Result<()> {
        amount.validate()?;
        let balance = self.balance_of(addr);
        let credited = balance.checked_add(amount)?;
        self.accounts.insert(*addr, credited);
        Ok(())
    }

    /// Total supply summed across all accounts.
    pub fn total_supply(&self) -> Result<Coins> {
        let mut total = Coins::new();
        for balance in self.accounts.values() {
            total = total.checked_add(balance)?;
        }
        Ok(total)
    }
}

impl BankKeeper for InMemoryBank {
    fn balance_of(&self, addr: &Address) -> Coins {
        self.accounts.get(addr).cloned().unwrap_or_default()
    }

    fn send_coins(&mut self, from: &Address, to: &Address, amount: &Coins) -> Result<()> {
        if amount.is_empty() || amount.validate().is_err() {
            return Err(CommunityError::InvalidRequest(
                "transfer amount must be a non-empty canonical coin set".to_string(),
            ));
        }

        // Sufficiency is checked for every denom before anything is written.
        let debited = self.balance_of(from).checked_sub(amount)?;
        if from == to {
            return Ok(());
        }
        let credited = self.balance_of(to).checked_add(amount)?;

        self.accounts.insert(*from, debited);
        self.accounts.insert(*to, credited);
        Ok(())
    }
}
