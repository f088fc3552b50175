//! Genesis state for the community module

use serde::{Deserialize, Serialize};

use crate::bank::BankKeeper;
use crate::error::Result;
use crate::keeper::Keeper;
use crate::params::Params;

/// Everything this module persists at genesis. The pool balance itself
/// lives in the bank's genesis, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisState {
    pub params: Params,
}

impl GenesisState {
    pub fn new(params: Params) -> Self {
        Self { params }
    }

    pub fn validate(&self) -> Result<()> {
        self.params.validate()
    }
}

impl<B: BankKeeper> Keeper<B> {
    /// Initialize module state from a validated genesis record.
    pub fn init_genesis(&mut self, genesis: &GenesisState) -> Result<()> {
        genesis.validate()?;
        self.set_params(genesis.params.clone());
        Ok(())
    }

    /// Export current module state for a chain export.
    pub fn export_genesis(&self) -> GenesisState {
        GenesisState::new(self.params().clone())
    }
}
