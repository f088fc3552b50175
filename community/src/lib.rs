//! TIME Coin Community Pool Module
//!
//! Manages the community pool: a shared module account that any account can
//! fund voluntarily and that is spent only through approved governance
//! decisions. The module owns two pieces of chain state:
//! - the pool's module account balance (held by the fungible ledger)
//! - the governance-tunable params record
//!
//! All state access goes through the keeper; transitions are applied by the
//! message handler, one fully-committed-or-no-effect operation at a time.

pub mod address;
pub mod bank;
pub mod coin;
pub mod error;
pub mod genesis;
pub mod handler;
pub mod keeper;
pub mod msg;
pub mod params;
pub mod query;

pub use address::Address;
pub use bank::{BankKeeper, InMemoryBank};
pub use coin::{Coin, Coins};
pub use error::{CommunityError, Result};
pub use genesis::GenesisState;
pub use handler::MsgServer;
pub use keeper::Keeper;
pub use msg::{MsgFundCommunityPool, MsgUpdateParams};
pub use params::{Params, MAX_STAKING_REWARDS_PER_SECOND};
pub use query::{QueryBalanceResponse, QueryParamsResponse};

/// Module identity; the pool's module account address derives from this.
pub const MODULE_NAME: &str = "community";

/// TIME token unit (8 decimal places)
pub const TIME_UNIT: u128 = 100_000_000;
