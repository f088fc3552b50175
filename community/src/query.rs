//! Read-only queries over module state

use serde::{Deserialize, Serialize};

use crate::bank::BankKeeper;
use crate::coin::Coins;
use crate::keeper::Keeper;
use crate::params::Params;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryBalanceResponse {
    pub coins: Coins,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParamsResponse {
    pub params: Params,
}

impl<B: BankKeeper> Keeper<B> {
    /// Community pool balance query.
    pub fn query_balance(&self) -> QueryBalanceResponse {
        QueryBalanceResponse {
            coins: self.module_account_balance(),
        }
    }

    /// Current params query.
    pub fn query_params(&self) -> QueryParamsResponse {
        QueryParamsResponse {
            params: self.params().clone(),
        }
    }
}
