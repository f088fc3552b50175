//! Governance-tunable module parameters
//!
//! Params are replaced whole-record only, via the authorized update
//! transition; the persisted value is always the last validated one.

use serde::{Deserialize, Serialize};

use crate::error::{CommunityError, Result};
use crate::TIME_UNIT;

/// Hard cap on staking reward rates (base units per second).
pub const MAX_STAKING_REWARDS_PER_SECOND: u128 = 10_000 * TIME_UNIT;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    /// Unix time at which inflation is disabled and staking rewards start
    /// being paid from the pool. Zero means the switchover is unscheduled.
    pub upgrade_time_disable_inflation: u64,

    /// Staking rewards paid from the pool, in base units per second.
    pub staking_rewards_per_second: u128,

    /// Rewards rate to switch to at the upgrade time.
    pub upgrade_time_set_staking_rewards_per_second: u128,
}

impl Params {
    pub fn new(
        upgrade_time_disable_inflation: u64,
        staking_rewards_per_second: u128,
        upgrade_time_set_staking_rewards_per_second: u128,
    ) -> Self {
        Self {
            upgrade_time_disable_inflation,
            staking_rewards_per_second,
            upgrade_time_set_staking_rewards_per_second,
        }
    }

    /// Well-formedness check applied before any Params value is persisted.
    pub fn validate(&self) -> Result<()> {
        if self.staking_rewards_per_second > MAX_STAKING_REWARDS_PER_SECOND {
            return Err(CommunityError::InvalidParams(format!(
                "staking_rewards_per_second {} exceeds cap {}",
                self.staking_rewards_per_second, MAX_STAKING_REWARDS_PER_SECOND
            )));
        }
        if self.upgrade_time_set_staking_rewards_per_second > MAX_STAKING_REWARDS_PER_SECOND {
            return Err(CommunityError::InvalidParams(format!(
                "upgrade_time_set_staking_rewards_per_second {} exceeds cap {}",
                self.upgrade_time_set_staking_rewards_per_second, MAX_STAKING_REWARDS_PER_SECOND
            )));
        }
        Ok(())
    }
}
