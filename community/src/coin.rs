//! Coin and coin-set types
//!
//! Amounts are denominated in base units. A `Coins` value is the canonical
//! multiset used across the module: sorted by denom, unique denoms, strictly
//! positive amounts. Canonical order makes serialization and comparison
//! deterministic across nodes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CommunityError, Result};

/// Minimum denom length
pub const MIN_DENOM_LEN: usize = 3;

/// Maximum denom length
pub const MAX_DENOM_LEN: usize = 128;

/// A single denominated amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    pub amount: u128,
}

impl Coin {
    pub fn new(denom: impl Into<String>, amount: u128) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// Validate a denomination: 3-128 chars, leading ASCII letter, then letters,
/// digits or `/ : . _ -`.
pub fn validate_denom(denom: &str) -> Result<()> {
    if denom.len() < MIN_DENOM_LEN || denom.len() > MAX_DENOM_LEN {
        return Err(CommunityError::InvalidRequest(format!(
            "invalid denom length: {}",
            denom
        )));
    }
    let mut chars = denom.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => {
            return Err(CommunityError::InvalidRequest(format!(
                "denom must start with a letter: {}",
                denom
            )))
        }
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | ':' | '.' | '_' | '-')) {
        return Err(CommunityError::InvalidRequest(format!(
            "denom contains invalid characters: {}",
            denom
        )));
    }
    Ok(())
}

/// Canonical set of coins, at most one entry per denom, sorted by denom.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coins(Vec<Coin>);

impl Coins {
    /// Empty set.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Build a canonical set from arbitrary coins. Sorts by denom; rejects
    /// duplicate denoms, zero amounts, and malformed denoms.
    pub fn from_coins(mut coins: Vec<Coin>) -> Result<Self> {
        coins.sort_by(|a, b| a.denom.cmp(&b.denom));
        let set = Self(coins);
        set.validate()?;
        Ok(set)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coin> {
        self.0.iter()
    }

    /// Amount held for `denom`, zero if absent.
    pub fn amount_of(&self, denom: &str) -> u128 {
        self.0
            .iter()
            .find(|c| c.denom == denom)
            .map(|c| c.amount)
            .unwrap_or(0)
    }

    /// Check canonical form: valid denoms, strictly positive amounts,
    /// strictly increasing denom order (which also rules out duplicates).
    pub fn validate(&self) -> Result<()> {
        for (i, coin) in self.0.iter().enumerate() {
            validate_denom(&coin.denom)?;
            if coin.amount == 0 {
                return Err(CommunityError::InvalidRequest(format!(
                    "zero amount for denom {}",
                    coin.denom
                )));
            }
            if i > 0 && self.0[i - 1].denom >= coin.denom {
                return Err(CommunityError::InvalidRequest(format!(
                    "duplicate or unsorted denom {}",
                    coin.denom
                )));
            }
        }
        Ok(())
    }

    /// Merge `other` into a new set, summing per-denom amounts.
    pub fn checked_add(&self, other: &Coins) -> Result<Coins> {
        let mut out = self.0.clone();
        for coin in &other.0 {
            match out.binary_search_by(|c| c.denom.cmp(&coin.denom)) {
                Ok(i) => {
                    out[i].amount = out[i].amount.checked_add(coin.amount).ok_or_else(|| {
                        CommunityError::InvalidRequest(format!(
                            "amount overflow for denom {}",
                            coin.denom
                        ))
                    })?;
                }
                Err(i) => out.insert(i, coin.clone()),
            }
        }
        Ok(Coins(out))
    }

    /// Subtract `other` from a new copy of `self`. Fails on any per-denom
    /// shortfall without returning a partially-debited set.
    pub fn checked_sub(&self, other: &Coins) -> Result<Coins> {
        let mut out = self.0.clone();
        for coin in &other.0 {
            match out.binary_search_by(|c| c.denom.cmp(&coin.denom)) {
                Ok(i) => {
                    let available = out[i].amount;
                    if available < coin.amount {
                        return Err(CommunityError::InsufficientFunds {
                            denom: coin.denom.clone(),
                            available,
                            requested: coin.amount,
                        });
                    }
                    out[i].amount -= coin.amount;
                    if out[i].amount == 0 {
                        out.remove(i);
                    }
                }
                Err(_) => {
                    return Err(CommunityError::InsufficientFunds {
                        denom: coin.denom.clone(),
                        available: 0,
                        requested: coin.amount,
                    });
                }
            }
        }
        Ok(Coins(out))
    }
}

impl fmt::Display for Coins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|c| c.to_string()).collect();
        write!(f, "{}", parts.join(","))
    }
}
