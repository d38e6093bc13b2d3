//! The module contains `Wallet` struct and its implementation.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{EngineError, ResultEngine};

/// A shared wallet.
///
/// A wallet belongs to a set of owners. Spending from it is proposed through
/// transactions, which need `required_approvals` distinct owners before they
/// are approved. Owners, limit and threshold never change after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wallet {
    /// Stable identifier for this wallet.
    pub id: String,
    pub name: String,
    /// Owners in the order they were given; duplicates are collapsed.
    pub owners: Vec<String>,
    /// Per-transaction ceiling (minor units) under which an owner's own
    /// submission counts as their approval.
    ///
    /// This is not a rolling daily budget: two submissions on the same day are
    /// each compared against the full limit.
    pub daily_limit_cents: i64,
    pub required_approvals: u32,
    pub created_at: DateTime<Utc>,
}

impl Wallet {
    pub fn new(
        name: &str,
        owners: &[String],
        daily_limit_cents: i64,
        required_approvals: i64,
    ) -> ResultEngine<Self> {
        Self::with_id(
            Uuid::new_v4().to_string(),
            name,
            owners,
            daily_limit_cents,
            required_approvals,
            Utc::now(),
        )
    }

    pub fn with_id(
        id: String,
        name: &str,
        owners: &[String],
        daily_limit_cents: i64,
        required_approvals: i64,
        created_at: DateTime<Utc>,
    ) -> ResultEngine<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(EngineError::InvalidConfiguration(
                "wallet name must not be empty".to_string(),
            ));
        }
        let owners = normalize_owners(owners)?;
        if daily_limit_cents < 0 {
            return Err(EngineError::InvalidConfiguration(
                "daily_limit_cents must be >= 0".to_string(),
            ));
        }
        if required_approvals < 1 {
            return Err(EngineError::InvalidConfiguration(
                "required_approvals must be >= 1".to_string(),
            ));
        }
        let required_approvals = u32::try_from(required_approvals)
            .ok()
            .filter(|required| *required as usize <= owners.len())
            .ok_or_else(|| {
                EngineError::InvalidConfiguration(format!(
                    "required_approvals ({required_approvals}) cannot exceed owners ({})",
                    owners.len()
                ))
            })?;

        Ok(Self {
            id,
            name: name.to_string(),
            owners,
            daily_limit_cents,
            required_approvals,
            created_at,
        })
    }

    pub fn is_owner(&self, user_id: &str) -> bool {
        self.owners.iter().any(|owner| owner == user_id)
    }

    /// Whether `approvals` distinct approvers are enough to approve.
    pub fn threshold_reached(&self, approvals: usize) -> bool {
        approvals >= self.required_approvals as usize
    }
}

fn normalize_owners(owners: &[String]) -> ResultEngine<Vec<String>> {
    let mut normalized: Vec<String> = Vec::with_capacity(owners.len());
    for owner in owners {
        let owner = owner.trim();
        if owner.is_empty() {
            return Err(EngineError::InvalidConfiguration(
                "owner identifiers must not be empty".to_string(),
            ));
        }
        if !normalized.iter().any(|o| o == owner) {
            normalized.push(owner.to_string());
        }
    }
    if normalized.is_empty() {
        return Err(EngineError::InvalidConfiguration(
            "a wallet needs at least one owner".to_string(),
        ));
    }
    Ok(normalized)
}
