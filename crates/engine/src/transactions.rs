//! Transaction primitives.
//!
//! A `Transaction` is a spending request against a `Wallet`. It collects
//! approvals from the wallet owners until the wallet threshold is reached.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{EngineError, ResultEngine};

/// Lifecycle of a transaction.
///
/// Only `Pending -> Approved` is driven by the engine. `Rejected` and
/// `Executed` are set by collaborators outside the approval flow and are
/// terminal here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TransactionStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Executed,
}

impl TransactionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Executed => "executed",
        }
    }

    /// Whether the transaction still accepts approvals.
    pub fn is_pending(self) -> bool {
        match self {
            Self::Pending => true,
            Self::Approved | Self::Rejected | Self::Executed => false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    pub id: String,
    pub wallet_id: String,
    pub amount_cents: i64,
    pub memo: String,
    pub created_by: String,
    /// Distinct approvers, in approval order.
    pub approvers: Vec<String>,
    pub status: TransactionStatus,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// A fresh `Pending` transaction with no approvers.
    pub fn new(
        wallet_id: String,
        amount_cents: i64,
        memo: String,
        created_by: String,
    ) -> ResultEngine<Self> {
        if amount_cents <= 0 {
            return Err(EngineError::InvalidAmount(
                "amount_cents must be > 0".to_string(),
            ));
        }
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            wallet_id,
            amount_cents,
            memo,
            created_by,
            approvers: Vec::new(),
            status: TransactionStatus::Pending,
            created_at: Utc::now(),
        })
    }

    pub fn has_approved(&self, user_id: &str) -> bool {
        self.approvers.iter().any(|approver| approver == user_id)
    }
}
