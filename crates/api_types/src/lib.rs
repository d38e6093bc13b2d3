//! JSON bodies exchanged with the HTTP API.
//!
//! Field names are camelCase on the wire (`dailyLimitCents`, `walletId`, ...).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod health {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct Health {
        pub status: String,
    }
}

pub mod wallet {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct WalletNew {
        pub name: String,
        pub owners: Vec<String>,
        #[serde(default)]
        pub daily_limit_cents: i64,
        /// Signed so that negative values reach validation instead of
        /// failing to decode.
        pub required_approvals: i64,
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Wallet {
        pub id: String,
        pub name: String,
        pub owners: Vec<String>,
        pub daily_limit_cents: i64,
        pub required_approvals: u32,
        pub created_at: DateTime<Utc>,
    }
}

pub mod transaction {
    use super::*;

    /// Approval state of a transaction.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum TransactionStatus {
        Pending,
        Approved,
        Rejected,
        Executed,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct TransactionNew {
        pub amount_cents: i64,
        #[serde(default)]
        pub memo: String,
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Transaction {
        pub id: String,
        pub wallet_id: String,
        pub amount_cents: i64,
        pub memo: String,
        pub created_by: String,
        /// Owners who approved, in approval order.
        pub approvers: Vec<String>,
        pub status: TransactionStatus,
        pub created_at: DateTime<Utc>,
    }
}

/// Body returned alongside every non-2xx response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
