//! Approval rules.
//!
//! Pure functions over `Wallet` and `Transaction`: they never touch the
//! store. Callers fetch the records, decide here, then persist the result.

use crate::{EngineError, ResultEngine, Transaction, TransactionStatus, Wallet};

/// Builds a new transaction for `wallet` submitted by `creator_id`.
///
/// Anybody may submit. When the creator is an owner and the amount fits under
/// the wallet daily limit, the submission also counts as the creator's
/// approval, which is enough on its own for single-approval wallets.
pub fn create_transaction(
    wallet: &Wallet,
    amount_cents: i64,
    memo: &str,
    creator_id: &str,
) -> ResultEngine<Transaction> {
    let mut tx = Transaction::new(
        wallet.id.clone(),
        amount_cents,
        memo.to_string(),
        creator_id.to_string(),
    )?;

    if wallet.is_owner(creator_id) && amount_cents <= wallet.daily_limit_cents {
        tx.approvers.push(creator_id.to_string());
        if wallet.threshold_reached(tx.approvers.len()) {
            tx.status = TransactionStatus::Approved;
        }
    }

    Ok(tx)
}

/// Records `approver_id`'s approval on `tx`.
///
/// Approving twice, or approving a transaction that is no longer pending,
/// returns the transaction unchanged.
pub fn approve_transaction(
    mut tx: Transaction,
    wallet: &Wallet,
    approver_id: &str,
) -> ResultEngine<Transaction> {
    if !wallet.is_owner(approver_id) {
        return Err(EngineError::NotAuthorized(format!(
            "{approver_id} is not an owner of wallet {}",
            wallet.id
        )));
    }

    if !tx.status.is_pending() || tx.has_approved(approver_id) {
        return Ok(tx);
    }

    tx.approvers.push(approver_id.to_string());
    if wallet.threshold_reached(tx.approvers.len()) {
        tx.status = TransactionStatus::Approved;
    }

    Ok(tx)
}
