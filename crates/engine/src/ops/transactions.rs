use crate::{EngineError, ResultEngine, Transaction, approval};

use super::Engine;

impl Engine {
    /// Submits a spending request against `wallet_id` on behalf of `user_id`.
    pub fn create_transaction(
        &self,
        wallet_id: &str,
        amount_cents: i64,
        memo: &str,
        user_id: &str,
    ) -> ResultEngine<Transaction> {
        let wallet = self.wallet(wallet_id)?;
        let tx = approval::create_transaction(&wallet, amount_cents, memo, user_id)?;
        self.store.create_transaction(tx.clone());
        tracing::info!(
            transaction_id = %tx.id,
            wallet_id = %wallet.id,
            created_by = %user_id,
            amount_cents,
            status = tx.status.as_str(),
            "transaction created"
        );
        Ok(tx)
    }

    pub fn transaction(&self, transaction_id: &str) -> ResultEngine<Transaction> {
        self.store
            .transaction(transaction_id)
            .ok_or_else(|| EngineError::NotFound(format!("transaction {transaction_id}")))
    }

    /// Transactions of `wallet_id`, oldest first.
    ///
    /// An unknown wallet has no transactions, so the list is empty.
    pub fn list_transactions(&self, wallet_id: &str) -> Vec<Transaction> {
        let mut transactions = self.store.list_transactions_by_wallet(wallet_id);
        transactions.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        transactions
    }

    /// Records `user_id`'s approval on `transaction_id`.
    ///
    /// The fetch, the decision and the write happen under the store's
    /// transaction lock, so concurrent approvals never overwrite each other.
    pub fn approve_transaction(
        &self,
        transaction_id: &str,
        user_id: &str,
    ) -> ResultEngine<Transaction> {
        // wallet_id never changes, so the wallet can be resolved outside the lock.
        let wallet_id = self.transaction(transaction_id)?.wallet_id;
        let wallet = self.wallet(&wallet_id)?;

        let mut before = 0;
        let updated = self
            .store
            .modify_transaction(transaction_id, |current| {
                before = current.approvers.len();
                approval::approve_transaction(current.clone(), &wallet, user_id)
            })
            .inspect_err(|err| {
                tracing::warn!(transaction_id, user_id, "approval refused: {err}");
            })?
            .ok_or_else(|| EngineError::NotFound(format!("transaction {transaction_id}")))?;

        if updated.approvers.len() > before {
            tracing::info!(
                transaction_id,
                approver = %user_id,
                approvals = updated.approvers.len(),
                required = wallet.required_approvals,
                status = updated.status.as_str(),
                "transaction approved by owner"
            );
        } else {
            tracing::debug!(transaction_id, user_id, "approval was a no-op");
        }

        Ok(updated)
    }
}
