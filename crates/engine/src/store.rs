//! In-memory storage for wallets and transactions.
//!
//! Each collection sits behind its own reader/writer lock. The store has no
//! business rules: it hands out clones and replaces records wholesale.

use std::{
    collections::HashMap,
    sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use crate::{Transaction, Wallet};

#[derive(Debug, Default)]
pub struct Store {
    wallets: RwLock<HashMap<String, Wallet>>,
    transactions: RwLock<HashMap<String, Transaction>>,
}

// Records are replaced whole, so a writer that panicked cannot leave a torn
// value behind and the map stays usable.
fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `wallet`, overwriting any wallet with the same id.
    pub fn create_wallet(&self, wallet: Wallet) {
        write(&self.wallets).insert(wallet.id.clone(), wallet);
    }

    pub fn wallet(&self, id: &str) -> Option<Wallet> {
        read(&self.wallets).get(id).cloned()
    }

    /// Snapshot of every wallet, in no particular order.
    pub fn list_wallets(&self) -> Vec<Wallet> {
        read(&self.wallets).values().cloned().collect()
    }

    pub fn create_transaction(&self, tx: Transaction) {
        write(&self.transactions).insert(tx.id.clone(), tx);
    }

    pub fn transaction(&self, id: &str) -> Option<Transaction> {
        read(&self.transactions).get(id).cloned()
    }

    /// Replaces the stored record (last writer wins).
    pub fn update_transaction(&self, tx: Transaction) {
        write(&self.transactions).insert(tx.id.clone(), tx);
    }

    /// Runs a read-decide-write on transaction `id` under the write lock.
    ///
    /// `decide` sees the current record and returns its replacement. Nothing
    /// is stored when it fails. Returns `Ok(None)` when `id` is unknown.
    pub fn modify_transaction<F, E>(&self, id: &str, decide: F) -> Result<Option<Transaction>, E>
    where
        F: FnOnce(&Transaction) -> Result<Transaction, E>,
    {
        let mut transactions = write(&self.transactions);
        let Some(current) = transactions.get(id) else {
            return Ok(None);
        };
        let updated = decide(current)?;
        transactions.insert(id.to_string(), updated.clone());
        Ok(Some(updated))
    }

    /// Every transaction of `wallet_id`, in no particular order.
    pub fn list_transactions_by_wallet(&self, wallet_id: &str) -> Vec<Transaction> {
        read(&self.transactions)
            .values()
            .filter(|tx| tx.wallet_id == wallet_id)
            .cloned()
            .collect()
    }
}
