use crate::{EngineError, ResultEngine, Wallet};

use super::Engine;

impl Engine {
    /// Creates a wallet and returns the stored record.
    pub fn new_wallet(
        &self,
        name: &str,
        owners: &[String],
        daily_limit_cents: i64,
        required_approvals: i64,
    ) -> ResultEngine<Wallet> {
        let wallet = Wallet::new(name, owners, daily_limit_cents, required_approvals)?;
        self.store.create_wallet(wallet.clone());
        tracing::info!(
            wallet_id = %wallet.id,
            owners = wallet.owners.len(),
            required_approvals = wallet.required_approvals,
            "wallet created"
        );
        Ok(wallet)
    }

    pub fn wallet(&self, wallet_id: &str) -> ResultEngine<Wallet> {
        self.store
            .wallet(wallet_id)
            .ok_or_else(|| EngineError::NotFound(format!("wallet {wallet_id}")))
    }

    /// Wallets sorted by creation time, oldest first.
    pub fn list_wallets(&self) -> Vec<Wallet> {
        let mut wallets = self.store.list_wallets();
        wallets.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        wallets
    }
}
