//! Wallet API endpoints

use api_types::wallet::{Wallet, WalletNew};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{Caller, ServerError, server::ServerState};

fn wallet_view(wallet: engine::Wallet) -> Wallet {
    Wallet {
        id: wallet.id,
        name: wallet.name,
        owners: wallet.owners,
        daily_limit_cents: wallet.daily_limit_cents,
        required_approvals: wallet.required_approvals,
        created_at: wallet.created_at,
    }
}

/// Handle requests for creating a new `Wallet`
pub async fn wallet_new(
    Caller(user_id): Caller,
    State(state): State<ServerState>,
    payload: Result<Json<WalletNew>, JsonRejection>,
) -> Result<(StatusCode, Json<Wallet>), ServerError> {
    let Json(payload) = payload?;
    let wallet = state.engine.new_wallet(
        &payload.name,
        &payload.owners,
        payload.daily_limit_cents,
        payload.required_approvals,
    )?;
    tracing::debug!(wallet_id = %wallet.id, requested_by = %user_id, "wallet created via api");

    Ok((StatusCode::CREATED, Json(wallet_view(wallet))))
}

/// Handle requests for listing every `Wallet`
pub async fn list(State(state): State<ServerState>) -> Json<Vec<Wallet>> {
    Json(
        state
            .engine
            .list_wallets()
            .into_iter()
            .map(wallet_view)
            .collect(),
    )
}

pub async fn get(
    State(state): State<ServerState>,
    Path(wallet_id): Path<String>,
) -> Result<Json<Wallet>, ServerError> {
    let wallet = state.engine.wallet(&wallet_id)?;
    Ok(Json(wallet_view(wallet)))
}
