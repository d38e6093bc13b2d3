//! Transactions API endpoints

use api_types::transaction::{Transaction, TransactionNew, TransactionStatus as ApiStatus};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{Caller, ServerError, server::ServerState};

fn map_status(status: engine::TransactionStatus) -> ApiStatus {
    match status {
        engine::TransactionStatus::Pending => ApiStatus::Pending,
        engine::TransactionStatus::Approved => ApiStatus::Approved,
        engine::TransactionStatus::Rejected => ApiStatus::Rejected,
        engine::TransactionStatus::Executed => ApiStatus::Executed,
    }
}

fn transaction_view(tx: engine::Transaction) -> Transaction {
    Transaction {
        id: tx.id,
        wallet_id: tx.wallet_id,
        amount_cents: tx.amount_cents,
        memo: tx.memo,
        created_by: tx.created_by,
        approvers: tx.approvers,
        status: map_status(tx.status),
        created_at: tx.created_at,
    }
}

pub async fn transaction_new(
    Caller(user_id): Caller,
    State(state): State<ServerState>,
    Path(wallet_id): Path<String>,
    payload: Result<Json<TransactionNew>, JsonRejection>,
) -> Result<(StatusCode, Json<Transaction>), ServerError> {
    // Unknown wallets win over malformed bodies.
    state.engine.wallet(&wallet_id)?;
    let Json(payload) = payload?;

    let tx = state.engine.create_transaction(
        &wallet_id,
        payload.amount_cents,
        &payload.memo,
        &user_id,
    )?;

    Ok((StatusCode::CREATED, Json(transaction_view(tx))))
}

pub async fn list(
    State(state): State<ServerState>,
    Path(wallet_id): Path<String>,
) -> Json<Vec<Transaction>> {
    Json(
        state
            .engine
            .list_transactions(&wallet_id)
            .into_iter()
            .map(transaction_view)
            .collect(),
    )
}

pub async fn get(
    State(state): State<ServerState>,
    Path(tx_id): Path<String>,
) -> Result<Json<Transaction>, ServerError> {
    let tx = state.engine.transaction(&tx_id)?;
    Ok(Json(transaction_view(tx)))
}

pub async fn approve(
    Caller(user_id): Caller,
    State(state): State<ServerState>,
    Path(tx_id): Path<String>,
) -> Result<Json<Transaction>, ServerError> {
    let tx = state.engine.approve_transaction(&tx_id, &user_id)?;
    Ok(Json(transaction_view(tx)))
}
