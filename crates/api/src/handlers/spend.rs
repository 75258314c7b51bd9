use axum::extract::{Json, Path, State};
use std::sync::Arc;
use tracing::error;
use validator::Validate;
use walletd_core::services::ledger_service::LedgerService;
use walletd_core::AppState;
use walletd_primitives::error::ApiError;
use walletd_primitives::models::{LedgerEntryResponse, LedgerRequest};

#[utoipa::path(
    post,
    path = "/wallets/{wallet_id}/spend",
    request_body = LedgerRequest,
    params(("wallet_id" = i64, Path, description = "Wallet identifier")),
    responses(
        (status = 200, description = "Debit applied (or replayed idempotently)", body = LedgerEntryResponse),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Wallet not found"),
        (status = 409, description = "Insufficient balance"),
        (status = 422, description = "Validation error"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Ledger"
)]
pub async fn spend(
    State(state): State<Arc<AppState>>,
    Path(wallet_id): Path<i64>,
    Json(req): Json<LedgerRequest>,
) -> Result<Json<LedgerEntryResponse>, ApiError> {
    req.validate().map_err(|e| {
        error!("spend: validation error: {}", e);
        ApiError::Validation(e)
    })?;

    let response = LedgerService::spend(&state, wallet_id, req).await?;
    Ok(Json(response))
}
