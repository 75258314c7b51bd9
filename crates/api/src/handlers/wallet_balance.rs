use axum::extract::{Json, Path, State};
use std::sync::Arc;
use walletd_core::services::wallet_service::WalletService;
use walletd_core::AppState;
use walletd_primitives::error::ApiError;
use walletd_primitives::models::BalanceResponse;

#[utoipa::path(
    get,
    path = "/wallets/{wallet_id}/balance",
    params(("wallet_id" = i64, Path, description = "Wallet identifier")),
    responses(
        (status = 200, description = "Current materialized balance", body = BalanceResponse),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Wallet not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Wallet"
)]
pub async fn wallet_balance(
    State(state): State<Arc<AppState>>,
    Path(wallet_id): Path<i64>,
) -> Result<Json<BalanceResponse>, ApiError> {
    let response = WalletService::get_balance(&state, wallet_id).await?;
    Ok(Json(response))
}
