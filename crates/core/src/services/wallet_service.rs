use crate::app_state::AppState;
use crate::repositories::balance_repository::BalanceRepository;
use crate::repositories::wallet_repository::WalletRepository;
use tracing::error;
use walletd_primitives::{
    error::ApiError,
    models::dtos::wallet_dto::{BalanceResponse, WalletMetaResponse},
};

pub struct WalletService;

impl WalletService {
    /// Read path: no lock, no transaction scope. Lazily creates the
    /// zero-balance row on first touch, then returns committed state.
    pub async fn get_balance(
        state: &AppState,
        wallet_id: i64,
    ) -> Result<BalanceResponse, ApiError> {
        if wallet_id <= 0 {
            return Err(ApiError::InvalidInput(
                "walletId must be a positive integer".into(),
            ));
        }

        let mut conn = state.db.get().map_err(|e| {
            error!("wallet.balance: failed to acquire db connection: {}", e);
            ApiError::DatabaseConnection(e.to_string())
        })?;

        if WalletRepository::find(&mut conn, wallet_id)?.is_none() {
            return Err(ApiError::WalletNotFound);
        }
        BalanceRepository::ensure_row(&mut conn, wallet_id)?;
        let row = BalanceRepository::fetch(&mut conn, wallet_id)?;

        Ok(BalanceResponse {
            wallet_id,
            balance: row.balance,
        })
    }

    pub async fn get_meta(
        state: &AppState,
        wallet_id: i64,
    ) -> Result<WalletMetaResponse, ApiError> {
        if wallet_id <= 0 {
            return Err(ApiError::InvalidInput(
                "walletId must be a positive integer".into(),
            ));
        }

        let mut conn = state.db.get().map_err(|e| {
            error!("wallet.meta: failed to acquire db connection: {}", e);
            ApiError::DatabaseConnection(e.to_string())
        })?;

        let meta = WalletRepository::meta(&mut conn, wallet_id)?;
        Ok(meta.into())
    }
}
