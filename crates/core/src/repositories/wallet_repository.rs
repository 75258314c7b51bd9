use diesel::prelude::*;
use walletd_primitives::error::ApiError;
use walletd_primitives::models::dtos::wallet_dto::WalletMetaRow;
use walletd_primitives::models::entities::{AssetType, Wallet};
use walletd_primitives::schema::{asset_types, wallets};

pub struct WalletRepository;

impl WalletRepository {
    /// Acquires an exclusive row lock on the wallet for the duration of
    /// the surrounding transaction. Only one in-flight operation per
    /// wallet proceeds past this call; the rest block until the holder
    /// commits or rolls back.
    pub fn lock(conn: &mut PgConnection, wallet_id: i64) -> Result<i64, ApiError> {
        wallets::table
            .filter(wallets::id.eq(wallet_id))
            .select(wallets::id)
            .for_update()
            .first::<i64>(conn)
            .map_err(|e| {
                if matches!(e, diesel::result::Error::NotFound) {
                    ApiError::WalletNotFound
                } else {
                    ApiError::from(e)
                }
            })
    }

    /// Unlocked lookup for the read path.
    pub fn find(conn: &mut PgConnection, wallet_id: i64) -> Result<Option<Wallet>, ApiError> {
        wallets::table
            .find(wallet_id)
            .first::<Wallet>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn meta(conn: &mut PgConnection, wallet_id: i64) -> Result<WalletMetaRow, ApiError> {
        wallets::table
            .inner_join(asset_types::table)
            .filter(wallets::id.eq(wallet_id))
            .first::<(Wallet, AssetType)>(conn)
            .map(WalletMetaRow::from)
            .map_err(|e| {
                if matches!(e, diesel::result::Error::NotFound) {
                    ApiError::WalletNotFound
                } else {
                    ApiError::from(e)
                }
            })
    }
}
