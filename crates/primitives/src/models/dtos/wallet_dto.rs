use crate::models::entities::{AssetType, Wallet};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AssetDto {
    pub code: String,
    pub name: String,
}

/// Result of the wallet/asset metadata join.
#[derive(Debug, Clone)]
pub struct WalletMetaRow {
    pub wallet_id: i64,
    pub user_id: i64,
    pub asset_code: String,
    pub asset_name: String,
}

impl From<(Wallet, AssetType)> for WalletMetaRow {
    fn from((wallet, asset): (Wallet, AssetType)) -> Self {
        Self {
            wallet_id: wallet.id,
            user_id: wallet.user_id,
            asset_code: asset.code,
            asset_name: asset.name,
        }
    }
}

impl From<WalletMetaRow> for AssetDto {
    fn from(row: WalletMetaRow) -> Self {
        Self {
            code: row.asset_code,
            name: row.asset_name,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WalletMetaResponse {
    pub wallet_id: i64,
    pub user_id: i64,
    pub asset: AssetDto,
}

impl From<WalletMetaRow> for WalletMetaResponse {
    fn from(row: WalletMetaRow) -> Self {
        Self {
            wallet_id: row.wallet_id,
            user_id: row.user_id,
            asset: row.into(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BalanceResponse {
    pub wallet_id: i64,
    pub balance: i64,
}
