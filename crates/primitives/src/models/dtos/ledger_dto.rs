use crate::models::dtos::wallet_dto::{AssetDto, WalletMetaRow};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Replay responses carry this label in the `transaction` field. The
/// wording is kept verbatim for compatibility with existing clients; it
/// means "no-op replay", not a failure.
const REPLAY_LABEL: &str = "Failed due to idempotency";

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LedgerRequest {
    #[validate(range(min = 1))]
    pub amount: i64,

    #[validate(length(min = 3, max = 128))]
    pub reference_id: String,

    #[validate(length(max = 500))]
    pub note: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntryResponse {
    pub idempotent: bool,
    pub wallet_id: i64,
    pub user_id: i64,
    pub asset: AssetDto,
    pub balance: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction: Option<String>,
}

impl LedgerEntryResponse {
    /// Response for a freshly applied ledger entry.
    pub fn applied(meta: WalletMetaRow, balance: i64) -> Self {
        Self {
            idempotent: false,
            wallet_id: meta.wallet_id,
            user_id: meta.user_id,
            asset: meta.into(),
            balance,
            transaction: None,
        }
    }

    /// Response for a retried request whose reference was already applied.
    pub fn replayed(meta: WalletMetaRow, balance: i64) -> Self {
        Self {
            idempotent: true,
            wallet_id: meta.wallet_id,
            user_id: meta.user_id,
            asset: meta.into(),
            balance,
            transaction: Some(REPLAY_LABEL.to_string()),
        }
    }
}
