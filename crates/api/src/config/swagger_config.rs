use crate::handlers::{
    bonus::__path_bonus, health::__path_health_check, spend::__path_spend, topup::__path_topup,
    wallet_balance::__path_wallet_balance, wallet_meta::__path_wallet_meta,
};
use utoipa::OpenApi;
use walletd_primitives::models::{
    AssetDto, BalanceResponse, HealthStatus, LedgerEntryResponse, LedgerRequest,
    WalletMetaResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(topup, spend, bonus, wallet_balance, wallet_meta, health_check),
    components(schemas(
        LedgerRequest,
        LedgerEntryResponse,
        BalanceResponse,
        WalletMetaResponse,
        AssetDto,
        HealthStatus
    )),
    tags(
        (name = "Ledger", description = "Ledger entry operations"),
        (name = "Wallet", description = "Wallet read endpoints"),
        (name = "Health", description = "Service health")
    )
)]
pub struct ApiDoc;
