use crate::app_state::AppState;
use crate::repositories::balance_repository::BalanceRepository;
use crate::repositories::ledger_repository::LedgerRepository;
use crate::repositories::wallet_repository::WalletRepository;
use diesel::prelude::*;
use tracing::{error, info};
use walletd_primitives::{
    error::ApiError,
    models::{
        dtos::ledger_dto::{LedgerEntryResponse, LedgerRequest},
        entities::enum_types::EntryType,
        entities::ledger_entry::NewLedgerEntry,
    },
};

/// The three ledger operations share one application path; they differ
/// only in the stored entry type, the sign of the stored amount, and
/// whether the sufficiency guard runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerOperation {
    Topup,
    Spend,
    Bonus,
}

impl LedgerOperation {
    pub fn entry_type(self) -> EntryType {
        match self {
            LedgerOperation::Topup => EntryType::Topup,
            LedgerOperation::Spend => EntryType::Spend,
            LedgerOperation::Bonus => EntryType::Bonus,
        }
    }

    /// API amounts are always positive; the sign is applied here.
    pub fn signed_amount(self, amount: i64) -> i64 {
        match self {
            LedgerOperation::Spend => -amount,
            LedgerOperation::Topup | LedgerOperation::Bonus => amount,
        }
    }

    pub fn requires_funds(self) -> bool {
        matches!(self, LedgerOperation::Spend)
    }
}

pub struct LedgerService;

impl LedgerService {
    pub async fn topup(
        state: &AppState,
        wallet_id: i64,
        req: LedgerRequest,
    ) -> Result<LedgerEntryResponse, ApiError> {
        Self::apply(state, wallet_id, req, LedgerOperation::Topup).await
    }

    pub async fn spend(
        state: &AppState,
        wallet_id: i64,
        req: LedgerRequest,
    ) -> Result<LedgerEntryResponse, ApiError> {
        Self::apply(state, wallet_id, req, LedgerOperation::Spend).await
    }

    pub async fn bonus(
        state: &AppState,
        wallet_id: i64,
        req: LedgerRequest,
    ) -> Result<LedgerEntryResponse, ApiError> {
        Self::apply(state, wallet_id, req, LedgerOperation::Bonus).await
    }

    /// Applies one ledger entry to a wallet as a single atomic unit.
    ///
    /// The wallet row lock is the serialization point: everything after
    /// it (idempotency probe, sufficiency guard, entry insert, balance
    /// adjustment) happens while concurrent operations on the same
    /// wallet are blocked. Any error rolls the whole transaction back.
    async fn apply(
        state: &AppState,
        wallet_id: i64,
        req: LedgerRequest,
        op: LedgerOperation,
    ) -> Result<LedgerEntryResponse, ApiError> {
        // Preconditions run before any store access.
        let reference_id = validate_preconditions(wallet_id, &req)?;

        let mut conn = state.db.get().map_err(|e| {
            error!("ledger.apply: failed to acquire db connection: {}", e);
            ApiError::DatabaseConnection(e.to_string())
        })?;

        conn.transaction::<_, ApiError, _>(|conn| {
            WalletRepository::lock(conn, wallet_id)?;
            BalanceRepository::ensure_row(conn, wallet_id)?;
            let meta = WalletRepository::meta(conn, wallet_id)?;

            // Idempotency is decided before the sufficiency guard: a
            // retried SPEND whose wallet has since become insufficient
            // still reports its original success.
            if LedgerRepository::find_by_reference(conn, wallet_id, &reference_id)?.is_some() {
                let balance = BalanceRepository::read(conn, wallet_id)?;
                info!(
                    "ledger.apply: replay of reference {} on wallet {}",
                    reference_id, wallet_id
                );
                return Ok(LedgerEntryResponse::replayed(meta, balance));
            }

            if op.requires_funds() {
                let balance = BalanceRepository::read_for_update(conn, wallet_id)?;
                if balance < req.amount {
                    return Err(ApiError::InsufficientBalance);
                }
            }

            let delta = op.signed_amount(req.amount);
            LedgerRepository::insert(
                conn,
                NewLedgerEntry {
                    wallet_id,
                    entry_type: op.entry_type(),
                    amount: delta,
                    reference_id: &reference_id,
                    note: req.note.as_deref(),
                },
            )?;
            BalanceRepository::adjust(conn, wallet_id, delta)?;

            let balance = BalanceRepository::read(conn, wallet_id)?;
            Ok(LedgerEntryResponse::applied(meta, balance))
        })
    }
}

fn validate_preconditions(wallet_id: i64, req: &LedgerRequest) -> Result<String, ApiError> {
    if wallet_id <= 0 {
        return Err(ApiError::InvalidInput(
            "walletId must be a positive integer".into(),
        ));
    }
    if req.amount <= 0 {
        return Err(ApiError::InvalidInput(
            "amount must be a positive integer".into(),
        ));
    }
    let reference = req.reference_id.trim();
    if reference.len() < 3 {
        return Err(ApiError::InvalidInput(
            "referenceId must be at least 3 characters".into(),
        ));
    }
    Ok(reference.to_string())
}
