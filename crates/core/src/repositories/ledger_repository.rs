use diesel::prelude::*;
use diesel::sql_types::BigInt;
use walletd_primitives::error::ApiError;
use walletd_primitives::models::entities::ledger_entry::{LedgerEntry, NewLedgerEntry};
use walletd_primitives::schema::ledger_entries;

pub struct LedgerRepository;

impl LedgerRepository {
    /// Idempotency probe. Must run inside the same transaction that holds
    /// the wallet row lock; checked outside the lock, two concurrent
    /// retries could both observe "not found" and both write.
    pub fn find_by_reference(
        conn: &mut PgConnection,
        wallet_id: i64,
        reference_id: &str,
    ) -> Result<Option<LedgerEntry>, ApiError> {
        ledger_entries::table
            .filter(ledger_entries::wallet_id.eq(wallet_id))
            .filter(ledger_entries::reference_id.eq(reference_id))
            .first::<LedgerEntry>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn insert(conn: &mut PgConnection, entry: NewLedgerEntry) -> Result<(), ApiError> {
        diesel::insert_into(ledger_entries::table)
            .values(entry)
            .execute(conn)?;
        Ok(())
    }

    /// Sum of all entry amounts for a wallet. The materialized balance is
    /// a cache of this value and can be rebuilt from it.
    pub fn sum_for_wallet(conn: &mut PgConnection, wallet_id: i64) -> Result<i64, ApiError> {
        ledger_entries::table
            .filter(ledger_entries::wallet_id.eq(wallet_id))
            .select(diesel::dsl::sql::<BigInt>("COALESCE(SUM(amount), 0)::bigint"))
            .first::<i64>(conn)
            .map_err(ApiError::from)
    }
}
