use diesel::prelude::*;
use walletd_primitives::error::ApiError;
use walletd_primitives::models::entities::WalletBalance;
use walletd_primitives::schema::wallet_balances;

pub struct BalanceRepository;

impl BalanceRepository {
    /// Insert-if-absent zero-balance row; no-op when the row exists.
    pub fn ensure_row(conn: &mut PgConnection, wallet_id: i64) -> Result<(), ApiError> {
        diesel::insert_into(wallet_balances::table)
            .values(wallet_balances::wallet_id.eq(wallet_id))
            .on_conflict(wallet_balances::wallet_id)
            .do_nothing()
            .execute(conn)?;
        Ok(())
    }

    /// Adds `delta` (positive or negative) to the materialized balance
    /// and touches `updated_at`.
    pub fn adjust(conn: &mut PgConnection, wallet_id: i64, delta: i64) -> Result<(), ApiError> {
        diesel::update(wallet_balances::table.find(wallet_id))
            .set((
                wallet_balances::balance.eq(wallet_balances::balance + delta),
                wallet_balances::updated_at.eq(diesel::dsl::now),
            ))
            .execute(conn)?;
        Ok(())
    }

    /// Full balance row, for the read path.
    pub fn fetch(conn: &mut PgConnection, wallet_id: i64) -> Result<WalletBalance, ApiError> {
        wallet_balances::table
            .find(wallet_id)
            .first::<WalletBalance>(conn)
            .map_err(ApiError::from)
    }

    pub fn read(conn: &mut PgConnection, wallet_id: i64) -> Result<i64, ApiError> {
        wallet_balances::table
            .find(wallet_id)
            .select(wallet_balances::balance)
            .first::<i64>(conn)
            .map_err(ApiError::from)
    }

    /// Balance read under a row lock, used by the debit sufficiency check.
    pub fn read_for_update(conn: &mut PgConnection, wallet_id: i64) -> Result<i64, ApiError> {
        wallet_balances::table
            .find(wallet_id)
            .select(wallet_balances::balance)
            .for_update()
            .first::<i64>(conn)
            .map_err(ApiError::from)
    }
}
