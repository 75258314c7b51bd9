use diesel::prelude::*;
use uuid::Uuid;
use walletd_primitives::schema::{asset_types, ledger_entries, wallet_balances, wallets};

/// Insert an asset type and a wallet with an explicit id. Wallets are
/// externally provisioned in production; tests seed them directly.
#[allow(dead_code)]
pub fn seed_wallet(conn: &mut PgConnection, wallet_id: i64, user_id: i64) {
    let asset_type_id: i64 = diesel::insert_into(asset_types::table)
        .values((
            asset_types::code.eq("USD"),
            asset_types::name.eq("US Dollar"),
        ))
        .returning(asset_types::id)
        .get_result(conn)
        .expect("Failed to seed asset type");

    diesel::insert_into(wallets::table)
        .values((
            wallets::id.eq(wallet_id),
            wallets::user_id.eq(user_id),
            wallets::asset_type_id.eq(asset_type_id),
        ))
        .execute(conn)
        .expect("Failed to seed wallet");
}

/// Reference ids must be unique per wallet across test runs within a test.
#[allow(dead_code)]
pub fn unique_reference(prefix: &str) -> String {
    format!("{}_{}", prefix, Uuid::new_v4())
}

#[allow(dead_code)]
pub fn stored_balance(conn: &mut PgConnection, wallet_id: i64) -> i64 {
    wallet_balances::table
        .find(wallet_id)
        .select(wallet_balances::balance)
        .first::<i64>(conn)
        .expect("Failed to read stored balance")
}

#[allow(dead_code)]
pub fn balance_row_exists(conn: &mut PgConnection, wallet_id: i64) -> bool {
    wallet_balances::table
        .find(wallet_id)
        .select(wallet_balances::wallet_id)
        .first::<i64>(conn)
        .optional()
        .expect("Failed to probe balance row")
        .is_some()
}

#[allow(dead_code)]
pub fn entry_count(conn: &mut PgConnection, wallet_id: i64, reference_id: &str) -> i64 {
    ledger_entries::table
        .filter(ledger_entries::wallet_id.eq(wallet_id))
        .filter(ledger_entries::reference_id.eq(reference_id))
        .count()
        .get_result::<i64>(conn)
        .expect("Failed to count ledger entries")
}

#[allow(dead_code)]
pub fn entry_amount(conn: &mut PgConnection, wallet_id: i64, reference_id: &str) -> i64 {
    ledger_entries::table
        .filter(ledger_entries::wallet_id.eq(wallet_id))
        .filter(ledger_entries::reference_id.eq(reference_id))
        .select(ledger_entries::amount)
        .first::<i64>(conn)
        .expect("Failed to read ledger entry amount")
}
