use diesel::pg::PgConnection;
use diesel::prelude::*;
use dotenvy::dotenv;
use std::env;
use walletd_primitives::schema::{asset_types, wallets};

fn establish_connection() -> PgConnection {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    PgConnection::establish(&database_url)
        .unwrap_or_else(|_| panic!("Error connecting to {}", database_url))
}

fn main() {
    dotenv().ok();
    println!("Seeding database...");

    let mut conn = establish_connection();

    // 1. Clean DB
    clean_db(&mut conn);

    // 2. Seed asset types
    let usd = seed_asset_type(&mut conn, "USD", "US Dollar");
    let ngn = seed_asset_type(&mut conn, "NGN", "Nigerian Naira");

    // 3. Seed wallets (normally provisioned by the account service)
    seed_wallet(&mut conn, 1, usd);
    seed_wallet(&mut conn, 1, ngn);
    seed_wallet(&mut conn, 2, usd);

    println!("Database seeded successfully!");
}

fn clean_db(conn: &mut PgConnection) {
    use diesel::sql_query;
    println!("Cleaning database...");
    sql_query("TRUNCATE asset_types, wallets, wallet_balances, ledger_entries RESTART IDENTITY CASCADE")
        .execute(conn)
        .expect("Error truncating tables");
}

fn seed_asset_type(conn: &mut PgConnection, code: &str, name: &str) -> i64 {
    let existing = asset_types::table
        .filter(asset_types::code.eq(code))
        .select(asset_types::id)
        .first::<i64>(conn)
        .optional()
        .unwrap();

    if let Some(id) = existing {
        println!("Asset type {} already exists", code);
        return id;
    }

    diesel::insert_into(asset_types::table)
        .values((asset_types::code.eq(code), asset_types::name.eq(name)))
        .returning(asset_types::id)
        .get_result::<i64>(conn)
        .expect("Error seeding asset type")
}

fn seed_wallet(conn: &mut PgConnection, user_id: i64, asset_type_id: i64) {
    let wallet_id = diesel::insert_into(wallets::table)
        .values((
            wallets::user_id.eq(user_id),
            wallets::asset_type_id.eq(asset_type_id),
        ))
        .returning(wallets::id)
        .get_result::<i64>(conn)
        .expect("Error seeding wallet");

    println!("Seeded wallet {} for user {}", wallet_id, user_id);
}
