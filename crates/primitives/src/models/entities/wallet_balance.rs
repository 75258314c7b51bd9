use chrono::{DateTime, Utc};
use diesel::{Associations, Identifiable, Queryable};
use serde::Serialize;

/// Materialized cache of the ledger sum for one wallet. Created lazily
/// with balance 0 and mutated only under the wallet row lock.
#[derive(Debug, Clone, Queryable, Identifiable, Associations, Serialize)]
#[diesel(table_name = crate::schema::wallet_balances)]
#[diesel(primary_key(wallet_id))]
#[diesel(belongs_to(crate::models::entities::wallet::Wallet))]
pub struct WalletBalance {
    pub wallet_id: i64,
    pub balance: i64,
    pub updated_at: DateTime<Utc>,
}
