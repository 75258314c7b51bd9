use crate::models::entities::enum_types::EntryType;
use chrono::{DateTime, Utc};
use diesel::{Associations, Identifiable, Insertable, Queryable};
use serde::Serialize;

/// Append-only record of one signed monetary movement. Rows are never
/// updated or deleted; the ledger is the source of truth and the
/// materialized balance is derived from it.
#[derive(Debug, Clone, Queryable, Identifiable, Associations, Serialize)]
#[diesel(table_name = crate::schema::ledger_entries)]
#[diesel(belongs_to(crate::models::entities::wallet::Wallet))]
pub struct LedgerEntry {
    pub id: i64,
    pub wallet_id: i64,
    pub entry_type: EntryType,
    pub amount: i64,
    pub reference_id: String,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::ledger_entries)]
pub struct NewLedgerEntry<'a> {
    pub wallet_id: i64,
    pub entry_type: EntryType,
    pub amount: i64,
    pub reference_id: &'a str,
    pub note: Option<&'a str>,
}
