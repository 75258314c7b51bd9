use diesel::{Associations, Identifiable, Queryable};
use serde::Serialize;

/// Externally provisioned reference data; this service never creates or
/// mutates wallet rows, it only locks them.
#[derive(Debug, Clone, Queryable, Identifiable, Associations, Serialize)]
#[diesel(table_name = crate::schema::wallets)]
#[diesel(belongs_to(crate::models::entities::asset_type::AssetType))]
pub struct Wallet {
    pub id: i64,
    pub user_id: i64,
    pub asset_type_id: i64,
}
