use diesel::{Identifiable, Queryable};
use serde::Serialize;

#[derive(Debug, Clone, Queryable, Identifiable, Serialize)]
#[diesel(table_name = crate::schema::asset_types)]
pub struct AssetType {
    pub id: i64,
    pub code: String,
    pub name: String,
}
