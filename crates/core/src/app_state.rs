use diesel::r2d2::{self, ConnectionManager};
use diesel::PgConnection;
use std::sync::Arc;

pub use walletd_primitives::models::app_config::AppConfig;

pub type DbPool = r2d2::Pool<ConnectionManager<PgConnection>>;

/// Explicitly constructed application state, injected into handlers and
/// services rather than reached through a process-wide singleton. Tests
/// build their own instance against a scratch database.
#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(db: DbPool, config: AppConfig) -> Arc<Self> {
        Arc::new(Self { db, config })
    }
}
