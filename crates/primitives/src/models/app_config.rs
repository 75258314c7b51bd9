use eyre::Result;
use std::env;

/// Non-database runtime configuration, loaded once at startup.
/// `DATABASE_URL` is consumed directly by the pool builder.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app_env: String,
    pub cors_origins: String,
    pub rate_limit_per_second: u64,
    pub rate_limit_burst: u32,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
        let cors_origins =
            env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".to_string());

        let rate_limit_per_second = env::var("RATE_LIMIT_PER_SECOND")
            .ok()
            .map(|v| v.parse::<u64>())
            .transpose()
            .map_err(|e| eyre::eyre!("Invalid RATE_LIMIT_PER_SECOND: {}", e))?
            .unwrap_or(2);

        let rate_limit_burst = env::var("RATE_LIMIT_BURST")
            .ok()
            .map(|v| v.parse::<u32>())
            .transpose()
            .map_err(|e| eyre::eyre!("Invalid RATE_LIMIT_BURST: {}", e))?
            .unwrap_or(10);

        Ok(Self {
            app_env,
            cors_origins,
            rate_limit_per_second,
            rate_limit_burst,
        })
    }

    pub fn is_test(&self) -> bool {
        self.app_env == "test"
    }
}
