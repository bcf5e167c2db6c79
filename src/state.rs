//! Application state.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::config::Config;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state: the connection pool is the only cross-request
/// resource. Opened once at startup, closed on shutdown.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool
    pub pool: PgPool,
}

impl AppState {
    /// Connect the pool and run pending migrations.
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(&config.database_url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Drain and close the pool.
    pub async fn shutdown(&self) {
        self.pool.close().await;
    }
}
