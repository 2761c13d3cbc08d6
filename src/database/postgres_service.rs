// =============================================================================
// DATABASE SERVICE - PostgreSQL connection pool
// =============================================================================

use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::PgPool;
use tracing::info;

use crate::config::environment::EnvironmentVariables;
use crate::utils::error_handler::AppResult;

const APPLICATION_NAME: &str = "lottery-backoffice";

/// Database service owning the application's connection pool.
#[derive(Clone, Debug)]
pub struct DatabaseService {
    pool: PgPool,
}

impl DatabaseService {
    /// Creates the pool without connecting; the first query opens a connection.
    pub fn new(config: Arc<EnvironmentVariables>) -> Self {
        let pool: PgPool = PgPoolOptions::new()
            .max_connections(20)
            .min_connections(0)
            .acquire_timeout(Duration::from_secs(config.default_timeout_seconds))
            .idle_timeout(Duration::from_secs(30))
            .connect_lazy_with(connect_options(&config));

        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Round-trips a trivial query.
    pub async fn health_check(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Gracefully shuts down the pool.
    pub async fn shutdown(&self) {
        info!("Closing database connection pool...");
        self.pool.close().await;
        info!("Database connection pool closed");
    }
}

/// Connection options with UTC session timezone; SSL is mandatory outside development
fn connect_options(config: &EnvironmentVariables) -> PgConnectOptions {
    let ssl_mode: PgSslMode = if config.environment == "development" {
        PgSslMode::Prefer
    } else {
        PgSslMode::Require
    };

    PgConnectOptions::new()
        .host(&config.db_host)
        .port(config.db_port)
        .username(&config.db_user)
        .password(&config.db_password)
        .database(&config.db_name)
        .options([("timezone", "UTC"), ("application_name", APPLICATION_NAME)])
        .ssl_mode(ssl_mode)
}
