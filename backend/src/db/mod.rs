//! Database connection and pool management
//!
//! Pool settings come from [`DatabaseConfig`] plus fixed timeouts. The
//! schema lives in `backend/migrations` and is embedded at compile time.

use crate::config::DatabaseConfig;
use anyhow::{Context, Result};
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};

/// Pool tuning derived from the application config
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: 10,
            min_connections: 1,
            acquire_timeout_secs: 5,
            idle_timeout_secs: 600,      // 10 minutes
            max_lifetime_secs: 1800,     // 30 minutes
        }
    }
}

impl From<&DatabaseConfig> for DbConfig {
    fn from(config: &DatabaseConfig) -> Self {
        Self {
            url: config.url.clone(),
            max_connections: config.max_connections.max(1),
            min_connections: 1,
            ..Default::default()
        }
    }
}

impl DbConfig {
    fn connect_options(&self) -> Result<PgConnectOptions> {
        let options = PgConnectOptions::from_str(&self.url)
            .context("Invalid database URL")?
            .application_name("contact-list");
        Ok(options)
    }

    fn pool_options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .acquire_timeout(Duration::from_secs(self.acquire_timeout_secs))
            .idle_timeout(Duration::from_secs(self.idle_timeout_secs))
            .max_lifetime(Duration::from_secs(self.max_lifetime_secs))
    }
}

/// Connect a PostgreSQL pool, failing fast if the server is unreachable
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool> {
    let db_config = DbConfig::from(config);

    let pool = db_config
        .pool_options()
        .test_before_acquire(true)
        .connect_with(db_config.connect_options()?)
        .await
        .context("Failed to connect to database")?;

    info!(
        max = db_config.max_connections,
        min = db_config.min_connections,
        "Database pool created"
    );

    Ok(pool)
}

/// Build a pool that connects on first use
///
/// Used by tests and tooling that need a `PgPool` value without a server.
pub fn create_lazy_pool(config: &DatabaseConfig) -> Result<PgPool> {
    let db_config = DbConfig::from(config);
    Ok(db_config
        .pool_options()
        .connect_lazy_with(db_config.connect_options()?))
}

/// Run database migrations
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Database migrations completed successfully");
    Ok(())
}

/// Check database health
pub async fn health_check(pool: &PgPool) -> Result<()> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map(|_| ())
        .map_err(|e| {
            warn!("Database health check failed: {}", e);
            e.into()
        })
}

/// Whether a storage error is PostgreSQL rejecting a dangling foreign key
pub fn is_foreign_key_violation(err: &anyhow::Error) -> bool {
    err.downcast_ref::<sqlx::Error>()
        .and_then(sqlx::Error::as_database_error)
        .is_some_and(|db_err| db_err.is_foreign_key_violation())
}
