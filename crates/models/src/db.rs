use std::time::Duration;

use configs::DatabaseConfig;
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::errors::ModelError;

/// Open a pooled connection using the pool settings from `cfg`.
pub async fn connect_with_config(url: &str, cfg: &DatabaseConfig) -> Result<DatabaseConnection, ModelError> {
    let mut opt = ConnectOptions::new(url.to_owned());
    opt.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs))
        .sqlx_logging(cfg.sqlx_logging);
    let db = Database::connect(opt).await?;
    Ok(db)
}

/// Connect and bring the `document` schema up to date.
pub async fn connect_and_migrate(url: &str, cfg: &DatabaseConfig) -> Result<DatabaseConnection, ModelError> {
    let db = connect_with_config(url, cfg).await?;
    migration::Migrator::up(&db, None).await?;
    info!(event = "migrations_applied", "document schema is up to date");
    Ok(db)
}

/// Postgres URL for tests, `None` when DB tests should be skipped.
#[cfg(test)]
pub(crate) fn test_database_url() -> Option<String> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    std::env::var("DATABASE_URL").ok().filter(|u| u.starts_with("postgres"))
}
