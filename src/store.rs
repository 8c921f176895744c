//! SQLite pool construction. The database file is created when it does not exist yet.

use crate::config::AppConfig;
use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// True for URLs naming a private in-memory database (`sqlite::memory:`, `sqlite://:memory:`, `?mode=memory`).
pub fn is_memory_url(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Open a pool for `config.database_url` with foreign keys enforced on every connection.
///
/// In-memory databases live only as long as their connection, so the pool is pinned to a single
/// connection that is never reaped.
pub async fn connect(config: &AppConfig) -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = if is_memory_url(&config.database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await?
    };
    tracing::debug!(url = %config.database_url, "database pool ready");
    Ok(pool)
}

/// Fresh, migrated in-memory store. Used by tests and local experiments.
pub async fn memory_pool() -> Result<SqlitePool, AppError> {
    let config = AppConfig {
        database_url: "sqlite::memory:".into(),
        ..AppConfig::default()
    };
    let pool = connect(&config).await?;
    crate::migration::apply_migrations(&pool).await?;
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_urls_are_detected() {
        assert!(is_memory_url("sqlite::memory:"));
        assert!(is_memory_url("sqlite://:memory:"));
        assert!(is_memory_url("sqlite://file.db?mode=memory&cache=shared"));
        assert!(!is_memory_url("sqlite://app.db"));
    }

    #[tokio::test]
    async fn memory_pool_enforces_foreign_keys() {
        let pool = memory_pool().await.unwrap();
        let (enabled,): (i64,) = sqlx::query_as("PRAGMA foreign_keys")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(enabled, 1);
    }
}
