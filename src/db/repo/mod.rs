//! Repository layer for database operations.
//!
//! This module provides the `Repository` struct for all database operations.
//! Methods are organized across submodules by table:
//! - `entries.rs` - Log entry operations on `cigarette_data`
//! - `settings.rs` - Daily target operations on `settings`
//!
//! Every method logs store failures where they happen and returns the
//! `sqlx::Error` to the caller.

mod entries;
mod settings;

pub use settings::DAILY_TARGET_KEY;

use crate::db::migrations::run_migrations;
use sqlx::sqlite::SqlitePool;
use tracing::{error, info};

/// Repository for database operations.
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Repository { pool }
    }

    /// Create the schema if absent and seed the default daily target.
    ///
    /// Safe to call on every startup: an existing target is left untouched.
    ///
    /// # Errors
    /// Returns an error if a schema statement or the seed insert fails.
    pub async fn initialize(&self) -> Result<(), sqlx::Error> {
        let result = async {
            run_migrations(&self.pool).await?;
            self.seed_default_target().await
        }
        .await;

        match &result {
            Ok(()) => info!("Database initialized successfully"),
            Err(e) => error!(error = %e, "Error initializing database"),
        }
        result
    }

    /// Check that the store answers a trivial query.
    ///
    /// # Errors
    /// Returns an error if no connection can be acquired or the query fails.
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Database ping failed");
                e
            })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_db;
    use crate::domain::DailyTarget;
    use tempfile::TempDir;

    async fn setup_repo() -> (Repository, SqlitePool, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let url = format!(
            "sqlite:{}?mode=rwc",
            temp_dir.path().join("test.db").to_string_lossy()
        );
        let pool = init_db(&url).await.expect("init_db failed");
        let repo = Repository::new(pool.clone());
        repo.initialize().await.expect("initialize failed");
        (repo, pool, temp_dir)
    }

    #[tokio::test]
    async fn test_initialize_seeds_default_target() {
        let (repo, _pool, _temp) = setup_repo().await;
        assert_eq!(repo.get_target().await.unwrap(), DailyTarget::DEFAULT);
    }

    #[tokio::test]
    async fn test_initialize_keeps_existing_target() {
        let (repo, _pool, _temp) = setup_repo().await;
        repo.set_target(DailyTarget::new(3)).await.unwrap();

        repo.initialize().await.expect("second initialize failed");
        assert_eq!(repo.get_target().await.unwrap(), DailyTarget::new(3));
    }

    #[tokio::test]
    async fn test_initialize_keeps_existing_entries() {
        let (repo, _pool, _temp) = setup_repo().await;
        repo.add_entry().await.unwrap();

        repo.initialize().await.expect("second initialize failed");
        assert_eq!(repo.list_entries().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_ping() {
        let (repo, pool, _temp) = setup_repo().await;
        assert!(repo.ping().await.is_ok());

        pool.close().await;
        assert!(repo.ping().await.is_err());
    }
}
