//! Daily target operations for the repository.

use crate::domain::DailyTarget;
use tracing::{error, warn};

use super::Repository;

/// Settings key holding the daily target.
pub const DAILY_TARGET_KEY: &str = "daily_target";

impl Repository {
    /// Insert the default target unless a row already exists.
    pub(super) async fn seed_default_target(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO settings (key, value)
            VALUES (?, ?)
            ON CONFLICT(key) DO NOTHING
            "#,
        )
        .bind(DAILY_TARGET_KEY)
        .bind(DailyTarget::DEFAULT.to_json())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Stored daily target.
    ///
    /// Falls back to [`DailyTarget::DEFAULT`] when the row is missing or its
    /// value is not a non-negative integer.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn get_target(&self) -> Result<DailyTarget, sqlx::Error> {
        let row: Option<(String,)> = sqlx::query_as("SELECT value FROM settings WHERE key = ?")
            .bind(DAILY_TARGET_KEY)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Error fetching daily target");
                e
            })?;

        let Some((raw,)) = row else {
            return Ok(DailyTarget::DEFAULT);
        };

        Ok(serde_json::from_str::<DailyTarget>(&raw).unwrap_or_else(|e| {
            warn!(
                value = %raw,
                error = %e,
                "Failed to parse stored daily target, using default"
            );
            DailyTarget::DEFAULT
        }))
    }

    /// Overwrite the daily target, creating the row if it is missing.
    ///
    /// # Errors
    /// Returns an error if the write fails.
    pub async fn set_target(&self, target: DailyTarget) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO settings (key, value)
            VALUES (?, ?)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value
            "#,
        )
        .bind(DAILY_TARGET_KEY)
        .bind(target.to_json())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, target = target.get(), "Error updating daily target");
            e
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_db;
    use tempfile::TempDir;

    async fn setup_repo() -> (Repository, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let url = format!(
            "sqlite:{}?mode=rwc",
            temp_dir.path().join("test.db").to_string_lossy()
        );
        let pool = init_db(&url).await.expect("init_db failed");
        let repo = Repository::new(pool);
        repo.initialize().await.expect("initialize failed");
        (repo, temp_dir)
    }

    async fn write_raw(repo: &Repository, value: &str) {
        sqlx::query("UPDATE settings SET value = ? WHERE key = ?")
            .bind(value)
            .bind(DAILY_TARGET_KEY)
            .execute(&repo.pool)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_get_target_after_initialize() {
        let (repo, _temp) = setup_repo().await;
        assert_eq!(repo.get_target().await.unwrap().get(), 10);
    }

    #[tokio::test]
    async fn test_set_then_get_target() {
        let (repo, _temp) = setup_repo().await;
        repo.set_target(DailyTarget::new(5)).await.unwrap();
        assert_eq!(repo.get_target().await.unwrap().get(), 5);

        repo.set_target(DailyTarget::new(0)).await.unwrap();
        assert_eq!(repo.get_target().await.unwrap().get(), 0);
    }

    #[tokio::test]
    async fn test_target_stored_as_json() {
        let (repo, _temp) = setup_repo().await;
        repo.set_target(DailyTarget::new(8)).await.unwrap();

        let (raw,): (String,) = sqlx::query_as("SELECT value FROM settings WHERE key = ?")
            .bind(DAILY_TARGET_KEY)
            .fetch_one(&repo.pool)
            .await
            .unwrap();
        assert_eq!(serde_json::from_str::<u32>(&raw).unwrap(), 8);
    }

    #[tokio::test]
    async fn test_get_target_defaults_when_row_missing() {
        let (repo, _temp) = setup_repo().await;
        sqlx::query("DELETE FROM settings WHERE key = ?")
            .bind(DAILY_TARGET_KEY)
            .execute(&repo.pool)
            .await
            .unwrap();

        assert_eq!(repo.get_target().await.unwrap(), DailyTarget::DEFAULT);
    }

    #[tokio::test]
    async fn test_set_target_recreates_missing_row() {
        let (repo, _temp) = setup_repo().await;
        sqlx::query("DELETE FROM settings")
            .execute(&repo.pool)
            .await
            .unwrap();

        repo.set_target(DailyTarget::new(4)).await.unwrap();
        assert_eq!(repo.get_target().await.unwrap().get(), 4);
    }

    #[tokio::test]
    async fn test_get_target_defaults_on_malformed_value() {
        let (repo, _temp) = setup_repo().await;
        for raw in ["\"ten\"", "-3", "not json"] {
            write_raw(&repo, raw).await;
            assert_eq!(repo.get_target().await.unwrap(), DailyTarget::DEFAULT);
        }
    }

    #[tokio::test]
    async fn test_target_operations_fail_on_closed_pool() {
        let (repo, _temp) = setup_repo().await;
        repo.pool.close().await;

        assert!(repo.get_target().await.is_err());
        assert!(repo.set_target(DailyTarget::new(1)).await.is_err());
    }
}
