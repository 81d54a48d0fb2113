//! Log entry operations for the repository.

use crate::domain::LogTime;
use sqlx::Row;
use tracing::{debug, error};

use super::Repository;

impl Repository {
    /// All log entry timestamps, oldest first.
    ///
    /// Entries sharing a timestamp are returned in insertion order.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn list_entries(&self) -> Result<Vec<LogTime>, sqlx::Error> {
        let rows = sqlx::query(
            r#"
            SELECT log_time
            FROM cigarette_data
            ORDER BY log_time ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Error fetching log entries");
            e
        })?;

        Ok(rows
            .iter()
            .map(|row| LogTime::new(row.get::<i64, _>("log_time")))
            .collect())
    }

    /// Record a new entry stamped with the current server time.
    ///
    /// # Errors
    /// Returns an error if the insert fails.
    pub async fn add_entry(&self) -> Result<LogTime, sqlx::Error> {
        let log_time = LogTime::now();
        let result = sqlx::query("INSERT INTO cigarette_data (log_time) VALUES (?)")
            .bind(log_time.as_ms())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Error adding log entry");
                e
            })?;

        debug!(id = result.last_insert_rowid(), %log_time, "Log entry added");
        Ok(log_time)
    }

    /// Delete the most recent entry.
    ///
    /// Selection and deletion run as one statement, so two concurrent calls
    /// never both remove the same row. Ties on `log_time` go to the highest id.
    ///
    /// Returns `false` if there was nothing to delete.
    ///
    /// # Errors
    /// Returns an error if the delete fails.
    pub async fn remove_last_entry(&self) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            DELETE FROM cigarette_data
            WHERE id = (
                SELECT id FROM cigarette_data
                ORDER BY log_time DESC, id DESC
                LIMIT 1
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Error removing last log entry");
            e
        })?;

        Ok(result.rows_affected() > 0)
    }
}
