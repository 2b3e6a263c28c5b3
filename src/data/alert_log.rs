use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::Row;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};

use crate::models::AlertRecord;

// --- TRAIT DEFINITION ---

/// Abstract interface for the alert history, so the engine and tests never
/// depend on sqlite directly.
#[async_trait::async_trait]
pub trait AlertLog: Send + Sync {
    async fn initialize(&self) -> Result<()>;
    async fn record_event(&self, record: AlertRecord) -> Result<()>;
    async fn event_count(&self) -> Result<i64>;
}

// --- SQLITE IMPLEMENTATION ---

pub struct SqliteAlertLog {
    pool: SqlitePool,
}

impl SqliteAlertLog {
    pub async fn new(db_path: &str) -> Result<Self> {
        // Same robust connection options as any low-throughput history db:
        // WAL journaling, generous busy timeout, relaxed sync.
        let connection_options = SqliteConnectOptions::from_str(&format!("sqlite://{}", db_path))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(10))
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .max_connections(2) // Low connection count, this is low throughput
            .connect_with(connection_options)
            .await
            .with_context(|| format!("Failed to connect to {}", db_path))?;

        let log = Self { pool };
        log.initialize().await?;

        Ok(log)
    }
}

#[async_trait::async_trait]
impl AlertLog for SqliteAlertLog {
    async fn initialize(&self) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS alerts (
                alert_id TEXT PRIMARY KEY,
                zone_id TEXT NOT NULL,
                zone_kind TEXT NOT NULL,
                transition TEXT NOT NULL,
                boundary_distance_m REAL NOT NULL,
                timestamp_ms INTEGER NOT NULL
            );",
        )
        .execute(&self.pool)
        .await
        .context("Failed to create alerts table")?;

        Ok(())
    }

    async fn record_event(&self, record: AlertRecord) -> Result<()> {
        sqlx::query(
            "INSERT INTO alerts
                (alert_id, zone_id, zone_kind, transition, boundary_distance_m, timestamp_ms)
             VALUES (?, ?, ?, ?, ?, ?);",
        )
        .bind(&record.alert_id)
        .bind(&record.zone_id)
        .bind(record.zone_kind.to_string())
        .bind(record.transition.to_string())
        .bind(record.boundary_distance_m)
        .bind(record.timestamp_ms)
        .execute(&self.pool)
        .await
        .context("Failed to insert alert record")?;

        Ok(())
    }

    async fn event_count(&self) -> Result<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM alerts;")
            .fetch_one(&self.pool)
            .await
            .context("Failed to count alert records")?;
        Ok(row.get::<i64, _>("n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TransitionKind, ZoneKind};

    fn record(zone_id: &str, transition: TransitionKind) -> AlertRecord {
        AlertRecord {
            alert_id: uuid::Uuid::new_v4().to_string(),
            zone_id: zone_id.to_string(),
            zone_kind: ZoneKind::Danger,
            transition,
            boundary_distance_m: -12.0,
            timestamp_ms: 1_700_000_000_000,
        }
    }

    #[tokio::test]
    async fn test_record_and_count() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("alerts.sqlite");
        let log = SqliteAlertLog::new(db_path.to_str().unwrap()).await.unwrap();

        assert_eq!(log.event_count().await.unwrap(), 0);

        log.record_event(record("z1", TransitionKind::Enter)).await.unwrap();
        log.record_event(record("z1", TransitionKind::Exit)).await.unwrap();

        assert_eq!(log.event_count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_reopen_preserves_history() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("alerts.sqlite");
        let path_str = db_path.to_str().unwrap();

        {
            let log = SqliteAlertLog::new(path_str).await.unwrap();
            log.record_event(record("z1", TransitionKind::Enter)).await.unwrap();
        }

        let log = SqliteAlertLog::new(path_str).await.unwrap();
        assert_eq!(log.event_count().await.unwrap(), 1);
    }
}
