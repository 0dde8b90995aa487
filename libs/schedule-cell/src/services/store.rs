use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use tracing::debug;

use shared_config::AppConfig;
use shared_database::{PostgresClient, StoreError};

use crate::models::CANCELLED_STATUS;

// A slot is free when no consultation other than a cancelled one points at it.
const AVAILABLE_DATES_SQL: &str = r#"
    SELECT DISTINCT s.slot_date
    FROM schedule_slots s
    WHERE s.slot_date >= $1
      AND NOT EXISTS (
          SELECT 1 FROM consultations c
          WHERE c.slot_id = s.id AND c.status <> $2
      )
    ORDER BY s.slot_date ASC
"#;

const AVAILABLE_TIMES_SQL: &str = r#"
    SELECT DISTINCT s.slot_time
    FROM schedule_slots s
    WHERE s.slot_date = $1
      AND NOT EXISTS (
          SELECT 1 FROM consultations c
          WHERE c.slot_id = s.id AND c.status <> $2
      )
    ORDER BY s.slot_time ASC
"#;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScheduleStore: Send + Sync {
    /// Dates on or after `from` with at least one free slot.
    async fn available_dates(&self, from: NaiveDate) -> Result<Vec<NaiveDate>, StoreError>;

    /// Free slot times on `date`.
    async fn available_times(&self, date: NaiveDate) -> Result<Vec<NaiveTime>, StoreError>;
}

pub struct PostgresScheduleStore {
    db: PostgresClient,
}

impl PostgresScheduleStore {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            db: PostgresClient::new(config),
        }
    }
}

#[async_trait]
impl ScheduleStore for PostgresScheduleStore {
    async fn available_dates(&self, from: NaiveDate) -> Result<Vec<NaiveDate>, StoreError> {
        debug!("Querying available dates from {}", from);

        let mut conn = self.db.connect().await?;
        let result = sqlx::query_scalar::<_, NaiveDate>(AVAILABLE_DATES_SQL)
            .bind(from)
            .bind(CANCELLED_STATUS)
            .fetch_all(&mut conn)
            .await;
        PostgresClient::release(conn).await;

        Ok(result?)
    }

    async fn available_times(&self, date: NaiveDate) -> Result<Vec<NaiveTime>, StoreError> {
        debug!("Querying available times on {}", date);

        let mut conn = self.db.connect().await?;
        let result = sqlx::query_scalar::<_, NaiveTime>(AVAILABLE_TIMES_SQL)
            .bind(date)
            .bind(CANCELLED_STATUS)
            .fetch_all(&mut conn)
            .await;
        PostgresClient::release(conn).await;

        Ok(result?)
    }
}
