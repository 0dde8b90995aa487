use sqlx::{Connection, PgConnection};
use tracing::{debug, warn};

use shared_config::AppConfig;

use crate::error::StoreError;

/// Opens a fresh Postgres connection per call. There is no pool: every
/// request connects, runs its single statement and closes again.
#[derive(Debug, Clone)]
pub struct PostgresClient {
    database_url: String,
}

impl PostgresClient {
    pub fn new(config: &AppConfig) -> Self {
        Self::from_url(config.database_url.clone())
    }

    pub fn from_url(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
        }
    }

    pub async fn connect(&self) -> Result<PgConnection, StoreError> {
        if self.database_url.is_empty() {
            return Err(StoreError::NotConfigured);
        }

        debug!("Opening database connection");
        let conn = PgConnection::connect(&self.database_url).await?;
        Ok(conn)
    }

    /// Closes the connection. A failed close does not fail the request whose
    /// statement already completed.
    pub async fn release(conn: PgConnection) {
        if let Err(e) = conn.close().await {
            warn!("Failed to close database connection cleanly: {}", e);
        }
    }
}
