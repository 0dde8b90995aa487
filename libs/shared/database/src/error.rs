use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database not configured: DATABASE_URL is empty")]
    NotConfigured,

    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}
