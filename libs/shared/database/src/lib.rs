pub mod error;
pub mod postgres;

pub use error::StoreError;
pub use postgres::PostgresClient;

/// Idempotent DDL for the tables the stores query.
pub const SCHEMA_SQL: &str = include_str!("../schema.sql");
