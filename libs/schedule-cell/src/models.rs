use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_database::StoreError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

/// Consultation status that frees its slot again.
pub const CANCELLED_STATUS: &str = "cancelled";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AvailableTimesQuery {
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableDatesResponse {
    pub available_dates: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableTimesResponse {
    pub available_times: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("Missing required parameter: date")]
    MissingDate,

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}
