use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;

use shared_database::StoreError;

/// Identifier generated by the store on insert.
pub type PatientId = i64;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupPatientRequest {
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePatientRequest {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub preferred_name: Option<String>,
}

/// A validated patient ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPatient {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub preferred_name: String,
}

/// The two columns projected by a phone lookup, echoed back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct PatientContact {
    pub preferred_name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupPatientResponse {
    pub message: String,
    pub data: PatientContact,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePatientResponse {
    pub message: String,
    pub patient_id: PatientId,
}

#[derive(Debug, Error)]
pub enum PatientError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Patient not found")]
    NotFound,

    #[error(transparent)]
    Store(#[from] StoreError),
}
