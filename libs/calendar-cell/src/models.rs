use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

// ==============================================================================
// HTTP DTOs
// ==============================================================================

/// Body posted by the chatbot. Fields stay optional so that absence is
/// reported as a validation error rather than a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub appointment_date: Option<String>,
    pub client_name: Option<String>,
    pub client_phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventResponse {
    pub message: String,
    pub event_id: String,
    pub event_link: String,
}

// ==============================================================================
// GOOGLE CALENDAR API MODELS
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub summary: String,
    pub description: String,
    pub start: EventDateTime,
    pub end: EventDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDateTime {
    pub date_time: String,
    pub time_zone: String,
}

/// The subset of the inserted event resource the facade hands back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedEvent {
    pub id: String,
    pub html_link: String,
}

/// Service account key as downloaded from the Google Cloud console. Not
/// `Debug` so the private key never ends up in logs.
#[derive(Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key: String,
    #[serde(default)]
    pub private_key_id: Option<String>,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

#[derive(Debug, Serialize)]
pub(crate) struct AssertionClaims<'a> {
    pub iss: &'a str,
    pub scope: &'a str,
    pub aud: &'a str,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: Option<i64>,
}

// ==============================================================================
// ERRORS
// ==============================================================================

#[derive(Debug, Error)]
pub enum CalendarError {
    #[error("Google Calendar is not configured")]
    NotConfigured,

    #[error("Invalid service account credentials: {0}")]
    InvalidCredentials(String),

    #[error("Invalid appointment date '{value}': {reason}")]
    InvalidAppointmentDate { value: String, reason: String },

    #[error("Google OAuth error: {message}")]
    Auth { message: String },

    #[error("Google Calendar API error: {message}")]
    Api { message: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}
