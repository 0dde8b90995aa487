use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;
use uuid::Uuid;

/// Errors surfaced by the HTTP handlers. Every variant renders as a JSON
/// body carrying a human-readable `message`.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("External service error [{correlation_id}]: {message}: {detail}")]
    ExternalService {
        message: String,
        detail: String,
        correlation_id: Uuid,
        expose_detail: bool,
    },
}

impl AppError {
    /// Wraps a downstream failure. The raw `detail` is always logged with the
    /// correlation id; it only reaches the client when `expose_detail` is set.
    pub fn external(message: impl Into<String>, detail: impl ToString, expose_detail: bool) -> Self {
        AppError::ExternalService {
            message: message.into(),
            detail: detail.to_string(),
            correlation_id: Uuid::new_v4(),
            expose_detail,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ExternalService { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> Value {
        match self {
            AppError::Validation(msg)
            | AppError::Configuration(msg)
            | AppError::NotFound(msg) => json!({ "message": msg }),
            AppError::ExternalService {
                message,
                detail,
                correlation_id,
                expose_detail,
            } => {
                let mut body = json!({
                    "message": message,
                    "correlation_id": correlation_id.to_string(),
                });
                if *expose_detail {
                    body["error"] = json!(detail);
                }
                body
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            AppError::ExternalService { message, detail, correlation_id, .. } => {
                tracing::error!(%correlation_id, "Error: {}: {}: {}", status, message, detail);
            }
            AppError::Configuration(msg) => tracing::error!("Error: {}: {}", status, msg),
            AppError::Validation(msg) | AppError::NotFound(msg) => {
                tracing::warn!("Error: {}: {}", status, msg)
            }
        }

        (status, Json(self.body())).into_response()
    }
}
