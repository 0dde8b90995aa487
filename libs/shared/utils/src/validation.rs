use axum::extract::rejection::JsonRejection;
use tracing::debug;

use shared_models::error::AppError;

/// Returns the value unless it is empty. Chatbot front-ends send `""` for
/// unanswered prompts, which counts as absent. Whitespace is kept as sent.
pub fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Collects the names of required fields that are absent.
pub fn missing_fields<'a>(fields: &[(&'a str, &Option<String>)]) -> Vec<&'a str> {
    fields
        .iter()
        .filter(|(_, value)| value.as_deref().map_or(true, str::is_empty))
        .map(|(name, _)| *name)
        .collect()
}

/// Maps an unreadable JSON body to a validation error so clients still get a
/// JSON `message` instead of axum's plain-text rejection.
pub fn body_rejection(rejection: JsonRejection, message: &str) -> AppError {
    debug!("Rejected request body: {}", rejection.body_text());
    AppError::Validation(message.to_string())
}
