use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use tracing::debug;

use shared_models::error::AppError;

use crate::models::{AvailableDatesResponse, AvailableTimesQuery, AvailableTimesResponse, ScheduleError};
use crate::state::ScheduleState;

pub const DATE_REQUIRED_MESSAGE: &str = "O parâmetro 'date' é obrigatório.";
pub const INVALID_DATE_MESSAGE: &str = "Data inválida. Use o formato AAAA-MM-DD.";
pub const DATES_FAILED_MESSAGE: &str = "Ocorreu um erro ao buscar as datas disponíveis.";
pub const TIMES_FAILED_MESSAGE: &str = "Ocorreu um erro ao buscar os horários disponíveis.";

fn to_app_error(error: ScheduleError, failed_message: &str, expose: bool) -> AppError {
    match error {
        ScheduleError::MissingDate => AppError::Validation(DATE_REQUIRED_MESSAGE.to_string()),
        ScheduleError::InvalidDate(_) => AppError::Validation(INVALID_DATE_MESSAGE.to_string()),
        ScheduleError::Store(e) => AppError::external(failed_message, e, expose),
    }
}

#[axum::debug_handler]
pub async fn get_available_dates(
    State(state): State<Arc<ScheduleState>>,
) -> Result<Json<AvailableDatesResponse>, AppError> {
    let available_dates = state
        .service()
        .available_dates()
        .await
        .map_err(|e| to_app_error(e, DATES_FAILED_MESSAGE, state.config.expose_error_details))?;

    Ok(Json(AvailableDatesResponse { available_dates }))
}

#[axum::debug_handler]
pub async fn get_available_times(
    State(state): State<Arc<ScheduleState>>,
    query: Result<Query<AvailableTimesQuery>, QueryRejection>,
) -> Result<Json<AvailableTimesResponse>, AppError> {
    let Query(query) = query.map_err(|e| {
        debug!("Rejected query string: {}", e.body_text());
        AppError::Validation(DATE_REQUIRED_MESSAGE.to_string())
    })?;

    let available_times = state
        .service()
        .available_times(query.date)
        .await
        .map_err(|e| to_app_error(e, TIMES_FAILED_MESSAGE, state.config.expose_error_details))?;

    Ok(Json(AvailableTimesResponse { available_times }))
}
