use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::info;

use shared_models::error::AppError;
use shared_utils::validation::{body_rejection, present};

use crate::models::{CreateEventRequest, CreateEventResponse};
use crate::services::{build_event, parse_appointment_date};
use crate::state::CalendarState;

pub const EVENT_CREATED_MESSAGE: &str = "Agendamento criado com sucesso!";
pub const INCOMPLETE_DATA_MESSAGE: &str =
    "Dados incompletos. 'appointmentDate' e 'clientName' são obrigatórios.";
pub const CONFIGURATION_ERROR_MESSAGE: &str = "Erro de configuração no servidor.";
pub const EVENT_FAILED_MESSAGE: &str = "Ocorreu um erro ao criar o agendamento.";

#[axum::debug_handler]
pub async fn create_event(
    State(state): State<Arc<CalendarState>>,
    payload: Result<Json<CreateEventRequest>, JsonRejection>,
) -> Result<Json<CreateEventResponse>, AppError> {
    let calendar = state
        .calendar
        .as_ref()
        .ok_or_else(|| AppError::Configuration(CONFIGURATION_ERROR_MESSAGE.to_string()))?;

    let Json(request) = payload.map_err(|e| body_rejection(e, INCOMPLETE_DATA_MESSAGE))?;

    let (Some(appointment_date), Some(client_name)) =
        (present(request.appointment_date), present(request.client_name))
    else {
        return Err(AppError::Validation(INCOMPLETE_DATA_MESSAGE.to_string()));
    };
    let client_phone = present(request.client_phone);

    let expose = state.config.expose_error_details;

    let start = parse_appointment_date(&appointment_date)
        .map_err(|e| AppError::external(EVENT_FAILED_MESSAGE, e, expose))?;

    let event = build_event(&client_name, client_phone.as_deref(), start, state.time_zone());

    let created = calendar
        .insert_event(state.calendar_id(), &event)
        .await
        .map_err(|e| AppError::external(EVENT_FAILED_MESSAGE, e, expose))?;

    info!("Appointment booked for {} as event {}", client_name, created.id);

    Ok(Json(CreateEventResponse {
        message: EVENT_CREATED_MESSAGE.to_string(),
        event_id: created.id,
        event_link: created.html_link,
    }))
}
