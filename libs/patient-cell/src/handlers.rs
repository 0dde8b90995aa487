use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

use shared_models::error::AppError;
use shared_utils::validation::body_rejection;

use crate::models::{
    CreatePatientRequest, CreatePatientResponse, LookupPatientRequest, LookupPatientResponse,
    PatientError,
};
use crate::state::PatientState;

pub const PATIENT_FOUND_MESSAGE: &str = "Paciente encontrado.";
pub const PATIENT_NOT_FOUND_MESSAGE: &str = "Paciente não encontrado.";
pub const LOOKUP_FAILED_MESSAGE: &str = "Ocorreu um erro ao buscar o paciente.";
pub const PATIENT_CREATED_MESSAGE: &str = "Paciente cadastrado com sucesso!";
pub const CREATE_FAILED_MESSAGE: &str = "Ocorreu um erro ao cadastrar o paciente.";
pub const INVALID_BODY_MESSAGE: &str = "Corpo da requisição inválido. Envie um JSON.";

pub fn missing_fields_message(fields: &[&str]) -> String {
    format!("Dados incompletos. Campos obrigatórios ausentes: {}.", fields.join(", "))
}

fn to_app_error(error: PatientError, failed_message: &str, expose: bool) -> AppError {
    match error {
        PatientError::MissingFields(fields) => AppError::Validation(missing_fields_message(&fields)),
        PatientError::NotFound => AppError::NotFound(PATIENT_NOT_FOUND_MESSAGE.to_string()),
        PatientError::Store(e) => AppError::external(failed_message, e, expose),
    }
}

/// Looks a patient up by phone. Canonical contract is POST with a JSON body.
#[axum::debug_handler]
pub async fn lookup_patient(
    State(state): State<Arc<PatientState>>,
    payload: Result<Json<LookupPatientRequest>, JsonRejection>,
) -> Result<Json<LookupPatientResponse>, AppError> {
    let Json(request) = payload.map_err(|e| body_rejection(e, INVALID_BODY_MESSAGE))?;

    let contact = state
        .service()
        .lookup_patient(request)
        .await
        .map_err(|e| to_app_error(e, LOOKUP_FAILED_MESSAGE, state.config.expose_error_details))?;

    Ok(Json(LookupPatientResponse {
        message: PATIENT_FOUND_MESSAGE.to_string(),
        data: contact,
    }))
}

#[axum::debug_handler]
pub async fn create_patient(
    State(state): State<Arc<PatientState>>,
    payload: Result<Json<CreatePatientRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatePatientResponse>), AppError> {
    let Json(request) = payload.map_err(|e| body_rejection(e, INVALID_BODY_MESSAGE))?;

    let patient_id = state
        .service()
        .create_patient(request)
        .await
        .map_err(|e| to_app_error(e, CREATE_FAILED_MESSAGE, state.config.expose_error_details))?;

    Ok((
        StatusCode::CREATED,
        Json(CreatePatientResponse {
            message: PATIENT_CREATED_MESSAGE.to_string(),
            patient_id,
        }),
    ))
}
