use std::sync::Arc;

use axum::{routing::post, Router};

use crate::handlers::*;
use crate::state::PatientState;

pub fn patient_routes(state: PatientState) -> Router {
    Router::new()
        .route("/patient", post(lookup_patient))
        .route("/create-patient", post(create_patient))
        .with_state(Arc::new(state))
}
