use axum::{routing::get, Router};

use calendar_cell::calendar_routes;
use patient_cell::patient_routes;
use schedule_cell::schedule_routes;

use crate::context::AppContext;

pub const LIVENESS_MESSAGE: &str = "API do Chatbot no ar!";

pub fn create_router(context: AppContext) -> Router {
    let api = Router::new()
        .merge(calendar_routes(context.calendar))
        .merge(patient_routes(context.patients))
        .merge(schedule_routes(context.schedule));

    Router::new()
        .route("/", get(|| async { LIVENESS_MESSAGE }))
        .nest("/api", api)
}
