use std::sync::Arc;

use axum::{routing::get, Router};

use crate::handlers::*;
use crate::state::ScheduleState;

pub fn schedule_routes(state: ScheduleState) -> Router {
    Router::new()
        .route("/available-dates", get(get_available_dates))
        .route("/available-times", get(get_available_times))
        .with_state(Arc::new(state))
}
