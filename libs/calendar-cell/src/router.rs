use std::sync::Arc;

use axum::{routing::post, Router};

use crate::handlers::create_event;
use crate::state::CalendarState;

pub fn calendar_routes(state: CalendarState) -> Router {
    Router::new()
        .route("/create-event", post(create_event))
        .with_state(Arc::new(state))
}
