pub mod handlers;
pub mod models;
pub mod router;
pub mod services;
pub mod state;

pub use models::*;
pub use router::schedule_routes;
pub use services::{AvailabilityService, PostgresScheduleStore, ScheduleStore};
pub use state::ScheduleState;
