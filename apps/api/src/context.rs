use std::sync::Arc;

use calendar_cell::CalendarState;
use patient_cell::PatientState;
use schedule_cell::ScheduleState;
use shared_config::AppConfig;

/// Every external-service handle the handlers need, built once at startup
/// and handed to the cell routers. Nothing in here is mutated afterwards.
#[derive(Clone)]
pub struct AppContext {
    pub calendar: CalendarState,
    pub patients: PatientState,
    pub schedule: ScheduleState,
}

impl AppContext {
    pub fn from_config(config: Arc<AppConfig>) -> Self {
        Self {
            calendar: CalendarState::from_config(config.clone()),
            patients: PatientState::from_config(config.clone()),
            schedule: ScheduleState::from_config(config),
        }
    }
}
