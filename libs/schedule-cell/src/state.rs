use std::sync::Arc;

use chrono_tz::Tz;

use shared_config::AppConfig;

use crate::services::availability::clinic_time_zone;
use crate::services::{AvailabilityService, PostgresScheduleStore, ScheduleStore};

#[derive(Clone)]
pub struct ScheduleState {
    pub config: Arc<AppConfig>,
    pub store: Arc<dyn ScheduleStore>,
    pub time_zone: Tz,
}

impl ScheduleState {
    pub fn new(config: Arc<AppConfig>, store: Arc<dyn ScheduleStore>) -> Self {
        let time_zone = clinic_time_zone(&config.calendar_time_zone);
        Self {
            config,
            store,
            time_zone,
        }
    }

    pub fn from_config(config: Arc<AppConfig>) -> Self {
        let store = Arc::new(PostgresScheduleStore::new(&config));
        Self::new(config, store)
    }

    pub fn service(&self) -> AvailabilityService {
        AvailabilityService::new(self.store.clone(), self.time_zone)
    }
}
