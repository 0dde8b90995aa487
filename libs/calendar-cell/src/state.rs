use std::sync::Arc;

use tracing::{error, info};

use shared_config::AppConfig;

use crate::services::{CalendarService, GoogleCalendarClient};

/// Handles shared by the calendar handlers. Built once at startup and never
/// mutated afterwards.
#[derive(Clone)]
pub struct CalendarState {
    pub config: Arc<AppConfig>,
    pub calendar: Option<Arc<dyn CalendarService>>,
}

impl CalendarState {
    pub fn new(config: Arc<AppConfig>, calendar: Option<Arc<dyn CalendarService>>) -> Self {
        Self { config, calendar }
    }

    /// Builds the Google client from configuration. A failure is logged and
    /// leaves the handle empty so requests fail with a configuration error.
    pub fn from_config(config: Arc<AppConfig>) -> Self {
        let calendar: Option<Arc<dyn CalendarService>> = match GoogleCalendarClient::new(&config) {
            Ok(client) => {
                info!("Google Calendar client initialized");
                Some(Arc::new(client))
            }
            Err(e) => {
                error!("CRITICAL: failed to load calendar credentials or configuration: {}", e);
                None
            }
        };

        Self::new(config, calendar)
    }

    pub fn calendar_id(&self) -> &str {
        &self.config.google_calendar_id
    }

    pub fn time_zone(&self) -> &str {
        &self.config.calendar_time_zone
    }
}
