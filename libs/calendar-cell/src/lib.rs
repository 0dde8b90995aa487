//! # Calendar Cell
//!
//! Books chatbot appointments as Google Calendar events.
//!
//! ```text
//! +-----------------------------------------------------+
//! |                  Calendar Cell                      |
//! +-----------------------------------------------------+
//! |  handlers.rs    |  POST /create-event               |
//! |  router.rs      |  Route definitions                |
//! |  state.rs       |  Calendar handle + configuration  |
//! |  models.rs      |  Request/response DTOs            |
//! |  services/      |                                   |
//! |    calendar.rs  |  CalendarService trait            |
//! |    event.rs     |  Appointment window + event body  |
//! |    google.rs    |  Google Calendar v3 client        |
//! +-----------------------------------------------------+
//! ```
//!
//! ## Configuration
//!
//! - `GOOGLE_CREDENTIALS_JSON` - service account key (JSON)
//! - `GOOGLE_CALENDAR_ID` - calendar receiving the events
//! - `CALENDAR_TIME_ZONE` - timezone label attached to every event (optional)
//!
//! When the client cannot be built at startup the cell still mounts its
//! route and answers with a configuration error.

pub mod handlers;
pub mod models;
pub mod router;
pub mod services;
pub mod state;

pub use models::{
    CalendarError, CalendarEvent, CreateEventRequest, CreateEventResponse, CreatedEvent,
    EventDateTime,
};
pub use router::calendar_routes;
pub use services::{CalendarService, GoogleCalendarClient};
pub use state::CalendarState;
