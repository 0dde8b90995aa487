pub mod calendar;
pub mod event;
pub mod google;

pub use calendar::CalendarService;
pub use event::{build_event, parse_appointment_date, AppointmentStart, APPOINTMENT_DURATION};
pub use google::GoogleCalendarClient;
