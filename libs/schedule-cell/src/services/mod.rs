pub mod availability;
pub mod store;

pub use availability::AvailabilityService;
pub use store::{PostgresScheduleStore, ScheduleStore};
