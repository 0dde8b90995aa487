pub mod handlers;
pub mod models;
pub mod router;
pub mod services;
pub mod state;

pub use models::*;
pub use router::patient_routes;
pub use services::{PatientService, PatientStore, PostgresPatientStore};
pub use state::PatientState;
