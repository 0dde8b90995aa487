use std::sync::Arc;

use tracing::{debug, info};

use shared_utils::validation::{missing_fields, present};

use crate::models::{
    CreatePatientRequest, LookupPatientRequest, NewPatient, PatientContact, PatientError, PatientId,
};
use crate::services::store::PatientStore;

/// Validates patient requests and issues exactly one store call per operation.
/// Validation failures never reach the store.
pub struct PatientService {
    store: Arc<dyn PatientStore>,
}

impl PatientService {
    pub fn new(store: Arc<dyn PatientStore>) -> Self {
        Self { store }
    }

    pub async fn lookup_patient(
        &self,
        request: LookupPatientRequest,
    ) -> Result<PatientContact, PatientError> {
        let phone = present(request.phone).ok_or(PatientError::MissingFields(vec!["phone"]))?;

        debug!("Fetching patient by phone");

        self.store
            .find_by_phone(&phone)
            .await?
            .ok_or(PatientError::NotFound)
    }

    pub async fn create_patient(
        &self,
        request: CreatePatientRequest,
    ) -> Result<PatientId, PatientError> {
        let patient = validate_new_patient(request)?;

        debug!("Creating patient record for: {}", patient.full_name);

        let patient_id = self.store.insert(&patient).await?;
        info!("Patient created with ID: {}", patient_id);

        Ok(patient_id)
    }
}

fn validate_new_patient(request: CreatePatientRequest) -> Result<NewPatient, PatientError> {
    match (
        present(request.full_name),
        present(request.phone),
        present(request.email),
    ) {
        (Some(full_name), Some(phone), Some(email)) => {
            let preferred_name =
                present(request.preferred_name).unwrap_or_else(|| full_name.clone());

            Ok(NewPatient {
                full_name,
                phone,
                email,
                preferred_name,
            })
        }
        (full_name, phone, email) => Err(PatientError::MissingFields(missing_fields(&[
            ("fullName", &full_name),
            ("phone", &phone),
            ("email", &email),
        ]))),
    }
}
