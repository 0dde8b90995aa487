use std::sync::Arc;

use shared_config::AppConfig;

use crate::services::{PatientService, PatientStore, PostgresPatientStore};

#[derive(Clone)]
pub struct PatientState {
    pub config: Arc<AppConfig>,
    pub store: Arc<dyn PatientStore>,
}

impl PatientState {
    pub fn new(config: Arc<AppConfig>, store: Arc<dyn PatientStore>) -> Self {
        Self { config, store }
    }

    pub fn from_config(config: Arc<AppConfig>) -> Self {
        let store = Arc::new(PostgresPatientStore::new(&config));
        Self::new(config, store)
    }

    pub fn service(&self) -> PatientService {
        PatientService::new(self.store.clone())
    }
}
