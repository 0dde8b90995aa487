use async_trait::async_trait;
use tracing::debug;

use shared_config::AppConfig;
use shared_database::{PostgresClient, StoreError};

use crate::models::{NewPatient, PatientContact, PatientId};

const FIND_BY_PHONE_SQL: &str =
    "SELECT preferred_name, email FROM patients WHERE phone = $1 ORDER BY id LIMIT 1";

const INSERT_PATIENT_SQL: &str = "INSERT INTO patients (full_name, phone, email, preferred_name) \
     VALUES ($1, $2, $3, $4) RETURNING id";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PatientStore: Send + Sync {
    /// First row matching `phone`, if any. Duplicates are not an error.
    async fn find_by_phone(&self, phone: &str) -> Result<Option<PatientContact>, StoreError>;

    async fn insert(&self, patient: &NewPatient) -> Result<PatientId, StoreError>;
}

pub struct PostgresPatientStore {
    db: PostgresClient,
}

impl PostgresPatientStore {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            db: PostgresClient::new(config),
        }
    }
}

#[async_trait]
impl PatientStore for PostgresPatientStore {
    async fn find_by_phone(&self, phone: &str) -> Result<Option<PatientContact>, StoreError> {
        debug!("Looking up patient by phone");

        let mut conn = self.db.connect().await?;
        let result = sqlx::query_as::<_, PatientContact>(FIND_BY_PHONE_SQL)
            .bind(phone)
            .fetch_optional(&mut conn)
            .await;
        PostgresClient::release(conn).await;

        Ok(result?)
    }

    async fn insert(&self, patient: &NewPatient) -> Result<PatientId, StoreError> {
        debug!("Inserting patient record");

        let mut conn = self.db.connect().await?;
        let result = sqlx::query_scalar::<_, PatientId>(INSERT_PATIENT_SQL)
            .bind(&patient.full_name)
            .bind(&patient.phone)
            .bind(&patient.email)
            .bind(&patient.preferred_name)
            .fetch_one(&mut conn)
            .await;
        PostgresClient::release(conn).await;

        Ok(result?)
    }
}
