// Runs the patient queries against a real Postgres.
//
// Skipped unless LIVE_INTEGRATION_TESTS=true and DATABASE_URL points at a
// database the test may write to. Rows use a reserved phone number and are
// removed before each run.

use patient_cell::{NewPatient, PatientContact, PatientStore, PostgresPatientStore};
use shared_config::AppConfig;
use shared_database::{PostgresClient, SCHEMA_SQL};

const TEST_PHONE: &str = "+550000000000";

fn live_config() -> Option<AppConfig> {
    if std::env::var("LIVE_INTEGRATION_TESTS").unwrap_or_default() != "true" {
        println!("Skipping live integration tests (set LIVE_INTEGRATION_TESTS=true to enable)");
        return None;
    }

    let config = AppConfig::from_env();
    if !config.is_database_configured() {
        println!("Skipping live integration tests (DATABASE_URL is not set)");
        return None;
    }

    Some(config)
}

fn patient(full_name: &str, preferred_name: &str, email: &str) -> NewPatient {
    NewPatient {
        full_name: full_name.to_string(),
        phone: TEST_PHONE.to_string(),
        email: email.to_string(),
        preferred_name: preferred_name.to_string(),
    }
}

#[tokio::test]
async fn test_live_insert_then_lookup_returns_first_match() {
    let Some(config) = live_config() else {
        return;
    };

    let db = PostgresClient::new(&config);
    let mut conn = db.connect().await.unwrap();
    sqlx::raw_sql(SCHEMA_SQL).execute(&mut conn).await.unwrap();
    sqlx::query("DELETE FROM patients WHERE phone = $1")
        .bind(TEST_PHONE)
        .execute(&mut conn)
        .await
        .unwrap();
    PostgresClient::release(conn).await;

    let store = PostgresPatientStore::new(&config);

    assert_eq!(store.find_by_phone(TEST_PHONE).await.unwrap(), None);

    let first_id = store
        .insert(&patient("Ana Paula Souza", "Ana", "ana@example.com"))
        .await
        .unwrap();
    let second_id = store
        .insert(&patient("Ana Maria Lima", "Aninha", "aninha@example.com"))
        .await
        .unwrap();

    assert!(first_id > 0);
    assert!(second_id > first_id);

    let contact = store.find_by_phone(TEST_PHONE).await.unwrap();
    assert_eq!(
        contact,
        Some(PatientContact {
            preferred_name: Some("Ana".to_string()),
            email: Some("ana@example.com".to_string()),
        })
    );

    assert_eq!(store.find_by_phone("+550000000001").await.unwrap(), None);
}
