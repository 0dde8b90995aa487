// Runs the availability queries against a real Postgres.
//
// Skipped unless LIVE_INTEGRATION_TESTS=true and DATABASE_URL points at a
// database the test may write to. Seeded rows live in 2098/2099 and are
// removed before each run.

use chrono::{NaiveDate, NaiveTime};
use sqlx::PgConnection;

use schedule_cell::{PostgresScheduleStore, ScheduleStore, CANCELLED_STATUS};
use shared_config::AppConfig;
use shared_database::{PostgresClient, SCHEMA_SQL};

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

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2099, 1, d).unwrap()
}

fn at(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

async fn reset(conn: &mut PgConnection) {
    sqlx::raw_sql(SCHEMA_SQL).execute(&mut *conn).await.unwrap();

    sqlx::query(
        "DELETE FROM consultations WHERE slot_id IN \
         (SELECT id FROM schedule_slots WHERE slot_date >= '2098-01-01')",
    )
    .execute(&mut *conn)
    .await
    .unwrap();

    sqlx::query("DELETE FROM schedule_slots WHERE slot_date >= '2098-01-01'")
        .execute(&mut *conn)
        .await
        .unwrap();
}

async fn slot(conn: &mut PgConnection, date: NaiveDate, time: NaiveTime) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO schedule_slots (slot_date, slot_time) VALUES ($1, $2) RETURNING id",
    )
    .bind(date)
    .bind(time)
    .fetch_one(&mut *conn)
    .await
    .unwrap()
}

async fn consultation(conn: &mut PgConnection, slot_id: i64, status: &str) {
    sqlx::query("INSERT INTO consultations (slot_id, status) VALUES ($1, $2)")
        .bind(slot_id)
        .bind(status)
        .execute(&mut *conn)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_live_only_free_or_cancelled_slots_are_available() {
    let Some(config) = live_config() else {
        return;
    };

    let db = PostgresClient::new(&config);
    let mut conn = db.connect().await.unwrap();
    reset(&mut conn).await;

    // Before the query window.
    slot(&mut conn, NaiveDate::from_ymd_opt(2098, 12, 31).unwrap(), at(10, 0)).await;

    // Day 10: free, duplicated free time, cancelled-only and booked slots.
    slot(&mut conn, day(10), at(10, 0)).await;
    slot(&mut conn, day(10), at(10, 0)).await;
    let cancelled = slot(&mut conn, day(10), at(9, 0)).await;
    consultation(&mut conn, cancelled, CANCELLED_STATUS).await;
    let booked = slot(&mut conn, day(10), at(11, 0)).await;
    consultation(&mut conn, booked, "scheduled").await;

    // Day 11: its only slot is booked.
    let booked = slot(&mut conn, day(11), at(10, 0)).await;
    consultation(&mut conn, booked, "scheduled").await;

    // Day 12: cancelled twice, still free.
    let rebooked = slot(&mut conn, day(12), at(14, 30)).await;
    consultation(&mut conn, rebooked, CANCELLED_STATUS).await;
    consultation(&mut conn, rebooked, CANCELLED_STATUS).await;

    // Day 13: cancelled once, then booked again.
    let rebooked = slot(&mut conn, day(13), at(15, 0)).await;
    consultation(&mut conn, rebooked, CANCELLED_STATUS).await;
    consultation(&mut conn, rebooked, "scheduled").await;

    PostgresClient::release(conn).await;

    let store = PostgresScheduleStore::new(&config);

    let dates = store.available_dates(day(1)).await.unwrap();
    assert_eq!(dates, vec![day(10), day(12)]);

    let times = store.available_times(day(10)).await.unwrap();
    assert_eq!(times, vec![at(9, 0), at(10, 0)]);

    assert_eq!(store.available_times(day(11)).await.unwrap(), Vec::<NaiveTime>::new());
    assert_eq!(store.available_times(day(12)).await.unwrap(), vec![at(14, 30)]);
    assert_eq!(store.available_times(day(13)).await.unwrap(), Vec::<NaiveTime>::new());
}
