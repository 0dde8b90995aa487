use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use tracing::{debug, warn};

use shared_utils::validation::present;

use crate::models::{ScheduleError, DATE_FORMAT, TIME_FORMAT};
use crate::services::store::ScheduleStore;

/// Resolves the clinic time zone, falling back to UTC for unknown names.
pub fn clinic_time_zone(name: &str) -> Tz {
    name.parse::<Tz>().unwrap_or_else(|_| {
        warn!("Unknown time zone {:?}, computing 'today' in UTC", name);
        Tz::UTC
    })
}

pub fn parse_date(value: &str) -> Result<NaiveDate, ScheduleError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| ScheduleError::InvalidDate(value.to_string()))
}

/// Read-only availability queries. Results are ascending and free of
/// duplicates whatever order the store returns them in.
pub struct AvailabilityService {
    store: Arc<dyn ScheduleStore>,
    time_zone: Tz,
}

impl AvailabilityService {
    pub fn new(store: Arc<dyn ScheduleStore>, time_zone: Tz) -> Self {
        Self { store, time_zone }
    }

    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.time_zone).date_naive()
    }

    pub async fn available_dates(&self) -> Result<Vec<String>, ScheduleError> {
        self.available_dates_from(self.today()).await
    }

    pub async fn available_dates_from(&self, from: NaiveDate) -> Result<Vec<String>, ScheduleError> {
        debug!("Fetching available dates from {}", from);

        let mut dates = self.store.available_dates(from).await?;
        dates.retain(|date| *date >= from);
        dates.sort();
        dates.dedup();

        Ok(dates
            .into_iter()
            .map(|date| date.format(DATE_FORMAT).to_string())
            .collect())
    }

    pub async fn available_times(&self, date: Option<String>) -> Result<Vec<String>, ScheduleError> {
        let raw = present(date).ok_or(ScheduleError::MissingDate)?;
        let date = parse_date(&raw)?;

        debug!("Fetching available times on {}", date);

        let mut times = self.store.available_times(date).await?;
        times.sort();
        times.dedup();

        Ok(times
            .into_iter()
            .map(|time| time.format(TIME_FORMAT).to_string())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::NaiveTime;

    use super::*;
    use crate::services::store::MockScheduleStore;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_clinic_time_zone() {
        assert_eq!(clinic_time_zone("America/Sao_Paulo"), chrono_tz::America::Sao_Paulo);
        assert_eq!(clinic_time_zone("Mars/Olympus_Mons"), Tz::UTC);
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-03-01").unwrap(), date(2024, 3, 1));
        assert_matches!(parse_date("01/03/2024"), Err(ScheduleError::InvalidDate(_)));
        assert_matches!(parse_date("2024-02-30"), Err(ScheduleError::InvalidDate(_)));
    }

    #[tokio::test]
    async fn test_available_dates_are_sorted_and_unique() {
        let mut store = MockScheduleStore::new();
        store
            .expect_available_dates()
            .times(1)
            .returning(|_| Ok(vec![date(2024, 3, 5), date(2024, 3, 2), date(2024, 3, 5)]));

        let service = AvailabilityService::new(Arc::new(store), Tz::UTC);

        let dates = service.available_dates_from(date(2024, 3, 1)).await.unwrap();

        assert_eq!(dates, vec!["2024-03-02", "2024-03-05"]);
    }

    #[tokio::test]
    async fn test_available_dates_never_before_today() {
        let mut store = MockScheduleStore::new();
        store
            .expect_available_dates()
            .withf(|from| *from == date(2024, 3, 10))
            .returning(|_| Ok(vec![date(2024, 3, 9), date(2024, 3, 10), date(2024, 3, 11)]));

        let service = AvailabilityService::new(Arc::new(store), Tz::UTC);

        let dates = service.available_dates_from(date(2024, 3, 10)).await.unwrap();

        assert_eq!(dates, vec!["2024-03-10", "2024-03-11"]);
    }

    #[tokio::test]
    async fn test_available_dates_uses_clinic_today() {
        let service_tz = chrono_tz::America::Sao_Paulo;
        let expected = Utc::now().with_timezone(&service_tz).date_naive();

        let mut store = MockScheduleStore::new();
        store
            .expect_available_dates()
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = AvailabilityService::new(Arc::new(store), service_tz);

        assert!(service.available_dates().await.unwrap().is_empty());
        // Tolerate a midnight rollover between the two reads.
        let today = service.today();
        assert!(today == expected || today == expected.succ_opt().unwrap());
    }

    #[tokio::test]
    async fn test_available_times_formats_hours_and_minutes() {
        let mut store = MockScheduleStore::new();
        store
            .expect_available_times()
            .times(1)
            .withf(|day| *day == date(2024, 3, 1))
            .returning(|_| Ok(vec![time(14, 30), time(9, 0), time(10, 0)]));

        let service = AvailabilityService::new(Arc::new(store), Tz::UTC);

        let times = service
            .available_times(Some("2024-03-01".to_string()))
            .await
            .unwrap();

        assert_eq!(times, vec!["09:00", "10:00", "14:30"]);
    }

    #[tokio::test]
    async fn test_available_times_requires_date() {
        let mut store = MockScheduleStore::new();
        store.expect_available_times().times(0);

        let service = AvailabilityService::new(Arc::new(store), Tz::UTC);

        assert_matches!(service.available_times(None).await, Err(ScheduleError::MissingDate));
        assert_matches!(
            service.available_times(Some(String::new())).await,
            Err(ScheduleError::MissingDate)
        );
        assert_matches!(
            service.available_times(Some(" ".to_string())).await,
            Err(ScheduleError::InvalidDate(_))
        );
    }
}
