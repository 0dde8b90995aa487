use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, SecondsFormat, TimeDelta};

use crate::models::{CalendarError, CalendarEvent, EventDateTime};

/// Every consultation books a one hour window.
pub const APPOINTMENT_DURATION: TimeDelta = TimeDelta::hours(1);

pub const NOT_INFORMED: &str = "Não informado";

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M%:z",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Start of an appointment as sent by the chatbot. Timestamps without an
/// offset are interpreted by the calendar through the event's time zone label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentStart {
    Zoned(DateTime<FixedOffset>),
    Local(NaiveDateTime),
}

impl AppointmentStart {
    pub fn end(&self) -> AppointmentStart {
        match self {
            AppointmentStart::Zoned(start) => AppointmentStart::Zoned(*start + APPOINTMENT_DURATION),
            AppointmentStart::Local(start) => AppointmentStart::Local(*start + APPOINTMENT_DURATION),
        }
    }

    pub fn to_iso8601(&self) -> String {
        match self {
            AppointmentStart::Zoned(dt) => dt.to_rfc3339_opts(SecondsFormat::AutoSi, false),
            AppointmentStart::Local(dt) => dt.format("%Y-%m-%dT%H:%M:%S%.f").to_string(),
        }
    }
}

/// Parses an ISO-8601 timestamp. A trailing `Z` is read as `+00:00`, a bare
/// date books midnight and an hour without minutes books on the hour.
pub fn parse_appointment_date(value: &str) -> Result<AppointmentStart, CalendarError> {
    let trimmed = value.trim();
    let normalized = match trimmed.strip_suffix('Z') {
        Some(rest) => format!("{}+00:00", rest),
        None => trimmed.to_string(),
    };
    let normalized = with_minutes(&normalized).unwrap_or(normalized);

    parse_zoned(&normalized)
        .map(AppointmentStart::Zoned)
        .or_else(|| parse_local(&normalized).map(AppointmentStart::Local))
        .ok_or_else(|| CalendarError::InvalidAppointmentDate {
            value: trimmed.to_string(),
            reason: "expected an ISO-8601 date or date and time".to_string(),
        })
}

fn parse_zoned(value: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(value).ok().or_else(|| {
        OFFSET_FORMATS
            .iter()
            .find_map(|fmt| DateTime::parse_from_str(value, fmt).ok())
    })
}

fn parse_local(value: &str) -> Option<NaiveDateTime> {
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, DATE_FORMAT)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// `2024-03-01T10` and `2024-03-01T10-03:00` stop at the hour. chrono needs
/// minutes, so `:00` is spliced in after the hour.
fn with_minutes(value: &str) -> Option<String> {
    let head = value.get(..13)?;
    let tail = value.get(13..)?;

    let hour_only = matches!(head.as_bytes()[10], b'T' | b' ')
        && head[11..].bytes().all(|b| b.is_ascii_digit())
        && (tail.is_empty() || tail.starts_with(|c| c == '+' || c == '-'));

    hour_only.then(|| format!("{}:00{}", head, tail))
}

pub fn build_event(
    client_name: &str,
    client_phone: Option<&str>,
    start: AppointmentStart,
    time_zone: &str,
) -> CalendarEvent {
    let end = start.end();

    CalendarEvent {
        summary: format!("Consulta: {}", client_name),
        description: format!(
            "Agendado via Chatbot. Contato: {}",
            client_phone.unwrap_or(NOT_INFORMED)
        ),
        start: EventDateTime {
            date_time: start.to_iso8601(),
            time_zone: time_zone.to_string(),
        },
        end: EventDateTime {
            date_time: end.to_iso8601(),
            time_zone: time_zone.to_string(),
        },
    }
}
