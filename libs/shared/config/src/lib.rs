use std::env;
use tracing::warn;

pub const DEFAULT_CALENDAR_API_URL: &str = "https://www.googleapis.com/calendar/v3";
pub const DEFAULT_TIME_ZONE: &str = "America/Sao_Paulo";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub google_credentials_json: String,
    pub google_calendar_id: String,
    pub google_calendar_api_url: String,
    pub calendar_time_zone: String,
    pub database_url: String,
    pub expose_error_details: bool,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            google_credentials_json: env::var("GOOGLE_CREDENTIALS_JSON")
                .unwrap_or_else(|_| {
                    warn!("GOOGLE_CREDENTIALS_JSON not set, using empty value");
                    String::new()
                }),
            google_calendar_id: env::var("GOOGLE_CALENDAR_ID")
                .unwrap_or_else(|_| {
                    warn!("GOOGLE_CALENDAR_ID not set, using empty value");
                    String::new()
                }),
            google_calendar_api_url: env::var("GOOGLE_CALENDAR_API_URL")
                .unwrap_or_else(|_| DEFAULT_CALENDAR_API_URL.to_string()),
            calendar_time_zone: env::var("CALENDAR_TIME_ZONE")
                .unwrap_or_else(|_| {
                    warn!("CALENDAR_TIME_ZONE not set, using {}", DEFAULT_TIME_ZONE);
                    DEFAULT_TIME_ZONE.to_string()
                }),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| {
                    warn!("DATABASE_URL not set, using empty value");
                    String::new()
                }),
            expose_error_details: env::var("EXPOSE_ERROR_DETAILS")
                .map(|value| parse_flag(&value))
                .unwrap_or(false),
            port: env::var("PORT")
                .ok()
                .and_then(|value| match value.parse() {
                    Ok(port) => Some(port),
                    Err(_) => {
                        warn!("PORT value {:?} is not a valid port, using {}", value, DEFAULT_PORT);
                        None
                    }
                })
                .unwrap_or(DEFAULT_PORT),
        };

        if !config.is_calendar_configured() {
            warn!("Google Calendar not configured - event creation will be unavailable");
        }
        if !config.is_database_configured() {
            warn!("Database not configured - patient and schedule endpoints will fail");
        }

        config
    }

    pub fn is_calendar_configured(&self) -> bool {
        !self.google_credentials_json.is_empty() && !self.google_calendar_id.is_empty()
    }

    pub fn is_database_configured(&self) -> bool {
        !self.database_url.is_empty()
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AppConfig {
        AppConfig {
            google_credentials_json: "{}".to_string(),
            google_calendar_id: "primary".to_string(),
            google_calendar_api_url: DEFAULT_CALENDAR_API_URL.to_string(),
            calendar_time_zone: DEFAULT_TIME_ZONE.to_string(),
            database_url: "postgres://localhost/clinic".to_string(),
            expose_error_details: false,
            port: DEFAULT_PORT,
        }
    }

    #[test]
    fn test_calendar_requires_credentials_and_id() {
        let mut config = config();
        assert!(config.is_calendar_configured());

        config.google_calendar_id.clear();
        assert!(!config.is_calendar_configured());
    }

    #[test]
    fn test_database_requires_url() {
        let mut config = config();
        assert!(config.is_database_configured());

        config.database_url.clear();
        assert!(!config.is_database_configured());
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag(" TRUE "));
        assert!(parse_flag("1"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(""));
    }
}
