use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use reqwest::Client;
use tokio::sync::RwLock;
use tracing::{debug, error, info};

use shared_config::AppConfig;

use crate::models::{
    AssertionClaims, CalendarError, CalendarEvent, CreatedEvent, ServiceAccountKey, TokenResponse,
};
use crate::services::calendar::CalendarService;

pub const CALENDAR_SCOPE: &str = "https://www.googleapis.com/auth/calendar";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECS: i64 = 3600;
const TOKEN_REFRESH_MARGIN_SECS: i64 = 60;

#[derive(Debug, Clone)]
struct AccessToken {
    value: String,
    expires_at: DateTime<Utc>,
}

impl AccessToken {
    fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now + Duration::seconds(TOKEN_REFRESH_MARGIN_SECS) < self.expires_at
    }
}

/// Google Calendar v3 client authenticated as a service account.
/// Based on: https://developers.google.com/identity/protocols/oauth2/service-account
pub struct GoogleCalendarClient {
    client: Client,
    api_base_url: String,
    service_account: ServiceAccountKey,
    encoding_key: EncodingKey,
    token: RwLock<Option<AccessToken>>,
}

impl std::fmt::Debug for GoogleCalendarClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleCalendarClient")
            .field("api_base_url", &self.api_base_url)
            .field("client_email", &self.service_account.client_email)
            .finish_non_exhaustive()
    }
}

impl GoogleCalendarClient {
    pub fn new(config: &AppConfig) -> Result<Self, CalendarError> {
        if !config.is_calendar_configured() {
            return Err(CalendarError::NotConfigured);
        }

        let service_account: ServiceAccountKey =
            serde_json::from_str(&config.google_credentials_json).map_err(|e| {
                CalendarError::InvalidCredentials(format!("Failed to parse service account JSON: {}", e))
            })?;

        Self::from_service_account(service_account, &config.google_calendar_api_url)
    }

    pub fn from_service_account(
        service_account: ServiceAccountKey,
        api_base_url: &str,
    ) -> Result<Self, CalendarError> {
        let encoding_key = EncodingKey::from_rsa_pem(service_account.private_key.as_bytes())
            .map_err(|e| CalendarError::InvalidCredentials(format!("Failed to load private key: {}", e)))?;

        Ok(Self {
            client: Client::new(),
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            service_account,
            encoding_key,
            token: RwLock::new(None),
        })
    }

    async fn access_token(&self) -> Result<String, CalendarError> {
        if let Some(token) = self.token.read().await.as_ref() {
            if token.is_fresh(Utc::now()) {
                return Ok(token.value.clone());
            }
        }

        let token = self.fetch_access_token().await?;
        let value = token.value.clone();
        *self.token.write().await = Some(token);

        Ok(value)
    }

    /// Exchanges a signed JWT assertion for a bearer token.
    /// POST {token_uri}
    async fn fetch_access_token(&self) -> Result<AccessToken, CalendarError> {
        let now = Utc::now();
        let claims = AssertionClaims {
            iss: &self.service_account.client_email,
            scope: CALENDAR_SCOPE,
            aud: &self.service_account.token_uri,
            iat: now.timestamp(),
            exp: now.timestamp() + ASSERTION_LIFETIME_SECS,
        };

        let mut header = Header::new(Algorithm::RS256);
        header.kid = self.service_account.private_key_id.clone();

        let assertion = encode(&header, &claims, &self.encoding_key).map_err(|e| CalendarError::Auth {
            message: format!("Failed to sign assertion: {}", e),
        })?;

        debug!("Requesting access token from: {}", self.service_account.token_uri);

        let response = self
            .client
            .post(&self.service_account.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;

        if !status.is_success() {
            error!("Google token exchange failed: {} - {}", status, response_text);
            return Err(CalendarError::Auth {
                message: format!("HTTP {}: {}", status, response_text),
            });
        }

        let token: TokenResponse = serde_json::from_str(&response_text).map_err(|e| CalendarError::Auth {
            message: format!("Failed to parse token response: {}", e),
        })?;

        Ok(AccessToken {
            value: token.access_token,
            expires_at: now + Duration::seconds(token.expires_in.unwrap_or(ASSERTION_LIFETIME_SECS)),
        })
    }
}

#[async_trait]
impl CalendarService for GoogleCalendarClient {
    /// POST /calendars/{calendarId}/events
    async fn insert_event(
        &self,
        calendar_id: &str,
        event: &CalendarEvent,
    ) -> Result<CreatedEvent, CalendarError> {
        let url = format!(
            "{}/calendars/{}/events",
            self.api_base_url,
            urlencoding::encode(calendar_id)
        );
        let token = self.access_token().await?;

        debug!("Inserting calendar event at: {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(event)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;

        debug!("Google Calendar insert response: {} - {}", status, response_text);

        if !status.is_success() {
            error!("Google Calendar insert failed: {} - {}", status, response_text);
            return Err(CalendarError::Api {
                message: format!("HTTP {}: {}", status, response_text),
            });
        }

        let created: CreatedEvent = serde_json::from_str(&response_text).map_err(|e| CalendarError::Api {
            message: format!("Failed to parse event response: {}", e),
        })?;

        info!("Created calendar event: {}", created.id);
        Ok(created)
    }
}
