//! Reservation reminder orchestration: validate, look up, select, format, push.

use chrono_tz::Tz;
use std::time::Duration;
use tracing::{error, info, warn};

use crate::airtable::AirtableClient;
use crate::credentials::CredentialRegistry;
use crate::line::LineClient;
use crate::message;
use crate::{Config, Error, Result};

/// Client-wide timeout; the reservation lookup overrides it per request.
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Sends one reminder per call. Holds only read-only state.
#[derive(Debug)]
pub struct ReminderService {
    store: AirtableClient,
    line: LineClient,
    credentials: CredentialRegistry,
    timezone: Tz,
}

impl ReminderService {
    /// Build the service and its shared HTTP client from startup configuration.
    pub fn new(config: Config) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        let store = AirtableClient::new(http_client.clone(), &config);
        let line = LineClient::new(http_client, &config.line_api_url);

        Ok(Self {
            store,
            line,
            credentials: config.credentials,
            timezone: config.timezone,
        })
    }

    pub fn credentials(&self) -> &CredentialRegistry {
        &self.credentials
    }

    /// Send the reminder for `user_id`'s appointment at `date`.
    ///
    /// Not idempotent: each successful call delivers one more message.
    pub async fn send_reminder(&self, user_id: &str, date: &str) -> Result<()> {
        if user_id.is_empty() || date.is_empty() {
            warn!(
                has_user_id = !user_id.is_empty(),
                has_date = !date.is_empty(),
                "Missing reminder parameters"
            );
            return Err(Error::Validation("userId and date are required".to_string()));
        }

        let reservation = match self.store.find_reservation(user_id).await {
            Ok(Some(r)) => r,
            Ok(None) => {
                warn!(user_id = %user_id, "No reservation found");
                return Err(Error::NotFound(format!("no reservation for {}", user_id)));
            }
            Err(e) => {
                error!(user_id = %user_id, error = %e, "Reservation lookup failed");
                return Err(e);
            }
        };
        info!(user_id = %user_id, reservation_id = %reservation.id, "Reservation found");

        let credential = self.credentials.select(&reservation);
        info!(user_id = %user_id, account = %credential.label, "Selected LINE account");

        let time = message::format_time(date, self.timezone);
        if time.is_empty() {
            warn!(date = %date, "Unparsable appointment date, sending without time");
        }
        let text = message::reminder_text(&time);

        let response = self.line.push_text(credential.token, user_id, &text).await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|e| {
                warn!(error = %e, "Failed to read LINE error body");
                String::new()
            });
            error!(
                user_id = %user_id,
                account = %credential.label,
                status = status.as_u16(),
                "LINE push rejected"
            );
            return Err(Error::Dispatch {
                status: status.as_u16(),
                body,
            });
        }

        info!(user_id = %user_id, account = %credential.label, "Reminder sent");
        Ok(())
    }
}
