//! Airtable reservation lookup.

use secrecy::{ExposeSecret, Secret};
use std::time::Duration;
use tracing::{debug, error, warn};

use crate::models::{RecordList, Reservation};
use crate::{Config, Error, Result};

/// Read-only client for the reservations table.
#[derive(Debug)]
pub struct AirtableClient {
    http_client: reqwest::Client,
    api_url: String,
    base_id: String,
    table_id: String,
    user_field: String,
    api_key: Secret<String>,
    timeout: Duration,
}

impl AirtableClient {
    pub fn new(http_client: reqwest::Client, config: &Config) -> Self {
        Self {
            http_client,
            api_url: config.airtable_api_url.trim_end_matches('/').to_string(),
            base_id: config.airtable_base_id.clone(),
            table_id: config.airtable_table_id.clone(),
            user_field: config.airtable_user_field.clone(),
            api_key: Secret::new(config.airtable_api_key.expose_secret().clone()),
            timeout: config.lookup_timeout,
        }
    }

    /// Fetch the first reservation whose user field equals `user_id`.
    pub async fn find_reservation(&self, user_id: &str) -> Result<Option<Reservation>> {
        let url = format!(
            "{}/{}/{}?filterByFormula={}&maxRecords=1",
            self.api_url,
            urlencoding::encode(&self.base_id),
            urlencoding::encode(&self.table_id),
            urlencoding::encode(&filter_formula(&self.user_field, user_id)),
        );
        debug!(url = %url, "Querying Airtable");

        let response = self
            .http_client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.api_key.expose_secret()))
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::Upstream(format!(
                        "request timed out after {}ms",
                        self.timeout.as_millis()
                    ))
                } else {
                    Error::Upstream(format!("request failed: {}", e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                warn!(error = %e, "Failed to read Airtable error body");
                String::new()
            });
            error!(status = status.as_u16(), "Airtable returned an error status");
            return Err(Error::Upstream(format!("{} {}", status.as_u16(), error_text)));
        }

        let list: RecordList = response
            .json()
            .await
            .map_err(|e| Error::Internal(format!("Failed to parse Airtable response: {}", e)))?;

        Ok(list.records.into_iter().next())
    }
}

/// Airtable formula matching `field` against a quoted, escaped literal.
pub fn filter_formula(field: &str, value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('\'', "\\'");
    format!("{{{}}}='{}'", field, escaped)
}
