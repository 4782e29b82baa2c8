//! LINE Messaging API push client.

use secrecy::{ExposeSecret, Secret};
use tracing::debug;

use crate::models::PushMessage;
use crate::{Error, Result};

/// Push endpoint path under the Messaging API root.
pub const PUSH_PATH: &str = "/v2/bot/message/push";

/// Sends push messages on behalf of any configured channel.
#[derive(Debug, Clone)]
pub struct LineClient {
    http_client: reqwest::Client,
    push_url: String,
}

impl LineClient {
    pub fn new(http_client: reqwest::Client, api_url: &str) -> Self {
        Self {
            http_client,
            push_url: format!("{}{}", api_url.trim_end_matches('/'), PUSH_PATH),
        }
    }

    /// POST one text message to `to`, returning the raw response.
    ///
    /// Every call delivers a message; nothing here deduplicates.
    pub async fn push_text(
        &self,
        token: &Secret<String>,
        to: &str,
        text: &str,
    ) -> Result<reqwest::Response> {
        let payload = PushMessage::text(to, text);
        debug!(to = %to, "Sending LINE push message");

        self.http_client
            .post(&self.push_url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", token.expose_secret()))
            .body(serde_json::to_vec(&payload)?)
            .send()
            .await
            .map_err(|e| Error::Internal(format!("LINE request failed: {}", e)))
    }
}
