//! Configuration management for the reminder Lambda.

use chrono_tz::Tz;
use secrecy::Secret;
use std::env;
use std::time::Duration;

use crate::credentials::{parse_account_tokens, CredentialRegistry};
use crate::message::DEFAULT_TIMEZONE;
use crate::{Error, Result};

pub const DEFAULT_AIRTABLE_API_URL: &str = "https://api.airtable.com/v0";
pub const DEFAULT_LINE_API_URL: &str = "https://api.line.me";
pub const DEFAULT_USER_FIELD: &str = "userId_";
pub const DEFAULT_ACCOUNT_LABEL: &str = "default";
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Application configuration loaded once at startup.
#[derive(Debug)]
pub struct Config {
    /// Airtable personal access token
    pub airtable_api_key: Secret<String>,
    /// Airtable base id
    pub airtable_base_id: String,
    /// Airtable table id or name
    pub airtable_table_id: String,
    /// Field compared against the inbound user id
    pub airtable_user_field: String,
    /// Airtable REST root
    pub airtable_api_url: String,
    /// Upper bound on the reservation lookup
    pub lookup_timeout: Duration,
    /// LINE Messaging API root
    pub line_api_url: String,
    /// Channel access tokens by account label
    pub credentials: CredentialRegistry,
    /// Zone used to render the appointment time
    pub timezone: Tz,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require =
            |key: &str| get(key).ok_or_else(|| Error::Config(format!("{} not set", key)));

        let lookup_timeout = match get("AIRTABLE_TIMEOUT_MS") {
            Some(ms) => ms
                .trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| Error::Config(format!("AIRTABLE_TIMEOUT_MS is not a number: {}", ms)))?,
            None => DEFAULT_LOOKUP_TIMEOUT,
        };

        let timezone = match get("REMINDER_TIMEZONE") {
            Some(name) => name
                .trim()
                .parse::<Tz>()
                .map_err(|_| Error::Config(format!("Unknown REMINDER_TIMEZONE: {}", name)))?,
            None => DEFAULT_TIMEZONE,
        };

        let default_label =
            get("LINE_DEFAULT_ACCOUNT").unwrap_or_else(|| DEFAULT_ACCOUNT_LABEL.to_string());
        let mut accounts = match get("LINE_ACCOUNT_TOKENS") {
            Some(raw) => parse_account_tokens(&raw)?,
            None => Default::default(),
        };
        if let Some(token) = get("LINE_CHANNEL_ACCESS_TOKEN") {
            accounts.insert(default_label.clone(), Secret::new(token));
        }
        let credentials = CredentialRegistry::new(default_label, accounts)?;

        Ok(Self {
            airtable_api_key: Secret::new(require("AIRTABLE_API_KEY")?),
            airtable_base_id: require("AIRTABLE_BASE_ID")?,
            airtable_table_id: require("AIRTABLE_TABLE_ID")?,
            airtable_user_field: get("AIRTABLE_USER_FIELD")
                .unwrap_or_else(|| DEFAULT_USER_FIELD.to_string()),
            airtable_api_url: get("AIRTABLE_API_URL")
                .unwrap_or_else(|| DEFAULT_AIRTABLE_API_URL.to_string()),
            lookup_timeout,
            line_api_url: get("LINE_API_URL").unwrap_or_else(|| DEFAULT_LINE_API_URL.to_string()),
            credentials,
            timezone,
        })
    }
}
