//! Shared data models.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Airtable field holding the LINE account label that owns the user.
pub const LINE_ACCOUNT_FIELD: &str = "lineAccount";

/// A reservation record as returned by the Airtable list endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: String,
    #[serde(default)]
    pub fields: Map<String, Value>,
    pub created_time: Option<String>,
}

impl Reservation {
    /// LINE account label attached to this reservation, if it carries a usable one.
    pub fn line_account(&self) -> Option<&str> {
        self.fields
            .get(LINE_ACCOUNT_FIELD)
            .and_then(normalize_lookup_field)
    }
}

/// Airtable list-records response.
#[derive(Debug, Deserialize)]
pub struct RecordList {
    #[serde(default)]
    pub records: Vec<Reservation>,
}

/// Collapse an Airtable lookup field to a plain string.
///
/// Lookup fields come back as a one-element array while plain text fields are
/// bare strings. Anything else (numbers, objects, empty values) yields `None`.
pub fn normalize_lookup_field(value: &Value) -> Option<&str> {
    let label = match value {
        Value::String(s) => s.as_str(),
        Value::Array(items) => items.first()?.as_str()?,
        _ => return None,
    };
    let label = label.trim();
    if label.is_empty() {
        None
    } else {
        Some(label)
    }
}

/// Inbound reminder parameters after coercion to strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendRequest {
    pub user_id: String,
    pub date: String,
}

/// LINE push message request body.
#[derive(Debug, Serialize)]
pub struct PushMessage<'a> {
    pub to: &'a str,
    pub messages: Vec<TextMessage<'a>>,
}

/// Single text segment of a push message.
#[derive(Debug, Serialize)]
pub struct TextMessage<'a> {
    #[serde(rename = "type")]
    pub message_type: &'static str,
    pub text: &'a str,
}

impl<'a> PushMessage<'a> {
    pub fn text(to: &'a str, text: &'a str) -> Self {
        Self {
            to,
            messages: vec![TextMessage {
                message_type: "text",
                text,
            }],
        }
    }
}
