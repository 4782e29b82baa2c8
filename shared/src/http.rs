//! HTTP helpers for the reminder Lambda.

use lambda_http::{Body, Request, RequestExt, Response};
use serde::Serialize;
use serde_json::Value;

use crate::models::SendRequest;
use crate::Error;

/// Response body: `{"success": true}` or `{"error": ..., "detail"?: ...}`.
#[derive(Debug, Serialize)]
pub struct ApiResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ApiResponse {
    pub fn success() -> Self {
        Self {
            success: Some(true),
            error: None,
            detail: None,
        }
    }

    pub fn error(message: impl Into<String>, detail: Option<String>) -> Self {
        Self {
            success: None,
            error: Some(message.into()),
            detail,
        }
    }
}

impl From<&Error> for ApiResponse {
    fn from(err: &Error) -> Self {
        Self::error(err.label(), err.detail())
    }
}

/// Create a JSON response with the given status code and data.
pub fn json_response<T: Serialize>(
    status: u16,
    data: &T,
) -> Result<Response<Body>, lambda_http::Error> {
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::from(serde_json::to_string(data)?))?)
}

/// Create the response for a failed request.
pub fn error_response(err: &Error) -> Result<Response<Body>, lambda_http::Error> {
    json_response(err.status_code(), &ApiResponse::from(err))
}

/// Extract `userId` and `date` from the query string.
pub fn params_from_query(event: &Request) -> SendRequest {
    let params = event.query_string_parameters();
    SendRequest {
        user_id: params.first("userId").unwrap_or_default().to_string(),
        date: params.first("date").unwrap_or_default().to_string(),
    }
}

/// Extract `userId` and `date` from a JSON body.
///
/// An empty body counts as `{}`; anything unparsable is a 400.
pub fn params_from_body(body: &Body) -> Result<SendRequest, Error> {
    let bytes = body.as_ref();
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(SendRequest::default());
    }

    let value: Value =
        serde_json::from_slice(bytes).map_err(|e| Error::MalformedBody(e.to_string()))?;

    Ok(SendRequest {
        user_id: coerce(value.get("userId")),
        date: coerce(value.get("date")),
    })
}

/// Render a JSON scalar as text.
///
/// Falsy values (`false`, zero) count as missing, as do null, arrays and objects.
fn coerce(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) if n.as_f64() != Some(0.0) => n.to_string(),
        Some(Value::Bool(true)) => "true".to_string(),
        _ => String::new(),
    }
}
