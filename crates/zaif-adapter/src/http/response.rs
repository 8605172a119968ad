/*
[INPUT]:  Raw HTTP status and body from the transport
[OUTPUT]: Payload JSON value or a classified error
[POS]:    HTTP layer - response classification for public and private calls
[UPDATE]: When the response envelope or error detection changes
*/

use reqwest::StatusCode;
use serde_json::Value;
use tracing::warn;

use crate::http::{Result, ZaifError};

/// Status and body exactly as received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Classify a public (market data) response.
///
/// Any object carrying an `error` key is an API error; anything else is
/// returned as-is.
pub fn classify_public(raw: RawResponse) -> Result<Value> {
    let value = parse_body(raw)?;
    if let Some(error) = value.as_object().and_then(|object| object.get("error")) {
        return Err(api_error(error));
    }
    Ok(value)
}

/// Classify a private response wrapped in the success envelope.
///
/// `success: 0` yields the `error` message; otherwise the `return` field is
/// the payload.
pub fn classify_private(raw: RawResponse) -> Result<Value> {
    let body = raw.body.clone();
    let value = parse_body(raw)?;
    let Value::Object(mut envelope) = value else {
        return Err(ZaifError::MalformedResponse { body });
    };

    let failed = envelope
        .get("success")
        .is_some_and(|success| success.as_i64() == Some(0) || success.as_f64() == Some(0.0));
    if failed {
        let error = envelope.remove("error").unwrap_or(Value::Null);
        return Err(api_error(&error));
    }

    envelope
        .remove("return")
        .ok_or(ZaifError::MalformedResponse { body })
}

fn parse_body(raw: RawResponse) -> Result<Value> {
    if !raw.status.is_success() {
        warn!(status = %raw.status, "non-success HTTP status");
        return Err(ZaifError::http_status(raw.status));
    }
    match serde_json::from_str::<Value>(&raw.body) {
        Ok(Value::Null) | Err(_) => Err(ZaifError::MalformedResponse { body: raw.body }),
        Ok(value) => Ok(value),
    }
}

fn api_error(error: &Value) -> ZaifError {
    let message = match error {
        Value::String(message) => message.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    };
    warn!(%message, "exchange reported an error");
    ZaifError::Api { message }
}
