/*
[INPUT]:  Error sources (credentials, transport, JSON body, exchange envelope)
[OUTPUT]: Structured error types distinguishing each pipeline stage
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the Zaif adapter
#[derive(Error, Debug)]
pub enum ZaifError {
    /// Private call attempted without a token or a complete key/secret pair
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// Non-2xx status or transport failure (DNS, TLS handshake, timeout)
    #[error("Connection failed: {message}")]
    Connection {
        status: Option<StatusCode>,
        message: String,
    },

    /// Body is not JSON or parses to no value
    #[error("Malformed response: {body}")]
    MalformedResponse { body: String },

    /// Exchange reported failure (`success: 0` or an `error` key)
    #[error("API error: {message}")]
    Api { message: String },

    /// Caller-supplied value rejected before any request is sent
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl From<reqwest::Error> for ZaifError {
    fn from(err: reqwest::Error) -> Self {
        ZaifError::Connection {
            status: err.status(),
            message: err.to_string(),
        }
    }
}

impl ZaifError {
    /// Check if the failure happened at the connection level.
    ///
    /// Advisory only: the client performs a single attempt per call.
    pub fn is_retryable(&self) -> bool {
        match self {
            ZaifError::Connection { status, .. } => status.is_none_or(|code| {
                code.is_server_error() || code == StatusCode::TOO_MANY_REQUESTS
            }),
            _ => false,
        }
    }

    /// Check if error indicates missing credentials
    pub fn is_auth_error(&self) -> bool {
        matches!(self, ZaifError::Authentication { .. })
    }

    /// HTTP status attached to a connection error, if any
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ZaifError::Connection { status, .. } => *status,
            _ => None,
        }
    }

    /// Create a connection error for a non-2xx response
    pub fn http_status(status: StatusCode) -> Self {
        ZaifError::Connection {
            status: Some(status),
            message: format!("Failed to connect to zaif: {status}"),
        }
    }

    pub(crate) fn missing_credentials() -> Self {
        ZaifError::Authentication {
            message: "You need to set a API key and secret".to_string(),
        }
    }
}

/// Result type alias for Zaif operations
pub type Result<T> = std::result::Result<T, ZaifError>;
