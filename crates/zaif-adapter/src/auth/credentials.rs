/*
[INPUT]:  Bearer token or api key/secret pair set through explicit setters
[OUTPUT]: Active authentication mode or an authentication error
[POS]:    Auth layer - credential store consulted before every private call
[UPDATE]: When adding auth modes or changing precedence rules
*/

use std::fmt;

use crate::http::{Result, ZaifError};

/// An api key together with the secret used to sign request bodies
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKeyPair {
    pub api_key: String,
    pub api_secret: String,
}

impl ApiKeyPair {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }
}

impl fmt::Debug for ApiKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKeyPair")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

/// Authentication applied to a single private request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode<'a> {
    /// Sent as a `token` header, body left unsigned
    Token(&'a str),
    /// Sent as `Key` + `Sign` headers
    KeyPair(&'a ApiKeyPair),
}

/// Holds the credentials of one client.
///
/// Each setter replaces its field as a whole; nothing is inferred. When both a
/// token and a key pair are present the token wins.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CredentialStore {
    token: Option<String>,
    key_pair: Option<ApiKeyPair>,
}

impl CredentialStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from optional config values.
    ///
    /// A key without its secret (or the reverse) does not form a pair.
    pub fn from_parts(
        token: Option<String>,
        api_key: Option<String>,
        api_secret: Option<String>,
    ) -> Self {
        let key_pair = match (api_key, api_secret) {
            (Some(key), Some(secret)) => Some(ApiKeyPair::new(key, secret)),
            _ => None,
        };
        Self { token, key_pair }
    }

    /// Replace the key/secret pair
    pub fn set_api_key(&mut self, api_key: impl Into<String>, api_secret: impl Into<String>) {
        self.key_pair = Some(ApiKeyPair::new(api_key, api_secret));
    }

    /// Replace the bearer token
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Drop the token so the key pair is used again
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn key_pair(&self) -> Option<&ApiKeyPair> {
        self.key_pair.as_ref()
    }

    /// Resolve the mode for the next private request.
    ///
    /// Fails before any network I/O when neither mode is configured.
    pub fn check_ready(&self) -> Result<AuthMode<'_>> {
        if let Some(token) = self.token.as_deref() {
            return Ok(AuthMode::Token(token));
        }
        self.key_pair
            .as_ref()
            .map(AuthMode::KeyPair)
            .ok_or_else(ZaifError::missing_credentials)
    }
}

impl fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialStore")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("key_pair", &self.key_pair)
            .finish()
    }
}
