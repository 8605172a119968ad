/*
[INPUT]:  HTTP configuration (base URLs, timeouts, certificates, credentials)
[OUTPUT]: Configured client running the public and private call pipelines
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::sync::Arc;

use reqwest::{Client, Url};
use serde_json::Value;
use tracing::{debug, trace};

use crate::auth::{CredentialStore, Nonce, sign_request};
use crate::http::cool_down::{self, CoolDown};
use crate::http::response::{classify_private, classify_public};
use crate::http::tls;
use crate::http::{ClientConfig, Result, ZaifError};
use crate::types::RequestParams;

/// Endpoint family a private method belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrivateApi {
    /// Spot trading (`/tapi`)
    Trade,
    /// Leverage trading (`/tlapi`)
    LeverageTrade,
}

/// Main HTTP client for Zaif API.
///
/// Calls that share one credential must be awaited one after the other: the
/// nonce comes from the wall clock and the exchange rejects non-increasing
/// values.
#[derive(Debug)]
pub struct ZaifClient {
    pub(super) http_client: Client,
    public_url: Url,
    trade_url: Url,
    leverage_trade_url: Url,
    credentials: CredentialStore,
    cool_down: Arc<dyn CoolDown>,
}

impl ZaifClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let http_client = build_http_client(&config)?;
        let cool_down = cool_down::from_config(&config);

        Ok(Self {
            http_client,
            public_url: parse_directory_url(&config.public_url)?,
            trade_url: Url::parse(&config.trade_url)?,
            leverage_trade_url: Url::parse(&config.leverage_trade_url)?,
            credentials: CredentialStore::from_parts(
                config.token,
                config.api_key,
                config.api_secret,
            ),
            cool_down,
        })
    }

    /// Replace the cool-down strategy
    pub fn with_cool_down(mut self, cool_down: Arc<dyn CoolDown>) -> Self {
        self.cool_down = cool_down;
        self
    }

    /// Set the key/secret pair used to sign private requests
    pub fn set_api_key(&mut self, api_key: impl Into<String>, api_secret: impl Into<String>) {
        self.credentials.set_api_key(api_key, api_secret);
    }

    /// Set a bearer token; it takes precedence over the key pair
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.credentials.set_token(token);
    }

    pub fn clear_token(&mut self) {
        self.credentials.clear_token();
    }

    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    /// GET a public endpoint relative to the public base URL
    pub async fn call_public(&self, endpoint: &str) -> Result<Value> {
        self.call_public_with(endpoint, |value, _| Ok(value)).await
    }

    /// Public call whose classified value is narrowed by `select`.
    ///
    /// `select` also receives the raw body so failures can report it. The
    /// cool-down runs only when `select` succeeds.
    pub(crate) async fn call_public_with<F>(&self, endpoint: &str, select: F) -> Result<Value>
    where
        F: FnOnce(Value, &str) -> Result<Value>,
    {
        let url = self.public_url.join(endpoint)?;
        let raw = self.get_raw(url).await?;
        let body = raw.body.clone();
        let value = select(classify_public(raw)?, &body)?;
        self.cool_down.cool_down().await;
        Ok(value)
    }

    /// POST a private API method and return its `return` payload
    pub async fn call_private(
        &self,
        api: PrivateApi,
        method: &str,
        params: RequestParams,
    ) -> Result<Value> {
        let auth = self.credentials.check_ready()?;
        let nonce = Nonce::now();
        trace!(method, %nonce, "nonce issued");
        let signed = sign_request(method, &params, nonce, auth)?;

        let url = match api {
            PrivateApi::Trade => self.trade_url.clone(),
            PrivateApi::LeverageTrade => self.leverage_trade_url.clone(),
        };
        debug!(method, api = ?api, "dispatching private call");

        let raw = self.post_raw(url, signed).await?;
        let value = classify_private(raw)?;
        self.cool_down.cool_down().await;
        Ok(value)
    }
}

fn build_http_client(config: &ClientConfig) -> Result<Client> {
    let tls_config = tls::client_tls_config(config.cert_path.as_deref())?;

    Client::builder()
        .use_preconfigured_tls(tls_config)
        .connect_timeout(config.open_timeout)
        .read_timeout(config.read_timeout)
        .pool_max_idle_per_host(0)
        .build()
        .map_err(|e| ZaifError::Config(format!("Failed to build HTTP client: {e}")))
}

/// Parse a base URL so that relative joins append to it
fn parse_directory_url(raw: &str) -> Result<Url> {
    if raw.ends_with('/') {
        Ok(Url::parse(raw)?)
    } else {
        Ok(Url::parse(&format!("{raw}/"))?)
    }
}
