/*
[INPUT]:  Defaults, YAML configuration file, ZAIF_* environment variables
[OUTPUT]: Immutable client configuration (timeouts, TLS, cool-down, credentials)
[POS]:    HTTP layer - configuration consumed once at client construction
[UPDATE]: When adding new configuration options
*/

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::http::{Result, ZaifError};

/// Base URLs for Zaif API
pub const PUBLIC_BASE_URL: &str = "https://api.zaif.jp/api/1/";
pub const TRADE_URL: &str = "https://api.zaif.jp/tapi";
pub const LEVERAGE_TRADE_URL: &str = "https://api.zaif.jp/tlapi";

pub const ENV_TOKEN: &str = "ZAIF_TOKEN";
pub const ENV_API_KEY: &str = "ZAIF_API_KEY";
pub const ENV_API_SECRET: &str = "ZAIF_API_SECRET";

/// HTTP client configuration
///
/// Durations are written in seconds when loaded from a file.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Sleep after each successful call
    pub cool_down: bool,
    #[serde(with = "duration_secs")]
    pub cool_down_time: Duration,
    #[serde(with = "duration_secs")]
    pub open_timeout: Duration,
    #[serde(with = "duration_secs")]
    pub read_timeout: Duration,
    /// PEM bundle added to the trusted roots
    pub cert_path: Option<PathBuf>,
    pub token: Option<String>,
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
    pub public_url: String,
    pub trade_url: String,
    pub leverage_trade_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            cool_down: true,
            cool_down_time: Duration::from_secs(2),
            open_timeout: Duration::from_secs(5),
            read_timeout: Duration::from_secs(15),
            cert_path: None,
            token: None,
            api_key: None,
            api_secret: None,
            public_url: PUBLIC_BASE_URL.to_string(),
            trade_url: TRADE_URL.to_string(),
            leverage_trade_url: LEVERAGE_TRADE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ZaifError::Config(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| ZaifError::Config(format!("Invalid configuration: {e}")))
    }

    /// Fill credentials from `ZAIF_TOKEN`, `ZAIF_API_KEY` and `ZAIF_API_SECRET`.
    ///
    /// Variables that are unset leave the current value alone.
    pub fn with_env_credentials(mut self) -> Self {
        if let Ok(token) = std::env::var(ENV_TOKEN) {
            self.token = Some(token);
        }
        if let Ok(api_key) = std::env::var(ENV_API_KEY) {
            self.api_key = Some(api_key);
        }
        if let Ok(api_secret) = std::env::var(ENV_API_SECRET) {
            self.api_secret = Some(api_secret);
        }
        self
    }

    /// Point every endpoint family at one host, e.g. a local test server
    pub fn with_base_url(mut self, base: &str) -> Self {
        let base = base.trim_end_matches('/');
        self.public_url = format!("{base}/api/1/");
        self.trade_url = format!("{base}/tapi");
        self.leverage_trade_url = format!("{base}/tlapi");
        self
    }

    pub fn without_cool_down(mut self) -> Self {
        self.cool_down = false;
        self
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |value: &Option<String>| value.as_ref().map(|_| "<redacted>");
        f.debug_struct("ClientConfig")
            .field("cool_down", &self.cool_down)
            .field("cool_down_time", &self.cool_down_time)
            .field("open_timeout", &self.open_timeout)
            .field("read_timeout", &self.read_timeout)
            .field("cert_path", &self.cert_path)
            .field("token", &redact(&self.token))
            .field("api_key", &self.api_key)
            .field("api_secret", &redact(&self.api_secret))
            .field("public_url", &self.public_url)
            .field("trade_url", &self.trade_url)
            .field("leverage_trade_url", &self.leverage_trade_url)
            .finish()
    }
}

mod duration_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, de::Error as _};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs).map_err(D::Error::custom)
    }
}
