//! Client configuration.
//!
//! A [`ClientConfig`] can be built in code, loaded from a JSON file, or read
//! from the environment. Whatever the source, the stored base URL never ends
//! with a slash.

use polkaconnect_error::{PolkaConnectError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::Path;
use url::Url;

/// Public PolkaConnect service origin
pub const DEFAULT_BASE_URL: &str = "https://polkaconnect.replit.app";

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Environment variable overriding the base URL
pub const BASE_URL_ENV: &str = "POLKACONNECT_BASE_URL";

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "POLKACONNECT_API_KEY";

/// Strips every trailing slash from a base URL.
pub fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn deserialize_base_url<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(normalize_base_url(&raw))
}

/// Configuration for the underlying HTTP transport.
///
/// No request timeout: calls use the transport's default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpClientConfig {
    /// Maximum idle connections per host
    pub pool_max_idle_per_host: usize,
    /// Idle connection timeout
    pub pool_idle_timeout_secs: u64,
    /// Connection timeout
    pub connect_timeout_secs: u64,
    /// User agent string
    pub user_agent: String,
    /// Enable gzip compression
    pub gzip: bool,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            pool_max_idle_per_host: 10,
            pool_idle_timeout_secs: 90,
            connect_timeout_secs: 10,
            user_agent: format!("polkaconnect-rs/{}", env!("CARGO_PKG_VERSION")),
            gzip: true,
        }
    }
}

/// Configuration for an [`ApiClient`](crate::ApiClient)
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_base_url", deserialize_with = "deserialize_base_url")]
    base_url: String,
    #[serde(default)]
    api_key: Option<String>,
    #[serde(default)]
    http: HttpClientConfig,
}

impl ClientConfig {
    /// Creates a configuration for the given base URL
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.as_ref()),
            api_key: None,
            http: HttpClientConfig::default(),
        }
    }

    /// Sets the API key sent with every request
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets the transport configuration
    pub fn with_http(mut self, http: HttpClientConfig) -> Self {
        self.http = http;
        self
    }

    /// Returns the normalized base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the API key, treating an empty key as absent
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.is_empty())
    }

    /// Returns the transport configuration
    pub fn http(&self) -> &HttpClientConfig {
        &self.http
    }

    /// Checks that the base URL is an absolute http(s) URL
    pub fn validate(&self) -> Result<()> {
        let parsed = Url::parse(&self.base_url).map_err(|e| PolkaConnectError::InvalidUrl {
            url: self.base_url.clone(),
            reason: e.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(PolkaConnectError::InvalidUrl {
                url: self.base_url.clone(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        Ok(())
    }

    /// Loads a configuration from a JSON file.
    ///
    /// Missing fields fall back to their defaults.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config: ClientConfig = serde_json::from_str(&contents).map_err(|e| {
            PolkaConnectError::ConfigError(format!("{}: {}", path.display(), e))
        })?;
        config.validate()?;
        tracing::debug!(path = %path.display(), base_url = %config.base_url, "loaded client config");
        Ok(config)
    }

    /// Builds a configuration from `POLKACONNECT_BASE_URL` and
    /// `POLKACONNECT_API_KEY`, falling back to defaults.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Applies environment overrides on top of this configuration
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    pub(crate) fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = lookup(BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.base_url = normalize_base_url(base_url.trim());
        }
        if let Some(api_key) = lookup(API_KEY_ENV).filter(|v| !v.is_empty()) {
            self.api_key = Some(api_key);
        }
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key().map(|_| "<redacted>"))
            .field("http", &self.http)
            .finish()
    }
}
