//! HTTP client for the PolkaConnect API.

use crate::config::{ClientConfig, API_KEY_HEADER};
use polkaconnect_error::{PolkaConnectError, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method};
use serde::Serialize;
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Per-request options: query parameters and an optional JSON body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    /// Query string pairs, in order
    pub query: Vec<(String, String)>,
    /// JSON body
    pub body: Option<Value>,
}

impl RequestOptions {
    /// Creates empty request options
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a query parameter
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Sets the JSON body
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Client for the PolkaConnect API.
///
/// Cloning is cheap and clones share the connection pool, so one instance
/// can serve many tasks.
#[derive(Clone)]
pub struct ApiClient {
    config: Arc<ClientConfig>,
    http: Client,
    request_count: Arc<AtomicU64>,
}

impl ApiClient {
    /// Creates a client for the public service with no API key
    pub fn with_defaults() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// Creates a client from a configuration.
    ///
    /// The API key, if any, becomes a default header of the transport.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        if let Some(api_key) = config.api_key() {
            let name = HeaderName::from_bytes(API_KEY_HEADER.as_bytes())
                .map_err(|e| PolkaConnectError::ConfigError(e.to_string()))?;
            let mut value = HeaderValue::from_str(api_key).map_err(|e| {
                PolkaConnectError::ConfigError(format!("API key is not a valid header value: {}", e))
            })?;
            value.set_sensitive(true);
            headers.insert(name, value);
        }

        let http_config = config.http();
        let http = Client::builder()
            .default_headers(headers)
            .pool_max_idle_per_host(http_config.pool_max_idle_per_host)
            .pool_idle_timeout(Duration::from_secs(http_config.pool_idle_timeout_secs))
            .connect_timeout(Duration::from_secs(http_config.connect_timeout_secs))
            .user_agent(&http_config.user_agent)
            .gzip(http_config.gzip)
            .build()
            .map_err(|e| PolkaConnectError::ConfigError(format!("failed to build HTTP client: {}", e)))?;

        tracing::debug!(
            base_url = %config.base_url(),
            api_key = config.api_key().is_some(),
            "created API client"
        );

        Ok(Self {
            config: Arc::new(config),
            http,
            request_count: Arc::new(AtomicU64::new(0)),
        })
    }

    /// Returns the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the normalized base URL
    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    /// Resolves an endpoint path against the base URL
    pub fn url_for(&self, endpoint: &str) -> String {
        if endpoint.starts_with('/') {
            format!("{}{}", self.base_url(), endpoint)
        } else {
            format!("{}/{}", self.base_url(), endpoint)
        }
    }

    /// Returns the number of requests dispatched by this client and its clones
    pub fn request_count(&self) -> u64 {
        self.request_count.load(Ordering::SeqCst)
    }

    /// Makes a GET request with the given query parameters
    pub async fn get(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<Value> {
        let options = query
            .iter()
            .fold(RequestOptions::new(), |opts, (k, v)| opts.with_query(*k, *v));
        self.request(Method::GET, endpoint, options).await
    }

    /// Makes a POST request with a JSON body
    pub async fn post<B>(&self, endpoint: &str, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body)?;
        self.request(Method::POST, endpoint, RequestOptions::new().with_body(body))
            .await
    }

    /// Performs a single request and decodes the JSON response.
    ///
    /// A non-2xx status fails with [`PolkaConnectError::Http`] carrying the
    /// status code and the response body.
    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<Value> {
        let url = self.url_for(endpoint);
        self.request_count.fetch_add(1, Ordering::SeqCst);
        tracing::debug!(method = %method, url = %url, "dispatching request");

        let start = Instant::now();
        let mut builder = self.http.request(method.clone(), &url);
        if !options.query.is_empty() {
            builder = builder.query(&options.query);
        }
        if let Some(body) = &options.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::error!(method = %method, url = %url, error = %e, "transport error");
            PolkaConnectError::Transport {
                url: url.clone(),
                reason: e.to_string(),
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(
                method = %method,
                url = %url,
                status = status.as_u16(),
                elapsed_ms = start.elapsed().as_millis() as u64,
                "request failed"
            );
            return Err(PolkaConnectError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await.map_err(|e| PolkaConnectError::Transport {
            url: url.clone(),
            reason: e.to_string(),
        })?;
        let value: Value = serde_json::from_slice(&bytes)?;

        tracing::debug!(
            method = %method,
            url = %url,
            status = status.as_u16(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "request completed"
        );
        Ok(value)
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .field("request_count", &self.request_count())
            .finish()
    }
}
