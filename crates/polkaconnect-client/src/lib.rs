//! # PolkaConnect Client
//!
//! The transport layer of the PolkaConnect SDK. It owns the base URL, the
//! optional API key and a pooled `reqwest` client, and exposes generic
//! `GET`/`POST` calls that decode JSON and turn non-2xx statuses into
//! [`PolkaConnectError::Http`].
//!
//! ## Features
//!
//! - Base URL normalization (no trailing slash, ever)
//! - Static `X-API-Key` header installed once at construction
//! - Configuration from code, a JSON file, or the environment
//! - Connection reuse through a shared, cloneable client
//! - Single attempt per call: no retries, no caching
//!
//! ## Example
//!
//! ```ignore
//! use polkaconnect_client::{ApiClient, ClientConfig};
//!
//! let config = ClientConfig::new("https://polkaconnect.replit.app/")
//!     .with_api_key("secret");
//!
//! let client = ApiClient::new(config)?;
//! let balance = client
//!     .get("/api/balance", &[("chain", "polkadot"), ("address", "1FRMM8...")])
//!     .await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod client;
pub mod config;

pub use client::{ApiClient, RequestOptions};
pub use config::{
    normalize_base_url, ClientConfig, HttpClientConfig, API_KEY_ENV, API_KEY_HEADER, BASE_URL_ENV,
    DEFAULT_BASE_URL,
};
pub use polkaconnect_error::{PolkaConnectError, Result};
pub use reqwest::Method;
pub use serde_json::Value;
