//! # PolkaConnect Error
//!
//! Unified error types for the PolkaConnect SDK. Every crate in the workspace
//! reports failures through [`PolkaConnectError`] so callers only ever match
//! on one enum.
//!
//! Two kinds of failure are part of the API contract:
//!
//! - [`PolkaConnectError::UnsupportedChain`] - local validation of a chain name
//! - [`PolkaConnectError::Http`] - any non-2xx response from the service
//!
//! The remaining variants cover transport, decoding and configuration
//! problems that surface from the ambient stack.
//!
//! ## Example
//!
//! ```
//! use polkaconnect_error::{PolkaConnectError, Result};
//!
//! fn ensure_chain(chain: &str) -> Result<()> {
//!     match chain {
//!         "polkadot" | "ethereum" => Ok(()),
//!         other => Err(PolkaConnectError::UnsupportedChain(other.to_string())),
//!     }
//! }
//!
//! assert!(ensure_chain("bitcoin").is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use thiserror::Error;

/// The main error type for PolkaConnect operations.
#[derive(Error, Debug)]
pub enum PolkaConnectError {
    // ============ Contract Errors ============
    /// Chain is not one of the chains a wallet can be connected to
    #[error("Unsupported chain: {0}")]
    UnsupportedChain(String),

    /// The service answered with a non-2xx status
    #[error("HTTP {status}: {body}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Response body, as text
        body: String,
    },

    // ============ Transport Errors ============
    /// The request never produced a response
    #[error("Request to {url} failed: {reason}")]
    Transport {
        /// Request URL
        url: String,
        /// Error reason
        reason: String,
    },

    /// Response body was not the expected JSON
    #[error("Decode error: {0}")]
    Decode(String),

    // ============ Input Errors ============
    /// Amount could not be coerced to a finite number
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Base URL is not a usable http(s) URL
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The rejected URL
        url: String,
        /// Reason for rejection
        reason: String,
    },

    // ============ Configuration ============
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// IO error while reading configuration
    #[error("IO error: {0}")]
    IoError(String),
}

/// Convenient Result type using PolkaConnectError
pub type Result<T> = std::result::Result<T, PolkaConnectError>;

// ============ From implementations for common error types ============

impl From<std::io::Error> for PolkaConnectError {
    fn from(err: std::io::Error) -> Self {
        PolkaConnectError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for PolkaConnectError {
    fn from(err: serde_json::Error) -> Self {
        PolkaConnectError::Decode(err.to_string())
    }
}

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ErrorCode {
    /// Unsupported chain
    UnsupportedChain = 1001,
    /// Invalid amount
    InvalidAmount = 2001,
    /// Non-2xx HTTP response
    Http = 4001,
    /// Transport failure
    Transport = 4002,
    /// Response decode failure
    Decode = 4003,
    /// Invalid base URL
    InvalidUrl = 7001,
    /// Configuration error
    Config = 7002,
}

impl PolkaConnectError {
    /// Returns the error code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            PolkaConnectError::UnsupportedChain(_) => ErrorCode::UnsupportedChain,
            PolkaConnectError::InvalidAmount(_) => ErrorCode::InvalidAmount,
            PolkaConnectError::Http { .. } => ErrorCode::Http,
            PolkaConnectError::Transport { .. } => ErrorCode::Transport,
            PolkaConnectError::Decode(_) => ErrorCode::Decode,
            PolkaConnectError::InvalidUrl { .. } => ErrorCode::InvalidUrl,
            PolkaConnectError::ConfigError(_) | PolkaConnectError::IoError(_) => ErrorCode::Config,
        }
    }

    /// Returns the HTTP status for [`PolkaConnectError::Http`]
    pub fn status(&self) -> Option<u16> {
        match self {
            PolkaConnectError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the service rejected the request itself (4xx)
    pub fn is_client_error(&self) -> bool {
        matches!(self.status(), Some(s) if (400..500).contains(&s))
    }

    /// Returns true if the service failed while handling the request (5xx)
    pub fn is_server_error(&self) -> bool {
        matches!(self.status(), Some(s) if s >= 500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PolkaConnectError::Http {
            status: 503,
            body: "upstream down".to_string(),
        };
        assert!(err.to_string().contains("503"));
        assert!(err.to_string().contains("upstream down"));

        let err = PolkaConnectError::UnsupportedChain("bitcoin".into());
        assert_eq!(err.to_string(), "Unsupported chain: bitcoin");
    }

    #[test]
    fn test_error_code() {
        let err = PolkaConnectError::Http { status: 500, body: String::new() };
        assert_eq!(err.code(), ErrorCode::Http);
        assert_eq!(err.code() as u32, 4001);

        let err = PolkaConnectError::UnsupportedChain("x".into());
        assert_eq!(err.code(), ErrorCode::UnsupportedChain);
    }

    #[test]
    fn test_status_classification() {
        let not_found = PolkaConnectError::Http { status: 404, body: String::new() };
        assert_eq!(not_found.status(), Some(404));
        assert!(not_found.is_client_error());
        assert!(!not_found.is_server_error());

        let internal = PolkaConnectError::Http { status: 500, body: String::new() };
        assert!(internal.is_server_error());

        let decode = PolkaConnectError::Decode("eof".into());
        assert_eq!(decode.status(), None);
        assert!(!decode.is_client_error());
    }

    #[test]
    fn test_from_serde_json() {
        let err: PolkaConnectError = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert_eq!(err.code(), ErrorCode::Decode);
    }

    #[test]
    fn test_error_code_per_variant() {
        let cases = [
            (PolkaConnectError::InvalidAmount("abc".into()), 2001),
            (PolkaConnectError::Transport { url: "u".into(), reason: "r".into() }, 4002),
            (PolkaConnectError::Decode("eof".into()), 4003),
            (PolkaConnectError::InvalidUrl { url: "u".into(), reason: "r".into() }, 7001),
            (PolkaConnectError::ConfigError("bad".into()), 7002),
        ];
        for (err, code) in cases {
            assert_eq!(err.code() as u32, code, "{err}");
        }
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: PolkaConnectError = io.into();
        assert!(matches!(err, PolkaConnectError::IoError(ref m) if m.contains("file missing")));
        assert_eq!(err.code(), ErrorCode::Config);
    }
}
