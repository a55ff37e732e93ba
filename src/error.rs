//! Error types for the BackMarket API client.
//!
//! Public service methods never return these directly: every failure is
//! folded into [`ApiResult::Failure`](crate::ApiResult) at the executor
//! boundary. `Error` is what the transport and configuration layers speak
//! internally, and what [`ApiResult::json`](crate::ApiResult::json) and
//! [`ApiResult::into_result`](crate::ApiResult::into_result) hand back to
//! callers who prefer `?`.

use std::error::Error as _;

use thiserror::Error;

/// A specialized `Result` type for BackMarket operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Status code reported for faults that carry no HTTP status of their own.
pub const FALLBACK_STATUS: u16 = 500;

/// The main error type for the BackMarket client.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// API returned a non-2xx response
    #[error("API error: status={status}, message={message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Raw response body
        message: String,
    },

    /// A transport implementation failed without a `reqwest` error to wrap
    #[error("Transport error: {message}")]
    Transport {
        /// Status code exposed by the fault, if any
        status: Option<u16>,
        /// Human-readable description
        message: String,
    },

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// The status code this error should be reported with.
    ///
    /// Faults that expose their own HTTP status keep it; everything else
    /// is reported as 500.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::Http(err) => err
                .status()
                .map(|s| s.as_u16())
                .unwrap_or(FALLBACK_STATUS),
            Error::Api { status, .. } => *status,
            Error::Transport { status, .. } => status.unwrap_or(FALLBACK_STATUS),
            Error::Json(_)
            | Error::UrlParse(_)
            | Error::InvalidInput(_)
            | Error::Config(_) => FALLBACK_STATUS,
        }
    }

    /// Plain description of the fault, followed by its causes.
    ///
    /// Unlike `Display` this drops the variant prefix and walks the
    /// `source()` chain, so a refused connection reads
    /// `error sending request for url (...): ...: Connection refused`.
    pub fn fault_message(&self) -> String {
        let (mut message, mut source) = match self {
            Error::Http(err) => (err.to_string(), err.source()),
            Error::Json(err) => (err.to_string(), err.source()),
            Error::UrlParse(err) => (err.to_string(), err.source()),
            Error::Api { message, .. } | Error::Transport { message, .. } => {
                (message.clone(), None)
            }
            Error::InvalidInput(message) | Error::Config(message) => (message.clone(), None),
        };

        while let Some(cause) = source {
            let text = cause.to_string();
            // hyper and reqwest sometimes repeat the inner text verbatim
            if !message.ends_with(&text) {
                message.push_str(": ");
                message.push_str(&text);
            }
            source = cause.source();
        }
        message
    }

    /// Returns `true` if this error indicates a client-side issue.
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::InvalidInput(_) | Error::Config(_) => true,
            other => (400..500).contains(&other.status_code()),
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }
}
