//! Error types for the bitFlyer client library.

use std::time::Duration;

use thiserror::Error;

/// The main error type for all bitFlyer client operations.
#[derive(Error, Debug)]
pub enum BitflyerError {
    /// The HTTP round trip did not complete.
    #[error(transparent)]
    Request(#[from] RequestError),

    /// The response body is not valid JSON or does not match the expected shape.
    #[error("Failed to decode response: {source}")]
    Decode {
        /// Underlying decode failure
        source: serde_json::Error,
        /// Raw response body
        body: String,
    },

    /// The request body could not be serialized.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The exchange rejected the request inside its response body.
    #[error("bitFlyer API error: {0}")]
    Exchange(ExchangeError),
}

impl BitflyerError {
    /// Check if this is a transport-level failure.
    pub fn is_request(&self) -> bool {
        matches!(self, Self::Request(_))
    }

    /// Check if this is a response decoding failure.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// Check if this is a business-level rejection from the exchange.
    pub fn is_exchange(&self) -> bool {
        matches!(self, Self::Exchange(_))
    }

    /// The exchange error, if this is one.
    pub fn as_exchange(&self) -> Option<&ExchangeError> {
        match self {
            Self::Exchange(err) => Some(err),
            _ => None,
        }
    }
}

/// Transport-level failures. None of these are retried by the client.
#[derive(Error, Debug)]
pub enum RequestError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// A header value could not be encoded
    #[error("Invalid value for header {name}")]
    InvalidHeader {
        /// Name of the offending header
        name: &'static str,
    },

    /// Request timeout
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// The caller cancelled the request
    #[error("Request cancelled")]
    Cancelled,

    /// Failure reported by a custom transport
    #[error("Transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A rejection returned by bitFlyer in the response body.
///
/// bitFlyer reports business failures (e.g. insufficient funds) as
/// `{"status": -200, "error_message": "..."}`, often with HTTP 200.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeError {
    /// Negative status code from the exchange, when present
    pub status: Option<i64>,
    /// Human-readable error message
    pub message: String,
}

impl ExchangeError {
    /// Create a new exchange error.
    pub fn new(status: Option<i64>, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ExchangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status {
            Some(status) => write!(f, "{} (status {})", self.message, status),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ExchangeError {}
