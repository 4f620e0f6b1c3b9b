//! # bitFlyer Client
//!
//! An async Rust client library for the bitFlyer Lightning REST API.
//!
//! ## Features
//!
//! - Order book, ticker, balance, and child order endpoints
//! - HMAC-SHA256 request signing on every call
//! - Configurable timeout and caller-driven cancellation
//! - Pluggable HTTP transport for testing
//! - Financial precision with `rust_decimal`
//!
//! The client never retries. Resilience policy belongs to the caller.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bitflyer_api_client::auth::EnvCredentials;
//! use bitflyer_api_client::rest::BitflyerRestClient;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credentials = EnvCredentials::try_from_env().ok_or("BITFLYER_API_KEY/SECRET not set")?;
//!     let client = BitflyerRestClient::new(Arc::new(credentials));
//!     let ticker = client.get_ticker().await?;
//!     println!("{} last traded at {}", ticker.product_code, ticker.ltp);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{BitflyerError, ExchangeError, RequestError};
pub use types::common::{ChildOrderType, Side, TimeInForce};

/// Result type alias using BitflyerError
pub type Result<T> = std::result::Result<T, BitflyerError>;
