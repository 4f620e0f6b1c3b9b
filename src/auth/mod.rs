//! Authentication module for bitFlyer API.
//!
//! This module provides:
//! - Credential management with secure secret storage
//! - Unix timestamp generation for request signing
//! - HMAC-SHA256 signature generation for every request

mod credentials;
mod signature;
mod timestamp;

pub use credentials::{Credentials, CredentialsProvider, EnvCredentials, StaticCredentials};
pub use signature::{SignedHeaders, sign_message};
pub use timestamp::{SystemClock, TimestampProvider};
