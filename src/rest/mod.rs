//! bitFlyer Lightning REST API client.
//!
//! Every request is signed, sent once, and decoded into a typed result.
//!
//! # Trait-based API
//!
//! The [`BitflyerClient`] trait abstracts the REST operations, and the
//! [`HttpTransport`] trait abstracts the HTTP round trip underneath them.
//! Either can be replaced in tests.

mod client;
mod endpoints;
pub mod private;
pub mod public;
mod traits;
mod transport;

pub use client::{BitflyerRestClient, BitflyerRestClientBuilder, DEFAULT_TIMEOUT};
pub use endpoints::BITFLYER_BASE_URL;
pub use traits::BitflyerClient;
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
