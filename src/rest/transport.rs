//! HTTP transport abstraction for the REST client.
//!
//! The client signs a request and hands it to an [`HttpTransport`], which
//! performs exactly one round trip. Swap the transport to run the client
//! against a mock without touching the network.

use std::future::Future;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Method, StatusCode};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use url::Url;

use crate::error::RequestError;

/// A signed request ready to be sent.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute request URL
    pub url: Url,
    /// Authentication and content headers
    pub headers: HeaderMap,
    /// Raw request body, empty for GET
    pub body: Vec<u8>,
}

/// A fully read response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Entire response body
    pub body: Vec<u8>,
}

/// Executes a single HTTP round trip.
///
/// Implementations must not retry. They must be safe to share across
/// concurrent calls.
pub trait HttpTransport: Send + Sync {
    /// Send the request and read the full response body.
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, RequestError>> + Send;
}

/// Default transport built on `reqwest` with tracing middleware.
///
/// Connection pooling is whatever `reqwest` does by default.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: ClientWithMiddleware,
}

impl ReqwestTransport {
    /// Create a transport with the default user agent.
    pub fn new() -> Self {
        Self::with_user_agent(&default_user_agent())
    }

    /// Create a transport sending the given user agent.
    pub fn with_user_agent(user_agent: &str) -> Self {
        let mut headers = HeaderMap::new();
        let header_value = HeaderValue::from_str(user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("bitflyer-api-client"));
        headers.insert(USER_AGENT, header_value);

        let reqwest_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self::from_client(
            ClientBuilder::new(reqwest_client)
                .with(TracingMiddleware::default())
                .build(),
        )
    }

    /// Wrap an existing middleware client.
    ///
    /// Do not install retry middleware here; the client promises one attempt per call.
    pub fn from_client(client: ClientWithMiddleware) -> Self {
        Self { client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransport").finish_non_exhaustive()
    }
}

impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, RequestError> {
        let response = self
            .client
            .request(request.method, request.url)
            .headers(request.headers)
            .body(request.body)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        Ok(HttpResponse {
            status,
            body: body.to_vec(),
        })
    }
}

pub(crate) fn default_user_agent() -> String {
    format!("bitflyer-api-client/{}", env!("CARGO_PKG_VERSION"))
}
