//! bitFlyer REST API client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::auth::{CredentialsProvider, SignedHeaders, SystemClock, TimestampProvider};
use crate::error::{BitflyerError, ExchangeError, RequestError};
use crate::rest::endpoints::BITFLYER_BASE_URL;
use crate::rest::private::{AssetBalance, Order};
use crate::rest::public::{OrderBook, Ticker};
use crate::rest::traits::BitflyerClient;
use crate::rest::transport::{
    HttpRequest, HttpResponse, HttpTransport, ReqwestTransport, default_user_agent,
};

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The bitFlyer Lightning REST API client.
///
/// Every request is signed with the configured credentials and performed
/// exactly once. There are no retries and no response caching.
///
/// # Example
///
/// ```rust,no_run
/// use bitflyer_api_client::auth::StaticCredentials;
/// use bitflyer_api_client::rest::BitflyerRestClient;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let credentials = Arc::new(StaticCredentials::new("api_key", "api_secret"));
///     let client = BitflyerRestClient::new(credentials);
///
///     let ticker = client.get_ticker().await?;
///     println!("LTP: {}", ticker.ltp);
///
///     Ok(())
/// }
/// ```
pub struct BitflyerRestClient<T = ReqwestTransport> {
    transport: Arc<T>,
    base_url: String,
    credentials: Arc<dyn CredentialsProvider>,
    clock: Arc<dyn TimestampProvider>,
    timeout: Duration,
    cancellation: Option<CancellationToken>,
}

impl BitflyerRestClient<ReqwestTransport> {
    /// Create a new client with default settings.
    pub fn new(credentials: Arc<dyn CredentialsProvider>) -> Self {
        Self::builder(credentials).build()
    }

    /// Create a new client builder.
    pub fn builder(credentials: Arc<dyn CredentialsProvider>) -> BitflyerRestClientBuilder {
        BitflyerRestClientBuilder::new(credentials)
    }
}

impl<T: HttpTransport> BitflyerRestClient<T> {
    /// Return a client whose calls abort once `token` is cancelled.
    ///
    /// The returned client shares credentials and transport with `self`.
    /// Aborted calls fail with [`RequestError::Cancelled`].
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self {
            cancellation: Some(token),
            ..self.clone()
        }
    }

    /// The per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a signed GET request with an empty body.
    pub(crate) async fn get<R>(&self, endpoint: &str) -> Result<R, BitflyerError>
    where
        R: DeserializeOwned,
    {
        self.execute(Method::GET, endpoint, Vec::new()).await
    }

    /// Make a signed GET request with query parameters.
    ///
    /// The query string is part of the signed path.
    pub(crate) async fn get_with_params<R, Q>(
        &self,
        endpoint: &str,
        params: &Q,
    ) -> Result<R, BitflyerError>
    where
        R: DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        let query_string = serde_urlencoded::to_string(params)
            .map_err(|e| BitflyerError::Encode(<serde_json::Error as serde::ser::Error>::custom(e)))?;
        if query_string.is_empty() {
            self.get(endpoint).await
        } else {
            let path = format!("{}?{}", endpoint, query_string);
            self.execute(Method::GET, &path, Vec::new()).await
        }
    }

    /// Make a signed POST request with a JSON body.
    ///
    /// The error envelope is not checked: the response type carries
    /// `status` and `error_message` itself.
    pub(crate) async fn post<R, B>(&self, endpoint: &str, body: &B) -> Result<R, BitflyerError>
    where
        R: DeserializeOwned,
        B: serde::Serialize + ?Sized,
    {
        let body = serde_json::to_vec(body).map_err(BitflyerError::Encode)?;
        let response = self.send_signed(Method::POST, endpoint, body).await?;
        decode_body(&response)
    }

    async fn execute<R>(&self, method: Method, path: &str, body: Vec<u8>) -> Result<R, BitflyerError>
    where
        R: DeserializeOwned,
    {
        let response = self.send_signed(method, path, body).await?;
        parse_response(response)
    }

    /// Sign and send one request, bounded by the timeout and cancellation token.
    async fn send_signed(
        &self,
        method: Method,
        path: &str,
        body: Vec<u8>,
    ) -> Result<HttpResponse, RequestError> {
        let url = Url::parse(&format!("{}{}", self.base_url, path))?;
        let credentials = self.credentials.get_credentials();

        // The timestamp is read here and the request is handed to the transport
        // without any await in between.
        let signed = SignedHeaders::sign(
            credentials,
            self.clock.unix_timestamp(),
            method.as_str(),
            path,
            &body,
        );

        let mut headers = HeaderMap::with_capacity(4);
        for (name, value) in signed.headers(credentials) {
            let invalid = || RequestError::InvalidHeader { name };
            let key = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
            let value = HeaderValue::from_str(value).map_err(|_| invalid())?;
            headers.insert(key, value);
        }

        tracing::debug!(method = %method, path, "Sending bitFlyer request");

        let request = HttpRequest {
            method,
            url,
            headers,
            body,
        };
        let send = tokio::time::timeout(self.timeout, self.transport.send(request));

        let outcome = match &self.cancellation {
            Some(token) => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => return Err(RequestError::Cancelled),
                    outcome = send => outcome,
                }
            }
            None => send.await,
        };

        let response = outcome.map_err(|_| RequestError::Timeout(self.timeout))??;

        tracing::debug!(
            status = %response.status,
            bytes = response.body.len(),
            "Received bitFlyer response"
        );

        Ok(response)
    }
}

/// Error body returned by bitFlyer, e.g. `{"status":-200,"error_message":"..."}`.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    status: Option<i64>,
    #[serde(default)]
    error_message: Option<String>,
}

/// Decode a response, surfacing exchange rejections first.
fn parse_response<R>(response: HttpResponse) -> Result<R, BitflyerError>
where
    R: DeserializeOwned,
{
    // bitFlyer reports rejections in the body with 200 as well as 4xx statuses.
    if let Ok(envelope) = serde_json::from_slice::<ErrorEnvelope>(&response.body) {
        if let Some(message) = envelope.error_message.filter(|m| !m.is_empty()) {
            return Err(BitflyerError::Exchange(ExchangeError::new(
                envelope.status,
                message,
            )));
        }
    }

    decode_body(&response)
}

fn decode_body<R>(response: &HttpResponse) -> Result<R, BitflyerError>
where
    R: DeserializeOwned,
{
    serde_json::from_slice(&response.body).map_err(|source| BitflyerError::Decode {
        source,
        body: String::from_utf8_lossy(&response.body).into_owned(),
    })
}

impl<T> Clone for BitflyerRestClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            base_url: self.base_url.clone(),
            credentials: Arc::clone(&self.credentials),
            clock: Arc::clone(&self.clock),
            timeout: self.timeout,
            cancellation: self.cancellation.clone(),
        }
    }
}

impl<T> std::fmt::Debug for BitflyerRestClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitflyerRestClient")
            .field("base_url", &self.base_url)
            .field("api_key", &self.credentials.get_credentials().api_key)
            .field("timeout", &self.timeout)
            .field("cancellable", &self.cancellation.is_some())
            .finish()
    }
}

/// Builder for [`BitflyerRestClient`].
pub struct BitflyerRestClientBuilder {
    base_url: String,
    credentials: Arc<dyn CredentialsProvider>,
    timestamp_provider: Option<Arc<dyn TimestampProvider>>,
    user_agent: Option<String>,
    timeout: Duration,
}

impl BitflyerRestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new(credentials: Arc<dyn CredentialsProvider>) -> Self {
        Self {
            base_url: BITFLYER_BASE_URL.to_string(),
            credentials,
            timestamp_provider: None,
            user_agent: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set a custom timestamp provider.
    pub fn timestamp_provider(mut self, provider: Arc<dyn TimestampProvider>) -> Self {
        self.timestamp_provider = Some(provider);
        self
    }

    /// Set a custom user agent for the default transport.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the per-request timeout, covering connect, send, and body read.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client with the default `reqwest` transport.
    pub fn build(self) -> BitflyerRestClient<ReqwestTransport> {
        let user_agent = self.user_agent.clone().unwrap_or_else(default_user_agent);
        let transport = ReqwestTransport::with_user_agent(&user_agent);
        self.build_with_transport(transport)
    }

    /// Build the client around a custom transport.
    pub fn build_with_transport<T: HttpTransport>(self, transport: T) -> BitflyerRestClient<T> {
        let clock = self
            .timestamp_provider
            .unwrap_or_else(|| Arc::new(SystemClock::new()));

        BitflyerRestClient {
            transport: Arc::new(transport),
            base_url: self.base_url,
            credentials: self.credentials,
            clock,
            timeout: self.timeout,
            cancellation: None,
        }
    }
}

// BitflyerClient trait implementation.

impl<T: HttpTransport> BitflyerClient for BitflyerRestClient<T> {
    async fn get_order_book(&self) -> Result<OrderBook, BitflyerError> {
        BitflyerRestClient::get_order_book(self).await
    }

    async fn get_ticker(&self) -> Result<Ticker, BitflyerError> {
        BitflyerRestClient::get_ticker(self).await
    }

    async fn get_balance(&self) -> Result<AssetBalance, BitflyerError> {
        BitflyerRestClient::get_balance(self).await
    }

    async fn new_order(&self, order: Order) -> Result<Order, BitflyerError> {
        BitflyerRestClient::new_order(self, order).await
    }
}
