//! HTTP transport for scripture API requests.
//!
//! A [`Transport`] performs a single authenticated GET and hands back the
//! status and body untouched. Interpreting the status is left to
//! [`ScriptureClient`](crate::ScriptureClient).

use std::fmt;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::error::{Result, ScriptureError};

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "api-key";

/// User agent sent by [`HttpTransport`].
pub const USER_AGENT: &str = concat!("scripture-api/", env!("CARGO_PKG_VERSION"));

/// An API.Bible key.
///
/// The key is opaque to the client. Its `Debug` output is redacted so it
/// never ends up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw key, for building the request header.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

impl From<&str> for ApiKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for ApiKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl RawResponse {
    /// Returns true for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs the GET request behind every client call.
///
/// Implementations must send the key in the [`API_KEY_HEADER`] header and
/// must not retry. Any response that arrives, whatever its status, is
/// returned as `Ok`; only failures to complete the exchange are errors.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `GET url` with the given key.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptureError::Network`] if the request cannot complete.
    async fn get(&self, url: Url, api_key: &ApiKey) -> Result<RawResponse>;
}

/// [`Transport`] backed by a `reqwest` client.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    /// Build a transport with the crate user agent and compressed responses.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn new() -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .build()
            .map_err(ScriptureError::Network)?;

        Ok(Self { http })
    }

    /// Use a caller-configured `reqwest` client (timeouts, proxies, ...).
    pub fn with_client(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[tracing::instrument(skip(self, url, api_key), fields(url = %url))]
    async fn get(&self, url: Url, api_key: &ApiKey) -> Result<RawResponse> {
        let response = self
            .http
            .get(url)
            .header(API_KEY_HEADER, api_key.expose())
            .send()
            .await
            .map_err(ScriptureError::Network)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(ScriptureError::Network)?;
        tracing::debug!(status, bytes = body.len(), "response received");

        Ok(RawResponse { status, body })
    }
}
