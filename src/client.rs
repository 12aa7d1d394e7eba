//! Scripture API client.
//!
//! Holds the credential, base URL and transport, and turns an [`Endpoint`]
//! into decoded JSON. Per-resource methods live next to their request types
//! in `resources`.

use std::sync::Arc;

use serde_json::Value;
use url::Url;

use crate::error::{Result, ScriptureError};
use crate::traits::Endpoint;
use crate::transport::{ApiKey, HttpTransport, RawResponse, Transport};

/// Base URL of the public API.
pub const DEFAULT_BASE_URL: &str = "https://api.scripture.api.bible/v1";

/// Scripture API client.
///
/// One method per API resource; every call issues exactly one GET request
/// and returns the decoded JSON body as-is.
///
/// This struct is cheaply cloneable; clones share the transport. It holds
/// no mutable state, so calls may run concurrently.
///
/// # Example
///
/// ```no_run
/// use scripture_api::{BiblesParams, ScriptureClient};
///
/// # async fn example() -> scripture_api::Result<()> {
/// let client = ScriptureClient::new("your-api-key")?;
///
/// let bibles = client
///     .get_bibles(&BiblesParams::new().language("eng"))
///     .await?;
/// println!("{}", bibles["data"]);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ScriptureClient {
    transport: Arc<dyn Transport>,
    base_url: Arc<Url>,
    api_key: ApiKey,
}

impl std::fmt::Debug for ScriptureClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScriptureClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl ScriptureClient {
    /// Create a client for the public API.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(api_key: impl Into<ApiKey>) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a client against another base URL (e.g. a mock server).
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client cannot
    /// be built.
    pub fn with_base_url(api_key: impl Into<ApiKey>, base_url: &str) -> Result<Self> {
        Self::with_transport(api_key, base_url, HttpTransport::new()?)
    }

    /// Create a client that sends requests through a custom [`Transport`].
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn with_transport<T>(api_key: impl Into<ApiKey>, base_url: &str, transport: T) -> Result<Self>
    where
        T: Transport + 'static,
    {
        // Ensure base URL ends with / so joins keep its path
        let base_url_str = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };

        Ok(Self {
            transport: Arc::new(transport),
            base_url: Arc::new(Url::parse(&base_url_str)?),
            api_key: api_key.into(),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build the full URL for a request.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptureError::InvalidParameter`] if an id is `.` or `..`,
    /// which URL resolution would treat as a dot segment even when
    /// percent-encoded, or an error if the path cannot be joined onto the
    /// base URL.
    pub fn url_for<E: Endpoint + ?Sized>(&self, endpoint: &E) -> Result<Url> {
        if let Some(segment) = endpoint
            .segments()
            .into_iter()
            .find(|s| matches!(*s, "." | ".."))
        {
            return Err(ScriptureError::InvalidParameter(format!(
                "id '{segment}' is not addressable as a path segment"
            )));
        }

        let mut url = self.base_url.join(&endpoint.path())?;

        let query = endpoint.query();
        if !query.is_empty() {
            url.set_query(Some(&query.to_query_string()));
        }

        Ok(url)
    }

    /// Send a request and decode its JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptureError::Network`] if the request cannot complete and
    /// [`ScriptureError::ApiRequest`] for non-2xx responses or bodies that
    /// are not JSON.
    pub async fn fetch<E: Endpoint + ?Sized>(&self, endpoint: &E) -> Result<Value> {
        let url = self.url_for(endpoint)?;
        let response = self.transport.get(url, &self.api_key).await?;
        Self::decode_response(response)
    }

    /// Check response status and decode the body.
    fn decode_response(response: RawResponse) -> Result<Value> {
        let status = response.status;

        if response.is_success() {
            return serde_json::from_str(&response.body).map_err(|e| ScriptureError::ApiRequest {
                message: format!("invalid JSON in response body: {e}"),
                status_code: Some(status),
                payload: None,
            });
        }

        let payload = serde_json::from_str::<Value>(&response.body).ok();
        let message = Self::extract_error_message(payload.as_ref(), &response.body, status);
        tracing::debug!(status, %message, "API returned an error");

        Err(ScriptureError::ApiRequest {
            message,
            status_code: Some(status),
            payload,
        })
    }

    /// Extract an error message from a failed response.
    fn extract_error_message(payload: Option<&Value>, body: &str, status: u16) -> String {
        if let Some(json) = payload {
            if let Some(msg) = json.get("message").and_then(|m| m.as_str()) {
                return msg.to_string();
            }
            if let Some(err) = json.get("error").and_then(|m| m.as_str()) {
                return err.to_string();
            }
        }

        if body.trim().is_empty() {
            format!("HTTP {status}")
        } else {
            body.to_string()
        }
    }
}
