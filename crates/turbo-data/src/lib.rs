//! HTTP fetch client for TurboShop.
//!
//! A thin builder API over `reqwest` that resolves paths against a base URL,
//! applies default headers and a request timeout, and buffers the response so
//! callers can inspect status and decode JSON.
//!
//! # Example
//!
//! ```rust,ignore
//! use turbo_data::FetchClient;
//!
//! let client = FetchClient::new().with_base_url("https://dummyjson.com");
//!
//! let body: serde_json::Value = client
//!     .get("/products?limit=10&skip=0")
//!     .send()
//!     .await?
//!     .error_for_status()?
//!     .json()?;
//! ```

mod error;
mod request;
mod response;

use std::collections::HashMap;
use std::time::Duration;

pub use error::FetchError;
pub use request::RequestBuilder;
pub use response::Response;

/// HTTP client for making outbound requests.
#[derive(Debug, Clone)]
pub struct FetchClient {
    http: reqwest::Client,
    base_url: Option<String>,
    default_headers: HashMap<String, String>,
    timeout: Option<Duration>,
}

impl Default for FetchClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchClient {
    /// Create a new HTTP client.
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: None,
            default_headers: HashMap::new(),
            timeout: None,
        }
    }

    /// Create a client with a base URL that will be prepended to relative paths.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a default header that will be included in all requests.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Apply a timeout to every request sent by this client.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Resolve a path against the base URL. Absolute URLs pass through.
    pub fn resolve_url(&self, url: &str) -> String {
        match &self.base_url {
            Some(base) if !(url.starts_with("http://") || url.starts_with("https://")) => {
                format!("{}{}", base.trim_end_matches('/'), url)
            }
            _ => url.to_string(),
        }
    }

    /// Create a GET request.
    pub fn get(&self, url: impl AsRef<str>) -> ClientRequestBuilder {
        let mut builder = RequestBuilder::new(self.resolve_url(url.as_ref()));
        for (key, value) in &self.default_headers {
            builder = builder.header(key.clone(), value.clone());
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        ClientRequestBuilder {
            http: self.http.clone(),
            builder,
        }
    }
}

/// A request builder bound to a client.
pub struct ClientRequestBuilder {
    http: reqwest::Client,
    builder: RequestBuilder,
}

impl ClientRequestBuilder {
    /// The resolved URL this request will hit.
    pub fn url(&self) -> &str {
        self.builder.url()
    }

    /// Send the request and buffer the response.
    pub async fn send(self) -> Result<Response, FetchError> {
        self.builder.validate()?;

        let mut request = self.http.get(&self.builder.url);
        for (key, value) in &self.builder.headers {
            request = request.header(key.as_str(), value.as_str());
        }
        if let Some(timeout) = self.builder.timeout {
            request = request.timeout(timeout);
        }

        tracing::debug!(url = %self.builder.url, "sending request");
        let response = request.send().await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        tracing::debug!(
            url = %self.builder.url,
            status,
            bytes = body.len(),
            "response received"
        );
        Ok(Response::new(status, body))
    }
}
