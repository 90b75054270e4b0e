//! HTTP request builder.

use std::collections::HashMap;
use std::time::Duration;

use crate::FetchError;

/// A builder for constructing outbound GET requests.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    pub(crate) url: String,
    pub(crate) headers: HashMap<String, String>,
    pub(crate) timeout: Option<Duration>,
}

impl RequestBuilder {
    /// Create a new request builder for the given absolute URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: HashMap::new(),
            timeout: None,
        }
    }

    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set a per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// The fully resolved URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Reject URLs that no HTTP client could send.
    pub(crate) fn validate(&self) -> Result<(), FetchError> {
        if self.url.starts_with("http://") || self.url.starts_with("https://") {
            Ok(())
        } else {
            Err(FetchError::InvalidUrl(self.url.clone()))
        }
    }
}
