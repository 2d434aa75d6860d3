//! HTTP fetching for the upstream roster feeds.
//!
//! The [`Fetcher`] trait is the only way the adapters reach the network:
//!
//! - [`HttpClient`] - Real HTTP implementation using reqwest
//! - [`mock::MockFetcher`] - Canned bodies for unit tests (behind `test-utils` feature)
//!
//! # Example
//!
//! ```ignore
//! use articleone::http::{Fetcher, HttpClient};
//!
//! let client = HttpClient::new();
//! let url = "https://theunitedstates.io/congress-legislators/legislators-current.json";
//! let body = client.get(url).await?;
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

use crate::config::HttpConfig;

/// Errors that can occur when fetching a feed.
#[derive(Debug, Error)]
pub enum HttpError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered 401
    #[error("Authentication failed: {url}")]
    Authentication { url: String },

    /// Server answered 404
    #[error("Page not found: {url}")]
    NotFound { url: String },

    /// Server answered with a 5xx status
    #[error("Encountered a server error: {status} from {url}")]
    Server { status: u16, url: String },
}

/// Trait for fetching a document body.
///
/// Use `HttpClient` for real HTTP calls, or `mock::MockFetcher` in tests.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// GET `url` and return the response body as text.
    async fn get(&self, url: &str) -> Result<String, HttpError>;
}

/// Map an HTTP status to an error, or `None` when the body should be used.
///
/// Only 401, 404 and 5xx are errors; every other status passes the body
/// through unchanged.
#[must_use]
pub fn status_error(status: StatusCode, url: &str) -> Option<HttpError> {
    match status.as_u16() {
        401 => Some(HttpError::Authentication { url: url.to_string() }),
        404 => Some(HttpError::NotFound { url: url.to_string() }),
        code @ 500..=599 => Some(HttpError::Server {
            status: code,
            url: url.to_string(),
        }),
        _ => None,
    }
}

/// HTTP-based implementation of `Fetcher`.
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// Create a client with reqwest defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Create a client with a custom `reqwest::Client` (for testing with custom config).
    #[must_use]
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Create a client honoring the configured timeout and User-Agent.
    ///
    /// # Errors
    /// Returns an error if the underlying client cannot be built.
    pub fn from_config(config: &HttpConfig) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self { client })
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Fetcher for HttpClient {
    async fn get(&self, url: &str) -> Result<String, HttpError> {
        tracing::debug!(url, "fetching");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if let Some(err) = status_error(status, url) {
            tracing::warn!(url, status = status.as_u16(), "upstream rejected request");
            return Err(err);
        }

        let body = response.text().await?;
        tracing::debug!(url, status = status.as_u16(), bytes = body.len(), "fetched");
        Ok(body)
    }
}

#[cfg(any(test, feature = "test-utils"))]
#[allow(
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::missing_const_for_fn,
    clippy::must_use_candidate
)]
pub mod mock {
    //! Mock implementation for unit testing.

    use super::{Fetcher, HttpError};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Mock implementation of `Fetcher` for unit tests.
    ///
    /// Configure bodies with `set_body`/`set_result` and verify calls with
    /// `calls()`. A URL without a configured result answers `NotFound`.
    pub struct MockFetcher {
        results: Mutex<HashMap<String, Result<String, HttpError>>>,
        calls: Mutex<Vec<String>>,
    }

    impl MockFetcher {
        pub fn new() -> Self {
            Self {
                results: Mutex::new(HashMap::new()),
                calls: Mutex::new(Vec::new()),
            }
        }

        /// Answer the next `get(url)` with `body`.
        pub fn set_body(&self, url: &str, body: impl Into<String>) {
            self.set_result(url, Ok(body.into()));
        }

        /// Answer the next `get(url)` with `result`.
        pub fn set_result(&self, url: &str, result: Result<String, HttpError>) {
            self.results.lock().unwrap().insert(url.to_string(), result);
        }

        /// Get all URLs passed to `get`.
        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Default for MockFetcher {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl Fetcher for MockFetcher {
        async fn get(&self, url: &str) -> Result<String, HttpError> {
            self.calls.lock().unwrap().push(url.to_string());

            self.results
                .lock()
                .unwrap()
                .remove(url)
                .unwrap_or_else(|| Err(HttpError::NotFound { url: url.to_string() }))
        }
    }
}
