//! HTTP mock server helpers for testing outbound HTTP calls.
//!
//! A thin wrapper around `wiremock` for declarative HTTP stubbing.
//!
//! # Quick Start
//!
//! ```ignore
//! use crate::common::http_mock::MockHttpServer;
//!
//! #[tokio::test]
//! async fn test_feed_fetch() {
//!     let server = MockHttpServer::start().await;
//!
//!     server
//!         .expect_get("/legislators-current.json")
//!         .respond_with_json(json!([]))
//!         .mount()
//!         .await;
//!
//!     // Your code calls server.url_for("/legislators-current.json")
//! }
//! ```
//!
//! # Patterns
//!
//! - **Success response**: `.respond_with_json(value)` or `.respond_with_body(string)`
//! - **Error response**: `.respond_with_status(500)`
//! - **Timeout simulation**: `.respond_with_delay(Duration::from_secs(30))`
//! - **Request verification**: `.expect_times(1)` to assert call count

use std::time::Duration;

use serde_json::Value;
pub use wiremock::matchers::{header, method, path};
pub use wiremock::MockServer as WiremockServer;
pub use wiremock::{Mock, ResponseTemplate};

/// A stub HTTP server bound to a random local port.
pub struct MockHttpServer {
    server: WiremockServer,
}

impl MockHttpServer {
    pub async fn start() -> Self {
        Self {
            server: WiremockServer::start().await,
        }
    }

    /// Base URL, without a trailing slash.
    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// Absolute URL for `path` on this server.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{path}", self.server.uri())
    }

    /// The underlying wiremock server, for matchers this wrapper lacks.
    pub const fn inner(&self) -> &WiremockServer {
        &self.server
    }

    /// Start stubbing a `GET` of `path`. Defaults to an empty 200.
    pub fn expect_get(&self, path: &str) -> StubBuilder<'_> {
        StubBuilder {
            server: &self.server,
            path: path.to_string(),
            headers: Vec::new(),
            status: 200,
            body: None,
            delay: None,
            times: None,
        }
    }
}

enum StubBody {
    Text { body: String, mime: &'static str },
    Json(Value),
}

/// Builder for a single stubbed route.
pub struct StubBuilder<'a> {
    server: &'a WiremockServer,
    path: String,
    headers: Vec<(String, String)>,
    status: u16,
    body: Option<StubBody>,
    delay: Option<Duration>,
    times: Option<u64>,
}

impl StubBuilder<'_> {
    /// Only match requests carrying this header value.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn respond_with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    pub fn respond_with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(StubBody::Text {
            body: body.into(),
            mime: "text/plain",
        });
        self
    }

    pub fn respond_with_xml(mut self, body: impl Into<String>) -> Self {
        self.body = Some(StubBody::Text {
            body: body.into(),
            mime: "text/xml",
        });
        self
    }

    pub fn respond_with_json(mut self, body: Value) -> Self {
        self.body = Some(StubBody::Json(body));
        self
    }

    pub fn respond_with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Fail verification on drop unless the route was hit exactly `times` times.
    pub fn expect_times(mut self, times: u64) -> Self {
        self.times = Some(times);
        self
    }

    pub async fn mount(self) {
        let mut template = ResponseTemplate::new(self.status);
        match self.body {
            Some(StubBody::Text { body, mime }) => {
                template = template.set_body_raw(body, mime);
            }
            Some(StubBody::Json(value)) => {
                template = template.set_body_json(value);
            }
            None => {}
        }
        if let Some(delay) = self.delay {
            template = template.set_delay(delay);
        }

        let mut builder = Mock::given(method("GET")).and(path(self.path));
        for (name, value) in &self.headers {
            builder = builder.and(header(name.as_str(), value.as_str()));
        }

        let mut mock = builder.respond_with(template);
        if let Some(times) = self.times {
            mock = mock.expect(times);
        }
        mock.mount(self.server).await;
    }
}
