//! HTTP transport seam.
//!
//! The client never talks to the network itself. It hands a fully prepared
//! [`HttpRequest`] to a [`Transport`], which owns TLS, pooling and timeouts.

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::error::NotionError;

/// A JSON POST ready to be sent.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Value,
}

impl HttpRequest {
    /// First header value with the given name (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status and raw body of a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Sends JSON POST requests on behalf of the client.
///
/// Implementations report network-level failures as errors and return every
/// HTTP response, whatever its status, as `Ok`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_json(&self, request: HttpRequest) -> Result<HttpResponse, NotionError>;
}

/// [`Transport`] backed by a shared `reqwest::Client`.
///
/// Redirects are never followed: a 3xx is returned to the client as-is and
/// counts as a failed submission.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with redirects disabled.
    ///
    /// # Errors
    /// Returns error if HTTP client cannot be created.
    pub fn new() -> Result<Self, NotionError> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self { client })
    }

    /// Wrap an existing client, e.g. one configured with a timeout.
    ///
    /// The client should be built with `redirect::Policy::none()`, otherwise a
    /// redirected request is reported with the status of its final target.
    #[must_use]
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn post_json(&self, request: HttpRequest) -> Result<HttpResponse, NotionError> {
        let mut builder = self.client.post(&request.url).json(&request.body);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();

        // The status is final once headers arrive; a 200 whose body cannot be
        // read still created the page.
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                debug!(url = %request.url, status, error = %e, "Failed to read response body");
                String::new()
            }
        };

        debug!(url = %request.url, status, "Received response");

        Ok(HttpResponse { status, body })
    }
}
