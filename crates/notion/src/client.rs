//! Page creation client.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, info};

use crate::config::ApiConfig;
use crate::error::NotionError;
use crate::page::{PageRequest, PageRequestBuilder};
use crate::transport::{HttpRequest, ReqwestTransport, Transport};

/// The only status treated as success.
const SUCCESS_STATUS: u16 = 200;

/// Identifiers of a page the service reported as created.
///
/// Both fields are read best-effort from the 200 response body and are `None`
/// when the body does not carry them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreatedPage {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Creates pages in the configured database.
#[derive(Clone)]
pub struct NotionClient {
    config: ApiConfig,
    transport: Arc<dyn Transport>,
}

impl NotionClient {
    /// Create a client over an injected transport.
    #[must_use]
    pub fn new(config: ApiConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    /// Create a client with a default reqwest transport.
    ///
    /// # Errors
    /// Returns error if HTTP client cannot be created.
    pub fn with_reqwest(config: ApiConfig) -> Result<Self, NotionError> {
        Ok(Self::new(config, Arc::new(ReqwestTransport::new()?)))
    }

    #[must_use]
    pub const fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Build the draft for the configured database and submit it.
    ///
    /// # Errors
    /// See [`NotionClient::submit`].
    pub async fn create_page(
        &self,
        builder: PageRequestBuilder,
    ) -> Result<CreatedPage, NotionError> {
        let request = builder.build(self.config.database_id());
        self.submit(&request).await
    }

    /// Boolean form of [`NotionClient::create_page`]: `true` only on HTTP 200.
    pub async fn create_page_ok(&self, builder: PageRequestBuilder) -> bool {
        self.create_page(builder).await.is_ok()
    }

    /// Send a prepared payload with a single POST.
    ///
    /// # Errors
    /// - [`NotionError::MissingConfig`] before any network activity when a
    ///   configuration value is empty
    /// - [`NotionError::Http`] / [`NotionError::Transport`] when no response arrives
    /// - [`NotionError::Rejected`] for any status other than 200
    pub async fn submit(&self, request: &PageRequest) -> Result<CreatedPage, NotionError> {
        let http_request = self.prepare(request)?;

        debug!(
            url = %http_request.url,
            properties = request.properties().len(),
            children = request.children().len(),
            "Submitting page"
        );

        let response = self.transport.post_json(http_request).await?;

        if response.status != SUCCESS_STATUS {
            debug!(status = response.status, "Page creation rejected");
            return Err(NotionError::Rejected {
                status: response.status,
                body: response.body,
            });
        }

        let page: CreatedPage = serde_json::from_str(&response.body).unwrap_or_default();
        info!(page_id = ?page.id, "Page created");
        Ok(page)
    }

    /// Validate configuration and assemble URL, headers and body.
    ///
    /// # Errors
    /// Returns [`NotionError::MissingConfig`] or a serialization error.
    pub fn prepare(&self, request: &PageRequest) -> Result<HttpRequest, NotionError> {
        self.config.validate()?;

        Ok(HttpRequest {
            url: self.config.endpoint(),
            headers: vec![
                ("Accept".to_string(), "application/json".to_string()),
                ("Notion-Version".to_string(), self.config.version().to_string()),
                (
                    "Authorization".to_string(),
                    format!("Bearer {}", self.config.token()),
                ),
            ],
            body: request.to_json()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{HttpResponse, MockTransport};
    use serde_json::json;

    fn config() -> ApiConfig {
        ApiConfig::new("https://api.notion.com/v1", "2022-06-28", "secret_abc", "db123")
    }

    fn responding(status: u16, body: &str) -> MockTransport {
        let body = body.to_string();
        let mut transport = MockTransport::new();
        transport.expect_post_json().times(1).returning(move |_| {
            Ok(HttpResponse {
                status,
                body: body.clone(),
            })
        });
        transport
    }

    fn report() -> PageRequestBuilder {
        let mut builder = PageRequestBuilder::new();
        builder
            .title("Report")
            .number("Count", 5)
            .checkbox("Done", true);
        builder
    }

    #[tokio::test]
    async fn test_end_to_end_request_shape() {
        let mut transport = MockTransport::new();
        transport
            .expect_post_json()
            .withf(|request| {
                request.url == "https://api.notion.com/v1/pages"
                    && request.header("Accept") == Some("application/json")
                    && request.header("Notion-Version") == Some("2022-06-28")
                    && request.header("Authorization") == Some("Bearer secret_abc")
                    && request.body
                        == json!({
                            "parent": {"database_id": "db123"},
                            "properties": {
                                "Name": {"title": [{"text": {"content": "Report"}}]},
                                "Count": {"number": 5},
                                "Done": {"checkbox": true}
                            },
                            "children": []
                        })
            })
            .times(1)
            .returning(|_| {
                Ok(HttpResponse {
                    status: 200,
                    body: r#"{"object":"page","id":"page-1","url":"https://www.notion.so/page-1"}"#
                        .to_string(),
                })
            });

        let client = NotionClient::new(config(), Arc::new(transport));
        let page = client.create_page(report()).await.unwrap();

        assert_eq!(page.id.as_deref(), Some("page-1"));
        assert_eq!(page.url.as_deref(), Some("https://www.notion.so/page-1"));
    }

    #[tokio::test]
    async fn test_only_200_is_success() {
        for status in [201, 204, 301, 400, 401, 429, 500] {
            let client = NotionClient::new(config(), Arc::new(responding(status, "{}")));
            let err = client.create_page(report()).await.unwrap_err();
            assert_eq!(err.status(), Some(status), "status {status}");
        }

        let client = NotionClient::new(config(), Arc::new(responding(200, "{}")));
        assert!(client.create_page_ok(report()).await);
    }

    #[tokio::test]
    async fn test_rejection_preserves_body() {
        let body = r#"{"object":"error","status":400,"code":"validation_error"}"#;
        let client = NotionClient::new(config(), Arc::new(responding(400, body)));

        match client.create_page(report()).await {
            Err(NotionError::Rejected { status, body: got }) => {
                assert_eq!(status, 400);
                assert_eq!(got, body);
            }
            other => panic!("expected rejection, got {other:?}"),
        }
        assert!(!NotionClient::new(config(), Arc::new(responding(400, body)))
            .create_page_ok(report())
            .await);
    }

    #[tokio::test]
    async fn test_unparseable_success_body_is_still_success() {
        let client = NotionClient::new(config(), Arc::new(responding(200, "not json")));
        let page = client.create_page(report()).await.unwrap();
        assert_eq!(page, CreatedPage::default());
    }

    #[tokio::test]
    async fn test_missing_config_fails_before_sending() {
        let mut transport = MockTransport::new();
        transport.expect_post_json().never();

        let client = NotionClient::new(config().with_token(""), Arc::new(transport));
        let err = client.create_page(report()).await.unwrap_err();
        assert!(matches!(err, NotionError::MissingConfig("token")));
    }

    #[tokio::test]
    async fn test_transport_failure_propagates() {
        let mut transport = MockTransport::new();
        transport
            .expect_post_json()
            .times(1)
            .returning(|_| Err(NotionError::Transport("connection refused".to_string())));

        let client = NotionClient::new(config(), Arc::new(transport));
        let err = client.create_page(report()).await.unwrap_err();
        assert!(matches!(err, NotionError::Transport(_)));
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_prepare_uses_configured_path() {
        let client = NotionClient::new(
            config().with_page_path("/v1/pages").with_base_url("http://127.0.0.1:9"),
            Arc::new(MockTransport::new()),
        );
        let request = report().build("db123");

        let prepared = client.prepare(&request).unwrap();
        assert_eq!(prepared.url, "http://127.0.0.1:9/v1/pages");
        assert_eq!(prepared.headers.len(), 3);
    }
}
