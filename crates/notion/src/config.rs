//! API configuration for the page client.

use std::fmt;

use tracing::debug;

use crate::error::NotionError;

/// Environment variable for the API base URL.
pub const ENV_API_URL: &str = "NOTION_API_URL";

/// Environment variable for the `Notion-Version` header value.
pub const ENV_API_VERSION: &str = "NOTION_API_VERSION";

/// Environment variable for the integration token.
pub const ENV_API_KEY: &str = "NOTION_API_KEY";

/// Environment variable for the parent database id.
pub const ENV_DATABASE_ID: &str = "NOTION_DATABASE_ID";

/// Environment variable for the page creation path.
pub const ENV_PAGE_PATH: &str = "NOTION_PAGE_PATH";

/// Default API base URL.
pub const DEFAULT_API_URL: &str = "https://api.notion.com/v1";

/// Default API version.
pub const DEFAULT_API_VERSION: &str = "2022-06-28";

/// Default path of the page creation endpoint, relative to the base URL.
pub const DEFAULT_PAGE_PATH: &str = "/pages";

/// Connection settings for one Notion integration.
///
/// Values are opaque strings. Nothing is checked until [`ApiConfig::validate`],
/// which the client runs before every submission.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    version: String,
    token: String,
    database_id: String,
    page_path: String,
}

impl ApiConfig {
    /// Create a configuration from explicit values, using the default page path.
    #[must_use]
    pub fn new(
        base_url: impl Into<String>,
        version: impl Into<String>,
        token: impl Into<String>,
        database_id: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            version: version.into(),
            token: token.into(),
            database_id: database_id.into(),
            page_path: DEFAULT_PAGE_PATH.to_string(),
        }
    }

    /// Create a configuration from environment variables.
    ///
    /// The base URL, version and page path fall back to their defaults. A missing
    /// token or database id is left empty and reported by [`ApiConfig::validate`].
    #[must_use]
    pub fn from_env() -> Self {
        let read = |key: &str, default: &str| {
            std::env::var(key).unwrap_or_else(|_| default.to_string())
        };

        let config = Self {
            base_url: read(ENV_API_URL, DEFAULT_API_URL),
            version: read(ENV_API_VERSION, DEFAULT_API_VERSION),
            token: read(ENV_API_KEY, ""),
            database_id: read(ENV_DATABASE_ID, ""),
            page_path: read(ENV_PAGE_PATH, DEFAULT_PAGE_PATH),
        };

        debug!(config = ?config, "Loaded Notion configuration from environment");
        config
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    #[must_use]
    pub fn with_database_id(mut self, database_id: impl Into<String>) -> Self {
        self.database_id = database_id.into();
        self
    }

    /// Override the endpoint path appended to the base URL.
    #[must_use]
    pub fn with_page_path(mut self, page_path: impl Into<String>) -> Self {
        self.page_path = page_path.into();
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    #[must_use]
    pub fn database_id(&self) -> &str {
        &self.database_id
    }

    #[must_use]
    pub fn page_path(&self) -> &str {
        &self.page_path
    }

    /// Full URL of the page creation endpoint.
    ///
    /// Plain concatenation: the base URL must not end with the path separator
    /// that the page path starts with.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, self.page_path)
    }

    /// Fail on the first empty (or whitespace-only) field.
    ///
    /// # Errors
    /// Returns [`NotionError::MissingConfig`] naming the offending field.
    pub fn validate(&self) -> Result<(), NotionError> {
        let fields = [
            ("base_url", &self.base_url),
            ("version", &self.version),
            ("token", &self.token),
            ("database_id", &self.database_id),
            ("page_path", &self.page_path),
        ];

        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(NotionError::MissingConfig(name));
            }
        }

        Ok(())
    }
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = if self.token.is_empty() {
            "<unset>"
        } else {
            "<redacted>"
        };

        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("version", &self.version)
            .field("token", &token)
            .field("database_id", &self.database_id)
            .field("page_path", &self.page_path)
            .finish()
    }
}
