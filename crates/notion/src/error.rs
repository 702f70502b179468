//! Error types for page creation.

use thiserror::Error;

/// Errors that can occur when creating a page.
#[derive(Debug, Error)]
pub enum NotionError {
    /// A required configuration value is empty
    #[error("Missing configuration value: {0}")]
    MissingConfig(&'static str),

    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Transport failure reported by a non-reqwest transport
    #[error("Transport failure: {0}")]
    Transport(String),

    /// The service answered with something other than 200 OK
    #[error("Notion returned {status}: {body}")]
    Rejected { status: u16, body: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl NotionError {
    /// HTTP status of a rejected request, if the service answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}
