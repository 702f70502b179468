//! Page builder and client for the Notion API.
//!
//! This crate accumulates typed property values and child blocks for a new
//! page, flattens them into the create-page payload and submits it with a
//! single authenticated POST.
//!
//! # Usage
//!
//! ```no_run
//! use notion::{blocks, ApiConfig, NotionClient, PageRequestBuilder};
//!
//! # async fn run() -> Result<(), notion::NotionError> {
//! let client = NotionClient::with_reqwest(ApiConfig::from_env())?;
//!
//! let mut page = PageRequestBuilder::new();
//! page.title("Weekly report")
//!     .number("Count", 5)
//!     .multi_select("Tags", ["ops", "weekly"])
//!     .checkbox("Done", true)
//!     .child(blocks::paragraph("All systems nominal."));
//!
//! let created = client.create_page(page).await?;
//! println!("created {:?}", created.id);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! [`ApiConfig::from_env`] reads:
//!
//! - `NOTION_API_URL`: API base URL (default `https://api.notion.com/v1`)
//! - `NOTION_API_VERSION`: `Notion-Version` header (default `2022-06-28`)
//! - `NOTION_API_KEY`: integration token
//! - `NOTION_DATABASE_ID`: parent database
//! - `NOTION_PAGE_PATH`: endpoint path (default `/pages`)
//!
//! # Architecture
//!
//! - [`PageRequestBuilder`] records declarations in call order
//! - [`Properties`] flattens them, last write wins per property name
//! - [`NotionClient`] validates config and hands the request to a [`Transport`]
//! - [`ReqwestTransport`] is the default transport

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod blocks;
pub mod client;
pub mod config;
pub mod error;
pub mod page;
pub mod property;
pub mod transport;

pub use client::{CreatedPage, NotionClient};
pub use config::ApiConfig;
pub use error::NotionError;
pub use page::{PageRequest, PageRequestBuilder, TITLE_PROPERTY};
pub use property::{Properties, PropertyDeclaration, PropertyKind, PropertyValue};
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
