//! CLI for creating a single Notion page.
//!
//! Run `notion-page --help` for usage information.

// CLI binaries legitimately need println! for user output
#![allow(clippy::disallowed_macros)]

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use notion::config::{DEFAULT_API_URL, DEFAULT_API_VERSION, DEFAULT_PAGE_PATH};
use notion::{blocks, ApiConfig, NotionClient, PageRequestBuilder};
use serde_json::{Number, Value};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "notion-page")]
#[command(about = "Create a page in a Notion database")]
#[command(version)]
struct Cli {
    /// API base URL
    #[arg(long, env = "NOTION_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Value of the Notion-Version header
    #[arg(long, env = "NOTION_API_VERSION", default_value = DEFAULT_API_VERSION)]
    api_version: String,

    /// Integration token
    #[arg(long, env = "NOTION_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Parent database id
    #[arg(long, env = "NOTION_DATABASE_ID")]
    database_id: String,

    /// Endpoint path appended to the base URL
    #[arg(long, env = "NOTION_PAGE_PATH", default_value = DEFAULT_PAGE_PATH)]
    page_path: String,

    /// Page title (stored in the `Name` property)
    #[arg(long)]
    title: Option<String>,

    /// Rich text property, NAME=VALUE
    #[arg(long, value_parser = parse_pair)]
    text: Vec<(String, String)>,

    /// Number property, NAME=VALUE
    #[arg(long, value_parser = parse_number)]
    number: Vec<(String, Number)>,

    /// Select property, NAME=VALUE
    #[arg(long, value_parser = parse_pair)]
    select: Vec<(String, String)>,

    /// Multi-select property, NAME=a,b,c
    #[arg(long, value_parser = parse_pair)]
    multi_select: Vec<(String, String)>,

    /// URL property, NAME=VALUE
    #[arg(long, value_parser = parse_pair)]
    url: Vec<(String, String)>,

    /// Email property, NAME=VALUE
    #[arg(long, value_parser = parse_pair)]
    email: Vec<(String, String)>,

    /// Checkbox property, NAME=true|false
    #[arg(long, value_parser = parse_checkbox)]
    checkbox: Vec<(String, bool)>,

    /// Paragraph block appended to the page body
    #[arg(long)]
    paragraph: Vec<String>,

    /// JSON file holding an array of raw child blocks
    #[arg(long)]
    children_file: Option<PathBuf>,

    /// Print the request body instead of sending it
    #[arg(long)]
    dry_run: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_pair(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected NAME=VALUE, got `{raw}`"))
}

fn parse_number(raw: &str) -> Result<(String, Number), String> {
    let (name, value) = parse_pair(raw)?;
    let number = serde_json::from_str::<Number>(value.trim())
        .map_err(|_| format!("`{value}` is not a number"))?;
    Ok((name, number))
}

fn parse_checkbox(raw: &str) -> Result<(String, bool), String> {
    let (name, value) = parse_pair(raw)?;
    let checked = value
        .trim()
        .parse::<bool>()
        .map_err(|_| format!("`{value}` is not true or false"))?;
    Ok((name, checked))
}

fn read_children(path: &Path) -> Result<Vec<Value>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let value: Value = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    match value {
        Value::Array(blocks) => Ok(blocks),
        _ => bail!("{} must contain a JSON array of blocks", path.display()),
    }
}

fn build_page(cli: &Cli) -> Result<PageRequestBuilder> {
    let mut page = PageRequestBuilder::new();

    if let Some(title) = &cli.title {
        page.title(title.as_str());
    }
    for (name, value) in &cli.text {
        page.text(name.as_str(), value.as_str());
    }
    for (name, value) in &cli.number {
        page.number(name.as_str(), value.clone());
    }
    for (name, value) in &cli.select {
        page.select(name.as_str(), value.as_str());
    }
    for (name, values) in &cli.multi_select {
        let options = values.split(',').map(str::trim).filter(|v| !v.is_empty());
        page.multi_select(name.as_str(), options);
    }
    for (name, value) in &cli.url {
        page.url(name.as_str(), value.as_str());
    }
    for (name, value) in &cli.email {
        page.email(name.as_str(), value.as_str());
    }
    for (name, checked) in &cli.checkbox {
        page.checkbox(name.as_str(), *checked);
    }
    for text in &cli.paragraph {
        page.child(blocks::paragraph(text));
    }
    if let Some(path) = &cli.children_file {
        page.children(read_children(path)?);
    }

    Ok(page)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();

    let config = ApiConfig::new(
        cli.api_url.as_str(),
        cli.api_version.as_str(),
        cli.api_key.as_str(),
        cli.database_id.as_str(),
    )
    .with_page_path(cli.page_path.as_str());

    let page = build_page(&cli)?;

    if cli.dry_run {
        let request = page.build(config.database_id());
        println!("{}", serde_json::to_string_pretty(&request)?);
        return Ok(());
    }

    let client = NotionClient::with_reqwest(config)?;
    let created = client
        .create_page(page)
        .await
        .context("Failed to create page")?;

    match (created.id, created.url) {
        (Some(id), Some(url)) => println!("Created page {id} ({url})"),
        (Some(id), None) => println!("Created page {id}"),
        _ => println!("Created page"),
    }

    Ok(())
}
