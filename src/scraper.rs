//! Web page text extraction.
//!
//! Uses reqwest for fetching and scraper for HTML parsing.

use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// User-Agent string identifying this fetcher
const USER_AGENT: &str = concat!("freqsum/", env!("CARGO_PKG_VERSION"));

/// Containers tried, in order, before falling back to the whole body
const MAIN_CONTAINERS: [&str; 5] = ["article", "main", "[role='main']", ".content", "#content"];

/// Blocks shorter than this are navigation crumbs, captions and the like
const MIN_BLOCK_CHARS: usize = 20;

#[derive(Error, Debug)]
pub enum ScraperError {
    #[error("failed to fetch URL: {0}")]
    FetchError(#[from] reqwest::Error),
    #[error("no readable text found at {0}")]
    NoContent(String),
}

/// Readable text of a web page
#[derive(Debug, Clone)]
pub struct WebPage {
    pub url: String,
    pub title: Option<String>,
    /// Paragraph text, blocks separated by blank lines
    pub text: String,
}

/// Fetch `url` and extract its readable text
pub async fn fetch_page(url: &str, timeout: Duration) -> Result<WebPage, ScraperError> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()?;

    let html = client.get(url).send().await?.error_for_status()?.text().await?;
    debug!(url, bytes = html.len(), "fetched page");
    parse_page(url, &html)
}

/// Extract the title and paragraph text from an HTML document
pub fn parse_page(url: &str, html: &str) -> Result<WebPage, ScraperError> {
    let document = Html::parse_document(html);

    let title = ["title", "h1"]
        .iter()
        .filter_map(|selector| first_text(&document, selector))
        .next();

    let text = MAIN_CONTAINERS
        .iter()
        .filter_map(|selector| Selector::parse(selector).ok())
        .filter_map(|selector| document.select(&selector).next())
        .map(block_text)
        .find(|text| !text.is_empty())
        .unwrap_or_else(|| block_text(document.root_element()));

    if text.is_empty() {
        return Err(ScraperError::NoContent(url.to_string()));
    }

    Ok(WebPage {
        url: url.to_string(),
        title,
        text,
    })
}

fn first_text(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    let element = document.select(&selector).next()?;
    let text = collapse_whitespace(element.text());
    (!text.is_empty()).then_some(text)
}

/// Paragraph and list item text under `root`, skipping short blocks
fn block_text(root: ElementRef<'_>) -> String {
    let Ok(blocks) = Selector::parse("p, li") else {
        return String::new();
    };

    root.select(&blocks)
        .map(|element| collapse_whitespace(element.text()))
        .filter(|text| text.chars().count() > MIN_BLOCK_CHARS)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn collapse_whitespace<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    let joined: String = parts.collect();
    joined.split_whitespace().collect::<Vec<_>>().join(" ")
}
