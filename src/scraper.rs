use once_cell::sync::Lazy;
use reqwest::{Client, ClientBuilder, Proxy, Url};
use scraper::{ElementRef, Html, Selector};

use crate::error::FetchError;
use crate::models::ExtractedContent;

/// Elements that contribute a line to the extracted content.
pub const CONTENT_TAGS: &str = "h1, h2, h3, h4, h5, h6, p, ul, ol, li, a, img";

// Compiled once; the selector list is a constant
static CONTENT_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(CONTENT_TAGS).expect("Failed to parse content selector"));

pub fn build_client(proxy: Option<Proxy>) -> Result<Client, FetchError> {
    let mut builder = ClientBuilder::new();
    if let Some(proxy) = proxy {
        builder = builder.proxy(proxy);
    }
    builder.build().map_err(FetchError::Client)
}

pub fn parse_target(url: &str) -> Result<Url, FetchError> {
    let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(FetchError::InvalidUrl {
            url: url.to_string(),
            reason: format!("unsupported scheme {other}"),
        }),
    }
}

/// A fetched page along with the URL it was actually served from.
#[derive(Debug)]
pub struct FetchedPage {
    pub url: Url,
    pub html: String,
}

/// Issues a single GET. Non-2xx responses are treated as failures.
pub async fn fetch_html(client: &Client, url: Url) -> Result<FetchedPage, FetchError> {
    let response = client.get(url).send().await.map_err(FetchError::Request)?;

    let status = response.status();
    let final_url = response.url().clone();
    if !status.is_success() {
        return Err(FetchError::Status {
            status,
            url: final_url.to_string(),
        });
    }

    let html = response.text().await.map_err(FetchError::Request)?;
    tracing::debug!(url = %final_url, bytes = html.len(), "page fetched");

    Ok(FetchedPage { url: final_url, html })
}

/// Walks the matched elements in document order and renders one line each.
pub fn extract_content(html: &str) -> ExtractedContent {
    let document = Html::parse_document(html);
    let mut content = ExtractedContent::default();

    for element in document.select(&CONTENT_SELECTOR) {
        content.push(render_element(element));
    }

    content
}

fn render_element(element: ElementRef<'_>) -> String {
    match element.value().name() {
        "a" => format!(
            "Link: {} ({})",
            element.text().collect::<String>(),
            element.value().attr("href").unwrap_or("")
        ),
        "img" => format!("Image: {}", element.value().attr("src").unwrap_or("")),
        _ => element.text().collect(),
    }
}
