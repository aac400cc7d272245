use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CACHE_CONTROL, REFERER};
use reqwest::redirect::Policy;
use url::Url;

use crate::application::ports::{WebImportError, WebImporter};

use super::readability::extract_readable_text;

/// URL paths ending in one of these never contain an HTML page worth
/// fetching; rejected before any network traffic.
const BLOCKED_EXTENSIONS: [&str; 9] = [
    ".pdf", ".zip", ".jpg", ".jpeg", ".png", ".gif", ".webp", ".mp4", ".mp3",
];

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Web importer backed by a shared reqwest client with browser-like default
/// headers and bounded redirect following.
pub struct HttpWebImporter {
    client: reqwest::Client,
}

impl HttpWebImporter {
    /// `fetch_timeout` bounds each whole request, connect included.
    pub fn new(fetch_timeout: Duration) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            ),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
        headers.insert(REFERER, HeaderValue::from_static("https://www.google.com/"));

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .redirect(Policy::limited(10))
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(fetch_timeout)
            .build()?;

        Ok(Self { client })
    }

    fn validate(url: &str) -> Result<Url, WebImportError> {
        let parsed = Url::parse(url.trim()).map_err(|_| WebImportError::InvalidUrl)?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(WebImportError::InvalidUrl);
        }
        if parsed.host_str().map_or(true, str::is_empty) {
            return Err(WebImportError::InvalidUrl);
        }

        let path = parsed.path().to_lowercase();
        if BLOCKED_EXTENSIONS.iter().any(|ext| path.ends_with(ext)) {
            return Err(WebImportError::NonHtmlFile);
        }

        Ok(parsed)
    }
}

#[async_trait]
impl WebImporter for HttpWebImporter {
    #[tracing::instrument(skip(self))]
    async fn fetch_readable_text(&self, url: &str) -> Result<String, WebImportError> {
        let target = Self::validate(url)?;

        let response = self
            .client
            .get(target)
            .send()
            .await
            .map_err(|e| WebImportError::FetchFailed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::FORBIDDEN {
            tracing::warn!(%url, "Fetch rejected with 403");
            return Err(WebImportError::Blocked);
        }
        if !status.is_success() {
            return Err(WebImportError::HttpStatus(status.as_u16()));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_lowercase();
        if !content_type.contains("text/html") {
            return Err(WebImportError::NotHtml);
        }

        let html = response
            .text()
            .await
            .map_err(|e| WebImportError::FetchFailed(e.to_string()))?;

        let text = extract_readable_text(&html);
        tracing::debug!(chars = text.chars().count(), "Readable text extracted");

        Ok(text)
    }
}
