use async_trait::async_trait;

/// Fetches a web page and reduces it to readable, boilerplate-free text.
///
/// Implementations validate the URL before touching the network and cap the
/// returned text at the clean-text character budget.
#[async_trait]
pub trait WebImporter: Send + Sync {
    async fn fetch_readable_text(&self, url: &str) -> Result<String, WebImportError>;
}

/// Error messages double as the user-facing response text, so each variant
/// carries a complete, actionable sentence.
#[derive(Debug, thiserror::Error)]
pub enum WebImportError {
    #[error("Invalid URL. Please include http(s)://")]
    InvalidUrl,
    #[error("This URL points to a non-HTML file. Please paste a web page URL.")]
    NonHtmlFile,
    #[error("Failed to fetch the URL: {0}")]
    FetchFailed(String),
    #[error(
        "This site blocked server-side fetching (403). \
         Use the Contextify Bookmarklet to import directly from your browser."
    )]
    Blocked,
    #[error("URL returned HTTP {0}")]
    HttpStatus(u16),
    #[error("URL did not return HTML content.")]
    NotHtml,
}
