use async_trait::async_trait;

/// Turns an uploaded document's bytes into normalized plain text.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract_text(&self, data: &[u8]) -> Result<String, TextExtractorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TextExtractorError {
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
}
