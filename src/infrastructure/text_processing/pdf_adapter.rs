use std::io::Write;
use std::time::Duration;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;

use crate::application::ports::{TextExtractor, TextExtractorError};
use crate::application::services::normalize_text;

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// PDF-to-text adapter. Bytes are staged in a temp file that is removed on
/// every exit path; the blocking extraction runs off the async runtime under
/// a hard timeout.
#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    fn extract_pages(path: &std::path::Path) -> Result<Vec<String>, TextExtractorError> {
        let mut doc = PdfDocument::open(path).map_err(|e| {
            TextExtractorError::ExtractionFailed(format!("failed to parse PDF: {e}"))
        })?;

        let page_count = doc.page_count().map_err(|e| {
            TextExtractorError::ExtractionFailed(format!("failed to read page count: {e}"))
        })?;

        let mut pages = Vec::with_capacity(page_count);

        for page_index in 0..page_count {
            let text = doc.extract_text(page_index).unwrap_or_default();

            if !text.trim().is_empty() {
                pages.push(text);
            }
        }

        Ok(pages)
    }
}

#[async_trait]
impl TextExtractor for PdfAdapter {
    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    async fn extract_text(&self, data: &[u8]) -> Result<String, TextExtractorError> {
        let mut temp_file = tempfile::NamedTempFile::new().map_err(|e| {
            TextExtractorError::ExtractionFailed(format!("failed to create temp file: {e}"))
        })?;

        temp_file.write_all(data).map_err(|e| {
            TextExtractorError::ExtractionFailed(format!("failed to write temp file: {e}"))
        })?;

        let temp_path = temp_file.path().to_path_buf();

        let pages = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_pages(&temp_path)),
        )
        .await
        .map_err(|_| {
            TextExtractorError::ExtractionFailed("PDF extraction timed out".to_string())
        })?
        .map_err(|e| TextExtractorError::ExtractionFailed(format!("task join error: {e}")))??;

        let page_count = pages.len();
        tracing::info!(page_count, "PDF text extraction complete");

        Ok(normalize_text(&pages.join("\n\n")))
    }
}
