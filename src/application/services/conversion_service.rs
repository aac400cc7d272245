use std::sync::Arc;

use crate::application::ports::{
    TextExtractor, TextExtractorError, WebImportError, WebImporter,
};
use crate::application::services::{build_context, count_tokens, normalize_text};
use crate::domain::{Conversion, MAX_CLEAN_TEXT_CHARS};

/// Orchestrates the conversion pipeline: obtain clean text from one of the
/// three sources, enforce the character budget once, wrap it in the context
/// template, and count tokens.
pub struct ConversionService<E, W>
where
    E: TextExtractor,
    W: WebImporter,
{
    extractor: Arc<E>,
    web_importer: Arc<W>,
}

impl<E, W> ConversionService<E, W>
where
    E: TextExtractor,
    W: WebImporter,
{
    pub fn new(extractor: Arc<E>, web_importer: Arc<W>) -> Self {
        Self {
            extractor,
            web_importer,
        }
    }

    /// Convert an uploaded PDF. The extractor returns already-normalized
    /// clean text.
    pub async fn convert_pdf(&self, data: &[u8]) -> Result<Conversion, ConversionError> {
        let clean_text = self.extractor.extract_text(data).await?;
        self.finish(clean_text)
    }

    /// Convert pasted text through the normalizer.
    pub async fn convert_raw_text(&self, text: &str) -> Result<Conversion, ConversionError> {
        self.finish(normalize_text(text))
    }

    /// Convert a web page. The importer validates, fetches, and reduces the
    /// page to clean text capped at the character budget.
    pub async fn convert_url(&self, url: &str) -> Result<Conversion, ConversionError> {
        let clean_text = self.web_importer.fetch_readable_text(url).await?;
        self.finish(clean_text)
    }

    fn finish(&self, clean_text: String) -> Result<Conversion, ConversionError> {
        let chars = clean_text.chars().count();
        if chars > MAX_CLEAN_TEXT_CHARS {
            return Err(ConversionError::ContentTooLarge);
        }

        let context = build_context(&clean_text);
        let token_estimate = count_tokens(&context);

        tracing::debug!(chars, token_estimate, "Conversion finished");

        Ok(Conversion::new(context, token_estimate))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("Failed to extract text from the PDF: {0}")]
    Extraction(#[from] TextExtractorError),
    #[error("{0}")]
    WebImport(#[from] WebImportError),
    #[error("Free limit exceeded (content too large)")]
    ContentTooLarge,
}
