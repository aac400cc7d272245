mod text_extractor;
mod web_importer;

pub use text_extractor::{TextExtractor, TextExtractorError};
pub use web_importer::{WebImportError, WebImporter};
