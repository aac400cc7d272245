mod http_importer;
mod readability;

pub use http_importer::HttpWebImporter;
pub use readability::extract_readable_text;
