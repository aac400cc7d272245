mod conversion;

pub use conversion::{Conversion, ConversionId, ConversionMode, MAX_CLEAN_TEXT_CHARS};
