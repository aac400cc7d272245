mod context_builder;
mod conversion_service;
mod normalizer;
mod token_counter;

pub use context_builder::build_context;
pub use conversion_service::{ConversionError, ConversionService};
pub use normalizer::normalize_text;
pub use token_counter::count_tokens;
