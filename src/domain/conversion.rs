use std::fmt;

use uuid::Uuid;

/// Hard cap on the cleaned source text embedded in a context document,
/// measured in characters, not bytes.
pub const MAX_CLEAN_TEXT_CHARS: usize = 20_000;

/// One finished conversion: the context document plus its token estimate.
/// Ephemeral; returned to the caller once and never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub id: ConversionId,
    pub context: String,
    pub token_estimate: usize,
}

impl Conversion {
    pub fn new(context: String, token_estimate: usize) -> Self {
        Self {
            id: ConversionId::new(),
            context,
            token_estimate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConversionId(Uuid);

impl ConversionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ConversionId {
    fn default() -> Self {
        Self::new()
    }
}

/// Conversion strategy requested through the `mode` form field. Only one
/// strategy exists today; the field is reserved for future dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConversionMode {
    #[default]
    Default,
}

impl ConversionMode {
    /// Unrecognized values fall back to `Default`.
    pub fn from_form_value(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "default" => Self::Default,
            _ => Self::Default,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
        }
    }
}

impl fmt::Display for ConversionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
