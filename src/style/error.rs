//! Style errors.

use crate::cascade::ScopeId;

/// Error returned when a style value or a scope lookup is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    /// A named value does not belong to its field's enumeration.
    #[error("invalid value '{value}' for style field '{field}'")]
    InvalidStyleValue {
        /// The field the value was supplied for (e.g. `size`)
        field: &'static str,
        /// The offending value, as given
        value: String,
    },

    /// The scope was never mounted or has already been torn down.
    #[error("unknown style scope {0}")]
    UnknownScope(ScopeId),

    /// A configuration document could not be parsed.
    #[error("failed to parse style config: {0}")]
    Parse(String),
}

impl StyleError {
    pub(crate) fn invalid(field: &'static str, value: impl Into<String>) -> Self {
        StyleError::InvalidStyleValue {
            field,
            value: value.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StyleError>;
