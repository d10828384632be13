//! Error types for the redaction engine.

use thiserror::Error;

/// Result type for redaction operations.
pub type Result<T> = std::result::Result<T, RedactError>;

/// Errors that can occur while building or loading a redaction rule.
#[derive(Error, Debug)]
pub enum RedactError {
    /// A rule listed an empty field name.
    #[error("empty field name in redaction rule")]
    EmptyFieldName,

    /// A field name contains the pair separator, which would make
    /// `field=value` boundaries ambiguous.
    #[error("field name {field:?} contains the separator {separator:?}")]
    FieldContainsSeparator {
        /// The offending field name.
        field: String,
        /// The rule's separator character.
        separator: char,
    },

    /// Failed to compile a field pattern.
    #[error("pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// I/O error during rule file operations.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error in a rule file.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
