//! Error types for the personal-data batch tool.

use thiserror::Error;

/// Result type for batch operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can abort a batch run.
///
/// Collaborator errors pass through unmodified; nothing is retried or
/// re-wrapped with extra context.
#[derive(Error, Debug)]
pub enum Error {
    /// A required connection setting was absent from the environment.
    #[error("missing required environment variable {0}")]
    MissingEnvVar(&'static str),

    /// Column and value counts disagreed during row serialization.
    #[error("row has {values} values for {columns} columns")]
    ShapeMismatch {
        /// Number of column names supplied.
        columns: usize,
        /// Number of values in the row.
        values: usize,
    },

    /// The row source failed (unreachable, bad credentials, query error).
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A redaction rule failed to compile.
    #[error(transparent)]
    Redact(#[from] pd_redact::RedactError),
}
