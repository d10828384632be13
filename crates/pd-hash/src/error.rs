//! Error types for credential hashing.

use thiserror::Error;

/// Result type for hashing operations.
pub type Result<T> = std::result::Result<T, HashError>;

/// Errors that can occur while hashing or verifying a password.
///
/// A password that simply does not match its hash is NOT an error; that is
/// `Ok(false)` from verification. Errors mean the operation itself failed,
/// e.g. a malformed hash blob.
#[derive(Error, Debug)]
pub enum HashError {
    /// The underlying bcrypt operation failed.
    #[error("bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
}
