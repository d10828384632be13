//! Salted adaptive password hashing.
//!
//! A thin wrapper around bcrypt: every hash gets a fresh random salt, so
//! two calls on the same password produce different blobs, and the work
//! factor makes offline brute-force expensive. Verification extracts the
//! salt and cost embedded in the blob.
//!
//! # Example
//!
//! ```
//! use pd_hash::{hash_password_with_cost, verify_password, MIN_COST};
//!
//! let blob = hash_password_with_cost("hunter2", MIN_COST).unwrap();
//! assert!(verify_password(&blob, "hunter2").unwrap());
//! assert!(!verify_password(&blob, "hunter3").unwrap());
//! ```

pub mod error;

pub use error::{HashError, Result};

pub use bcrypt::DEFAULT_COST;

/// Minimum bcrypt work factor (matches `bcrypt`'s internal lower bound).
///
/// `bcrypt` validates costs against this floor but does not export the
/// constant, so it is mirrored here for callers that want the fastest
/// valid cost (e.g. tests).
pub const MIN_COST: u32 = 4;

/// Hash a password with the default work factor and a fresh random salt.
///
/// The returned blob embeds the algorithm version, cost, and salt
/// (`$2b$...`), so it is self-describing for verification.
pub fn hash_password(password: &str) -> Result<String> {
    hash_password_with_cost(password, DEFAULT_COST)
}

/// Hash a password with an explicit work factor.
///
/// Higher costs slow both hashing and brute-force attempts; tests use
/// `bcrypt::MIN_COST` to stay fast.
pub fn hash_password_with_cost(password: &str, cost: u32) -> Result<String> {
    Ok(bcrypt::hash(password, cost)?)
}

/// Check a password against a previously produced hash blob.
///
/// Returns `Ok(false)` on mismatch; `Err` only when the blob itself is
/// malformed.
pub fn verify_password(hashed: &str, password: &str) -> Result<bool> {
    Ok(bcrypt::verify(password, hashed)?)
}
