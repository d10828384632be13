//! Field-aware PII redaction for log output.
//!
//! This crate provides a small, reusable redaction engine that scrubs
//! `field=value` pairs out of serialized log messages before they reach an
//! output sink.
//!
//! # Key Features
//!
//! - **Exact-token matching**: only the configured field names are touched;
//!   matching is on the `field=` prefix, never substring-fuzzy.
//! - **Precompiled patterns**: one regex per field, built once when the rule
//!   is compiled, not per message.
//! - **Deterministic ordering**: fields are applied in rule order, each
//!   against the output of the previous one.
//! - **Plain-data rules**: a [`RedactionRule`] is a serde struct that can be
//!   loaded from and saved to JSON.
//!
//! # Example
//!
//! ```
//! use pd_redact::{FieldRedactor, RedactionRule};
//!
//! let rule = RedactionRule::new(["name", "email"], "***", ';');
//! let redactor = FieldRedactor::new(rule).unwrap();
//!
//! let out = redactor.redact("name=John;email=a@b.com;ip=1.2.3.4;");
//! assert_eq!(out, "name=***;email=***;ip=1.2.3.4;");
//! ```

pub mod error;
pub mod fields;
pub mod redactor;
pub mod rule;

pub use error::{RedactError, Result};
pub use fields::{FieldSpec, PII_FIELDS, REDACTION, SEPARATOR};
pub use redactor::{pii_redactor, redact_message, FieldRedactor};
pub use rule::RedactionRule;
