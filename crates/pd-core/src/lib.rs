//! Personal-data batch exporter.
//!
//! Reads every row of the `users` table and writes one PII-redacted line
//! per row to stdout:
//!
//! ```text
//! [HOLBERTON] user_data INFO 2024-01-01 08:30:00,000: name=***;email=***;phone=***;ssn=***;password=***;ip=1.2.3.4;last_login=2024-01-01 08:30:00;user_agent=agent;
//! ```
//!
//! The pipeline: fetched row -> [`row::serialize_row`] -> [`LogEmitter`]
//! dispatches an INFO event -> [`logging::RedactingLayer`] renders the line
//! template and scrubs the configured PII fields -> stdout. Operational
//! diagnostics go to stderr, keeping stdout reserved for payload lines.

pub mod config;
pub mod db;
pub mod emitter;
pub mod error;
pub mod logging;
pub mod row;

pub use config::DbConfig;
pub use emitter::LogEmitter;
pub use error::{Error, Result};
