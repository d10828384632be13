//! Redacting log pipeline.
//!
//! Two output channels, kept strictly separate:
//! - stdout carries the redacted `user_data` payload lines, one per row
//! - stderr carries operational diagnostics
//!
//! The payload logger is an explicitly constructed [`Dispatch`] around a
//! [`RedactingLayer`]; callers inject it into the emitter instead of
//! installing it process-wide, so the redaction rule travels with the
//! logger instance.

pub mod layer;

pub use layer::RedactingLayer;

use std::io::{self, IsTerminal, Write};
use tracing::Dispatch;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Logger name carried as the tracing target of every payload event.
pub const USER_DATA_TARGET: &str = "user_data";

/// Build the standard `user_data` logger: built-in PII rule, INFO level,
/// one line per event on stdout.
pub fn user_data_logger() -> Dispatch {
    logger_with(RedactingLayer::stdout())
}

/// Build a `user_data` logger over an arbitrary payload layer, e.g. one
/// writing to a buffer in tests or to a custom sink.
pub fn logger_with<W>(layer: RedactingLayer<W>) -> Dispatch
where
    W: Write + Send + 'static,
{
    Dispatch::new(tracing_subscriber::registry().with(layer))
}

/// Install the process-global diagnostics subscriber on stderr.
///
/// Filtered via `RUST_LOG`, defaulting to `pd_core=info`. Payload lines
/// never pass through here; stdout stays byte-clean for them.
pub fn init_diagnostics() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pd_core=info"));
    let use_ansi = io::stderr().is_terminal();

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .with_ansi(use_ansi),
        )
        .init();
}

/// Generate a unique run ID for this invocation.
pub fn generate_run_id() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("run-{}", &uuid.to_string()[..12])
}
