//! End-to-end delivery of fetched rows to the redacting logger.

use crate::error::Result;
use crate::logging::{self, RedactingLayer, USER_DATA_TARGET};
use crate::row::{serialize_row, RowValue};
use pd_redact::{FieldRedactor, RedactionRule};
use std::io::Write;
use tracing::Dispatch;

/// Serializes rows and logs them through an injected redacting logger.
///
/// The logger is constructed once, handed to the emitter, and reused for
/// every row; there is no hidden process-global handler.
#[derive(Debug)]
pub struct LogEmitter {
    dispatch: Dispatch,
}

impl LogEmitter {
    /// Wrap an explicitly constructed logger.
    pub fn new(dispatch: Dispatch) -> Self {
        LogEmitter { dispatch }
    }

    /// The standard emitter: PII-redacted lines on stdout.
    pub fn to_stdout() -> Self {
        Self::new(logging::user_data_logger())
    }

    /// Emitter over an arbitrary writer and rule, for callers whose sink or
    /// field list is not the standard one.
    pub fn with_rule<W>(writer: W, rule: RedactionRule) -> Result<Self>
    where
        W: Write + Send + 'static,
    {
        let redactor = FieldRedactor::new(rule)?;
        let layer = RedactingLayer::new(writer, redactor);
        Ok(Self::new(logging::logger_with(layer)))
    }

    /// Serialize one row and log it at INFO under the `user_data` target.
    pub fn emit_row(&self, columns: &[&str], values: &[RowValue]) -> Result<()> {
        let message = serialize_row(columns, values)?;
        tracing::dispatcher::with_default(&self.dispatch, || {
            tracing::info!(target: USER_DATA_TARGET, "{}", message);
        });
        Ok(())
    }

    /// Emit every row in order, aborting on the first failure.
    ///
    /// Rows already emitted stay emitted; there is no rollback and no
    /// retry. Returns the number of rows emitted.
    pub fn emit_rows<I>(&self, columns: &[&str], rows: I) -> Result<usize>
    where
        I: IntoIterator<Item = Vec<RowValue>>,
    {
        let mut emitted = 0;
        for row in rows {
            self.emit_row(columns, &row)?;
            emitted += 1;
        }
        Ok(emitted)
    }
}
