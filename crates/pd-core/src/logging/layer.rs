//! The redacting payload layer.
//!
//! Renders each event through the fixed line template, then passes the
//! entire rendered line through the field redactor before writing it out.
//! Redacting after rendering also scrubs PII that leaks into the other
//! template segments; the flip side, kept intentionally, is that any
//! `field=value` text anywhere in the line gets replaced, template text or
//! not.

use chrono::{DateTime, Utc};
use pd_redact::{pii_redactor, FieldRedactor};
use std::io::{self, Write};
use std::sync::Mutex;
use tracing::{Event, Level, Metadata, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::Layer;

/// A visitor that extracts the `message` field from a tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{:?}", value));
        }
    }
}

/// Render the base line template with the raw message embedded.
fn format_line(target: &str, level: &Level, ts: DateTime<Utc>, message: &str) -> String {
    format!(
        "[HOLBERTON] {} {} {}: {}",
        target,
        level,
        ts.format("%Y-%m-%d %H:%M:%S,%3f"),
        message
    )
}

/// Tracing layer that redacts rendered lines before writing them.
///
/// The decorator pairing: a base render step ([`format_line`]) plus a
/// post-processing redaction step, composed explicitly rather than through
/// formatter inheritance. The redactor is fixed at construction and never
/// changes over the layer's lifetime.
pub struct RedactingLayer<W = io::Stdout> {
    writer: Mutex<W>,
    redactor: FieldRedactor,
    max_level: Level,
}

impl RedactingLayer<io::Stdout> {
    /// The standard payload layer: stdout, built-in PII rule, INFO level.
    pub fn stdout() -> Self {
        Self::new(io::stdout(), pii_redactor().clone())
    }
}

impl<W: Write> RedactingLayer<W> {
    /// Create a layer over an arbitrary writer.
    pub fn new(writer: W, redactor: FieldRedactor) -> Self {
        RedactingLayer {
            writer: Mutex::new(writer),
            redactor,
            max_level: Level::INFO,
        }
    }

    /// Change the most verbose level this layer lets through.
    pub fn with_max_level(mut self, level: Level) -> Self {
        self.max_level = level;
        self
    }
}

impl<S, W> Layer<S> for RedactingLayer<W>
where
    S: Subscriber,
    W: Write + 'static,
{
    fn enabled(&self, metadata: &Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        *metadata.level() <= self.max_level
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        let message = visitor.message.unwrap_or_default();

        let meta = event.metadata();
        let line = format_line(meta.target(), meta.level(), Utc::now(), &message);
        let line = self.redactor.redact(&line);

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;
    use std::sync::Arc;
    use tracing_subscriber::layer::SubscriberExt;

    struct BufWriter(Arc<Mutex<Vec<u8>>>);

    impl Write for BufWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn make_buffer_layer() -> (Arc<Mutex<Vec<u8>>>, RedactingLayer<BufWriter>) {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let layer = RedactingLayer::new(BufWriter(buffer.clone()), pii_redactor().clone());
        (buffer, layer)
    }

    fn captured(buffer: &Arc<Mutex<Vec<u8>>>) -> String {
        String::from_utf8_lossy(&buffer.lock().unwrap()).into_owned()
    }

    #[test]
    fn renders_template_and_redacts() {
        let (buffer, layer) = make_buffer_layer();
        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(target: "user_data", "name=Bob;ip=1.2.3.4;");
        });

        let output = captured(&buffer);
        let line_format = Regex::new(
            r"^\[HOLBERTON\] user_data INFO \d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2},\d{3}: name=\*\*\*;ip=1\.2\.3\.4;\n$",
        )
        .unwrap();
        assert!(line_format.is_match(&output), "unexpected line: {}", output);
    }

    #[test]
    fn events_below_info_are_dropped() {
        let (buffer, layer) = make_buffer_layer();
        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!(target: "user_data", "ssn=123-45-6789;");
            tracing::trace!(target: "user_data", "password=pw;");
        });

        assert_eq!(captured(&buffer), "");
    }

    #[test]
    fn warn_and_error_pass_the_info_filter() {
        let (buffer, layer) = make_buffer_layer();
        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!(target: "user_data", "x=1;");
            tracing::error!(target: "user_data", "y=2;");
        });

        let output = captured(&buffer);
        assert_eq!(output.lines().count(), 2);
        assert!(output.contains(" WARN "));
        assert!(output.contains(" ERROR "));
    }

    #[test]
    fn empty_message_renders_empty_segment() {
        let (buffer, layer) = make_buffer_layer();
        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(target: "user_data", "");
        });

        let output = captured(&buffer);
        assert!(output.trim_end().ends_with(':'), "unexpected line: {}", output);
    }

    #[test]
    fn whole_line_is_redacted_not_just_the_message() {
        // PII-shaped text in a non-message position of the template would
        // also be scrubbed; the target is the only caller-controlled
        // template segment, so exercise it.
        let (buffer, layer) = make_buffer_layer();
        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(target: "ssn=123", "ok");
        });

        let output = captured(&buffer);
        assert!(output.contains("ssn=***"), "unexpected line: {}", output);
    }

    #[test]
    fn custom_max_level_lets_debug_through() {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let layer = RedactingLayer::new(BufWriter(buffer.clone()), pii_redactor().clone())
            .with_max_level(Level::DEBUG);
        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!(target: "user_data", "name=Ann;");
        });

        let output = captured(&buffer);
        assert!(output.contains("DEBUG"));
        assert!(output.contains("name=***;"));
    }
}
