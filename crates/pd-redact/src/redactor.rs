//! The compiled field redactor.

use crate::error::{RedactError, Result};
use crate::rule::RedactionRule;
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

static PII: Lazy<FieldRedactor> = Lazy::new(|| {
    FieldRedactor::new(RedactionRule::pii()).expect("built-in PII rule compiles")
});

/// The shared redactor for the built-in PII rule.
pub fn pii_redactor() -> &'static FieldRedactor {
    &PII
}

/// A redaction rule compiled for repeated application.
///
/// One pattern per field, `field=[^<sep>]*`, is built at construction and
/// reused for every message. Both the field name and the separator are
/// regex-escaped, and the replacement goes through [`NoExpand`] so `$` in
/// the token is literal.
#[derive(Debug, Clone)]
pub struct FieldRedactor {
    rule: RedactionRule,
    patterns: Vec<(Regex, String)>,
}

impl FieldRedactor {
    /// Compile a rule.
    ///
    /// Fails if a field name is empty or contains the separator character,
    /// which would make `field=value` boundaries ambiguous.
    pub fn new(rule: RedactionRule) -> Result<Self> {
        let sep = regex::escape(&rule.separator.to_string());

        let mut patterns = Vec::with_capacity(rule.fields.len());
        for field in rule.fields.iter() {
            if field.is_empty() {
                return Err(RedactError::EmptyFieldName);
            }
            if field.contains(rule.separator) {
                return Err(RedactError::FieldContainsSeparator {
                    field: field.to_string(),
                    separator: rule.separator,
                });
            }

            let pattern = Regex::new(&format!("{}=[^{}]*", regex::escape(field), sep))?;
            let replacement = format!("{}={}", field, rule.replacement);
            patterns.push((pattern, replacement));
        }

        Ok(FieldRedactor { rule, patterns })
    }

    /// The rule this redactor was compiled from.
    pub fn rule(&self) -> &RedactionRule {
        &self.rule
    }

    /// Replace the value of every configured field in `message`.
    ///
    /// Fields are applied in rule order; each pattern runs against the
    /// output of the previous one. A message containing none of the fields
    /// comes back unchanged.
    pub fn redact(&self, message: &str) -> String {
        let mut message = message.to_string();
        for (pattern, replacement) in &self.patterns {
            message = pattern
                .replace_all(&message, NoExpand(replacement.as_str()))
                .into_owned();
        }
        message
    }
}

/// One-shot redaction without keeping a compiled redactor around.
///
/// Equivalent to compiling `RedactionRule::new(fields, replacement,
/// separator)` and applying it once.
pub fn redact_message<I, S>(
    fields: I,
    replacement: &str,
    message: &str,
    separator: char,
) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let redactor = FieldRedactor::new(RedactionRule::new(fields, replacement, separator))?;
    Ok(redactor.redact(message))
}
