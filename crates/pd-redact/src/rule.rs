//! Redaction rule configuration.
//!
//! A rule is plain data: which fields to scrub, the token to substitute,
//! and the pair separator. Compile it into a
//! [`FieldRedactor`](crate::FieldRedactor) to apply it.

use crate::fields::{FieldSpec, REDACTION, SEPARATOR};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for a redaction pass.
///
/// Immutable once compiled into a redactor; a formatter never changes its
/// rule mid-lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionRule {
    /// Field names whose values are replaced.
    pub fields: FieldSpec,

    /// Token substituted for each redacted value.
    #[serde(default = "default_replacement")]
    pub replacement: String,

    /// Separator terminating each `field=value` pair.
    #[serde(default = "default_separator")]
    pub separator: char,
}

fn default_replacement() -> String {
    REDACTION.to_string()
}

fn default_separator() -> char {
    SEPARATOR
}

impl RedactionRule {
    /// Create a rule from an ordered field list.
    pub fn new<I, S>(fields: I, replacement: impl Into<String>, separator: char) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RedactionRule {
            fields: FieldSpec::new(fields),
            replacement: replacement.into(),
            separator,
        }
    }

    /// The built-in PII rule: `name, email, phone, ssn, password`, replaced
    /// by `***`, separated by `;`.
    pub fn pii() -> Self {
        RedactionRule {
            fields: FieldSpec::pii(),
            replacement: REDACTION.to_string(),
            separator: SEPARATOR,
        }
    }

    /// Load a rule from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let rule: RedactionRule = serde_json::from_str(&content)?;
        Ok(rule)
    }

    /// Save a rule to a JSON file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl Default for RedactionRule {
    fn default() -> Self {
        Self::pii()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pii_rule_defaults() {
        let rule = RedactionRule::pii();
        assert_eq!(rule.fields.len(), 5);
        assert_eq!(rule.replacement, "***");
        assert_eq!(rule.separator, ';');
    }

    #[test]
    fn default_is_pii() {
        assert_eq!(RedactionRule::default(), RedactionRule::pii());
    }

    #[test]
    fn serde_fills_defaults() {
        let rule: RedactionRule = serde_json::from_str(r#"{"fields":["ssn"]}"#).unwrap();
        assert_eq!(rule.replacement, "***");
        assert_eq!(rule.separator, ';');
        assert!(rule.fields.contains("ssn"));
    }

    #[test]
    fn serde_round_trip() {
        let rule = RedactionRule::new(["a", "b"], "xxx", '|');
        let json = serde_json::to_string(&rule).unwrap();
        let parsed: RedactionRule = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, rule);
    }

    #[test]
    fn load_save_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rule.json");

        let rule = RedactionRule::new(["name", "email"], "***", ';');
        rule.save(&path).unwrap();

        let loaded = RedactionRule::load(&path).unwrap();
        assert_eq!(loaded, rule);
    }

    #[test]
    fn load_missing_file_errors() {
        let err = RedactionRule::load("/nonexistent/rule.json").unwrap_err();
        assert!(matches!(err, crate::RedactError::Io(_)));
    }
}
