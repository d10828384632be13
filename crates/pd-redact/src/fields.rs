//! Sensitive field lists.

use serde::{Deserialize, Serialize};

/// Field names treated as PII in user-data log output.
pub const PII_FIELDS: [&str; 5] = ["name", "email", "phone", "ssn", "password"];

/// Replacement token substituted for redacted values.
pub const REDACTION: &str = "***";

/// Separator terminating each `field=value` pair in serialized messages.
pub const SEPARATOR: char = ';';

/// An ordered set of sensitive field names.
///
/// Duplicates are dropped at construction, keeping the first occurrence, so
/// every field is applied exactly once and redaction order stays
/// deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldSpec(Vec<String>);

impl FieldSpec {
    /// Build a field spec from an ordered sequence of names.
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = Vec::new();
        for field in fields {
            let field = field.into();
            if !names.contains(&field) {
                names.push(field);
            }
        }
        FieldSpec(names)
    }

    /// The built-in PII field list.
    pub fn pii() -> Self {
        Self::new(PII_FIELDS)
    }

    /// Iterate over the field names in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of fields in the spec.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the spec lists no fields at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `name` is listed as sensitive.
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|f| f == name)
    }
}

impl<S: Into<String>> FromIterator<S> for FieldSpec {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
