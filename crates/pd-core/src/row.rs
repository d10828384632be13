//! Row serialization.
//!
//! Turns one fetched row into the `col0=val0;col1=val1;...;` message the
//! redacting logger consumes. Every pair is terminated by the separator,
//! including the last.

use crate::error::{Error, Result};
use chrono::NaiveDateTime;
use pd_redact::SEPARATOR;
use std::fmt;

/// A single column value, as fetched from the row source.
#[derive(Debug, Clone, PartialEq)]
pub enum RowValue {
    /// Character data.
    Text(String),
    /// Integer data.
    Int(i64),
    /// Floating-point data.
    Float(f64),
    /// Timestamps, rendered as `%Y-%m-%d %H:%M:%S`.
    DateTime(NaiveDateTime),
    /// Raw bytes, rendered as lossy UTF-8.
    Bytes(Vec<u8>),
    /// SQL NULL, rendered as `NULL`.
    Null,
}

impl fmt::Display for RowValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowValue::Text(s) => f.write_str(s),
            RowValue::Int(v) => write!(f, "{}", v),
            RowValue::Float(v) => write!(f, "{}", v),
            RowValue::DateTime(ts) => write!(f, "{}", ts.format("%Y-%m-%d %H:%M:%S")),
            RowValue::Bytes(b) => f.write_str(&String::from_utf8_lossy(b)),
            RowValue::Null => f.write_str("NULL"),
        }
    }
}

impl From<String> for RowValue {
    fn from(s: String) -> Self {
        RowValue::Text(s)
    }
}

impl From<&str> for RowValue {
    fn from(s: &str) -> Self {
        RowValue::Text(s.to_string())
    }
}

impl From<i64> for RowValue {
    fn from(v: i64) -> Self {
        RowValue::Int(v)
    }
}

impl From<NaiveDateTime> for RowValue {
    fn from(ts: NaiveDateTime) -> Self {
        RowValue::DateTime(ts)
    }
}

/// Serialize one row as `col0=val0;col1=val1;...;`.
///
/// Fails with [`Error::ShapeMismatch`] when the column and value counts
/// disagree; nothing is emitted for such a row.
pub fn serialize_row(columns: &[&str], values: &[RowValue]) -> Result<String> {
    if columns.len() != values.len() {
        return Err(Error::ShapeMismatch {
            columns: columns.len(),
            values: values.len(),
        });
    }

    let mut message = String::new();
    for (column, value) in columns.iter().zip(values) {
        message.push_str(column);
        message.push('=');
        message.push_str(&value.to_string());
        message.push(SEPARATOR);
    }
    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn pairs_joined_with_trailing_separator() {
        let out = serialize_row(&["a", "b"], &[RowValue::Int(1), "x".into()]).unwrap();
        assert_eq!(out, "a=1;b=x;");
    }

    #[test]
    fn empty_row_serializes_empty() {
        let out = serialize_row(&[], &[]).unwrap();
        assert_eq!(out, "");
    }

    #[test]
    fn shape_mismatch_too_few_values() {
        let err = serialize_row(&["a", "b"], &[RowValue::Int(1)]).unwrap_err();
        assert!(matches!(
            err,
            Error::ShapeMismatch { columns: 2, values: 1 }
        ));
    }

    #[test]
    fn shape_mismatch_too_many_values() {
        let err = serialize_row(&["a"], &[RowValue::Int(1), RowValue::Int(2)]).unwrap_err();
        assert!(matches!(
            err,
            Error::ShapeMismatch { columns: 1, values: 2 }
        ));
    }

    #[test]
    fn datetime_renders_sql_style() {
        let ts = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap();
        let out = serialize_row(&["last_login"], &[ts.into()]).unwrap();
        assert_eq!(out, "last_login=2024-01-01 08:30:00;");
    }

    #[test]
    fn null_and_bytes_conventions() {
        let out = serialize_row(
            &["phone", "blob"],
            &[RowValue::Null, RowValue::Bytes(b"agent".to_vec())],
        )
        .unwrap();
        assert_eq!(out, "phone=NULL;blob=agent;");
    }

    #[test]
    fn empty_text_value_keeps_pair() {
        let out = serialize_row(&["name"], &["".into()]).unwrap();
        assert_eq!(out, "name=;");
    }
}
