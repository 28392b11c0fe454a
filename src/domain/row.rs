//! Source row representation
//!
//! A `SourceRow` is one relational row as returned by the source reader: a
//! mapping from upper-case column name to a typed value. Accessors are
//! tolerant by design - a column that is missing from the row, or whose
//! value has an unexpected type, resolves to `None` rather than an error.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// A typed value read from one source column
#[derive(Debug, Clone, PartialEq)]
pub enum SourceValue {
    /// Character data (CHAR, VARCHAR, TEXT)
    Text(String),

    /// Signed integer data
    Int(i64),

    /// Floating point data (FLOAT, DOUBLE, DECIMAL)
    Float(f64),

    /// Date/time data, normalized to UTC
    DateTime(DateTime<Utc>),

    /// SQL NULL
    Null,
}

impl SourceValue {
    /// Returns `true` for SQL NULL
    pub fn is_null(&self) -> bool {
        matches!(self, SourceValue::Null)
    }

    /// Returns the text content, if this is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            SourceValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer content, if this is an integer value
    pub fn as_int(&self) -> Option<i64> {
        match self {
            SourceValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the numeric content as a float, coercing integers
    pub fn as_float(&self) -> Option<f64> {
        match self {
            SourceValue::Float(f) => Some(*f),
            SourceValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Returns the date-time content, if this is a date-time value
    ///
    /// Any non-date-time value yields `None`. This is the normalization
    /// guard for malformed or non-date source data: such values become
    /// absent in the target rather than surfacing an error.
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            SourceValue::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    /// Renders the value as a string, for key columns and stringly fields
    ///
    /// Natural keys in the source are sometimes integers and sometimes
    /// character codes; both render to the same map key. NULL and
    /// date-time values have no string rendering.
    pub fn as_key_string(&self) -> Option<String> {
        match self {
            SourceValue::Text(s) => Some(s.clone()),
            SourceValue::Int(i) => Some(i.to_string()),
            SourceValue::Float(f) => Some(f.to_string()),
            _ => None,
        }
    }
}

/// One source row: upper-case column name to typed value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceRow {
    columns: BTreeMap<String, SourceValue>,
}

impl SourceRow {
    /// Creates an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a column value, replacing any previous value
    pub fn set(&mut self, column: impl Into<String>, value: SourceValue) {
        self.columns.insert(column.into(), value);
    }

    /// Returns the raw value of a column, if present
    pub fn get(&self, column: &str) -> Option<&SourceValue> {
        self.columns.get(column)
    }

    /// Returns a column as text
    pub fn text(&self, column: &str) -> Option<String> {
        self.get(column)?.as_text().map(str::to_string)
    }

    /// Returns a column as a signed integer
    pub fn int(&self, column: &str) -> Option<i64> {
        self.get(column)?.as_int()
    }

    /// Returns a column as a float, coercing integers
    pub fn float(&self, column: &str) -> Option<f64> {
        self.get(column)?.as_float()
    }

    /// Returns a column as a date-time, or `None` for non-date values
    pub fn datetime(&self, column: &str) -> Option<DateTime<Utc>> {
        self.get(column)?.as_datetime()
    }

    /// Returns a column rendered as a string
    ///
    /// Used for natural keys and for fields that are stringly in the
    /// target but may be stored numerically in the source (contact
    /// numbers, pin codes).
    pub fn string_like(&self, column: &str) -> Option<String> {
        self.get(column)?.as_key_string()
    }

    /// Number of columns in the row
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the row has no columns
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl FromIterator<(String, SourceValue)> for SourceRow {
    fn from_iter<I: IntoIterator<Item = (String, SourceValue)>>(iter: I) -> Self {
        Self {
            columns: iter.into_iter().collect(),
        }
    }
}
