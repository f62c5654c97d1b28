//! Cell value enum for dynamic tabular data

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Number;

/// A dynamic value held by one cell of a [`TabularData`](super::TabularData) column.
///
/// Payloads carry cell values as plain JSON scalars, so this enum mirrors the
/// JSON data model instead of committing to a single Rust type per column.
/// Values are stored exactly as they arrive; no coercion between variants is
/// performed.
///
/// # Type Mapping
///
/// | JSON Type | Rust Variant |
/// |-----------|--------------|
/// | null | `Null` |
/// | Boolean | `Bool` |
/// | Number | `Number` |
/// | String | `String` |
/// | Array, Object | `Json` |
///
/// # Example
///
/// ```
/// use vizdata_lib::model::CellValue;
///
/// let region = CellValue::from("West");
/// let total = CellValue::from(472_i64);
/// let flagged = CellValue::from(true);
/// let empty = CellValue::Null;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Null/empty value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Numeric value, integer or floating point.
    Number(Number),
    /// String value.
    String(String),
    /// Fallback for nested JSON values.
    Json(serde_json::Value),
}

impl CellValue {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Null => "null",
            CellValue::Bool(_) => "bool",
            CellValue::Number(_) => "number",
            CellValue::String(_) => "string",
            CellValue::Json(_) => "json",
        }
    }

    /// Returns the string content if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::String(s) => Some(s),
            _ => None,
        }
    }
}

/// Renders the value the way it appears in exported tables: strings bare,
/// numbers and booleans in their JSON form, null as the empty string.
impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => Ok(()),
            CellValue::Bool(v) => write!(f, "{v}"),
            CellValue::Number(v) => write!(f, "{v}"),
            CellValue::String(v) => f.write_str(v),
            CellValue::Json(v) => write!(f, "{v}"),
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for CellValue {
    fn from(v: bool) -> Self {
        CellValue::Bool(v)
    }
}

impl From<i32> for CellValue {
    fn from(v: i32) -> Self {
        CellValue::Number(Number::from(v))
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        CellValue::Number(Number::from(v))
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        match Number::from_f64(v) {
            Some(n) => CellValue::Number(n),
            None => CellValue::Null,
        }
    }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self {
        CellValue::String(v)
    }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        CellValue::String(v.to_string())
    }
}

impl From<Number> for CellValue {
    fn from(v: Number) -> Self {
        CellValue::Number(v)
    }
}

impl From<serde_json::Value> for CellValue {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => CellValue::Null,
            serde_json::Value::Bool(b) => CellValue::Bool(b),
            serde_json::Value::Number(n) => CellValue::Number(n),
            serde_json::Value::String(s) => CellValue::String(s),
            other => CellValue::Json(other),
        }
    }
}

impl From<&serde_json::Value> for CellValue {
    fn from(v: &serde_json::Value) -> Self {
        CellValue::from(v.clone())
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => CellValue::Null,
        }
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Null
    }
}
