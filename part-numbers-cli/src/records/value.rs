//! Scalar cell values carried by a part-number record

use serde::{Deserialize, Serialize};

/// A single spreadsheet cell, after conversion from the workbook
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Missing value
    Null,
    /// Text value
    String(String),
    /// Whole number
    Int(i64),
    /// Floating point, may still hold NaN before cleaning
    Float(f64),
    /// Boolean
    Bool(bool),
    /// Date or time, kept in the workbook's textual rendering
    DateTime(String),
}

impl CellValue {
    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Check if this value is a floating point NaN
    pub fn is_nan(&self) -> bool {
        matches!(self, CellValue::Float(f) if f.is_nan())
    }

    /// Replace a NaN float with an explicit null; everything else passes through
    pub fn clean(self) -> Self {
        if self.is_nan() { CellValue::Null } else { self }
    }

    /// Try to get as string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::String(s) | CellValue::DateTime(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            CellValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Convert to a JSON value for the wire
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            CellValue::Null => serde_json::Value::Null,
            CellValue::String(s) | CellValue::DateTime(s) => serde_json::Value::String(s.clone()),
            CellValue::Int(i) => serde_json::json!(*i),
            // serde_json has no NaN, from_f64 gives None for it
            CellValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            CellValue::Bool(b) => serde_json::Value::Bool(*b),
        }
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Null => write!(f, "(null)"),
            CellValue::String(s) => write!(f, "{}", s),
            CellValue::Int(i) => write!(f, "{}", i),
            CellValue::Float(fl) => write!(f, "{}", fl),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::DateTime(dt) => write!(f, "{}", dt),
        }
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Null
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        CellValue::Float(f)
    }
}
