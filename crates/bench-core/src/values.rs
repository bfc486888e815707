//! Row value representations.
//!
//! Rows are positional: the value at index `i` belongs to the column at
//! index `i` of the table schema. The schema does not validate rows; the
//! generator guarantees the ordering.

use crate::types::ColumnDataType;
use serde::{Deserialize, Serialize};

/// A single cell value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Millisecond timestamp
    TimestampMillis(i64),

    /// UTF-8 string
    String(String),

    /// 32-bit signed integer
    Int32(i32),

    /// 64-bit floating point
    Float64(f64),
}

impl Value {
    /// The column data type this value conforms to.
    pub fn data_type(&self) -> ColumnDataType {
        match self {
            Value::TimestampMillis(_) => ColumnDataType::TimestampMillisecond,
            Value::String(_) => ColumnDataType::String,
            Value::Int32(_) => ColumnDataType::Int32,
            Value::Float64(_) => ColumnDataType::Float64,
        }
    }

    /// Try to get this value as a millisecond timestamp.
    pub fn as_timestamp_millis(&self) -> Option<i64> {
        match self {
            Value::TimestampMillis(ts) => Some(*ts),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as an i32.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Value::Int32(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as an f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float64(f) => Some(*f),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(ts: i64) -> Self {
        Value::TimestampMillis(ts)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int32(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float64(f)
    }
}

/// A positional row: one value per schema column, in schema order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    values: Vec<Value>,
}

impl Row {
    /// Create a row from values already in schema order.
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    /// Number of values in the row.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the row holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the value at a column position.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Iterate over the values in schema order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.values.iter()
    }

    /// Consume the row, yielding its values.
    pub fn into_values(self) -> Vec<Value> {
        self.values
    }
}

impl From<Vec<Value>> for Row {
    fn from(values: Vec<Value>) -> Self {
        Self::new(values)
    }
}
