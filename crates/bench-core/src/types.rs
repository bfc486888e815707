//! Column data types and semantic roles for the metrics schema.

use serde::{Deserialize, Serialize};

/// Primitive data type of a column.
///
/// The generator only emits the four types the metrics table needs; sinks
/// map them to whatever the downstream store expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnDataType {
    /// Millisecond-precision timestamp
    TimestampMillisecond,

    /// UTF-8 string
    String,

    /// 32-bit signed integer
    Int32,

    /// 64-bit IEEE 754 floating point
    Float64,
}

impl ColumnDataType {
    /// Get the lowercase type name.
    pub fn name(&self) -> &'static str {
        match self {
            ColumnDataType::TimestampMillisecond => "timestamp_millisecond",
            ColumnDataType::String => "string",
            ColumnDataType::Int32 => "int32",
            ColumnDataType::Float64 => "float64",
        }
    }
}

/// Semantic role of a column within the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticType {
    /// The designated time index. Exactly one per table; establishes row
    /// chronological order.
    Timestamp,

    /// Indexed, bounded-cardinality dimension usable for filtering and
    /// grouping.
    Tag,

    /// Unindexed payload/measurement value.
    Field,
}

impl SemanticType {
    /// Get the lowercase role name.
    pub fn name(&self) -> &'static str {
        match self {
            SemanticType::Timestamp => "timestamp",
            SemanticType::Tag => "tag",
            SemanticType::Field => "field",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_type_names() {
        assert_eq!(ColumnDataType::TimestampMillisecond.name(), "timestamp_millisecond");
        assert_eq!(ColumnDataType::String.name(), "string");
        assert_eq!(ColumnDataType::Int32.name(), "int32");
        assert_eq!(ColumnDataType::Float64.name(), "float64");
    }

    #[test]
    fn test_semantic_type_names() {
        assert_eq!(SemanticType::Timestamp.name(), "timestamp");
        assert_eq!(SemanticType::Tag.name(), "tag");
        assert_eq!(SemanticType::Field.name(), "field");
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&ColumnDataType::TimestampMillisecond).unwrap();
        assert_eq!(json, "\"timestamp_millisecond\"");

        let role: SemanticType = serde_json::from_str("\"tag\"").unwrap();
        assert_eq!(role, SemanticType::Tag);
    }
}
