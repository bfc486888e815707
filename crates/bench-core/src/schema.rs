//! Table schema definition and builder.
//!
//! A [`TableSchema`] is an immutable, ordered list of typed columns. The
//! column order fixes the positional order every emitted row must follow.
//! Schemas are built once, at provider construction, and never mutated.

use crate::types::{ColumnDataType, SemanticType};
use serde::{Deserialize, Serialize};

/// Error type for schema construction.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Two columns share a name. Reported at build time, never silently
    /// overwritten.
    #[error("Duplicate column name: {0}")]
    DuplicateColumn(String),

    /// No column was marked as the time index.
    #[error("Table '{0}' has no time index column")]
    MissingTimeIndex(String),

    /// More than one column was marked as the time index.
    #[error("Table '{0}' has more than one time index column")]
    DuplicateTimeIndex(String),
}

/// A single column: name, primitive type, and semantic role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSchema {
    /// Column name
    pub name: String,

    /// Primitive data type
    #[serde(rename = "type")]
    pub data_type: ColumnDataType,

    /// Semantic role (time index, tag, or field)
    pub semantic_type: SemanticType,
}

impl ColumnSchema {
    /// Create a new column schema.
    pub fn new(
        name: impl Into<String>,
        data_type: ColumnDataType,
        semantic_type: SemanticType,
    ) -> Self {
        Self {
            name: name.into(),
            data_type,
            semantic_type,
        }
    }
}

/// Immutable table schema: a name plus an ordered column list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSchema {
    name: String,
    columns: Vec<ColumnSchema>,
}

impl TableSchema {
    /// Start building a schema with the given table name.
    pub fn builder(name: impl Into<String>) -> TableSchemaBuilder {
        TableSchemaBuilder::new(name)
    }

    /// Table name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Columns in build-call order.
    pub fn columns(&self) -> &[ColumnSchema] {
        &self.columns
    }

    /// Column names in schema order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Get a column by name.
    pub fn get_column(&self, name: &str) -> Option<&ColumnSchema> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// The time index column.
    pub fn time_index(&self) -> &ColumnSchema {
        self.columns
            .iter()
            .find(|c| c.semantic_type == SemanticType::Timestamp)
            .expect("schema was built with exactly one time index column")
    }
}

/// Builder accumulating columns in call order.
#[derive(Debug, Clone)]
pub struct TableSchemaBuilder {
    name: String,
    columns: Vec<ColumnSchema>,
}

impl TableSchemaBuilder {
    /// Create a new builder for the given table name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
        }
    }

    /// Add the time index column.
    pub fn add_timestamp(mut self, name: impl Into<String>, data_type: ColumnDataType) -> Self {
        self.columns
            .push(ColumnSchema::new(name, data_type, SemanticType::Timestamp));
        self
    }

    /// Add a tag column.
    pub fn add_tag(mut self, name: impl Into<String>, data_type: ColumnDataType) -> Self {
        self.columns
            .push(ColumnSchema::new(name, data_type, SemanticType::Tag));
        self
    }

    /// Add a field column.
    pub fn add_field(mut self, name: impl Into<String>, data_type: ColumnDataType) -> Self {
        self.columns
            .push(ColumnSchema::new(name, data_type, SemanticType::Field));
        self
    }

    /// Build the immutable schema.
    ///
    /// Fails if two columns share a name, or if there is not exactly one
    /// time index column.
    pub fn build(self) -> Result<TableSchema, SchemaError> {
        for (i, column) in self.columns.iter().enumerate() {
            if self.columns[..i].iter().any(|c| c.name == column.name) {
                return Err(SchemaError::DuplicateColumn(column.name.clone()));
            }
        }

        let time_index_count = self
            .columns
            .iter()
            .filter(|c| c.semantic_type == SemanticType::Timestamp)
            .count();
        match time_index_count {
            0 => return Err(SchemaError::MissingTimeIndex(self.name)),
            1 => {}
            _ => return Err(SchemaError::DuplicateTimeIndex(self.name)),
        }

        Ok(TableSchema {
            name: self.name,
            columns: self.columns,
        })
    }
}
