//! Core types for the ingest-bench workload generator.
//!
//! This crate provides the foundational types shared by the generator and
//! its consumers:
//!
//! - [`ColumnDataType`] - Primitive column types of the metrics schema
//! - [`SemanticType`] - Column roles (time index, tag, field)
//! - [`Value`] / [`Row`] - Positional row values in schema order
//! - [`TableSchema`] - Immutable ordered column list, built once
//!
//! # Architecture
//!
//! ```text
//! bench-core (this crate)
//!    │
//!    ├─── bench-generator  (produces Rows conforming to a TableSchema)
//!    │
//!    └─── ingest-bench     (CLI; renders Rows through sinks)
//! ```

pub mod schema;
pub mod types;
pub mod values;

// Re-exports for convenience
pub use schema::{ColumnSchema, SchemaError, TableSchema, TableSchemaBuilder};
pub use types::{ColumnDataType, SemanticType};
pub use values::{Row, Value};
