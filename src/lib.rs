//! ingest-bench: synthetic metrics workload generation for time-series
//! ingestion benchmarking.
//!
//! The heavy lifting lives in the workspace crates: `bench-core` holds the
//! schema and value types and `bench-generator` produces the rows. This
//! crate adds the pieces a benchmark run needs around them: run reporting
//! and a CSV sink for inspecting or replaying generated data.

pub mod report;
pub mod sink;

// Re-exports for convenience
pub use report::RunReport;
pub use sink::{CsvSink, SinkError};
