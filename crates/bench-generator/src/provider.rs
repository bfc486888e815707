//! Table data provider contract and the metrics table implementation.

use crate::config::MetricsConfig;
use crate::rows::RowSequence;
use bench_core::{ColumnDataType, Row, SchemaError, TableSchema};
use std::sync::atomic::{AtomicU64, Ordering};

/// Seed-mixing constant (2^64 / golden ratio) used to derive per-sequence
/// seeds from the configured base seed.
const SEED_MIX: u64 = 0x9E3779B97F4A7C15;

/// Contract between a benchmark driver and a table's data source.
pub trait TableDataProvider {
    /// The row sequence type handed to consumers.
    type Rows: Iterator<Item = Row>;

    /// Prepare internal state. Must not fail.
    fn init(&mut self);

    /// Release resources. Must not fail.
    fn close(&mut self);

    /// The immutable schema every emitted row conforms to.
    fn table_schema(&self) -> &TableSchema;

    /// A fresh row sequence over the configured row count.
    fn rows(&self) -> Self::Rows;

    /// The configured total row count.
    fn row_count(&self) -> u64;
}

/// Build the fixed metrics table schema.
///
/// Column order is part of the output contract; rows carry their values in
/// exactly this order:
/// `ts`, `idc`, `host`, `shard`, `service`, `url`, `cpu_util`,
/// `memory_util`, `disk_util`, `load_util`.
pub fn metrics_table_schema() -> Result<TableSchema, SchemaError> {
    TableSchema::builder("tt_metrics_table")
        .add_timestamp("ts", ColumnDataType::TimestampMillisecond)
        .add_tag("idc", ColumnDataType::String)
        .add_tag("host", ColumnDataType::String)
        .add_field("shard", ColumnDataType::Int32)
        .add_tag("service", ColumnDataType::String)
        .add_field("url", ColumnDataType::String)
        .add_field("cpu_util", ColumnDataType::Float64)
        .add_field("memory_util", ColumnDataType::Float64)
        .add_field("disk_util", ColumnDataType::Float64)
        .add_field("load_util", ColumnDataType::Float64)
        .build()
}

/// Provider of the synthetic infrastructure-metrics workload.
///
/// Holds no external resources; `init` and `close` are no-ops. Each call to
/// [`TableDataProvider::rows`] hands out an independent [`RowSequence`].
/// When a base seed is configured, every sequence gets a distinct seed
/// derived from it, so repeated calls do not replay one RNG stream while
/// runs as a whole stay reproducible.
#[derive(Debug)]
pub struct MetricsTableDataProvider {
    schema: TableSchema,
    config: MetricsConfig,
    sequences_issued: AtomicU64,
}

impl MetricsTableDataProvider {
    /// Create a provider with the given configuration.
    pub fn new(config: MetricsConfig) -> Result<Self, SchemaError> {
        Ok(Self {
            schema: metrics_table_schema()?,
            config,
            sequences_issued: AtomicU64::new(0),
        })
    }

    /// The provider's configuration.
    pub fn config(&self) -> &MetricsConfig {
        &self.config
    }
}

impl TableDataProvider for MetricsTableDataProvider {
    type Rows = RowSequence;

    fn init(&mut self) {
        // nothing to prepare
    }

    fn close(&mut self) {
        // nothing to release
    }

    fn table_schema(&self) -> &TableSchema {
        &self.schema
    }

    fn rows(&self) -> RowSequence {
        let index = self.sequences_issued.fetch_add(1, Ordering::Relaxed);
        let config = match self.config.seed {
            Some(base) => self
                .config
                .clone()
                .with_seed(base.wrapping_add(index.wrapping_mul(SEED_MIX))),
            None => self.config.clone(),
        };
        RowSequence::new(&config)
    }

    fn row_count(&self) -> u64 {
        self.config.row_count
    }
}
