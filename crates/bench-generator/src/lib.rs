//! Synthetic metrics row generator for ingestion benchmarking.
//!
//! This crate produces a bounded, lazy sequence of rows simulating an
//! infrastructure-monitoring workload: datacenters (idc) contain hosts,
//! each host runs one application, each application exposes a fixed number
//! of services, and all services on a host report their utilization metrics
//! at the same instant. Rows are generated batch by batch, one batch per
//! host report, so memory stays constant no matter how many rows are
//! requested.
//!
//! # Architecture
//!
//! ```text
//! MetricsConfig (row count, services per app, seed)
//!        │
//!        ▼
//! ┌──────────────────┐
//! │   RowSequence    │  owns a seeded StdRng; counts emitted rows
//! │                  │
//! │  Batch::generate ├──▶ GenerationContext { ts, idc, host, app, url }
//! │  (on demand)     │         │
//! └────────┬─────────┘         ▼
//!          │            one row per service index
//!          ▼
//!    Row { ts, idc, host, shard, service, url, cpu, mem, disk, load }
//! ```
//!
//! # Example
//!
//! ```rust
//! use bench_generator::{MetricsConfig, MetricsTableDataProvider, TableDataProvider};
//!
//! let config = MetricsConfig::default()
//!     .with_row_count(100)
//!     .with_services_per_app(20)
//!     .with_seed(42);
//!
//! let provider = MetricsTableDataProvider::new(config).unwrap();
//! assert_eq!(provider.row_count(), 100);
//!
//! let rows: Vec<_> = provider.rows().collect();
//! assert_eq!(rows.len(), 100);
//! assert_eq!(rows[0].len(), provider.table_schema().columns().len());
//! ```

pub mod batch;
pub mod config;
pub mod identifiers;
pub mod provider;
pub mod rows;

// Re-exports for convenience
pub use batch::{Batch, GenerationContext};
pub use config::{MetricsConfig, ProviderOptions};
pub use provider::{metrics_table_schema, MetricsTableDataProvider, TableDataProvider};
pub use rows::{RowSequence, SequenceExhausted};
