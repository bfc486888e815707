//! Batch generation.
//!
//! All services co-located on a host report their metrics at the same
//! instant, so rows are produced one host-report at a time: a batch shares
//! a single [`GenerationContext`] (timestamp, idc, host, app, url) and
//! contains exactly one row per service index.

use crate::identifiers;
use bench_core::{Row, Value};
use rand::Rng;

/// The values shared by every row of one batch. Sampled once per batch,
/// read-only thereafter.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationContext {
    /// Batch timestamp, milliseconds since epoch.
    pub ts: i64,
    /// Datacenter identifier.
    pub idc: String,
    /// Host name; globally unique, prefixed with the idc.
    pub host: String,
    /// Application name; a pure function of the host.
    pub app: String,
    /// Request url; one per batch, shared by all its rows.
    pub url: String,
}

impl GenerationContext {
    /// Sample a fresh context: idc, then the host within it, then the
    /// host's application, then one url for the batch.
    pub fn sample<R: Rng>(rng: &mut R, ts_millis: i64) -> Self {
        let idc = identifiers::next_idc(rng);
        let host = identifiers::next_host(rng, &idc);
        let app = identifiers::app_for_host(&host);
        let url = identifiers::next_url(rng, ts_millis);

        Self {
            ts: ts_millis,
            idc,
            host,
            app,
            url,
        }
    }
}

/// One batch of rows sharing a generation context, read through a cursor.
#[derive(Debug)]
pub struct Batch {
    rows: Vec<Row>,
    cursor: usize,
}

impl Batch {
    /// Generate a batch: one context plus one row per service index in
    /// `0..services_per_app`. Each row samples its four utilization metrics
    /// independently, uniform in `[0, 100)`.
    ///
    /// Row values are in the metrics table's column order:
    /// ts, idc, host, shard, service, url, cpu_util, memory_util,
    /// disk_util, load_util.
    pub fn generate<R: Rng>(rng: &mut R, ts_millis: i64, services_per_app: usize) -> Self {
        let context = GenerationContext::sample(rng, ts_millis);

        let mut rows = Vec::with_capacity(services_per_app);
        for index in 0..services_per_app {
            let service = identifiers::service_name(&context.app, index);

            rows.push(Row::new(vec![
                Value::TimestampMillis(context.ts),
                Value::String(context.idc.clone()),
                Value::String(context.host.clone()),
                Value::Int32(index as i32),
                Value::String(service),
                Value::String(context.url.clone()),
                Value::Float64(rng.gen_range(0.0..100.0)), // cpu_util
                Value::Float64(rng.gen_range(0.0..100.0)), // memory_util
                Value::Float64(rng.gen_range(0.0..100.0)), // disk_util
                Value::Float64(rng.gen_range(0.0..100.0)), // load_util
            ]));
        }

        Self { rows, cursor: 0 }
    }

    /// Total number of rows in the batch.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the batch was generated empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of unread rows.
    pub fn remaining(&self) -> usize {
        self.rows.len() - self.cursor
    }

    /// Whether unread rows remain.
    pub fn has_next(&self) -> bool {
        self.cursor < self.rows.len()
    }

    /// Read the next row, advancing the cursor.
    pub fn next_row(&mut self) -> Option<Row> {
        let row = self.rows.get(self.cursor).cloned()?;
        self.cursor += 1;
        Some(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const TS: i64 = 1_700_000_123_456;

    #[test]
    fn test_context_sampling() {
        let mut rng = StdRng::seed_from_u64(42);
        let context = GenerationContext::sample(&mut rng, TS);

        assert_eq!(context.ts, TS);
        assert!(context.host.starts_with(&context.idc));
        assert_eq!(context.app, identifiers::app_for_host(&context.host));
        assert!(context.url.starts_with("http://127.0.0.1/helloworld/"));
    }

    #[test]
    fn test_batch_shares_context_across_rows() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut batch = Batch::generate(&mut rng, TS, 20);

        let first = batch.next_row().unwrap();
        while let Some(row) = batch.next_row() {
            assert_eq!(row.get(0), first.get(0)); // ts
            assert_eq!(row.get(1), first.get(1)); // idc
            assert_eq!(row.get(2), first.get(2)); // host
            assert_eq!(row.get(5), first.get(5)); // url
        }
    }

    #[test]
    fn test_batch_shard_indices_are_exhaustive() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut batch = Batch::generate(&mut rng, TS, 20);

        let mut shards = Vec::new();
        while let Some(row) = batch.next_row() {
            shards.push(row.get(3).unwrap().as_i32().unwrap());
        }
        assert_eq!(shards, (0..20).collect::<Vec<i32>>());
    }

    #[test]
    fn test_batch_service_names_derive_from_app() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut batch = Batch::generate(&mut rng, TS, 5);

        let mut index = 0;
        while let Some(row) = batch.next_row() {
            let host = row.get(2).unwrap().as_str().unwrap();
            let app = identifiers::app_for_host(host);
            let service = row.get(4).unwrap().as_str().unwrap();
            assert_eq!(service, format!("{app}_service_{index}"));
            index += 1;
        }
    }

    #[test]
    fn test_batch_metric_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut batch = Batch::generate(&mut rng, TS, 20);

        while let Some(row) = batch.next_row() {
            for position in 6..10 {
                let value = row.get(position).unwrap().as_f64().unwrap();
                assert!((0.0..100.0).contains(&value));
            }
        }
    }

    #[test]
    fn test_cursor_bookkeeping() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut batch = Batch::generate(&mut rng, TS, 3);

        assert_eq!(batch.len(), 3);
        assert_eq!(batch.remaining(), 3);
        assert!(batch.has_next());

        batch.next_row().unwrap();
        assert_eq!(batch.remaining(), 2);

        batch.next_row().unwrap();
        batch.next_row().unwrap();
        assert!(!batch.has_next());
        assert!(batch.next_row().is_none());
    }
}
