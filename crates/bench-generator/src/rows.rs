//! The bounded, lazy row sequence.
//!
//! A [`RowSequence`] serves rows one at a time, pulling a fresh [`Batch`]
//! whenever the current one is drained, and stops the instant the emitted
//! counter reaches the configured limit. Termination is governed by that
//! counter, not by batch boundaries: when the limit is not a multiple of
//! the batch size, the final batch is only partially consumed and its
//! unread remainder is discarded. The limit is never rounded to a batch
//! multiple.
//!
//! Construction is cheap and consumes no randomness; the first batch is not
//! built until the first pull. A sequence is single-consumer; independent
//! sequences own independent RNGs and may run on separate threads without
//! coordination.

use crate::batch::Batch;
use crate::config::MetricsConfig;
use bench_core::Row;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Error returned when pulling from a sequence that has emitted its full
/// row count. A caller-usage signal, not a fatal condition; check
/// [`RowSequence::has_next`] before pulling.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("row sequence exhausted after {limit} rows")]
pub struct SequenceExhausted {
    /// The configured total row count.
    pub limit: u64,
}

/// Lazy, single-pass, forward-only producer of metrics rows.
#[derive(Debug)]
pub struct RowSequence {
    rng: StdRng,
    limit: u64,
    emitted: u64,
    services_per_app: usize,
    batch: Option<Batch>,
}

impl RowSequence {
    /// Create a sequence from a configuration.
    ///
    /// Seeds the owned RNG from `config.seed`, or from entropy when no seed
    /// is set. No batch is built and no randomness is consumed until the
    /// first pull.
    pub fn new(config: &MetricsConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    /// Create a sequence with an explicitly constructed RNG.
    pub fn with_rng(config: &MetricsConfig, rng: StdRng) -> Self {
        Self {
            rng,
            limit: config.row_count,
            emitted: 0,
            // a batch must be non-empty for the sequence to make progress
            services_per_app: config.services_per_app.max(1),
            batch: None,
        }
    }

    /// The configured total row count.
    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Rows emitted so far. Never exceeds the limit.
    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    /// Rows left before exhaustion.
    pub fn remaining(&self) -> u64 {
        self.limit - self.emitted
    }

    /// Whether another pull will yield a row.
    pub fn has_next(&self) -> bool {
        self.emitted < self.limit
    }

    /// Pull the next row.
    ///
    /// Builds a fresh batch (new wall-clock timestamp, new identifiers, new
    /// url) when the current one is absent or drained, then returns the row
    /// at the cursor. Refused with [`SequenceExhausted`] once the limit is
    /// reached.
    pub fn try_next(&mut self) -> Result<Row, SequenceExhausted> {
        if self.emitted == self.limit {
            return Err(SequenceExhausted { limit: self.limit });
        }

        if !self.batch.as_ref().is_some_and(Batch::has_next) {
            let ts_millis = Utc::now().timestamp_millis();
            self.batch = Some(Batch::generate(
                &mut self.rng,
                ts_millis,
                self.services_per_app,
            ));
        }

        self.emitted += 1;
        let row = self
            .batch
            .as_mut()
            .and_then(Batch::next_row)
            .expect("freshly generated batch holds at least one row");
        Ok(row)
    }
}

impl Iterator for RowSequence {
    type Item = Row;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(remaining) => (remaining, Some(remaining)),
            // remaining exceeds the address space; still a valid lower bound
            Err(_) => (usize::MAX, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(row_count: u64, services_per_app: usize) -> RowSequence {
        let config = MetricsConfig::default()
            .with_row_count(row_count)
            .with_services_per_app(services_per_app)
            .with_seed(42);
        RowSequence::new(&config)
    }

    fn shard_of(row: &Row) -> i32 {
        row.get(3).unwrap().as_i32().unwrap()
    }

    #[test]
    fn test_yields_exactly_limit_rows() {
        let mut count = 0;
        for row in sequence(40, 20) {
            assert_eq!(row.len(), 10);
            count += 1;
        }
        assert_eq!(count, 40);
    }

    #[test]
    fn test_two_full_batches() {
        let rows: Vec<Row> = sequence(40, 20).collect();

        assert_eq!(rows.len(), 40);
        for batch in rows.chunks(20) {
            let shards: Vec<i32> = batch.iter().map(shard_of).collect();
            assert_eq!(shards, (0..20).collect::<Vec<i32>>());

            // context is shared within the batch
            for row in batch {
                assert_eq!(row.get(0), batch[0].get(0));
                assert_eq!(row.get(1), batch[0].get(1));
                assert_eq!(row.get(2), batch[0].get(2));
                assert_eq!(row.get(5), batch[0].get(5));
            }
        }
    }

    #[test]
    fn test_limit_not_a_batch_multiple_stops_mid_batch() {
        let rows: Vec<Row> = sequence(25, 20).collect();

        assert_eq!(rows.len(), 25);
        let trailing: Vec<i32> = rows[20..].iter().map(shard_of).collect();
        assert_eq!(trailing, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_zero_limit_is_immediately_exhausted() {
        let mut seq = sequence(0, 20);

        assert!(!seq.has_next());
        assert_eq!(seq.try_next(), Err(SequenceExhausted { limit: 0 }));
        assert!(seq.batch.is_none());
    }

    #[test]
    fn test_no_batch_before_first_pull() {
        let seq = sequence(100, 20);

        assert!(seq.batch.is_none());
        assert_eq!(seq.emitted(), 0);
    }

    #[test]
    fn test_pull_past_exhaustion_is_refused() {
        let mut seq = sequence(3, 2);

        for _ in 0..3 {
            seq.try_next().unwrap();
        }
        assert!(!seq.has_next());
        assert_eq!(seq.try_next(), Err(SequenceExhausted { limit: 3 }));
        // refusal is stable
        assert_eq!(seq.try_next(), Err(SequenceExhausted { limit: 3 }));
        assert_eq!(seq.emitted(), 3);
    }

    #[test]
    fn test_counter_bookkeeping() {
        let mut seq = sequence(5, 2);

        assert_eq!(seq.remaining(), 5);
        seq.try_next().unwrap();
        seq.try_next().unwrap();
        assert_eq!(seq.emitted(), 2);
        assert_eq!(seq.remaining(), 3);
    }

    #[test]
    fn test_size_hint_is_exact() {
        let mut seq = sequence(25, 20);

        assert_eq!(seq.size_hint(), (25, Some(25)));
        seq.next().unwrap();
        assert_eq!(seq.size_hint(), (24, Some(24)));
    }

    #[test]
    fn test_same_seed_agrees_on_random_columns() {
        // Timestamps come from the wall clock, so compare only the
        // RNG-derived columns: idc, host, shard, service and the metrics.
        let rows1: Vec<Row> = sequence(40, 20).collect();
        let rows2: Vec<Row> = sequence(40, 20).collect();

        for (row1, row2) in rows1.iter().zip(&rows2) {
            assert_eq!(row1.get(1), row2.get(1));
            assert_eq!(row1.get(2), row2.get(2));
            assert_eq!(row1.get(3), row2.get(3));
            assert_eq!(row1.get(4), row2.get(4));
            for position in 6..10 {
                assert_eq!(row1.get(position), row2.get(position));
            }
        }
    }

    #[test]
    fn test_url_minutes_match_batch_timestamp() {
        for row in sequence(40, 20) {
            let ts = row.get(0).unwrap().as_timestamp_millis().unwrap();
            let url = row.get(5).unwrap().as_str().unwrap();
            let path = url.strip_prefix("http://127.0.0.1/helloworld/").unwrap();
            let minutes: i64 = path.split('/').next().unwrap().parse().unwrap();
            assert_eq!(minutes, ts / 60_000);
        }
    }
}
