//! Run reporting for generation runs.

use serde::Serialize;
use std::time::Duration;

/// Metrics from one generation run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    /// Number of rows emitted.
    pub rows_emitted: u64,
    /// Total wall time of the run.
    pub duration: Duration,
    /// Bytes written by the sink, when one was attached.
    pub bytes_written: Option<u64>,
}

impl RunReport {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.duration.as_secs_f64() > 0.0 {
            self.rows_emitted as f64 / self.duration.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Human-readable run summary.
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "Generated {} rows in {:?} ({:.2} rows/sec)",
            self.rows_emitted,
            self.duration,
            self.rows_per_second()
        );
        if let Some(bytes) = self.bytes_written {
            summary.push_str(&format!(", {bytes} bytes written"));
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_per_second() {
        let report = RunReport {
            rows_emitted: 1000,
            duration: Duration::from_secs(10),
            bytes_written: None,
        };

        assert_eq!(report.rows_per_second(), 100.0);
    }

    #[test]
    fn test_zero_duration() {
        let report = RunReport::default();

        assert_eq!(report.rows_per_second(), 0.0);
    }

    #[test]
    fn test_summary_mentions_bytes_when_present() {
        let report = RunReport {
            rows_emitted: 10,
            duration: Duration::from_secs(1),
            bytes_written: Some(420),
        };

        assert!(report.summary().contains("420 bytes"));
    }
}
