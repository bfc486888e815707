//! CSV sink rendering rows positionally.

use bench_core::{Row, TableSchema, Value};
use csv::Writer;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Default buffer size for CSV writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Error type for sink operations.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// CSV serialization error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CSV sink writing rows to a file, column order taken from the schema.
pub struct CsvSink {
    writer: Writer<BufWriter<File>>,
    path: std::path::PathBuf,
    rows_written: u64,
}

impl CsvSink {
    /// Create a sink, optionally writing a header row built from the
    /// schema's column names.
    pub fn create<P: AsRef<Path>>(
        path: P,
        schema: &TableSchema,
        include_header: bool,
    ) -> Result<Self, SinkError> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path)?;
        let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let mut writer = Writer::from_writer(buf_writer);

        if include_header {
            writer.write_record(schema.column_names())?;
        }

        Ok(Self {
            writer,
            path,
            rows_written: 0,
        })
    }

    /// Number of data rows written so far.
    pub fn rows_written(&self) -> u64 {
        self.rows_written
    }

    /// Write one row as a CSV record.
    pub fn write_row(&mut self, row: &Row) -> Result<(), SinkError> {
        let record: Vec<String> = row.values().map(value_to_field).collect();
        self.writer.write_record(&record)?;
        self.rows_written += 1;
        Ok(())
    }

    /// Flush the sink and report the output file size in bytes.
    pub fn finish(mut self) -> Result<u64, SinkError> {
        self.writer.flush()?;
        drop(self.writer);
        Ok(std::fs::metadata(&self.path)?.len())
    }
}

/// Render a value as a CSV field.
fn value_to_field(value: &Value) -> String {
    match value {
        Value::TimestampMillis(ts) => ts.to_string(),
        Value::String(s) => s.clone(),
        Value::Int32(i) => i.to_string(),
        Value::Float64(f) => f.to_string(),
    }
}
