//! Command-line interface for ingest-bench
//!
//! # Usage Examples
//!
//! ```bash
//! # Pure generation throughput, default workload (10 billion rows)
//! ingest-bench generate
//!
//! # Reproducible 1M-row sample written to CSV
//! ingest-bench generate --row-count 1000000 --seed 42 --output sample.csv
//!
//! # Inspect the metrics table schema
//! ingest-bench schema --json
//! ```

use anyhow::Context;
use bench_generator::config::{DEFAULT_ROW_COUNT, DEFAULT_SERVICES_PER_APP};
use bench_generator::{MetricsConfig, MetricsTableDataProvider, TableDataProvider};
use clap::{Parser, Subcommand};
use ingest_bench::report::RunReport;
use ingest_bench::sink::CsvSink;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

#[derive(Parser)]
#[command(name = "ingest-bench")]
#[command(about = "Synthetic metrics workload generator for time-series ingestion benchmarking")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the metrics workload, optionally writing rows to a CSV file
    Generate {
        /// Total number of rows to generate
        #[arg(long, env = "TABLE_ROW_COUNT", default_value_t = DEFAULT_ROW_COUNT)]
        row_count: u64,

        /// Number of services per application; every batch holds one row
        /// per service
        #[arg(long, env = "SERVICE_NUM_PER_APP", default_value_t = DEFAULT_SERVICES_PER_APP)]
        services_per_app: usize,

        /// RNG seed for reproducible runs (seeded from entropy when omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// CSV output file; without it rows are drained and discarded,
        /// measuring pure generation throughput
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Skip the CSV header row
        #[arg(long)]
        no_header: bool,

        /// Rows between progress log lines
        #[arg(long, default_value_t = 1_000_000)]
        progress_interval: u64,

        /// Print the run report as JSON on stdout
        #[arg(long)]
        json: bool,
    },

    /// Print the metrics table schema
    Schema {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            row_count,
            services_per_app,
            seed,
            output,
            no_header,
            progress_interval,
            json,
        } => {
            let mut config = MetricsConfig::default()
                .with_row_count(row_count)
                .with_services_per_app(services_per_app);
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }

            let report = run_generate(config, output, !no_header, progress_interval)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report.summary());
            }
        }

        Commands::Schema { json } => {
            let schema =
                bench_generator::metrics_table_schema().context("failed to build table schema")?;
            if json {
                println!("{}", serde_json::to_string_pretty(&schema)?);
            } else {
                println!("table: {}", schema.name());
                for column in schema.columns() {
                    println!(
                        "  {:<12} {:<22} {}",
                        column.name,
                        column.data_type.name(),
                        column.semantic_type.name()
                    );
                }
            }
        }
    }

    Ok(())
}

/// Drain one full row sequence, optionally through a CSV sink.
fn run_generate(
    config: MetricsConfig,
    output: Option<PathBuf>,
    include_header: bool,
    progress_interval: u64,
) -> anyhow::Result<RunReport> {
    let provider = MetricsTableDataProvider::new(config).context("failed to build provider")?;
    let progress_interval = progress_interval.max(1);

    info!(
        "Generating {} rows ({} services per app)",
        provider.row_count(),
        provider.config().services_per_app
    );

    let started = Instant::now();
    let mut sink = match &output {
        Some(path) => Some(
            CsvSink::create(path, provider.table_schema(), include_header)
                .with_context(|| format!("failed to create CSV sink at {}", path.display()))?,
        ),
        None => None,
    };

    let mut report = RunReport::default();
    let mut sequence = provider.rows();
    while sequence.has_next() {
        let row = sequence.try_next()?;
        if let Some(sink) = sink.as_mut() {
            sink.write_row(&row).context("failed to write row")?;
        }
        report.rows_emitted += 1;

        if report.rows_emitted % progress_interval == 0 {
            info!("Generated {} / {} rows", report.rows_emitted, sequence.limit());
        }
    }

    if let Some(sink) = sink {
        report.bytes_written = Some(sink.finish().context("failed to finish CSV output")?);
    }
    report.duration = started.elapsed();

    Ok(report)
}
