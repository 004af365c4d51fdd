//! CLI entry point for the railway report tool.
//!
//! Runs the load → clean → aggregate → report pipeline over a train
//! dataset, or inspects the dataset without writing any artifacts.

use anyhow::Result;
use clap::{Parser, Subcommand};
use railway_report::config::{
    DEFAULT_ARCHIVE, DEFAULT_FOCUS_STATION, DEFAULT_INPUT, DEFAULT_OUTPUT_DIR, DEFAULT_TOP_N,
    ReportConfig,
};
use railway_report::pipeline;
use railway_report::report::PlottersRenderer;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{error, info};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "railway_report")]
#[command(about = "Analyze a railway train dataset and bundle a report", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Delimited train dataset to read
    #[arg(short, long, global = true, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Directory for charts, routes CSV and summary
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Zip file bundling the output directory
    #[arg(short, long, default_value = DEFAULT_ARCHIVE)]
    archive: PathBuf,

    /// Directory for the unordered day-distribution chart
    #[arg(long, default_value = ".")]
    exploration_dir: PathBuf,

    /// Source station whose trains are counted in the log
    #[arg(long, global = true, default_value = DEFAULT_FOCUS_STATION)]
    focus_station: String,

    /// Number of stations and routes in the top-N artifacts
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_N)]
    top: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Load and summarize the dataset without writing report files
    Inspect,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/railway_report.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("railway_report.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let config = ReportConfig {
        input: cli.input,
        output_dir: cli.output_dir,
        archive_path: cli.archive,
        exploration_dir: cli.exploration_dir,
        focus_station: cli.focus_station,
        top_n: cli.top,
    };

    let result = match cli.command {
        Some(Commands::Inspect) => pipeline::inspect(&config).map(|stats| {
            info!(
                rows = stats.rows,
                total_trains = stats.total_trains,
                correlation = stats.rounded_correlation(),
                insight = stats.insight().sentence(),
                "Inspection complete"
            );
        }),
        None => pipeline::run(&config, PlottersRenderer).map(|outcome| {
            info!(
                output_dir = %config.output_dir.display(),
                archive = %outcome.artifacts.archive.display(),
                insight = outcome.stats.insight().sentence(),
                "Run complete"
            );
        }),
    };

    if let Err(e) = &result {
        error!(error = ?e, "Run aborted");
    }
    result
}
