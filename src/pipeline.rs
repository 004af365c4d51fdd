//! Load → clean → aggregate → report, run once per invocation.

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::analyzers::aggregate::{filter_by_day, filter_by_source};
use crate::cleaner::clean;
use crate::config::ReportConfig;
use crate::loader::load_table;
use crate::output::{print_json, print_pretty};
use crate::report::{ChartRenderer, ReportArtifacts, Reporter};
use crate::stats::DatasetStats;
use crate::table::Table;

/// Outcome of a successful run.
#[derive(Debug)]
pub struct RunOutcome {
    pub stats: DatasetStats,
    pub artifacts: ReportArtifacts,
}

/// Runs every stage in order. The first failing stage aborts the run and is
/// named in the error context.
#[tracing::instrument(skip_all, fields(input = %config.input.display()))]
pub fn run<R: ChartRenderer>(config: &ReportConfig, renderer: R) -> Result<RunOutcome> {
    let mut table = load_table(&config.input)
        .with_context(|| format!("load stage failed for {}", config.input.display()))?;
    log_profile(&table);

    clean(&mut table);

    let stats = aggregate(&table, config).context("aggregate stage failed")?;

    let artifacts = Reporter::new(config, renderer)
        .generate(&table, &stats)
        .context("report stage failed")?;

    info!(
        archive = %artifacts.archive.display(),
        entries = artifacts.archived.len(),
        "Report bundle complete"
    );

    Ok(RunOutcome { stats, artifacts })
}

/// Loads, cleans and aggregates without writing any report artifact.
#[tracing::instrument(skip_all, fields(input = %config.input.display()))]
pub fn inspect(config: &ReportConfig) -> Result<DatasetStats> {
    let mut table = load_table(&config.input)
        .with_context(|| format!("load stage failed for {}", config.input.display()))?;
    log_profile(&table);

    clean(&mut table);

    aggregate(&table, config).context("aggregate stage failed")
}

fn log_profile(table: &Table) {
    let profile = table.profile();
    info!(rows = profile.rows, "Dataset loaded");

    for (column, missing) in &profile.missing {
        if *missing > 0 {
            warn!(column = column.header(), missing, "Column has missing values");
        }
    }
    for row in &profile.preview {
        debug!(?row, "Preview");
    }
}

#[tracing::instrument(skip_all)]
fn aggregate(table: &Table, config: &ReportConfig) -> crate::error::Result<DatasetStats> {
    let stats = DatasetStats::from_table(table)?;
    print_pretty(&stats);
    if let Err(e) = print_json(&stats) {
        warn!(error = %e, "Could not serialize statistics");
    }

    let saturday = filter_by_day(table, "Saturday").len();
    let focus = filter_by_source(table, &config.focus_station).len();
    info!(
        saturday_trains = saturday,
        focus_station = %config.focus_station,
        focus_trains = focus,
        "Filtered views"
    );

    let busiest = stats
        .avg_trains_per_day
        .iter()
        .max_by(|a, b| a.1.total_cmp(b.1).then_with(|| b.0.cmp(a.0)));
    if let Some((station, avg)) = busiest {
        info!(
            sources = stats.trains_per_source.len(),
            station = %station,
            avg_trains_per_day = avg,
            "Highest average trains per day"
        );
    }

    Ok(stats)
}
