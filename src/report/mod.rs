//! Report artifacts: charts, routes CSV, text summary and the zip bundle.
//!
//! Rendering goes through [`ChartRenderer`] so the rest of the report can be
//! produced and checked without a drawing backend.

pub mod archive;
pub mod charts;

use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::analyzers::aggregate::top_routes;
use crate::config::ReportConfig;
use crate::error::{ReportError, Result};
use crate::output::{write_summary_report, write_top_routes};
use crate::stats::DatasetStats;
use crate::table::Table;

pub use archive::archive_directory;
pub use charts::{BarChart, ChartRenderer, Orientation, PlottersRenderer};

pub const TRAINS_PER_DAY_PNG: &str = "trains_per_day.png";
pub const TOP_SOURCES_PNG: &str = "top_sources.png";
pub const TOP_DESTINATIONS_PNG: &str = "top_destinations.png";
pub const TOP_ROUTES_CSV: &str = "top_routes.csv";
pub const SUMMARY_REPORT_TXT: &str = "summary_report.txt";

/// Paths written by [`Reporter::generate`].
#[derive(Debug, Clone)]
pub struct ReportArtifacts {
    /// Unordered day chart, outside the output directory.
    pub exploration_chart: PathBuf,
    /// Files written into the output directory.
    pub files: Vec<PathBuf>,
    pub archive: PathBuf,
    /// Entry names stored in the archive.
    pub archived: Vec<String>,
}

pub struct Reporter<'a, R: ChartRenderer> {
    config: &'a ReportConfig,
    renderer: R,
}

impl<'a, R: ChartRenderer> Reporter<'a, R> {
    pub fn new(config: &'a ReportConfig, renderer: R) -> Self {
        Self { config, renderer }
    }

    /// Renders the frequency-ordered day chart into the exploration directory.
    pub fn render_exploration_chart(&self, table: &Table) -> Result<PathBuf> {
        let dir = &self.config.exploration_dir;
        fs::create_dir_all(dir).map_err(|e| ReportError::io(dir, e))?;

        let path = dir.join(TRAINS_PER_DAY_PNG);
        self.renderer.render(&BarChart::day_distribution(table), &path)?;
        Ok(path)
    }

    /// Renders the day and top-station charts into the output directory.
    pub fn render_charts(&self, table: &Table) -> Result<Vec<PathBuf>> {
        let n = self.config.top_n;
        let charts = [
            (TRAINS_PER_DAY_PNG, BarChart::trains_per_day(table)),
            (TOP_SOURCES_PNG, BarChart::top_sources(table, n)),
            (TOP_DESTINATIONS_PNG, BarChart::top_destinations(table, n)),
        ];

        let mut written = Vec::with_capacity(charts.len());
        for (name, chart) in &charts {
            let path = self.config.output_dir.join(name);
            self.renderer.render(chart, &path)?;
            written.push(path);
        }
        Ok(written)
    }

    /// Writes `top_routes.csv` and `summary_report.txt` into the output directory.
    pub fn write_tables(&self, table: &Table, stats: &DatasetStats) -> Result<Vec<PathBuf>> {
        let routes_path = self.config.output_dir.join(TOP_ROUTES_CSV);
        write_top_routes(&routes_path, &top_routes(table, self.config.top_n))?;

        let summary_path = self.config.output_dir.join(SUMMARY_REPORT_TXT);
        write_summary_report(&summary_path, stats)?;

        Ok(vec![routes_path, summary_path])
    }

    /// Produces every artifact, then bundles the output directory. The archive
    /// is always built last.
    #[tracing::instrument(skip_all, fields(output_dir = %self.config.output_dir.display()))]
    pub fn generate(&self, table: &Table, stats: &DatasetStats) -> Result<ReportArtifacts> {
        let out = &self.config.output_dir;
        fs::create_dir_all(out).map_err(|e| ReportError::io(out, e))?;

        let exploration_chart = self.render_exploration_chart(table)?;

        let mut files = self.render_charts(table)?;
        files.extend(self.write_tables(table, stats)?);
        info!(files = files.len(), "Report files written");

        let archived = archive_directory(out, &self.config.archive_path)?;

        Ok(ReportArtifacts {
            exploration_chart,
            files,
            archive: self.config.archive_path.clone(),
            archived,
        })
    }
}
