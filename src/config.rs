//! Run configuration.
//!
//! The defaults reproduce the fixed layout of the report job: the input file
//! and output locations are all relative to the working directory.

use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "Railway_info.csv";
pub const DEFAULT_OUTPUT_DIR: &str = "railway_output";
pub const DEFAULT_ARCHIVE: &str = "railway_analysis_report.zip";
pub const DEFAULT_FOCUS_STATION: &str = "LUCKNOW JN.";
pub const DEFAULT_TOP_N: usize = 10;

/// Where a run reads from and writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Delimited input file.
    pub input: PathBuf,
    /// Directory receiving charts, CSV and summary; archived as a whole.
    pub output_dir: PathBuf,
    /// Zip file bundling the output directory.
    pub archive_path: PathBuf,
    /// Directory for the unordered day-distribution chart, kept out of the archive.
    pub exploration_dir: PathBuf,
    /// Source station whose departures are counted in the run log.
    pub focus_station: String,
    /// Rows in the top station charts and the routes CSV.
    pub top_n: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            archive_path: PathBuf::from(DEFAULT_ARCHIVE),
            exploration_dir: PathBuf::from("."),
            focus_station: DEFAULT_FOCUS_STATION.to_string(),
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl ReportConfig {
    /// Default layout rooted at `dir` instead of the working directory.
    pub fn rooted_at(dir: &std::path::Path, input: PathBuf) -> Self {
        Self {
            input,
            output_dir: dir.join(DEFAULT_OUTPUT_DIR),
            archive_path: dir.join(DEFAULT_ARCHIVE),
            exploration_dir: dir.to_path_buf(),
            ..Default::default()
        }
    }
}
