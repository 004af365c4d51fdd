//! Output formatting and persistence for report artifacts.
//!
//! Supports pretty-printing, JSON logging, the top-routes CSV and the
//! plain-text summary report.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use csv::WriterBuilder;
use tracing::{debug, info};

use crate::analyzers::types::RouteCount;
use crate::error::{ReportError, Result};
use crate::stats::DatasetStats;

const ROUTES_HEADER: [&str; 3] = ["source", "destination", "count"];

/// Logs dataset statistics using Rust's debug pretty-print format.
pub fn print_pretty(stats: &DatasetStats) {
    debug!("{:#?}", stats);
}

/// Logs dataset statistics as pretty-printed JSON.
pub fn print_json(stats: &DatasetStats) -> anyhow::Result<()> {
    info!("{}", serde_json::to_string_pretty(stats)?);
    Ok(())
}

/// Writes `routes` to a fresh CSV file with a `source,destination,count` header.
pub fn write_top_routes(path: &Path, routes: &[RouteCount]) -> Result<()> {
    debug!(path = %path.display(), rows = routes.len(), "Writing routes CSV");

    // Header written explicitly so an empty route list still yields one.
    let mut writer = WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(ROUTES_HEADER)?;

    for route in routes {
        writer.serialize(route)?;
    }
    writer.flush().map_err(|e| ReportError::io(path, e))?;

    Ok(())
}

/// Renders the fixed-template text summary.
pub fn render_summary(stats: &DatasetStats) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "Train Data Analysis Report");
    let _ = writeln!(out, "==========================\n");
    let _ = writeln!(out, "Total Trains: {}", stats.total_trains);
    let _ = writeln!(out, "Unique Source Stations: {}", stats.unique_sources);
    let _ = writeln!(out, "Unique Destination Stations: {}\n", stats.unique_destinations);
    let _ = writeln!(
        out,
        "Most Common Source Station: {}",
        stats.most_common_source.as_deref().unwrap_or("N/A")
    );
    let _ = writeln!(
        out,
        "Most Common Destination Station: {}\n",
        stats.most_common_destination.as_deref().unwrap_or("N/A")
    );
    let _ = writeln!(
        out,
        "Correlation (Day Number vs Train Count): {}",
        format_rounded(stats.rounded_correlation())
    );
    let _ = writeln!(out, "Insight: {}", stats.insight().sentence());

    out
}

/// Writes [`render_summary`] output to `path`.
pub fn write_summary_report(path: &Path, stats: &DatasetStats) -> Result<()> {
    fs::write(path, render_summary(stats)).map_err(|e| ReportError::io(path, e))
}

/// Formats a rounded value keeping at least one decimal place (`1.0`, `-0.97`).
fn format_rounded(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn stats(correlation: f64) -> DatasetStats {
        DatasetStats {
            rows: 11,
            total_trains: 7,
            unique_sources: 3,
            unique_destinations: 4,
            most_common_source: Some("DELHI".to_string()),
            most_common_destination: Some("MUMBAI CST".to_string()),
            day_correlation: correlation,
            ..Default::default()
        }
    }

    #[test]
    fn test_print_pretty_does_not_panic() {
        print_pretty(&DatasetStats::default());
    }

    #[test]
    fn test_print_json_does_not_panic() {
        print_json(&DatasetStats::default()).unwrap();
    }

    #[test]
    fn test_render_summary_template() {
        let text = render_summary(&stats(-0.97187));
        let expected = "Train Data Analysis Report\n\
                        ==========================\n\
                        \n\
                        Total Trains: 7\n\
                        Unique Source Stations: 3\n\
                        Unique Destination Stations: 4\n\
                        \n\
                        Most Common Source Station: DELHI\n\
                        Most Common Destination Station: MUMBAI CST\n\
                        \n\
                        Correlation (Day Number vs Train Count): -0.97\n\
                        Insight: Negative trend – Fewer trains toward weekend.\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_summary_insight_bands() {
        assert!(render_summary(&stats(0.5)).contains("Insight: Positive trend"));
        assert!(render_summary(&stats(0.1)).contains("Insight: No strong trend across days."));
        assert!(render_summary(&stats(-1.0)).contains("): -1.0\n"));
    }

    #[test]
    fn test_write_top_routes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("top_routes.csv");
        let routes = vec![
            RouteCount {
                source: "DELHI".into(),
                destination: "MUMBAI".into(),
                count: 4,
            },
            RouteCount {
                source: "AGRA".into(),
                destination: "PUNE".into(),
                count: 2,
            },
        ];

        write_top_routes(&path, &routes).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines, vec!["source,destination,count", "DELHI,MUMBAI,4", "AGRA,PUNE,2"]);
    }

    #[test]
    fn test_write_top_routes_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("top_routes.csv");
        let route = RouteCount {
            source: "A".into(),
            destination: "B".into(),
            count: 1,
        };

        write_top_routes(&path, &[route.clone(), route.clone()]).unwrap();
        write_top_routes(&path, &[route]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
    }

    #[test]
    fn test_write_top_routes_empty_has_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("top_routes.csv");

        write_top_routes(&path, &[]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.trim_end(), "source,destination,count");
    }

    #[test]
    fn test_write_summary_report_to_missing_dir_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("summary_report.txt");
        let err = write_summary_report(&path, &stats(0.0)).unwrap_err();
        assert!(matches!(err, ReportError::Io { .. }));
    }
}
