//! Bar-chart descriptions and the plotters-backed renderer.

use std::path::Path;

use plotters::prelude::*;

use crate::analyzers::aggregate::{day_counts, day_counts_ordered, top_stations};
use crate::analyzers::types::LabelCount;
use crate::error::{ReportError, Result};
use crate::table::{Column, Table};

const DAY_CHART_SIZE: (u32, u32) = (1000, 500);
const STATION_CHART_SIZE: (u32, u32) = (1000, 600);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Categories along the x axis.
    Vertical,
    /// Categories along the y axis, first bar on top.
    Horizontal,
}

/// Everything needed to draw one bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    pub orientation: Orientation,
    pub size: (u32, u32),
    pub bars: Vec<LabelCount>,
}

impl BarChart {
    /// Rows per day, most frequent first.
    pub fn day_distribution(table: &Table) -> Self {
        BarChart {
            title: "Train Distribution by Days".to_string(),
            x_desc: "Days".to_string(),
            y_desc: "Train Count".to_string(),
            orientation: Orientation::Vertical,
            size: DAY_CHART_SIZE,
            bars: day_counts(table),
        }
    }

    /// Rows per day, Monday through Sunday.
    pub fn trains_per_day(table: &Table) -> Self {
        BarChart {
            title: "Trains Per Day".to_string(),
            x_desc: "Day".to_string(),
            y_desc: "Count".to_string(),
            orientation: Orientation::Vertical,
            size: DAY_CHART_SIZE,
            bars: day_counts_ordered(table),
        }
    }

    pub fn top_sources(table: &Table, n: usize) -> Self {
        BarChart {
            title: format!("Top {n} Source Stations"),
            x_desc: "Number of Trains".to_string(),
            y_desc: "Source Station".to_string(),
            orientation: Orientation::Horizontal,
            size: STATION_CHART_SIZE,
            bars: top_stations(table, Column::SourceStation, n),
        }
    }

    pub fn top_destinations(table: &Table, n: usize) -> Self {
        BarChart {
            title: format!("Top {n} Destination Stations"),
            x_desc: "Number of Trains".to_string(),
            y_desc: "Destination Station".to_string(),
            orientation: Orientation::Horizontal,
            size: STATION_CHART_SIZE,
            bars: top_stations(table, Column::DestinationStation, n),
        }
    }
}

/// Draws a [`BarChart`] to an image file.
pub trait ChartRenderer {
    fn render(&self, chart: &BarChart, path: &Path) -> Result<()>;
}

impl<R: ChartRenderer + ?Sized> ChartRenderer for &R {
    fn render(&self, chart: &BarChart, path: &Path) -> Result<()> {
        (**self).render(chart, path)
    }
}

/// Renders PNG bar charts with the plotters bitmap backend.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlottersRenderer;

impl ChartRenderer for PlottersRenderer {
    #[tracing::instrument(skip_all, fields(title = %chart.title, path = %path.display()))]
    fn render(&self, chart: &BarChart, path: &Path) -> Result<()> {
        draw(chart, path).map_err(|e| ReportError::Render {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

fn draw(chart: &BarChart, path: &Path) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, chart.size).into_drawing_area();
    root.fill(&WHITE)?;

    // Horizontal charts read top-down, plotters counts segments bottom-up.
    let bars: Vec<&LabelCount> = match chart.orientation {
        Orientation::Vertical => chart.bars.iter().collect(),
        Orientation::Horizontal => chart.bars.iter().rev().collect(),
    };

    let segments = saturating_u32(bars.len().max(1));
    let max = saturating_u32(bars.iter().map(|b| b.count).max().unwrap_or(0));
    let value_top = max.saturating_add(max / 10).saturating_add(1);

    let label_of = |v: &SegmentValue<u32>| match v {
        SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => bars
            .get(*i as usize)
            .map(|b| b.label.clone())
            .unwrap_or_default(),
        SegmentValue::Last => String::new(),
    };
    let data = bars
        .iter()
        .enumerate()
        .map(|(i, b)| (saturating_u32(i), saturating_u32(b.count)));

    match chart.orientation {
        Orientation::Vertical => {
            let mut ctx = ChartBuilder::on(&root)
                .caption(&chart.title, ("sans-serif", 24))
                .margin(10)
                .x_label_area_size(40)
                .y_label_area_size(60)
                .build_cartesian_2d((0u32..segments).into_segmented(), 0u32..value_top)?;

            ctx.configure_mesh()
                .disable_x_mesh()
                .x_labels(segments as usize)
                .x_label_formatter(&label_of)
                .x_desc(&chart.x_desc)
                .y_desc(&chart.y_desc)
                .draw()?;

            ctx.draw_series(
                Histogram::vertical(&ctx)
                    .style(BLUE.mix(0.8).filled())
                    .margin(8)
                    .data(data),
            )?;
        }
        Orientation::Horizontal => {
            let mut ctx = ChartBuilder::on(&root)
                .caption(&chart.title, ("sans-serif", 24))
                .margin(10)
                .x_label_area_size(40)
                .y_label_area_size(220)
                .build_cartesian_2d(0u32..value_top, (0u32..segments).into_segmented())?;

            ctx.configure_mesh()
                .disable_y_mesh()
                .y_labels(segments as usize)
                .y_label_formatter(&label_of)
                .x_desc(&chart.x_desc)
                .y_desc(&chart.y_desc)
                .draw()?;

            ctx.draw_series(
                Histogram::horizontal(&ctx)
                    .style(BLUE.mix(0.8).filled())
                    .margin(4)
                    .data(data),
            )?;
        }
    }

    root.present()?;
    Ok(())
}

fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
