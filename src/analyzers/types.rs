//! Data types produced by the aggregation pipeline.

use serde::Serialize;

/// A (source, destination) pair and how many rows it appears in.
///
/// Serializes as one `top_routes.csv` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteCount {
    pub source: String,
    pub destination: String,
    pub count: usize,
}

/// A labelled count, one bar of a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

impl LabelCount {
    pub fn new(label: impl Into<String>, count: usize) -> Self {
        LabelCount {
            label: label.into(),
            count,
        }
    }
}

/// Trend sentence chosen from the day-number correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Insight {
    PositiveTrend,
    NegativeTrend,
    NoStrongTrend,
}

impl Insight {
    pub const THRESHOLD: f64 = 0.3;

    /// `> 0.3` is positive, `< -0.3` negative, anything else no trend.
    pub fn from_correlation(r: f64) -> Self {
        match r {
            r if r > Self::THRESHOLD => Insight::PositiveTrend,
            r if r < -Self::THRESHOLD => Insight::NegativeTrend,
            _ => Insight::NoStrongTrend,
        }
    }

    pub fn sentence(self) -> &'static str {
        match self {
            Insight::PositiveTrend => "Positive trend – More trains toward weekend.",
            Insight::NegativeTrend => "Negative trend – Fewer trains toward weekend.",
            Insight::NoStrongTrend => "No strong trend across days.",
        }
    }
}
