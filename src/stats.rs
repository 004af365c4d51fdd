use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::analyzers::aggregate::{
    average_per_group, count_distinct, day_trend, day_type_counts, most_frequent, value_counts,
};
use crate::analyzers::day::DayType;
use crate::analyzers::types::Insight;
use crate::analyzers::utility::round2;
use crate::error::Result;
use crate::table::{Column, Table};

/// Headline statistics of a cleaned train table.
#[derive(Debug, Default, Serialize)]
pub struct DatasetStats {
    pub generated_at: DateTime<Utc>,
    pub rows: usize,

    pub total_trains: usize,
    pub unique_sources: usize,
    pub unique_destinations: usize,
    pub most_common_source: Option<String>,
    pub most_common_destination: Option<String>,

    pub trains_per_source: BTreeMap<String, usize>,
    /// Mean rows per operating day, keyed by source station.
    pub avg_trains_per_day: BTreeMap<String, f64>,

    // day enrichment
    pub weekday_rows: usize,
    pub weekend_rows: usize,

    pub day_correlation: f64,
}

impl DatasetStats {
    /// # Errors
    ///
    /// Fails with `DegenerateInput` when the day-number correlation is undefined.
    pub fn from_table(table: &Table) -> Result<Self> {
        let day_types = day_type_counts(table);

        Ok(DatasetStats {
            generated_at: Utc::now(),
            rows: table.len(),
            total_trains: count_distinct(table, Column::TrainNo),
            unique_sources: count_distinct(table, Column::SourceStation),
            unique_destinations: count_distinct(table, Column::DestinationStation),
            most_common_source: most_frequent(table, Column::SourceStation),
            most_common_destination: most_frequent(table, Column::DestinationStation),
            trains_per_source: value_counts(table, Column::SourceStation),
            avg_trains_per_day: average_per_group(table, Column::SourceStation, Column::Day),
            weekday_rows: day_types.get(&DayType::Weekday).copied().unwrap_or(0),
            weekend_rows: day_types.get(&DayType::Weekend).copied().unwrap_or(0),
            day_correlation: day_trend(table)?,
        })
    }

    pub fn rounded_correlation(&self) -> f64 {
        round2(self.day_correlation)
    }

    pub fn insight(&self) -> Insight {
        Insight::from_correlation(self.day_correlation)
    }
}
