//! In-memory train table and its well-known columns.

use serde::{Deserialize, Serialize};

/// Number of rows kept in a [`TableProfile`] preview.
pub const PREVIEW_ROWS: usize = 10;

/// A single row of the railway dataset.
///
/// Every cell is optional: an empty field in the input file decodes to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainRecord {
    #[serde(rename = "Train_No")]
    pub train_no: Option<String>,
    #[serde(rename = "Train_Name", default)]
    pub train_name: Option<String>,
    #[serde(rename = "Source_Station_Name")]
    pub source_station: Option<String>,
    #[serde(rename = "Destination_Station_Name")]
    pub destination_station: Option<String>,
    #[serde(rename = "days")]
    pub day: Option<String>,
}

impl TrainRecord {
    pub fn new(train_no: &str, source: &str, destination: &str, day: &str) -> Self {
        TrainRecord {
            train_no: Some(train_no.to_string()),
            train_name: None,
            source_station: Some(source.to_string()),
            destination_station: Some(destination.to_string()),
            day: Some(day.to_string()),
        }
    }

    /// Returns the cell for `column`, if present.
    pub fn get(&self, column: Column) -> Option<&str> {
        match column {
            Column::TrainNo => self.train_no.as_deref(),
            Column::TrainName => self.train_name.as_deref(),
            Column::SourceStation => self.source_station.as_deref(),
            Column::DestinationStation => self.destination_station.as_deref(),
            Column::Day => self.day.as_deref(),
        }
    }
}

/// The well-known columns of the railway dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Column {
    TrainNo,
    TrainName,
    SourceStation,
    DestinationStation,
    Day,
}

impl Column {
    pub const ALL: [Column; 5] = [
        Column::TrainNo,
        Column::TrainName,
        Column::SourceStation,
        Column::DestinationStation,
        Column::Day,
    ];

    /// Columns the loader refuses to run without.
    pub const REQUIRED: [Column; 4] = [
        Column::TrainNo,
        Column::SourceStation,
        Column::DestinationStation,
        Column::Day,
    ];

    /// Header name as it appears in the input file.
    pub fn header(self) -> &'static str {
        match self {
            Column::TrainNo => "Train_No",
            Column::TrainName => "Train_Name",
            Column::SourceStation => "Source_Station_Name",
            Column::DestinationStation => "Destination_Station_Name",
            Column::Day => "days",
        }
    }
}

/// Ordered collection of [`TrainRecord`]s sharing one schema.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    records: Vec<TrainRecord>,
}

impl Table {
    pub fn from_records(records: Vec<TrainRecord>) -> Self {
        Table { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[TrainRecord] {
        &self.records
    }

    pub(crate) fn records_mut(&mut self) -> &mut [TrainRecord] {
        &mut self.records
    }

    /// Iterates the non-missing values of `column` in row order.
    pub fn values(&self, column: Column) -> impl Iterator<Item = &str> {
        self.records.iter().filter_map(move |r| r.get(column))
    }

    /// Summarizes the table: size, a short preview and missing cells per column.
    pub fn profile(&self) -> TableProfile {
        let missing = Column::ALL
            .iter()
            .map(|&column| {
                let count = self
                    .records
                    .iter()
                    .filter(|r| r.get(column).is_none())
                    .count();
                (column, count)
            })
            .collect();

        TableProfile {
            rows: self.records.len(),
            preview: self.records.iter().take(PREVIEW_ROWS).cloned().collect(),
            missing,
        }
    }
}

/// Shape and completeness of a loaded [`Table`].
#[derive(Debug, Serialize)]
pub struct TableProfile {
    pub rows: usize,
    pub preview: Vec<TrainRecord>,
    pub missing: Vec<(Column, usize)>,
}

impl TableProfile {
    pub fn missing_in(&self, column: Column) -> usize {
        self.missing
            .iter()
            .find(|(c, _)| *c == column)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }
}
