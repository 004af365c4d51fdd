//! CSV loader for the railway dataset.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::{ReportError, Result};
use crate::table::{Column, Table, TrainRecord};

/// Reads the delimited file at `path` into a [`Table`].
///
/// # Errors
///
/// Returns [`ReportError::Io`] if the file cannot be opened and
/// [`ReportError::DataFormat`] if a required column is absent or a row is malformed.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn load_table(path: &Path) -> Result<Table> {
    let file = File::open(path).map_err(|e| ReportError::io(path, e))?;
    read_table(file)
}

/// Decodes a [`Table`] from any CSV byte stream with a header row.
pub fn read_table<R: Read>(reader: R) -> Result<Table> {
    let mut rdr = csv::Reader::from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| ReportError::DataFormat(format!("unreadable header row: {e}")))?
        .clone();
    debug!(columns = headers.len(), "CSV header read");

    let missing: Vec<&str> = Column::REQUIRED
        .iter()
        .map(|c| c.header())
        .filter(|name| !headers.iter().any(|h| h == *name))
        .collect();
    if !missing.is_empty() {
        return Err(ReportError::DataFormat(format!(
            "missing required columns: {}",
            missing.join(", ")
        )));
    }

    let mut records = Vec::new();
    for (i, result) in rdr.deserialize().enumerate() {
        // +2: header is line 1
        let record: TrainRecord = result
            .map_err(|e| ReportError::DataFormat(format!("line {}: {e}", i + 2)))?;
        records.push(record);
    }

    debug!(rows = records.len(), "CSV rows decoded");
    Ok(Table::from_records(records))
}
