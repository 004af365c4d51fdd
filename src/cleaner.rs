//! Canonical casing for station and day names.

use tracing::debug;

use crate::table::Table;

/// Upper-cases station names and capitalizes day names in place.
///
/// Idempotent; missing cells stay missing.
#[tracing::instrument(skip(table), fields(rows = table.len()))]
pub fn clean(table: &mut Table) {
    for record in table.records_mut() {
        if let Some(s) = record.source_station.as_mut() {
            *s = s.to_uppercase();
        }
        if let Some(s) = record.destination_station.as_mut() {
            *s = s.to_uppercase();
        }
        if let Some(d) = record.day.as_mut() {
            *d = capitalize(d);
        }
    }

    debug!("Station and day names normalized");
}

/// First character upper-cased, the rest lower-cased.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
