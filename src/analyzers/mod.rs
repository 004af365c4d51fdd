//! Descriptive aggregation over a cleaned train table.
//!
//! Grouped counts, per-group means, day classification and the
//! day-number/train-count correlation used by the summary report.

pub mod aggregate;
pub mod day;
pub mod types;
pub mod utility;
