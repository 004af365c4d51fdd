//! Error taxonomy shared by every pipeline stage.

use std::path::PathBuf;

/// Errors raised while loading, analyzing or reporting on a train dataset.
///
/// Every variant is fatal to a run; callers attach the failing stage as context.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The input file is missing a required column or a row cannot be decoded.
    #[error("data format error: {0}")]
    DataFormat(String),

    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("failed to render {}: {message}", .path.display())]
    Render { path: PathBuf, message: String },

    /// Correlation is undefined for the given series.
    #[error("degenerate input: {0}")]
    DegenerateInput(String),
}

impl ReportError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReportError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
