//! Error types for Rosling.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Rosling operations.
pub type Result<T> = std::result::Result<T, RoslingError>;

/// Errors that can occur in Rosling.
#[derive(Debug, Error)]
pub enum RoslingError {
    /// Failed to open a file.
    #[error("Failed to open file: {path}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a CSV file.
    #[error("CSV error: {0}")]
    Csv(String),

    /// The dataset contains no data rows.
    #[error("Dataset is empty: {path}")]
    EmptyDataset { path: PathBuf },

    /// A named column is missing from the table or bundle.
    #[error("Column not found: {name}")]
    ColumnNotFound { name: String },

    /// A column was accessed as the wrong kind of series.
    #[error("Column '{name}' is not {expected}")]
    ColumnKind { name: String, expected: &'static str },

    /// A column holds no finite numeric values.
    #[error("Column '{name}' has no numeric data")]
    NoNumericData { name: String },

    /// Series lengths disagree within a table or bundle.
    #[error("Length mismatch for '{name}': got {len}, expected {expected}")]
    LengthMismatch {
        name: String,
        len: usize,
        expected: usize,
    },

    /// The requested dashboard does not exist.
    #[error("Unknown dashboard: {name}")]
    UnknownDashboard { name: String },

    /// A change event referenced a control the dashboard does not have.
    #[error("Control not found: index {index}")]
    ControlNotFound { index: usize },

    /// The table has no year index to slice on.
    #[error("Dataset has no year index")]
    NoYearIndex,

    /// No rows exist for the requested year.
    #[error("No rows for year {year}")]
    YearNotFound { year: i64 },

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RoslingError {
    /// Create a FileOpen error.
    pub fn file_open(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileOpen { path, source }
    }

    /// Create a ColumnNotFound error.
    pub fn column_not_found(name: impl Into<String>) -> Self {
        Self::ColumnNotFound { name: name.into() }
    }

    /// Create an UnknownDashboard error.
    pub fn unknown_dashboard(name: impl Into<String>) -> Self {
        Self::UnknownDashboard { name: name.into() }
    }
}

impl From<csv::Error> for RoslingError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}
