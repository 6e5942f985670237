//! Error types for the data pipeline.

use thiserror::Error;

/// Errors raised by the load, filter, and aggregation operations.
#[derive(Error, Debug)]
pub enum DataError {
    /// The uploaded file's extension is neither `.csv` nor `.xlsx`.
    #[error("unsupported file extension: .{extension}")]
    UnsupportedFormat { extension: String },

    /// An aggregation referenced a column the table does not have.
    #[error("column '{name}' not found in table")]
    MissingColumn { name: String },

    /// A date cell could not be coerced to a calendar date.
    #[error("cannot parse '{value}' as a date")]
    InvalidDate { value: String },

    #[error("reading CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("reading workbook: {0}")]
    Xlsx(#[from] calamine::XlsxError),
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, DataError>;
