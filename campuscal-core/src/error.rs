//! Error types for calendar extraction.
//!
//! Every variant is fatal for the document being processed; there is no
//! per-item recovery anywhere in the pipeline.

use thiserror::Error;

/// Errors that can occur while extracting events from a calendar document.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Layout error: the row width matches none of the known table layouts.
    #[error("Unsupported row width: {0} cells")]
    InvalidRowWidth(usize),

    /// Layout error: a header row carried a month name missing from the
    /// lookup table.
    #[error("Unknown month name: '{0}'")]
    UnknownMonth(String),

    /// Syntax error: the item does not start with a date-range expression.
    #[error("Malformed item: '{0}'")]
    MalformedItem(String),

    /// Syntax error: two dates joined by something other than "a" or "e".
    #[error("Unknown connector: '{0}'")]
    UnknownConnector(String),

    /// Semantic error: a date expression names a day that does not exist.
    #[error("Impossible calendar date: {day:02}/{month:02}/{year}")]
    ImpossibleDate { day: u32, month: u32, year: i32 },

    /// Semantic error: a two-sided range whose end precedes its start.
    #[error("Inverted date range: {start} to {end}")]
    InvertedRange {
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Table file parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for extraction operations.
pub type ExtractResult<T> = Result<T, ExtractError>;
