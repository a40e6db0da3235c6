//! Error types for the normalization pipeline.
//!
//! Two layers:
//!
//! - [`CsvError`] - CSV reading and decoding errors
//! - [`PipelineError`] - Top-level orchestration errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// CSV Parsing Errors
// =============================================================================

/// Errors during CSV loading and parsing.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Failed to read file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to decode file content.
    #[error("Failed to decode content as {0}")]
    Encoding(String),

    /// Invalid CSV format.
    #[error("Invalid CSV format: {0}")]
    Parse(#[from] csv::Error),

    /// Empty file.
    #[error("CSV file is empty")]
    EmptyFile,

    /// A required column is absent from the header row.
    #[error("Missing required column: {0}")]
    MissingColumn(String),
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level pipeline errors.
///
/// This is the error type returned by [`crate::transform::pipeline::run`].
#[derive(Debug, Error)]
pub enum PipelineError {
    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to write the output file.
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for CSV operations.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
