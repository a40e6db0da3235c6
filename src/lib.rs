//! # Confnorm - college/conference roster normalization
//!
//! Confnorm transforms a flat table of college/conference membership records
//! into a normalized two-entity JSON structure with cross-referencing
//! surrogate ids.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   CSV File  │────▶│   Parser    │────▶│ Normalizer  │────▶│ Roster JSON │
//! │  (ISO/UTF8) │     │  (auto-enc) │     │ (ids+group) │     │ (4-sp pretty│
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use confnorm::{run, INPUT_PATH, OUTPUT_PATH};
//! use std::path::Path;
//!
//! fn main() {
//!     let summary = run(Path::new(INPUT_PATH), Path::new(OUTPUT_PATH)).unwrap();
//!     println!("Unmatched Colleges Count: {}", summary.unmatched_count);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`models`] - Domain models (RawRecord, Conference, College)
//! - [`parser`] - CSV parsing with auto-detection
//! - [`transform`] - Normalization and pipeline

// Core modules
pub mod error;
pub mod models;

// Parsing
pub mod parser;

// Transformation
pub mod transform;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{CsvError, CsvResult, PipelineError, PipelineResult};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{College, Conference, NormalizedRoster, RawRecord, UNMATCHED_CONFERENCE};

// =============================================================================
// Re-exports - CSV Parsing
// =============================================================================

pub use parser::{
    decode_content, detect_delimiter, detect_encoding, parse_bytes_auto, parse_csv_file_auto,
    parse_str, ParseResult, REQUIRED_COLUMNS,
};

// =============================================================================
// Re-exports - Transform
// =============================================================================

pub use transform::normalizer::normalize;
pub use transform::pipeline::{
    run, to_pretty_json, CsvInfo, RunSummary, INPUT_PATH, OUTPUT_PATH,
};
