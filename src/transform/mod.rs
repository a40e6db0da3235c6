//! Transformation module.
//!
//! - Normalizer: flat rows to the two-entity normalized form
//! - Pipeline: parse, normalize, serialize, write

pub mod normalizer;
pub mod pipeline;

pub use normalizer::normalize;
pub use pipeline::*;
