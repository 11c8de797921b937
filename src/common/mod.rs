//! Common types and utilities shared across the pipeline.
//!
//! This module provides the unified error type, text encoding helpers and
//! workbook format resolution used by both the normalization and extraction
//! stages.

// Submodule declarations
pub mod detection;
pub mod encoding;
pub mod error;

// Re-exports for convenience
pub use detection::{WorkbookFormat, format_from_path};
pub use error::{Error, Result, ResultExt, Stage};
