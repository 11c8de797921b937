//! Spreadsheet data model shared by normalization and extraction.
//!
//! # Architecture
//!
//! - `text`: delimited-text parsing and cell classification, producing the
//!   raw grid that the BIFF8 synthesizer turns into a legacy workbook
//! - `types`: `CellValue`, the cell representation handed to bindings
//! - `traits`: `FromRow`, the seam to caller-defined records

// Submodule declarations
pub mod text;
pub mod traits;
pub mod types;

// Re-exports
pub use traits::FromRow;
pub use types::CellValue;
