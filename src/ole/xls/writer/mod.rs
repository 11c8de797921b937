//! XLS file writing module
//!
//! Builds BIFF8 workbooks from typed cells and synthesizes them from parsed
//! delimited text.

/// BIFF8 record generation
pub(crate) mod biff;

/// Core XLS writer implementation
mod core;

/// Default fonts, number formats and XF records
pub mod formatting;

/// Delimited-text grid to workbook synthesis
mod synthesize;

pub use core::{XlsCellValue, XlsWriter};
pub use synthesize::{NormalizedWorkbook, SHEET_NAME, synthesize};
