//! Workbook format detection utilities.
//!
//! Formats are resolved from file extensions or caller declarations before any
//! byte is read. Signature sniffing exists only for diagnostics.

// Submodule declarations
pub mod functions;
pub mod types;

// Re-exports
pub use functions::{
    OLE2_SIGNATURE, ZIP_SIGNATURE, check_declared, format_from_path, sniff_container,
};
pub use types::WorkbookFormat;
