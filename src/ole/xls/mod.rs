//! Legacy Excel (.xls) workbook support
//!
//! This module writes Microsoft Excel files in the legacy binary format:
//! BIFF8 (Binary Interchange File Format) record streams stored in an OLE2
//! compound document. Reading is delegated to `calamine`.

/// Error types for XLS writing
mod error;

/// BIFF8 writer and the CSV-to-workbook synthesizer
pub mod writer;

pub use error::{XlsError, XlsResult};
pub use writer::{NormalizedWorkbook, XlsWriter, synthesize};

/// Maximum number of rows in a BIFF8 worksheet.
pub const MAX_ROWS: usize = 65_536;

/// Maximum number of columns in a BIFF8 worksheet.
pub const MAX_COLUMNS: usize = 256;

/// Maximum length of a BIFF8 cell string, in UTF-16 code units.
pub const MAX_STRING_CHARS: usize = 32_767;
