//! Error types for XLS workbook writing

use std::fmt;

/// Result type alias for XLS operations
pub type XlsResult<T> = Result<T, XlsError>;

/// Errors that can occur while building an XLS workbook
#[derive(Debug)]
pub enum XlsError {
    /// I/O error
    Io(std::io::Error),
    /// Cell position outside the BIFF8 grid
    CellOutOfRange {
        /// Row index (0-based)
        row: usize,
        /// Column index (0-based)
        col: usize,
    },
    /// Worksheet not found
    WorksheetNotFound(usize),
    /// Invalid data
    InvalidData(String),
}

impl fmt::Display for XlsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XlsError::Io(e) => write!(f, "I/O error: {}", e),
            XlsError::CellOutOfRange { row, col } => {
                write!(
                    f,
                    "Cell ({}, {}) exceeds BIFF8 limits of {} rows and {} columns",
                    row,
                    col,
                    super::MAX_ROWS,
                    super::MAX_COLUMNS
                )
            },
            XlsError::WorksheetNotFound(index) => {
                write!(f, "Worksheet {} not found", index)
            },
            XlsError::InvalidData(msg) => {
                write!(f, "Invalid data: {}", msg)
            },
        }
    }
}

impl std::error::Error for XlsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            XlsError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for XlsError {
    fn from(err: std::io::Error) -> Self {
        XlsError::Io(err)
    }
}
