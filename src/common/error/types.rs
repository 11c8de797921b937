//! Unified error type for the ingestion pipeline.
//!
//! Every stage (source resolution, delimited-text parsing, workbook synthesis,
//! artifact persistence and extraction) reports failures through this one
//! enum so callers see a single terminal error per call.
use std::fmt;
use std::io;

use thiserror::Error;

/// Main error type for ingestion operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The file extension or declared format is not one of `.xls`, `.xlsx`, `.csv`
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Caller contract violation, e.g. a stream source without a declared format
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// IO error against the source or the synthesized artifact
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Structurally invalid input (undecodable text, BIFF8 limits exceeded)
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// The workbook reader rejected the container
    #[error("Extraction failed: {0}")]
    Extraction(String),

    /// The row binding rejected a row
    #[error("Failed to bind row {row}: {message}")]
    Binding { row: u32, message: String },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Pipeline step an error is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Open,
    Parse,
    Synthesize,
    Persist,
    Extract,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Open => "open",
            Stage::Parse => "parse",
            Stage::Synthesize => "synthesize",
            Stage::Persist => "persist",
            Stage::Extract => "extract",
        })
    }
}

impl Error {
    /// Attach the failing stage and source description to IO errors.
    ///
    /// The original `ErrorKind` is preserved; other variants pass through
    /// untouched since they already describe what went wrong.
    pub fn in_stage(self, stage: Stage, origin: &str) -> Self {
        match self {
            Error::Io(err) => Error::Io(io::Error::new(
                err.kind(),
                format!("{stage} failed for {origin}: {err}"),
            )),
            other => other,
        }
    }

    /// Returns true for errors raised by the underlying reader or writer.
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io(_))
    }
}
