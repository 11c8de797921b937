//! Unified error types for the ingestion pipeline.
//!
//! This module provides a unified error type that encompasses errors from
//! source resolution, normalization and extraction, presenting a consistent
//! API to users.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use conversions::ResultExt;
pub use types::{Error, Result, Stage};

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_stage_context_keeps_kind() {
        let err = Error::from(io::Error::new(io::ErrorKind::UnexpectedEof, "short read"))
            .in_stage(Stage::Parse, "data.csv");

        match err {
            Error::Io(inner) => {
                assert_eq!(inner.kind(), io::ErrorKind::UnexpectedEof);
                let message = inner.to_string();
                assert!(message.contains("parse"));
                assert!(message.contains("data.csv"));
                assert!(message.contains("short read"));
            },
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_stage_context_ignores_non_io() {
        let err = Error::UnsupportedFormat("txt".to_string()).in_stage(Stage::Open, "x.txt");
        assert!(matches!(err, Error::UnsupportedFormat(ref ext) if ext == "txt"));
    }

    #[test]
    fn test_result_ext() {
        let failed: std::result::Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::NotFound, "gone"));
        let err = failed.in_stage(Stage::Open, "missing.xls").unwrap_err();
        assert!(err.is_io());
        assert!(err.to_string().contains("open failed for missing.xls"));
    }
}
