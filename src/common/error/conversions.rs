//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert errors raised
//! by the BIFF8 writer and the external workbook readers into the unified
//! Error type.

use super::types::{Error, Result, Stage};
use crate::ole::xls::XlsError;

impl From<XlsError> for Error {
    fn from(err: XlsError) -> Self {
        match err {
            XlsError::Io(e) => Error::Io(e),
            other => Error::MalformedInput(other.to_string()),
        }
    }
}

impl From<calamine::XlsError> for Error {
    fn from(err: calamine::XlsError) -> Self {
        match err {
            calamine::XlsError::Io(e) => Error::Io(e),
            other => Error::Extraction(other.to_string()),
        }
    }
}

impl From<calamine::XlsxError> for Error {
    fn from(err: calamine::XlsxError) -> Self {
        match err {
            calamine::XlsxError::Io(e) => Error::Io(e),
            other => Error::Extraction(other.to_string()),
        }
    }
}

impl From<calamine::Error> for Error {
    fn from(err: calamine::Error) -> Self {
        match err {
            calamine::Error::Io(e) => Error::Io(e),
            calamine::Error::Xls(e) => e.into(),
            calamine::Error::Xlsx(e) => e.into(),
            other => Error::Extraction(other.to_string()),
        }
    }
}

/// Tag a fallible pipeline step with its stage and source description.
pub trait ResultExt<T> {
    fn in_stage(self, stage: Stage, origin: &str) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<Error>,
{
    #[inline]
    fn in_stage(self, stage: Stage, origin: &str) -> Result<T> {
        self.map_err(|err| err.into().in_stage(stage, origin))
    }
}
