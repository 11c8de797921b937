//! Workbook format enumeration.

use std::fmt;

use crate::common::{Error, Result};

/// Container formats accepted by the ingestion pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkbookFormat {
    /// Microsoft Excel 97-2003 binary workbook (OLE2 + BIFF8, .xls)
    LegacyBinary,
    /// Microsoft Excel 2007+ workbook (OOXML zip package, .xlsx)
    XmlZip,
    /// Comma-delimited text (.csv)
    DelimitedText,
}

impl WorkbookFormat {
    /// Resolve a format from a bare extension (no leading dot).
    ///
    /// Matching is case-insensitive and exact: `xls`, `xlsx` and `csv` only.
    pub fn from_extension(ext: &str) -> Option<Self> {
        if ext.eq_ignore_ascii_case("xls") {
            Some(WorkbookFormat::LegacyBinary)
        } else if ext.eq_ignore_ascii_case("xlsx") {
            Some(WorkbookFormat::XmlZip)
        } else if ext.eq_ignore_ascii_case("csv") {
            Some(WorkbookFormat::DelimitedText)
        } else {
            None
        }
    }

    /// Canonical file extension, without the dot.
    pub const fn extension(&self) -> &'static str {
        match self {
            WorkbookFormat::LegacyBinary => "xls",
            WorkbookFormat::XmlZip => "xlsx",
            WorkbookFormat::DelimitedText => "csv",
        }
    }
}

impl fmt::Display for WorkbookFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ".{}", self.extension())
    }
}

impl std::str::FromStr for WorkbookFormat {
    type Err = Error;

    /// Parse a declared format label such as `"xlsx"` or `".CSV"`.
    fn from_str(label: &str) -> Result<Self> {
        let ext = label.strip_prefix('.').unwrap_or(label);
        WorkbookFormat::from_extension(ext)
            .ok_or_else(|| Error::UnsupportedFormat(label.to_string()))
    }
}
