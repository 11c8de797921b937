//! Format resolution functions.
//!
//! Resolution is purely name-based; container signatures are only consulted
//! to warn about a declared format that disagrees with the payload.

use std::ffi::OsStr;
use std::path::Path;

use log::warn;

use super::types::WorkbookFormat;
use crate::common::{Error, Result};

// Magic number signatures
pub const OLE2_SIGNATURE: &[u8] = &[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];
pub const ZIP_SIGNATURE: &[u8] = &[0x50, 0x4B, 0x03, 0x04];

/// Resolve the workbook format of a path from its final extension.
///
/// A bare suffix such as `.csv` counts as its own extension.
///
/// # Errors
///
/// Returns `Error::UnsupportedFormat` carrying the offending extension (or
/// the file name when there is none).
///
/// # Examples
///
/// ```rust
/// use sheetbind::common::detection::{format_from_path, WorkbookFormat};
///
/// assert_eq!(format_from_path("report.XLSX")?, WorkbookFormat::XmlZip);
/// assert!(format_from_path("notes.txt").is_err());
/// # Ok::<(), sheetbind::Error>(())
/// ```
pub fn format_from_path<P: AsRef<Path>>(path: P) -> Result<WorkbookFormat> {
    let path = path.as_ref();
    let extension = path.extension().or_else(|| {
        let name = path.file_name()?.to_str()?;
        name.strip_prefix('.').map(OsStr::new)
    });
    match extension {
        Some(ext) => {
            let ext = ext.to_string_lossy();
            WorkbookFormat::from_extension(&ext)
                .ok_or_else(|| Error::UnsupportedFormat(format!(".{ext}")))
        },
        None => Err(Error::UnsupportedFormat(format!(
            "no extension on {}",
            path.display()
        ))),
    }
}

/// Guess a container format from its leading bytes.
///
/// Delimited text has no signature, so only binary containers are reported.
pub fn sniff_container(bytes: &[u8]) -> Option<WorkbookFormat> {
    if bytes.starts_with(OLE2_SIGNATURE) {
        Some(WorkbookFormat::LegacyBinary)
    } else if bytes.starts_with(ZIP_SIGNATURE) {
        Some(WorkbookFormat::XmlZip)
    } else {
        None
    }
}

/// Log a warning when the payload signature contradicts the declared format.
///
/// Never changes the dispatch decision. Returns true when they agree or the
/// payload carries no recognizable signature.
pub fn check_declared(declared: WorkbookFormat, bytes: &[u8], origin: &str) -> bool {
    match sniff_container(bytes) {
        Some(found) if found != declared => {
            warn!("{origin} is declared as {declared} but its signature looks like {found}");
            false
        },
        None if declared != WorkbookFormat::DelimitedText => {
            warn!("{origin} is declared as {declared} but carries no container signature");
            false
        },
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path_case_insensitive() {
        assert_eq!(
            format_from_path("a/b/x.XLS").unwrap(),
            WorkbookFormat::LegacyBinary
        );
        assert_eq!(format_from_path("x.Xlsx").unwrap(), WorkbookFormat::XmlZip);
        assert_eq!(
            format_from_path("x.csv").unwrap(),
            WorkbookFormat::DelimitedText
        );
    }

    #[test]
    fn test_format_from_path_bare_suffix() {
        assert_eq!(
            format_from_path(".csv").unwrap(),
            WorkbookFormat::DelimitedText
        );
        assert_eq!(
            format_from_path("dir/.xls").unwrap(),
            WorkbookFormat::LegacyBinary
        );
        match format_from_path(".profile") {
            Err(Error::UnsupportedFormat(ext)) => assert_eq!(ext, ".profile"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_format_from_path_unresolved() {
        match format_from_path("x.txt") {
            Err(Error::UnsupportedFormat(ext)) => assert_eq!(ext, ".txt"),
            other => panic!("unexpected: {other:?}"),
        }
        // Exact match only: no prefix or suffix tolerance
        assert!(format_from_path("x.xlsm").is_err());
        assert!(format_from_path("x.xls.bak").is_err());
        assert!(matches!(
            format_from_path("Makefile"),
            Err(Error::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_from_str_labels() {
        assert_eq!(
            "XLS".parse::<WorkbookFormat>().unwrap(),
            WorkbookFormat::LegacyBinary
        );
        assert_eq!(
            ".csv".parse::<WorkbookFormat>().unwrap(),
            WorkbookFormat::DelimitedText
        );
        assert!("ods".parse::<WorkbookFormat>().is_err());
    }

    #[test]
    fn test_sniff_container() {
        let mut ole = OLE2_SIGNATURE.to_vec();
        ole.extend_from_slice(&[0; 8]);
        assert_eq!(sniff_container(&ole), Some(WorkbookFormat::LegacyBinary));
        assert_eq!(
            sniff_container(b"PK\x03\x04rest"),
            Some(WorkbookFormat::XmlZip)
        );
        assert_eq!(sniff_container(b"a,b,c"), None);
        assert_eq!(sniff_container(b""), None);
    }

    #[test]
    fn test_check_declared() {
        assert!(check_declared(
            WorkbookFormat::XmlZip,
            b"PK\x03\x04",
            "<stream>"
        ));
        assert!(!check_declared(
            WorkbookFormat::LegacyBinary,
            b"PK\x03\x04",
            "<stream>"
        ));
        assert!(check_declared(
            WorkbookFormat::DelimitedText,
            b"a,b",
            "<stream>"
        ));
    }
}
