//! BIFF record writer for XLS files
//!
//! This module provides functions to generate BIFF8 (Binary Interchange File Format)
//! records for writing XLS files. BIFF8 is the format used by Excel 97-2003.
//!
//! # BIFF Record Structure
//!
//! Each BIFF record consists of:
//! - Record type (2 bytes) - identifies the record
//! - Record length (2 bytes) - length of data in bytes
//! - Record data (variable length)
//!
//! # References
//!
//! Based on Microsoft's "[MS-XLS]: Excel Binary File Format (.xls) Structure" specification
//! and Apache POI's BIFF record generation.

use super::super::XlsResult;
use std::io::Write;

mod cells;
mod sst;
mod workbook;
mod worksheet;

pub(crate) use cells::{write_labelsst, write_number};
pub(crate) use sst::write_sst;
pub(crate) use workbook::{
    write_bof, write_boundsheet, write_builtin_styles, write_codepage, write_date1904, write_eof,
    write_format_record, write_usesel_fs, write_window1,
};
pub(crate) use worksheet::{write_dimensions, write_window2, write_wsbool};

/// Substream type for the workbook globals BOF
pub(crate) const BOF_WORKBOOK_GLOBALS: u16 = 0x0005;
/// Substream type for a worksheet BOF
pub(crate) const BOF_WORKSHEET: u16 = 0x0010;
/// Unicode (UTF-16LE) codepage; BIFF8 requires it
pub(crate) const CODEPAGE_UTF16: u16 = 0x04B0;

/// Write a BIFF record header
///
/// # Arguments
///
/// * `writer` - Output writer
/// * `record_type` - BIFF record type (e.g., 0x0809 for BOF)
/// * `data_len` - Length of record data in bytes
#[inline]
pub(crate) fn write_record_header<W: Write>(
    writer: &mut W,
    record_type: u16,
    data_len: u16,
) -> XlsResult<()> {
    writer.write_all(&record_type.to_le_bytes())?;
    writer.write_all(&data_len.to_le_bytes())?;
    Ok(())
}

/// Character data of an XLUnicodeString body.
///
/// ASCII text is stored compressed (one byte per character); anything else
/// as UTF-16LE. Returns the high-byte flag, the character count and the
/// encoded bytes, truncated to `max_chars` characters.
pub(crate) fn encode_xl_chars(value: &str, max_chars: usize) -> (bool, usize, Vec<u8>) {
    if value.is_ascii() {
        let bytes = &value.as_bytes()[..value.len().min(max_chars)];
        (false, bytes.len(), bytes.to_vec())
    } else {
        let mut count = 0usize;
        let mut bytes = Vec::with_capacity(value.len() * 2);
        for unit in value.encode_utf16().take(max_chars) {
            bytes.extend_from_slice(&unit.to_le_bytes());
            count += 1;
        }
        (true, count, bytes)
    }
}
