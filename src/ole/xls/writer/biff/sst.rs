//! Shared String Table (SST) BIFF8 writer.
//!
//! The SST is limited to 8224 data bytes per record; overflow goes into
//! CONTINUE (0x003C) records. A string header never straddles a record
//! boundary. When character data does, the continuation starts with a
//! fresh option-flags byte and UTF-16 code units are never split.

use crate::ole::xls::{MAX_STRING_CHARS, XlsResult};
use std::io::Write;

use super::{encode_xl_chars, write_record_header};

const MAX_RECORD_DATA: usize = 8224;
const RECORD_SST: u16 = 0x00FC;
const RECORD_CONTINUE: u16 = 0x003C;

/// Accumulates one record payload at a time and emits SST then CONTINUE
/// records as each fills up.
struct RecordChunker<'w, W: Write> {
    writer: &'w mut W,
    buf: Vec<u8>,
    first: bool,
}

impl<'w, W: Write> RecordChunker<'w, W> {
    fn new(writer: &'w mut W) -> Self {
        Self {
            writer,
            buf: Vec::with_capacity(MAX_RECORD_DATA),
            first: true,
        }
    }

    #[inline]
    fn room(&self) -> usize {
        MAX_RECORD_DATA - self.buf.len()
    }

    fn flush(&mut self) -> XlsResult<()> {
        if self.buf.is_empty() {
            return Ok(());
        }
        let record_type = if self.first { RECORD_SST } else { RECORD_CONTINUE };
        write_record_header(self.writer, record_type, self.buf.len() as u16)?;
        self.writer.write_all(&self.buf)?;
        self.buf.clear();
        self.first = false;
        Ok(())
    }

    fn push_string(&mut self, value: &str) -> XlsResult<()> {
        let (wide, cch, chars) = encode_xl_chars(value, MAX_STRING_CHARS);
        let flag = u8::from(wide);
        let unit = if wide { 2 } else { 1 };

        if self.room() < 3 {
            self.flush()?;
        }
        self.buf.extend_from_slice(&(cch as u16).to_le_bytes());
        self.buf.push(flag);

        let mut rest = chars.as_slice();
        while !rest.is_empty() {
            let take = (self.room() / unit * unit).min(rest.len());
            if take == 0 {
                self.flush()?;
                self.buf.push(flag);
                continue;
            }
            self.buf.extend_from_slice(&rest[..take]);
            rest = &rest[take..];
        }
        Ok(())
    }
}

/// Write the SST record, plus CONTINUE records when needed.
///
/// `cst_total` is the number of LABELSST references in the workbook;
/// `strings` holds the unique strings in index order.
pub fn write_sst<W: Write>(writer: &mut W, strings: &[String], cst_total: u32) -> XlsResult<()> {
    let mut chunker = RecordChunker::new(writer);
    chunker.buf.extend_from_slice(&cst_total.to_le_bytes());
    chunker
        .buf
        .extend_from_slice(&(strings.len() as u32).to_le_bytes());

    for s in strings {
        chunker.push_string(s)?;
    }
    chunker.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Split a record stream into (type, payload) pairs.
    fn records(mut bytes: &[u8]) -> Vec<(u16, Vec<u8>)> {
        let mut out = Vec::new();
        while bytes.len() >= 4 {
            let kind = u16::from_le_bytes([bytes[0], bytes[1]]);
            let len = u16::from_le_bytes([bytes[2], bytes[3]]) as usize;
            out.push((kind, bytes[4..4 + len].to_vec()));
            bytes = &bytes[4 + len..];
        }
        out
    }

    #[test]
    fn test_small_table_fits_one_record() {
        let mut buf = Vec::new();
        write_sst(&mut buf, &["a".to_string(), "bc".to_string()], 3).unwrap();

        let recs = records(&buf);
        assert_eq!(recs.len(), 1);
        let (kind, payload) = &recs[0];
        assert_eq!(*kind, RECORD_SST);
        assert_eq!(&payload[0..4], &3u32.to_le_bytes());
        assert_eq!(&payload[4..8], &2u32.to_le_bytes());
        assert_eq!(&payload[8..12], &[1, 0, 0, b'a']);
        assert_eq!(&payload[12..], &[2, 0, 0, b'b', b'c']);
    }

    #[test]
    fn test_long_ascii_string_spills_into_continue() {
        let long = "x".repeat(10_000);
        let mut buf = Vec::new();
        write_sst(&mut buf, std::slice::from_ref(&long), 1).unwrap();

        let recs = records(&buf);
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].0, RECORD_SST);
        assert_eq!(recs[0].1.len(), MAX_RECORD_DATA);
        assert_eq!(recs[1].0, RECORD_CONTINUE);
        // Continuation restates the compression flag
        assert_eq!(recs[1].1[0], 0x00);

        let chars = (recs[0].1.len() - 11) + (recs[1].1.len() - 1);
        assert_eq!(chars, 10_000);
    }

    #[test]
    fn test_wide_string_never_splits_code_units() {
        let long = "表".repeat(5_000);
        let mut buf = Vec::new();
        write_sst(&mut buf, std::slice::from_ref(&long), 1).unwrap();

        let recs = records(&buf);
        assert!(recs.len() >= 2);
        // 8 header bytes, 3 string header bytes, then an even run of UTF-16
        assert_eq!((recs[0].1.len() - 11) % 2, 0);
        for (kind, payload) in &recs[1..] {
            assert_eq!(*kind, RECORD_CONTINUE);
            assert_eq!(payload[0], 0x01);
            assert_eq!((payload.len() - 1) % 2, 0);
        }
    }
}
