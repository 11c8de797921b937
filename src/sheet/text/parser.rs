//! Delimited-text parser producing a raw token grid.
//!
//! Splitting is deliberately naive: every `,` separates tokens, including
//! ones inside quoted segments. A field such as `"Hello, World"` therefore
//! becomes the two tokens `"Hello` and ` World"`. Existing inputs rely on this,
//! so it is kept rather than upgraded to RFC 4180 quoting.

use std::io::Read;

use log::debug;
use memchr::{memchr, memchr_iter, memchr2};

use super::config::CsvConfig;
use crate::common::Result;
use crate::common::encoding::decode_text;

/// Field delimiter.
pub const DELIMITER: u8 = b',';

/// Raw tokens of one line, in column order.
pub type RawRow = Vec<String>;

/// Ordered rows of raw tokens. Rows may differ in length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawGrid {
    rows: Vec<RawRow>,
}

impl RawGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<RawRow>) -> Self {
        Self { rows }
    }

    pub fn push(&mut self, row: RawRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[RawRow] {
        &self.rows
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Length of the longest row
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }
}

/// Parse a complete delimited-text stream.
///
/// The whole stream is read and decoded before splitting; a read or decode
/// failure aborts the parse and no partial grid is returned.
///
/// # Example
///
/// ```rust
/// use sheetbind::sheet::text::{CsvConfig, parse};
///
/// let grid = parse("a,b\n1,2\n".as_bytes(), &CsvConfig::default())?;
/// assert_eq!(grid.len(), 2);
/// assert_eq!(grid.rows()[1], vec!["1", "2"]);
/// # Ok::<(), sheetbind::Error>(())
/// ```
pub fn parse<R: Read>(mut reader: R, config: &CsvConfig) -> Result<RawGrid> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    let text = decode_text(
        &bytes,
        config.encoding,
        config.strip_bom,
        config.strict_decoding,
    )?;

    let grid = RawGrid::from_rows(Lines::new(&text).map(split_line).collect());
    debug!(
        "parsed {} bytes of {} text into {} rows (widest {})",
        bytes.len(),
        config.encoding.name(),
        grid.len(),
        grid.width()
    );
    Ok(grid)
}

/// Split one line on `,`.
///
/// A line without any delimiter is a single token, even when empty.
/// Otherwise trailing empty tokens are dropped, so `"a,b,,"` yields
/// `["a", "b"]` and `",,"` yields no tokens at all.
pub fn split_line(line: &str) -> RawRow {
    let bytes = line.as_bytes();
    if memchr(DELIMITER, bytes).is_none() {
        return vec![line.to_string()];
    }

    let mut tokens: Vec<&str> = Vec::new();
    let mut start = 0;
    for pos in memchr_iter(DELIMITER, bytes) {
        tokens.push(&line[start..pos]);
        start = pos + 1;
    }
    tokens.push(&line[start..]);

    while tokens.last().is_some_and(|token| token.is_empty()) {
        tokens.pop();
    }

    tokens.into_iter().map(str::to_string).collect()
}

/// Line iterator splitting on `\n`, `\r` or `\r\n`.
///
/// A trailing terminator does not produce an extra empty line.
pub struct Lines<'a> {
    rest: &'a str,
}

impl<'a> Lines<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { rest: text }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        let bytes = self.rest.as_bytes();
        match memchr2(b'\n', b'\r', bytes) {
            Some(end) => {
                let line = &self.rest[..end];
                let skip = if bytes[end] == b'\r' && bytes.get(end + 1) == Some(&b'\n') {
                    2
                } else {
                    1
                };
                self.rest = &self.rest[end + skip..];
                Some(line)
            },
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            },
        }
    }
}
