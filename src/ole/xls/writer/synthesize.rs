//! Delimited-text grid to legacy workbook synthesis.
//!
//! Each raw token is classified and placed at its (row, column) position on a
//! single worksheet. Numeric tokens that parse become NUMBER cells; all other
//! tokens become shared-string cells. Rows keep their original lengths.

use std::io::Write;

use log::debug;

use super::super::{MAX_COLUMNS, MAX_ROWS, MAX_STRING_CHARS, XlsError};
use super::XlsWriter;
use crate::common::{Error, Result};
use crate::sheet::text::{CellPayload, RawGrid, TypedCell, classify};

/// Name of the only worksheet in a synthesized workbook
pub const SHEET_NAME: &str = "new sheet";

/// Workbook built from a parsed delimited-text grid.
///
/// Row `i` holds the classified tokens of input line `i`; row lengths match
/// the input exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedWorkbook {
    sheet_name: String,
    rows: Vec<Vec<TypedCell>>,
}

/// Classify every token of `grid` into a single-sheet workbook.
///
/// Fails with [`Error::MalformedInput`] when the grid has more rows or
/// columns than a BIFF8 sheet can hold, or when a text cell is longer than
/// [`MAX_STRING_CHARS`].
pub fn synthesize(grid: &RawGrid) -> Result<NormalizedWorkbook> {
    let width = grid.width();
    if grid.len() > MAX_ROWS || width > MAX_COLUMNS {
        let err = XlsError::CellOutOfRange {
            row: grid.len().saturating_sub(1),
            col: width.saturating_sub(1),
        };
        return Err(Error::from(err));
    }

    let mut rows = Vec::with_capacity(grid.len());
    for (r, row) in grid.rows().iter().enumerate() {
        let mut cells = Vec::with_capacity(row.len());
        for (c, token) in row.iter().enumerate() {
            let cell = classify(token);
            if let CellPayload::Text(text) = cell.resolve() {
                let len = text.encode_utf16().count();
                if len > MAX_STRING_CHARS {
                    let err = XlsError::InvalidData(format!(
                        "cell ({r}, {c}) holds {len} characters, limit is {MAX_STRING_CHARS}"
                    ));
                    return Err(Error::from(err));
                }
            }
            cells.push(cell);
        }
        rows.push(cells);
    }

    debug!("synthesized {} rows, widest {} cells", grid.len(), width);
    Ok(NormalizedWorkbook {
        sheet_name: SHEET_NAME.to_string(),
        rows,
    })
}

impl NormalizedWorkbook {
    pub fn sheet_name(&self) -> &str {
        &self.sheet_name
    }

    pub fn rows(&self) -> &[Vec<TypedCell>] {
        &self.rows
    }

    /// Classified cell at (row, col), if the input line had that many tokens.
    pub fn cell(&self, row: usize, col: usize) -> Option<&TypedCell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Serialize into a complete `.xls` file image.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(self.writer()?.to_bytes()?)
    }

    /// Serialize into `writer`.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.writer()?.write_to(writer)?;
        Ok(())
    }

    fn writer(&self) -> Result<XlsWriter> {
        let mut writer = XlsWriter::new();
        let sheet = writer.add_worksheet(&self.sheet_name)?;

        for (r, row) in self.rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                // synthesize() bounds both indices
                let (r, c) = (r as u32, c as u16);
                match cell.resolve() {
                    CellPayload::Number(value) => writer.write_number(sheet, r, c, value)?,
                    CellPayload::Text(text) => writer.write_string(sheet, r, c, text)?,
                }
            }
        }
        Ok(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(lines: &[&[&str]]) -> RawGrid {
        RawGrid::from_rows(
            lines
                .iter()
                .map(|row| row.iter().map(|s| s.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_synthesize_classifies_every_token() {
        let wb = synthesize(&grid(&[&["=A1+1", "\"name\"", "42"], &["x"]])).unwrap();

        assert_eq!(wb.sheet_name(), "new sheet");
        assert_eq!(wb.rows().len(), 2);
        assert_eq!(wb.rows()[0].len(), 3);
        assert_eq!(wb.rows()[1].len(), 1);
        assert_eq!(wb.cell(0, 0), Some(&TypedCell::FormulaLiteral("A1+1".into())));
        assert_eq!(wb.cell(0, 1), Some(&TypedCell::QuotedString("name".into())));
        assert_eq!(wb.cell(0, 2), Some(&TypedCell::Numeric("42".into())));
        assert_eq!(wb.cell(1, 1), None);
    }

    #[test]
    fn test_synthesize_empty_grid() {
        let wb = synthesize(&RawGrid::new()).unwrap();
        assert!(wb.rows().is_empty());
        assert!(!wb.to_bytes().unwrap().is_empty());
    }

    #[test]
    fn test_synthesize_rejects_too_many_columns() {
        let wide = vec!["1".to_string(); MAX_COLUMNS + 1];
        let err = synthesize(&RawGrid::from_rows(vec![wide])).unwrap_err();
        assert!(matches!(err, Error::MalformedInput(_)));
    }

    #[test]
    fn test_synthesize_rejects_too_many_rows() {
        let tall = vec![vec!["1".to_string()]; MAX_ROWS + 1];
        let err = synthesize(&RawGrid::from_rows(tall)).unwrap_err();
        assert!(matches!(err, Error::MalformedInput(_)));
    }

    #[test]
    fn test_synthesize_rejects_overlong_text() {
        let long = "x".repeat(70_000);
        let err = synthesize(&grid(&[&["h"], &[long.as_str()]])).unwrap_err();
        match err {
            Error::MalformedInput(msg) => assert!(msg.contains("cell (1, 0)"), "{msg}"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_synthesize_accepts_longest_text() {
        let longest = "\"".to_string() + &"y".repeat(MAX_STRING_CHARS) + "\"";
        let wb = synthesize(&grid(&[&[longest.as_str()]])).unwrap();
        assert!(wb.to_bytes().is_ok());
    }

    #[test]
    fn test_synthesize_accepts_exact_limits() {
        let wide = vec!["1".to_string(); MAX_COLUMNS];
        assert!(synthesize(&RawGrid::from_rows(vec![wide])).is_ok());
    }

    #[test]
    fn test_to_bytes_is_ole2() {
        let wb = synthesize(&grid(&[&["a", "1"]])).unwrap();
        let bytes = wb.to_bytes().unwrap();
        assert_eq!(&bytes[..8], crate::common::detection::OLE2_SIGNATURE);

        let mut out = Vec::new();
        wb.write_to(&mut out).unwrap();
        assert_eq!(out, bytes);
    }
}
