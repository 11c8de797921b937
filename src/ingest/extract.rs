//! Row extraction over legacy and XML workbooks.
//!
//! Reading is delegated to `calamine`; this module only selects the reader,
//! walks the first worksheet and hands each row to a [`FromRow`] binding.

use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::{Path, PathBuf};

use calamine::{Data, Range, Reader, Xls, Xlsx};
use log::debug;

use super::config::ExtractOptions;
use crate::common::{Error, Result, ResultExt, Stage, WorkbookFormat};
use crate::sheet::{CellValue, FromRow};

/// Seekable workbook bytes an extractor reads from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkbookHandle {
    /// Workbook file on disk, opened on each read
    File(PathBuf),
    /// Complete workbook image in memory
    Memory(Vec<u8>),
}

impl WorkbookHandle {
    pub fn path(&self) -> Option<&Path> {
        match self {
            WorkbookHandle::File(path) => Some(path),
            WorkbookHandle::Memory(_) => None,
        }
    }

    pub fn bytes(&self) -> Option<&[u8]> {
        match self {
            WorkbookHandle::File(_) => None,
            WorkbookHandle::Memory(bytes) => Some(bytes),
        }
    }

    fn origin(&self) -> String {
        match self {
            WorkbookHandle::File(path) => path.display().to_string(),
            WorkbookHandle::Memory(bytes) => format!("<{} byte buffer>", bytes.len()),
        }
    }
}

/// Reader selected for a workbook, one per supported container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extractor {
    LegacyBinary(WorkbookHandle),
    XmlZip(WorkbookHandle),
}

impl Extractor {
    pub fn format(&self) -> WorkbookFormat {
        match self {
            Extractor::LegacyBinary(_) => WorkbookFormat::LegacyBinary,
            Extractor::XmlZip(_) => WorkbookFormat::XmlZip,
        }
    }

    pub fn handle(&self) -> &WorkbookHandle {
        match self {
            Extractor::LegacyBinary(handle) | Extractor::XmlZip(handle) => handle,
        }
    }

    pub fn into_handle(self) -> WorkbookHandle {
        match self {
            Extractor::LegacyBinary(handle) | Extractor::XmlZip(handle) => handle,
        }
    }

    /// Every row of the first worksheet, indexed by absolute sheet row.
    ///
    /// Rows before the first used row come back empty, cells before the
    /// first used column as `CellValue::Empty`. Trailing empty cells are
    /// dropped.
    pub fn rows(&self) -> Result<Vec<Vec<CellValue>>> {
        let handle = self.handle();
        let range = match handle {
            WorkbookHandle::File(path) => {
                let file = File::open(path).in_stage(Stage::Open, &handle.origin())?;
                self.first_sheet(BufReader::new(file))
            },
            WorkbookHandle::Memory(bytes) => self.first_sheet(Cursor::new(bytes.as_slice())),
        }
        .in_stage(Stage::Extract, &handle.origin())?;

        let rows = sheet_rows(&range);
        debug!("extracted {} rows from {}", rows.len(), handle.origin());
        Ok(rows)
    }

    /// Bind the first worksheet's rows to `T`.
    ///
    /// The first `options.skip` rows are skipped. Binding stops at the first
    /// row `T` rejects.
    pub fn unmarshal<T: FromRow>(&self, options: &ExtractOptions) -> Result<Vec<T>> {
        let rows = self.rows()?;
        let skip = options.skip as usize;
        let mut records = Vec::with_capacity(rows.len().saturating_sub(skip));

        for (index, mut cells) in rows.into_iter().enumerate().skip(skip) {
            if options.trim_cell_values {
                cells.iter_mut().for_each(CellValue::trim_in_place);
            }
            if options.ignore_blank_rows && cells.iter().all(CellValue::is_blank) {
                continue;
            }

            let row = index as u32;
            let record = T::from_row(row, &cells).map_err(|err| Error::Binding {
                row,
                message: err.to_string(),
            })?;
            records.push(record);
        }
        Ok(records)
    }

    fn first_sheet<RS: Read + Seek>(&self, reader: RS) -> Result<Range<Data>> {
        match self {
            Extractor::LegacyBinary(_) => read_first_sheet::<Xls<RS>, RS>(reader),
            Extractor::XmlZip(_) => read_first_sheet::<Xlsx<RS>, RS>(reader),
        }
    }
}

fn read_first_sheet<W, RS>(reader: RS) -> Result<Range<Data>>
where
    RS: Read + Seek,
    W: Reader<RS>,
    Error: From<W::Error>,
{
    let mut workbook = W::new(reader)?;
    match workbook.worksheet_range_at(0) {
        Some(range) => Ok(range?),
        None => Err(Error::Extraction(
            "workbook contains no worksheets".to_string(),
        )),
    }
}

fn sheet_rows(range: &Range<Data>) -> Vec<Vec<CellValue>> {
    let Some((first_row, first_col)) = range.start() else {
        return Vec::new();
    };

    let mut rows: Vec<Vec<CellValue>> = vec![Vec::new(); first_row as usize];
    for row in range.rows() {
        let mut cells = vec![CellValue::Empty; first_col as usize];
        cells.extend(row.iter().map(CellValue::from));
        while matches!(cells.last(), Some(CellValue::Empty)) {
            cells.pop();
        }
        rows.push(cells);
    }
    rows
}

impl From<&Data> for CellValue {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty => CellValue::Empty,
            Data::Bool(v) => CellValue::Bool(*v),
            Data::Int(v) => CellValue::Int(*v),
            Data::Float(v) => CellValue::Float(*v),
            Data::String(s) => CellValue::String(s.clone()),
            Data::DateTime(dt) => CellValue::DateTime(dt.as_f64()),
            Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::String(s.clone()),
            Data::Error(e) => CellValue::Error(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_conversion() {
        assert_eq!(CellValue::from(&Data::Empty), CellValue::Empty);
        assert_eq!(CellValue::from(&Data::Float(1.5)), CellValue::Float(1.5));
        assert_eq!(CellValue::from(&Data::Int(7)), CellValue::Int(7));
        assert_eq!(
            CellValue::from(&Data::String("x".into())),
            CellValue::String("x".into())
        );
        assert_eq!(
            CellValue::from(&Data::Error(calamine::CellErrorType::Div0)),
            CellValue::Error("#DIV/0!".into())
        );
    }

    #[test]
    fn test_sheet_rows_restores_offsets() {
        let mut range: Range<Data> = Range::new((1, 1), (2, 3));
        range.set_value((1, 1), Data::String("a".into()));
        range.set_value((2, 2), Data::Float(2.0));

        let rows = sheet_rows(&range);
        assert_eq!(rows.len(), 3);
        assert!(rows[0].is_empty());
        assert_eq!(
            rows[1],
            vec![CellValue::Empty, CellValue::String("a".into())]
        );
        assert_eq!(
            rows[2],
            vec![CellValue::Empty, CellValue::Empty, CellValue::Float(2.0)]
        );
    }

    #[test]
    fn test_sheet_rows_empty_range() {
        assert!(sheet_rows(&Range::<Data>::empty()).is_empty());
    }

    #[test]
    fn test_handle_accessors() {
        let ex = Extractor::XmlZip(WorkbookHandle::Memory(vec![1, 2]));
        assert_eq!(ex.format(), WorkbookFormat::XmlZip);
        assert_eq!(ex.handle().bytes(), Some(&[1u8, 2][..]));
        assert!(ex.handle().path().is_none());
        assert_eq!(ex.into_handle(), WorkbookHandle::Memory(vec![1, 2]));
    }
}
