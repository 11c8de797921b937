//! XLS file writer implementation
//!
//! Generates a BIFF8 `Workbook` stream and wraps it in an OLE2 compound
//! document. The writer covers what synthesized workbooks need: plain
//! string and number cells on any number of worksheets, a deduplicated
//! shared string table and the default formatting tables.
//!
//! # Example
//!
//! ```rust
//! use sheetbind::ole::xls::XlsWriter;
//!
//! let mut writer = XlsWriter::new();
//! let sheet = writer.add_worksheet("new sheet")?;
//!
//! writer.write_string(sheet, 0, 0, "Hello")?;
//! writer.write_number(sheet, 0, 1, 42.0)?;
//!
//! let bytes = writer.to_bytes()?;
//! assert_eq!(&bytes[..4], &[0xD0, 0xCF, 0x11, 0xE0]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use super::super::{MAX_COLUMNS, MAX_ROWS, MAX_STRING_CHARS, XlsError, XlsResult};
use super::biff;
use super::formatting::{DEFAULT_CELL_XF, FormattingManager};
use std::collections::{BTreeMap, HashMap};
use std::io::{Cursor, Write};

/// Name of the workbook stream inside the compound document
const WORKBOOK_STREAM: &str = "Workbook";

/// Cell value type for writing
#[derive(Debug, Clone, PartialEq)]
pub enum XlsCellValue {
    /// String value, stored through the SST
    String(String),
    /// Number value (f64)
    Number(f64),
}

/// A worksheet in the writer
#[derive(Debug)]
struct WritableWorksheet {
    name: String,
    /// Cells keyed by (row, col); iteration order is record order
    cells: BTreeMap<(u32, u16), XlsCellValue>,
}

impl WritableWorksheet {
    fn new(name: String) -> Self {
        Self {
            name,
            cells: BTreeMap::new(),
        }
    }

    /// Used area as (first_row, last_row + 1, first_col, last_col + 1).
    fn dimensions(&self) -> (u32, u32, u16, u16) {
        let mut keys = self.cells.keys();
        let Some(&(first_row, first_col)) = keys.next() else {
            return (0, 0, 0, 0);
        };
        let (mut last_row, mut min_col, mut max_col) = (first_row, first_col, first_col);
        for &(row, col) in keys {
            last_row = row;
            min_col = min_col.min(col);
            max_col = max_col.max(col);
        }
        (first_row, last_row + 1, min_col, max_col + 1)
    }
}

/// Deduplicated shared strings in first-use order
#[derive(Debug, Default)]
struct SharedStrings {
    strings: Vec<String>,
    index: HashMap<String, u32>,
    /// Total LABELSST references, duplicates included
    total: u32,
}

impl SharedStrings {
    fn intern(&mut self, value: &str) -> u32 {
        self.total = self.total.saturating_add(1);
        if let Some(&idx) = self.index.get(value) {
            return idx;
        }
        let idx = self.strings.len() as u32;
        self.index.insert(value.to_string(), idx);
        self.strings.push(value.to_string());
        idx
    }
}

/// XLS file writer
///
/// Cells are buffered until [`XlsWriter::to_bytes`] or
/// [`XlsWriter::write_to`] serializes the whole workbook.
pub struct XlsWriter {
    worksheets: Vec<WritableWorksheet>,
    fmt: FormattingManager,
}

impl XlsWriter {
    /// Create a new XLS writer
    pub fn new() -> Self {
        Self {
            worksheets: Vec::new(),
            fmt: FormattingManager::new(),
        }
    }

    /// Add a new worksheet and return its index
    ///
    /// Names must be 1 to 31 characters and unique within the workbook.
    pub fn add_worksheet(&mut self, name: &str) -> XlsResult<usize> {
        let len = name.chars().count();
        if len == 0 || len > 31 {
            return Err(XlsError::InvalidData(
                "Worksheet name must be 1-31 characters".to_string(),
            ));
        }
        if self.worksheets.iter().any(|ws| ws.name == name) {
            return Err(XlsError::InvalidData(format!(
                "Worksheet '{}' already exists",
                name
            )));
        }

        self.worksheets
            .push(WritableWorksheet::new(name.to_string()));
        Ok(self.worksheets.len() - 1)
    }

    /// Write a string value to a cell
    ///
    /// Strings longer than [`MAX_STRING_CHARS`] UTF-16 code units are rejected.
    pub fn write_string(&mut self, sheet: usize, row: u32, col: u16, value: &str) -> XlsResult<()> {
        let len = value.encode_utf16().count();
        if len > MAX_STRING_CHARS {
            return Err(XlsError::InvalidData(format!(
                "cell ({row}, {col}) holds {len} characters, limit is {MAX_STRING_CHARS}"
            )));
        }
        self.write_cell(sheet, row, col, XlsCellValue::String(value.to_string()))
    }

    /// Write a number value to a cell
    pub fn write_number(&mut self, sheet: usize, row: u32, col: u16, value: f64) -> XlsResult<()> {
        self.write_cell(sheet, row, col, XlsCellValue::Number(value))
    }

    fn write_cell(
        &mut self,
        sheet: usize,
        row: u32,
        col: u16,
        value: XlsCellValue,
    ) -> XlsResult<()> {
        if row as usize >= MAX_ROWS || col as usize >= MAX_COLUMNS {
            return Err(XlsError::CellOutOfRange {
                row: row as usize,
                col: col as usize,
            });
        }

        let worksheet = self
            .worksheets
            .get_mut(sheet)
            .ok_or(XlsError::WorksheetNotFound(sheet))?;
        worksheet.cells.insert((row, col), value);
        Ok(())
    }

    /// Number of worksheets in this workbook
    pub fn worksheet_count(&self) -> usize {
        self.worksheets.len()
    }

    /// Worksheet name by index
    pub fn worksheet_name(&self, index: usize) -> Option<&str> {
        self.worksheets.get(index).map(|w| w.name.as_str())
    }

    /// Serialize the workbook into a complete OLE2 `.xls` file image.
    pub fn to_bytes(&self) -> XlsResult<Vec<u8>> {
        let workbook_stream = self.generate_workbook_stream()?;

        // Excel 97-2003 files use 512-byte sectors
        let mut ole =
            cfb::CompoundFile::create_with_version(cfb::Version::V3, Cursor::new(Vec::new()))?;
        {
            let mut stream = ole.create_stream(WORKBOOK_STREAM)?;
            stream.write_all(&workbook_stream)?;
        }
        ole.flush()?;
        Ok(ole.into_inner().into_inner())
    }

    /// Serialize the workbook into `writer`.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> XlsResult<()> {
        writer.write_all(&self.to_bytes()?)?;
        Ok(())
    }

    fn shared_strings(&self) -> SharedStrings {
        let mut sst = SharedStrings::default();
        for worksheet in &self.worksheets {
            for value in worksheet.cells.values() {
                if let XlsCellValue::String(s) = value {
                    sst.intern(s);
                }
            }
        }
        sst
    }

    /// Generate the complete Workbook stream with all BIFF records
    fn generate_workbook_stream(&self) -> XlsResult<Vec<u8>> {
        let sst = self.shared_strings();
        let mut stream = Vec::new();

        // === Workbook Globals ===
        biff::write_bof(&mut stream, biff::BOF_WORKBOOK_GLOBALS)?;
        biff::write_codepage(&mut stream, biff::CODEPAGE_UTF16)?;
        biff::write_date1904(&mut stream, false)?;
        biff::write_window1(&mut stream)?;

        self.fmt.write_fonts(&mut stream)?;
        self.fmt.write_number_formats(&mut stream)?;
        self.fmt.write_formats(&mut stream)?;
        biff::write_builtin_styles(&mut stream)?;
        biff::write_usesel_fs(&mut stream)?;

        // Sheet offsets are unknown until the globals are complete
        let mut boundsheet_offsets = Vec::with_capacity(self.worksheets.len());
        for worksheet in &self.worksheets {
            boundsheet_offsets.push(stream.len());
            biff::write_boundsheet(&mut stream, 0, &worksheet.name)?;
        }

        if !sst.strings.is_empty() {
            biff::write_sst(&mut stream, &sst.strings, sst.total)?;
        }
        biff::write_eof(&mut stream)?;

        // === Worksheets ===
        for (worksheet, boundsheet) in self.worksheets.iter().zip(boundsheet_offsets) {
            let bof_offset = u32::try_from(stream.len()).map_err(|_| {
                XlsError::InvalidData("Workbook stream exceeds 4 GiB".to_string())
            })?;
            // BOUNDSHEET position field follows the 4-byte record header
            stream[boundsheet + 4..boundsheet + 8].copy_from_slice(&bof_offset.to_le_bytes());

            biff::write_bof(&mut stream, biff::BOF_WORKSHEET)?;
            let (first_row, last_row, first_col, last_col) = worksheet.dimensions();
            biff::write_dimensions(&mut stream, first_row, last_row, first_col, last_col)?;
            biff::write_wsbool(&mut stream)?;
            biff::write_window2(&mut stream)?;

            for (&(row, col), value) in &worksheet.cells {
                match value {
                    XlsCellValue::Number(n) => {
                        biff::write_number(&mut stream, row, col, DEFAULT_CELL_XF, *n)?;
                    },
                    XlsCellValue::String(s) => {
                        let sst_index = sst.index.get(s).copied().ok_or_else(|| {
                            XlsError::InvalidData(format!("String '{}' missing from SST", s))
                        })?;
                        biff::write_labelsst(&mut stream, row, col, DEFAULT_CELL_XF, sst_index)?;
                    },
                }
            }

            biff::write_eof(&mut stream)?;
        }

        Ok(stream)
    }
}

impl Default for XlsWriter {
    fn default() -> Self {
        Self::new()
    }
}
