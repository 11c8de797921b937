//! Sheetbind - spreadsheet ingestion into caller-defined records
//!
//! This library reads tabular data from legacy Excel workbooks (`.xls`),
//! Office Open XML workbooks (`.xlsx`) and comma-delimited text (`.csv`) and
//! binds each row to a record type through the [`FromRow`] trait.
//!
//! Delimited text is not read directly: it is parsed, each cell classified
//! (formula text, quoted string or number), and the result written as a
//! BIFF8 workbook that the legacy reader then consumes. Native workbooks go
//! straight to their reader.
//!
//! # Features
//!
//! - **Single entry point per source kind**: paths infer their format from the
//!   extension, streams declare it
//! - **Configurable text decoding**: GBK by default, any `encoding_rs` encoding
//! - **BIFF8 writer**: shared strings, default formatting tables, OLE2 container
//! - **Stateless calls**: no global lock, every handle released on every exit
//!
//! # Example - Binding rows from a CSV stream
//!
//! ```rust
//! use sheetbind::{CellValue, FromRow, IngestOptions, WorkbookFormat};
//! use sheetbind::sheet::text::CsvConfig;
//!
//! struct Item {
//!     name: String,
//!     qty: f64,
//! }
//!
//! impl FromRow for Item {
//!     type Error = String;
//!
//!     fn from_row(row: u32, cells: &[CellValue]) -> Result<Self, String> {
//!         let qty = cells
//!             .get(1)
//!             .and_then(CellValue::as_f64)
//!             .ok_or_else(|| format!("row {row}: qty is not a number"))?;
//!         Ok(Item { name: cells[0].to_string(), qty })
//!     }
//! }
//!
//! let csv = "name,qty\nbolt,12\nnut,30\n";
//! let options = IngestOptions::default().with_csv(CsvConfig::utf8());
//! let items: Vec<Item> = sheetbind::from_reader_with_options(
//!     csv.as_bytes(),
//!     Some(WorkbookFormat::DelimitedText),
//!     &options,
//! )?;
//!
//! assert_eq!(items.len(), 2);
//! assert_eq!(items[1].name, "nut");
//! assert_eq!(items[1].qty, 30.0);
//! # Ok::<(), sheetbind::Error>(())
//! ```
//!
//! # Example - Reading a workbook file
//!
//! ```no_run
//! use sheetbind::CellValue;
//!
//! // The header row is skipped by default
//! let rows: Vec<Vec<CellValue>> = sheetbind::from_excel("report.xlsx")?;
//! for row in &rows {
//!     println!("{row:?}");
//! }
//! # Ok::<(), sheetbind::Error>(())
//! ```

use std::io::Read;
use std::path::Path;

use log::debug;

/// Error type, format resolution and text decoding shared by every stage
pub mod common;

/// Source resolution, format dispatch and row extraction
pub mod ingest;

/// Legacy binary workbook writer
pub mod ole;

/// Cell types, the row binding trait and delimited-text parsing
pub mod sheet;

pub use common::{Error, Result, WorkbookFormat};
pub use ingest::{
    ExtractOptions, Extractor, IngestOptions, NormalizeConfig, Source, WorkbookHandle, dispatch,
};
pub use sheet::{CellValue, FromRow};

/// Bind the rows of the workbook at `path` with default options.
///
/// The format comes from the extension (`.xls`, `.xlsx` or `.csv`,
/// case-insensitive). A `.csv` input leaves a synthesized `<uuid>.xls` in
/// the working directory.
pub fn from_excel<T: FromRow, P: AsRef<Path>>(path: P) -> Result<Vec<T>> {
    from_excel_with_options(path, &IngestOptions::default())
}

/// Bind the rows of the workbook at `path`.
pub fn from_excel_with_options<T: FromRow, P: AsRef<Path>>(
    path: P,
    options: &IngestOptions,
) -> Result<Vec<T>> {
    ingest(Source::path(path), options)
}

/// Bind the rows of a workbook read from `reader` with default options.
///
/// `format` must be given; streams carry no name to infer it from.
pub fn from_reader<T: FromRow, R: Read>(
    reader: R,
    format: Option<WorkbookFormat>,
) -> Result<Vec<T>> {
    from_reader_with_options(reader, format, &IngestOptions::default())
}

/// Bind the rows of a workbook read from `reader`.
pub fn from_reader_with_options<T: FromRow, R: Read>(
    reader: R,
    format: Option<WorkbookFormat>,
    options: &IngestOptions,
) -> Result<Vec<T>> {
    ingest(Source::stream(reader, format), options)
}

fn ingest<T: FromRow>(source: Source<'_>, options: &IngestOptions) -> Result<Vec<T>> {
    let extractor = dispatch(source, &options.normalize)?;
    debug!("extracting with the {} reader", extractor.format());
    extractor.unmarshal(&options.extract)
}
