//! Delimited-text (CSV) support.
//!
//! This module turns comma-delimited text into a raw token grid and classifies
//! each token for the workbook synthesizer.
//!
//! # Features
//!
//! - **Configurable decoding**: GBK by default, any `encoding_rs` encoding on request
//! - **Line-oriented splitting**: `\n`, `\r` and `\r\n` line endings
//! - **Naive delimiters**: commas inside quotes still split (see [`parser`])
//! - **Fixed classification order**: formula, then quoted string, then numeric
//!
//! # Example
//!
//! ```rust
//! use sheetbind::sheet::text::{CsvConfig, TypedCell, classify, parse};
//!
//! let config = CsvConfig::utf8();
//! let grid = parse("name,\"age\"\n=A1,42".as_bytes(), &config)?;
//!
//! let kinds: Vec<TypedCell> = grid.rows()[1].iter().map(|t| classify(t)).collect();
//! assert_eq!(kinds[0], TypedCell::FormulaLiteral("A1".into()));
//! assert_eq!(kinds[1], TypedCell::Numeric("42".into()));
//! # Ok::<(), sheetbind::Error>(())
//! ```

pub mod cell;
pub mod config;
pub mod parser;

pub use cell::{CellPayload, TypedCell, classify};
pub use config::CsvConfig;
pub use parser::{DELIMITER, RawGrid, RawRow, parse, split_line};

#[cfg(test)]
mod tests;
