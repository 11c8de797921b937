//! Binding seam between extracted rows and caller-defined records.

use std::convert::Infallible;
use std::fmt::Display;

use super::types::CellValue;

/// Build a record from one worksheet row.
///
/// Implementations own all field binding and coercion; the pipeline only
/// supplies the absolute (0-based) row index and the row's cells in column
/// order, with column 0 at index 0.
///
/// # Example
///
/// ```rust
/// use sheetbind::sheet::{CellValue, FromRow};
///
/// struct Employee {
///     name: String,
///     age: u32,
/// }
///
/// impl FromRow for Employee {
///     type Error = String;
///
///     fn from_row(row: u32, cells: &[CellValue]) -> Result<Self, Self::Error> {
///         let name = cells.first().map(|c| c.to_string()).unwrap_or_default();
///         let age = cells
///             .get(1)
///             .and_then(CellValue::as_f64)
///             .ok_or_else(|| format!("row {row}: missing age"))?;
///         Ok(Employee { name, age: age as u32 })
///     }
/// }
/// ```
pub trait FromRow: Sized {
    /// Error reported when the row cannot be bound.
    type Error: Display;

    fn from_row(row: u32, cells: &[CellValue]) -> Result<Self, Self::Error>;
}

impl FromRow for Vec<CellValue> {
    type Error = Infallible;

    fn from_row(_row: u32, cells: &[CellValue]) -> Result<Self, Self::Error> {
        Ok(cells.to_vec())
    }
}

/// Rows rendered as display strings, one per cell.
impl FromRow for Vec<String> {
    type Error = Infallible;

    fn from_row(_row: u32, cells: &[CellValue]) -> Result<Self, Self::Error> {
        Ok(cells.iter().map(ToString::to_string).collect())
    }
}
