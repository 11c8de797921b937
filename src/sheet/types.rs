//! Common types for spreadsheet rows handed to the binding layer.

use std::fmt;

/// Types of data that can be stored in a cell.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// Empty cell
    #[default]
    Empty,
    /// Boolean value
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point number
    Float(f64),
    /// String value
    String(String),
    /// Date/time value (stored as serial number)
    DateTime(f64),
    /// Error value (e.g. `#DIV/0!`)
    Error(String),
}

impl CellValue {
    /// True for `Empty` and for strings holding only whitespace.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::String(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric view of the cell; integers and date serials widen to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            CellValue::Int(v) => Some(v as f64),
            CellValue::Float(v) | CellValue::DateTime(v) => Some(v),
            _ => None,
        }
    }

    /// Strip surrounding whitespace from string cells in place.
    pub fn trim_in_place(&mut self) {
        if let CellValue::String(s) = self {
            let trimmed = s.trim();
            if trimmed.len() != s.len() {
                *s = trimmed.to_string();
            }
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Bool(v) => write!(f, "{}", if *v { "TRUE" } else { "FALSE" }),
            CellValue::Int(v) => write!(f, "{v}"),
            CellValue::Float(v) | CellValue::DateTime(v) => write!(f, "{v}"),
            CellValue::String(s) | CellValue::Error(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_detection() {
        assert!(CellValue::Empty.is_blank());
        assert!(CellValue::String("  \t".to_string()).is_blank());
        assert!(!CellValue::String("x".to_string()).is_blank());
        assert!(!CellValue::Float(0.0).is_blank());
    }

    #[test]
    fn test_trim_in_place() {
        let mut cell = CellValue::String("  name ".to_string());
        cell.trim_in_place();
        assert_eq!(cell, CellValue::String("name".to_string()));

        let mut number = CellValue::Float(1.5);
        number.trim_in_place();
        assert_eq!(number, CellValue::Float(1.5));
    }

    #[test]
    fn test_display() {
        assert_eq!(CellValue::Float(2.5).to_string(), "2.5");
        assert_eq!(CellValue::Float(2.0).to_string(), "2");
        assert_eq!(CellValue::Bool(true).to_string(), "TRUE");
        assert_eq!(CellValue::Empty.to_string(), "");
    }
}
