//! Cell classification for delimited-text tokens.
//!
//! Every raw token maps to exactly one `TypedCell`. The rules are checked in a
//! fixed order and the first match wins:
//!
//! 1. token starts with `=`: formula literal (stored as text, never evaluated)
//! 2. token starts with `"`: quoted string
//! 3. anything else: numeric candidate

/// Classified delimited-text token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypedCell {
    /// Token began with `=`; the leading `=` and every `"` removed
    FormulaLiteral(String),
    /// Token began with `"`; every `"` removed
    QuotedString(String),
    /// Any other token; every `"` removed
    Numeric(String),
}

/// Value a classified cell is written as.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellPayload<'a> {
    Text(&'a str),
    Number(f64),
}

/// Classify a raw token. Pure and total.
///
/// # Examples
///
/// ```rust
/// use sheetbind::sheet::text::{classify, TypedCell};
///
/// assert_eq!(classify("=SUM(A1)"), TypedCell::FormulaLiteral("SUM(A1)".into()));
/// assert_eq!(classify("\"a\"b\""), TypedCell::QuotedString("ab".into()));
/// assert_eq!(classify("4\"2"), TypedCell::Numeric("42".into()));
/// ```
pub fn classify(token: &str) -> TypedCell {
    if let Some(rest) = token.strip_prefix('=') {
        TypedCell::FormulaLiteral(strip_quotes(rest))
    } else if token.starts_with('"') {
        TypedCell::QuotedString(strip_quotes(token))
    } else {
        TypedCell::Numeric(strip_quotes(token))
    }
}

#[inline]
fn strip_quotes(token: &str) -> String {
    token.replace('"', "")
}

impl TypedCell {
    /// Cleaned text of the cell, whatever its kind.
    pub fn text(&self) -> &str {
        match self {
            TypedCell::FormulaLiteral(text)
            | TypedCell::QuotedString(text)
            | TypedCell::Numeric(text) => text,
        }
    }

    /// Resolve the payload written to the workbook.
    ///
    /// Numeric cells become numbers when their trimmed text parses as a
    /// finite float. Anything else, including non-numeric text that landed
    /// in the numeric branch, is written as a string.
    pub fn resolve(&self) -> CellPayload<'_> {
        match self {
            TypedCell::Numeric(text) => match parse_number(text) {
                Some(value) => CellPayload::Number(value),
                None => CellPayload::Text(text),
            },
            other => CellPayload::Text(other.text()),
        }
    }
}

fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    fast_float2::parse::<f64, _>(trimmed)
        .ok()
        .filter(|value| value.is_finite())
}
