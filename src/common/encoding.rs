//! Character encoding utilities for delimited text input.
//!
//! Delimited text carries no encoding metadata, so callers pick one up front
//! (by `encoding_rs` static, WHATWG label, or Windows codepage number). The
//! default is GBK, which legacy producers of these files used exclusively.

use std::borrow::Cow;

use encoding_rs::Encoding;
use log::warn;

use crate::common::{Error, Result};

/// Encoding used when the caller does not specify one.
pub const DEFAULT_ENCODING: &Encoding = encoding_rs::GBK;

/// Map Windows codepage identifier to encoding_rs Encoding.
///
/// Covers the codepages spreadsheet exports are commonly produced in.
///
/// # Examples
/// ```
/// use sheetbind::common::encoding::codepage_to_encoding;
///
/// let encoding = codepage_to_encoding(936).unwrap();
/// assert_eq!(encoding.name(), "GBK");
/// ```
#[inline]
pub fn codepage_to_encoding(codepage: u32) -> Option<&'static Encoding> {
    match codepage {
        // Unicode
        1200 => Some(encoding_rs::UTF_16LE),
        1201 => Some(encoding_rs::UTF_16BE),
        65001 => Some(encoding_rs::UTF_8),

        // Windows codepages (Western scripts)
        874 => Some(encoding_rs::WINDOWS_874),
        1250 => Some(encoding_rs::WINDOWS_1250),
        1251 => Some(encoding_rs::WINDOWS_1251),
        1252 => Some(encoding_rs::WINDOWS_1252),
        1253 => Some(encoding_rs::WINDOWS_1253),
        1254 => Some(encoding_rs::WINDOWS_1254),
        1255 => Some(encoding_rs::WINDOWS_1255),
        1256 => Some(encoding_rs::WINDOWS_1256),
        1257 => Some(encoding_rs::WINDOWS_1257),
        1258 => Some(encoding_rs::WINDOWS_1258),

        // East Asian codepages
        932 => Some(encoding_rs::SHIFT_JIS),
        936 | 20936 => Some(encoding_rs::GBK),
        949 => Some(encoding_rs::EUC_KR),
        950 => Some(encoding_rs::BIG5),
        54936 => Some(encoding_rs::GB18030), // superset of GBK
        20932 => Some(encoding_rs::EUC_JP),

        // ISO 8859 series
        28591 => Some(encoding_rs::WINDOWS_1252), // ISO-8859-1 approximation
        28592 => Some(encoding_rs::ISO_8859_2),
        28595 => Some(encoding_rs::ISO_8859_5),
        28597 => Some(encoding_rs::ISO_8859_7),
        28605 => Some(encoding_rs::ISO_8859_15),

        _ => None,
    }
}

/// Look up an encoding by WHATWG label (`"gbk"`, `"utf-8"`, `"latin1"`, ...).
pub fn encoding_for_label(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| Error::InvalidArgument(format!("unknown text encoding label '{label}'")))
}

/// Decode a complete text payload.
///
/// When `strip_bom` is set, a leading UTF-8 or UTF-16 byte order mark is
/// removed and overrides `encoding`. With `strict` set, malformed sequences
/// fail with `Error::MalformedInput`; otherwise they become U+FFFD.
pub fn decode_text<'a>(
    bytes: &'a [u8],
    encoding: &'static Encoding,
    strip_bom: bool,
    strict: bool,
) -> Result<Cow<'a, str>> {
    let (encoding, body) = match Encoding::for_bom(bytes) {
        Some((bom_encoding, bom_len)) if strip_bom => (bom_encoding, &bytes[bom_len..]),
        _ => (encoding, bytes),
    };

    if strict {
        return encoding
            .decode_without_bom_handling_and_without_replacement(body)
            .ok_or_else(|| {
                Error::MalformedInput(format!("input is not valid {} text", encoding.name()))
            });
    }

    let (text, had_errors) = encoding.decode_without_bom_handling(body);
    if had_errors {
        warn!(
            "replaced malformed {} sequences with U+FFFD while decoding",
            encoding.name()
        );
    }
    Ok(text)
}
