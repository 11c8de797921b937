//! Configuration for delimited-text decoding.

use encoding_rs::Encoding;

use crate::common::{Error, Result};
use crate::common::encoding::{DEFAULT_ENCODING, codepage_to_encoding, encoding_for_label};

/// Configuration for parsing delimited text.
///
/// The delimiter is fixed to `,` and quotes are not interpreted; only the
/// decoding side is configurable.
#[derive(Debug, Clone, Copy)]
pub struct CsvConfig {
    /// Text encoding of the input bytes
    pub encoding: &'static Encoding,
    /// Whether a leading byte order mark is removed (and overrides `encoding`)
    pub strip_bom: bool,
    /// Whether malformed byte sequences abort the parse
    pub strict_decoding: bool,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            encoding: DEFAULT_ENCODING, // GBK
            strip_bom: true,
            strict_decoding: false,
        }
    }
}

impl CsvConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text encoding
    pub fn with_encoding(mut self, encoding: &'static Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Set the text encoding from a WHATWG label such as `"utf-8"`
    pub fn with_encoding_label(self, label: &str) -> Result<Self> {
        Ok(self.with_encoding(encoding_for_label(label)?))
    }

    /// Set the text encoding from a Windows codepage number (936 = GBK)
    pub fn with_codepage(self, codepage: u32) -> Result<Self> {
        let encoding = codepage_to_encoding(codepage)
            .ok_or_else(|| Error::InvalidArgument(format!("unsupported codepage {codepage}")))?;
        Ok(self.with_encoding(encoding))
    }

    /// Enable/disable BOM removal
    pub fn with_strip_bom(mut self, strip: bool) -> Self {
        self.strip_bom = strip;
        self
    }

    /// Enable/disable strict decoding
    pub fn with_strict_decoding(mut self, strict: bool) -> Self {
        self.strict_decoding = strict;
        self
    }

    /// UTF-8 configuration
    pub fn utf8() -> Self {
        Self::new().with_encoding(encoding_rs::UTF_8)
    }
}
