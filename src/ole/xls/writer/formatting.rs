//! Default formatting records (FONT, FORMAT, XF)
//!
//! Synthesized workbooks carry no styling of their own, but Excel and the
//! readers we feed require a minimal, consistent formatting table: four
//! default fonts, the first eight built-in number formats and the 21
//! standard XF records. Every cell points at [`DEFAULT_CELL_XF`].

use super::super::XlsResult;
use super::biff::{encode_xl_chars, write_format_record, write_record_header};
use std::io::Write;

pub const FONT_WEIGHT_NORMAL: u16 = 400;
pub const FONT_WEIGHT_BOLD: u16 = 700;

/// Automatic (system window text) colour index
pub const COLOR_AUTOMATIC: u16 = 0x7FFF;

/// XF index used by every cell record: the first cell XF after the 15
/// style XFs.
pub const DEFAULT_CELL_XF: u16 = 15;

/// Built-in number formats 0x00..=0x07, written as FORMAT records.
const BUILTIN_NUMBER_FORMATS: [&str; 8] = [
    "General",
    "0",
    "0.00",
    "#,##0",
    "#,##0.00",
    "\"$\"#,##0_);(\"$\"#,##0)",
    "\"$\"#,##0_);[Red](\"$\"#,##0)",
    "\"$\"#,##0.00_);(\"$\"#,##0.00)",
];

/// Number formats of the five built-in style XFs (16..=20): comma,
/// comma [0], currency, currency [0] and percent.
const BUILTIN_STYLE_FORMATS: [u16; 5] = [0x002B, 0x0029, 0x002C, 0x002A, 0x0009];

/// Font definition
#[derive(Debug, Clone)]
pub struct Font {
    /// Height in twips (1/20 of a point)
    pub height: u16,
    pub weight: u16,
    pub italic: bool,
    pub color_index: u16,
    pub name: String,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            height: 200, // 10pt
            weight: FONT_WEIGHT_NORMAL,
            italic: false,
            color_index: COLOR_AUTOMATIC,
            name: "Arial".to_string(),
        }
    }
}

/// Write FONT record (0x0031)
pub fn write_font<W: Write>(writer: &mut W, font: &Font) -> XlsResult<()> {
    let (wide, cch, name) = encode_xl_chars(&font.name, u8::MAX as usize);

    // 14 bytes of properties, then cch, flags and the name
    write_record_header(writer, 0x0031, 16 + name.len() as u16)?;
    writer.write_all(&font.height.to_le_bytes())?;
    let attributes: u16 = if font.italic { 0x0002 } else { 0 };
    writer.write_all(&attributes.to_le_bytes())?;
    writer.write_all(&font.color_index.to_le_bytes())?;
    writer.write_all(&font.weight.to_le_bytes())?;
    // Escapement
    writer.write_all(&0u16.to_le_bytes())?;
    // Underline, family, charset, reserved
    writer.write_all(&[0, 0, 0, 0])?;
    writer.write_all(&[cch as u8, u8::from(wide)])?;
    writer.write_all(&name)?;
    Ok(())
}

/// One XF (Extended Format) record
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtendedFormat {
    pub font_index: u16,
    pub format_index: u16,
    /// Style XFs are parents; cell XFs reference style XF 0.
    pub is_style: bool,
}

/// Write XF record (0x00E0)
///
/// Alignment is general/bottom, with no borders and no fill pattern.
pub fn write_xf<W: Write>(writer: &mut W, xf: &ExtendedFormat) -> XlsResult<()> {
    // General horizontal, bottom vertical
    const ALIGNMENT: u8 = 0x20;
    // Pattern foreground 0x40 and background 0x41 (system colours)
    const FILL_PALETTE: u16 = 0x40 | (0x41 << 7);

    write_record_header(writer, 0x00E0, 20)?;
    writer.write_all(&xf.font_index.to_le_bytes())?;
    writer.write_all(&xf.format_index.to_le_bytes())?;
    let xf_type: u16 = if xf.is_style { 0xFFF5 } else { 0x0001 };
    writer.write_all(&xf_type.to_le_bytes())?;
    // Alignment, rotation, indent, used attributes
    writer.write_all(&[ALIGNMENT, 0, 0, 0])?;
    // Border styles and palette indices
    writer.write_all(&0u16.to_le_bytes())?;
    writer.write_all(&0u16.to_le_bytes())?;
    writer.write_all(&0u32.to_le_bytes())?;
    writer.write_all(&FILL_PALETTE.to_le_bytes())?;
    Ok(())
}

/// Default font and XF tables of a synthesized workbook
#[derive(Debug)]
pub struct FormattingManager {
    fonts: Vec<Font>,
}

impl FormattingManager {
    /// Regular, bold, italic and bold-italic Arial 10pt.
    pub fn new() -> Self {
        let fonts = [(false, false), (true, false), (false, true), (true, true)]
            .into_iter()
            .map(|(bold, italic)| Font {
                weight: if bold { FONT_WEIGHT_BOLD } else { FONT_WEIGHT_NORMAL },
                italic,
                ..Font::default()
            })
            .collect();
        Self { fonts }
    }

    pub fn fonts(&self) -> &[Font] {
        &self.fonts
    }

    /// Write all FONT records
    pub fn write_fonts<W: Write>(&self, writer: &mut W) -> XlsResult<()> {
        for font in &self.fonts {
            write_font(writer, font)?;
        }
        Ok(())
    }

    /// Write FORMAT records for the built-in indices 0..=7
    pub fn write_number_formats<W: Write>(&self, writer: &mut W) -> XlsResult<()> {
        for (index, pattern) in BUILTIN_NUMBER_FORMATS.iter().enumerate() {
            write_format_record(writer, index as u16, pattern)?;
        }
        Ok(())
    }

    /// Write the 21 standard XF records
    ///
    /// 0..=14 style XFs (1 and 2 use the bold font, 3 and 4 the italic
    /// one), 15 the default cell XF, 16..=20 the built-in number style XFs.
    pub fn write_formats<W: Write>(&self, writer: &mut W) -> XlsResult<()> {
        for i in 0..DEFAULT_CELL_XF {
            let font_index = match i {
                1 | 2 => 1,
                3 | 4 => 2,
                _ => 0,
            };
            write_xf(
                writer,
                &ExtendedFormat {
                    font_index,
                    is_style: true,
                    ..ExtendedFormat::default()
                },
            )?;
        }

        write_xf(writer, &ExtendedFormat::default())?;

        for format_index in BUILTIN_STYLE_FORMATS {
            write_xf(
                writer,
                &ExtendedFormat {
                    format_index,
                    is_style: true,
                    ..ExtendedFormat::default()
                },
            )?;
        }
        Ok(())
    }
}

impl Default for FormattingManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fonts() {
        let mgr = FormattingManager::new();
        let fonts = mgr.fonts();

        assert_eq!(fonts.len(), 4);
        assert_eq!(fonts[1].weight, FONT_WEIGHT_BOLD);
        assert!(fonts[2].italic && fonts[2].weight == FONT_WEIGHT_NORMAL);
        assert!(fonts[3].italic && fonts[3].weight == FONT_WEIGHT_BOLD);
    }

    #[test]
    fn test_write_font_record() {
        let mut buf = Vec::new();
        write_font(&mut buf, &Font::default()).unwrap();

        assert_eq!(&buf[0..4], &[0x31, 0x00, 16 + 5, 0]);
        assert_eq!(&buf[4..6], &200u16.to_le_bytes());
        assert_eq!(&buf[18..20], &[5, 0]);
        assert_eq!(&buf[20..], b"Arial");
    }

    #[test]
    fn test_xf_table_layout() {
        let mut buf = Vec::new();
        FormattingManager::new().write_formats(&mut buf).unwrap();

        // 21 records of 4 header bytes + 20 data bytes
        assert_eq!(buf.len(), 21 * 24);

        let record = |i: usize| &buf[i * 24..(i + 1) * 24];
        assert_eq!(&record(0)[8..10], &0xFFF5u16.to_le_bytes());
        assert_eq!(&record(1)[4..6], &1u16.to_le_bytes());
        assert_eq!(&record(15)[8..10], &0x0001u16.to_le_bytes());
        assert_eq!(&record(20)[6..8], &0x0009u16.to_le_bytes());
        assert_eq!(&record(15)[22..24], &0x20C0u16.to_le_bytes());
    }

    #[test]
    fn test_number_formats() {
        let mut buf = Vec::new();
        FormattingManager::new().write_number_formats(&mut buf).unwrap();

        // "General": ifmt 0, cch 7, flags 0
        assert_eq!(&buf[0..4], &[0x1E, 0x04, 12, 0]);
        assert_eq!(&buf[4..9], &[0, 0, 7, 0, 0]);
        assert_eq!(&buf[9..16], b"General");
    }
}
