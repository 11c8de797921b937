//! Workbook globals BIFF8 record writers.

use crate::ole::xls::XlsResult;
use std::io::Write;

use super::{encode_xl_chars, write_record_header};

/// BOF (beginning of substream), record type 0x0809
///
/// `substream_type` is 0x0005 for the workbook globals and 0x0010 for a
/// worksheet.
pub fn write_bof<W: Write>(writer: &mut W, substream_type: u16) -> XlsResult<()> {
    write_record_header(writer, 0x0809, 16)?;
    for field in [0x0600u16, substream_type, 0x0DBB, 0x07CC] {
        writer.write_all(&field.to_le_bytes())?;
    }
    // File history flags, then the lowest BIFF version able to read the file
    writer.write_all(&0u32.to_le_bytes())?;
    writer.write_all(&6u32.to_le_bytes())?;
    Ok(())
}

/// EOF (end of substream), record type 0x000A
pub fn write_eof<W: Write>(writer: &mut W) -> XlsResult<()> {
    write_record_header(writer, 0x000A, 0)
}

/// CODEPAGE, record type 0x0042
pub fn write_codepage<W: Write>(writer: &mut W, codepage: u16) -> XlsResult<()> {
    write_record_header(writer, 0x0042, 2)?;
    writer.write_all(&codepage.to_le_bytes())?;
    Ok(())
}

/// DATE1904, record type 0x0022. Always the 1900 date system here.
pub fn write_date1904<W: Write>(writer: &mut W, is_1904: bool) -> XlsResult<()> {
    write_record_header(writer, 0x0022, 2)?;
    writer.write_all(&u16::from(is_1904).to_le_bytes())?;
    Ok(())
}

/// WINDOW1, record type 0x003D
///
/// Fields in order: xWn, yWn, dxWn, dyWn, grbit, itabCur, itabFirst,
/// ctabSel, wTabRatio.
pub fn write_window1<W: Write>(writer: &mut W) -> XlsResult<()> {
    const FIELDS: [u16; 9] = [0, 0, 0x3000, 0x1E00, 0x0038, 0, 0, 1, 0x0258];

    write_record_header(writer, 0x003D, 18)?;
    for field in FIELDS {
        writer.write_all(&field.to_le_bytes())?;
    }
    Ok(())
}

/// FORMAT (number format string), record type 0x041E
pub fn write_format_record<W: Write>(
    writer: &mut W,
    index_code: u16,
    format_str: &str,
) -> XlsResult<()> {
    let (wide, cch, chars) = encode_xl_chars(format_str, u8::MAX as usize);

    // ifmt + cch + flags + chars
    write_record_header(writer, 0x041E, 5 + chars.len() as u16)?;
    writer.write_all(&index_code.to_le_bytes())?;
    writer.write_all(&(cch as u16).to_le_bytes())?;
    writer.write_all(&[u8::from(wide)])?;
    writer.write_all(&chars)?;
    Ok(())
}

/// Built-in STYLE records, record type 0x0293
///
/// Each entry is `(xf_index, builtin_style_id)`; the XF table layout is
/// 0..=14 style XFs, 15 the default cell XF and 16..=20 the comma,
/// currency and percent style XFs.
pub fn write_builtin_styles<W: Write>(writer: &mut W) -> XlsResult<()> {
    const BUILTINS: [(u16, u8); 6] = [
        (0x0010, 3), // Comma
        (0x0011, 6), // Comma [0]
        (0x0012, 4), // Currency
        (0x0013, 7), // Currency [0]
        (0x0000, 0), // Normal
        (0x0014, 5), // Percent
    ];

    for (xf_index, builtin_id) in BUILTINS {
        write_record_header(writer, 0x0293, 4)?;
        // Bit 15 marks the style as built-in
        writer.write_all(&((xf_index & 0x0FFF) | 0x8000).to_le_bytes())?;
        // No outline level
        writer.write_all(&[builtin_id, 0xFF])?;
    }
    Ok(())
}

/// USESELFS, record type 0x0160. Natural language formulas disabled.
pub fn write_usesel_fs<W: Write>(writer: &mut W) -> XlsResult<()> {
    write_record_header(writer, 0x0160, 2)?;
    writer.write_all(&0u16.to_le_bytes())?;
    Ok(())
}

/// BOUNDSHEET8, record type 0x0085
///
/// `position` is the absolute offset of the sheet's BOF in the workbook
/// stream; callers writing the globals before the sheets patch it
/// afterwards at record offset 4. The name is a ShortXLUnicodeString
/// capped at 31 characters.
pub fn write_boundsheet<W: Write>(writer: &mut W, position: u32, name: &str) -> XlsResult<()> {
    let (wide, cch, chars) = encode_xl_chars(name, 31);

    // position + visibility/type + cch + flags + chars
    write_record_header(writer, 0x0085, 8 + chars.len() as u16)?;
    writer.write_all(&position.to_le_bytes())?;
    // Visible worksheet
    writer.write_all(&0u16.to_le_bytes())?;
    writer.write_all(&[cch as u8, u8::from(wide)])?;
    writer.write_all(&chars)?;
    Ok(())
}
