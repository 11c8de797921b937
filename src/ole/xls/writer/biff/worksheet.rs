//! Worksheet substream BIFF8 record writers.

use crate::ole::xls::XlsResult;
use std::io::Write;

use super::write_record_header;

/// DIMENSIONS, record type 0x0200
///
/// `last_row` and `last_col` are exclusive bounds. An empty sheet is
/// written as all zeros.
pub fn write_dimensions<W: Write>(
    writer: &mut W,
    first_row: u32,
    last_row: u32,
    first_col: u16,
    last_col: u16,
) -> XlsResult<()> {
    write_record_header(writer, 0x0200, 14)?;
    writer.write_all(&first_row.to_le_bytes())?;
    writer.write_all(&last_row.to_le_bytes())?;
    writer.write_all(&first_col.to_le_bytes())?;
    writer.write_all(&last_col.to_le_bytes())?;
    // Reserved
    writer.write_all(&0u16.to_le_bytes())?;
    Ok(())
}

/// WSBOOL, record type 0x0081
///
/// 0x04C1 is a plain worksheet with automatic page breaks and outline
/// symbols shown.
pub fn write_wsbool<W: Write>(writer: &mut W) -> XlsResult<()> {
    write_record_header(writer, 0x0081, 2)?;
    writer.write_all(&0x04C1u16.to_le_bytes())?;
    Ok(())
}

/// WINDOW2, record type 0x023E
///
/// grbit 0x06B6 shows gridlines, headings and zeros and marks the sheet as
/// selected and active. The header colour index is 0x40 (automatic).
pub fn write_window2<W: Write>(writer: &mut W) -> XlsResult<()> {
    // grbit, rwTop, colLeft, icvHdr (2 halves), wScaleSLV, wScaleNormal, reserved (2)
    const FIELDS: [u16; 9] = [0x06B6, 0, 0, 0x0040, 0, 0, 0, 0, 0];

    write_record_header(writer, 0x023E, 18)?;
    for field in FIELDS {
        writer.write_all(&field.to_le_bytes())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_dimensions_layout() {
        let mut buf = Vec::new();
        write_dimensions(&mut buf, 0, 3, 0, 2).unwrap();

        assert_eq!(&buf[0..4], &[0x00, 0x02, 14, 0]);
        assert_eq!(&buf[8..12], &3u32.to_le_bytes());
        assert_eq!(&buf[14..16], &2u16.to_le_bytes());
        assert_eq!(buf.len(), 18);
    }

    #[test]
    fn test_write_window2_is_18_bytes() {
        let mut buf = Vec::new();
        write_window2(&mut buf).unwrap();

        assert_eq!(&buf[0..4], &[0x3E, 0x02, 18, 0]);
        assert_eq!(&buf[4..6], &[0xB6, 0x06]);
        assert_eq!(buf.len(), 22);
    }
}
