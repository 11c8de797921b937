/// Legacy Excel workbook (.xls) writer
///
/// This module produces OLE2 compound documents holding a BIFF8 `Workbook`
/// stream, which is the container the legacy-binary extractor consumes.
pub mod xls;
