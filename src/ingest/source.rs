//! Source adapter: a filesystem path or a caller-supplied byte stream.

use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use log::trace;

use super::extract::WorkbookHandle;
use crate::common::{Error, Result, WorkbookFormat, format_from_path};

/// Where workbook bytes come from.
///
/// A path source infers its format from the file extension. A stream source
/// must declare its format; it is never guessed from content.
pub enum Source<'a> {
    Path(PathBuf),
    Stream {
        reader: Box<dyn Read + 'a>,
        declared: Option<WorkbookFormat>,
    },
}

impl<'a> Source<'a> {
    pub fn path<P: AsRef<Path>>(path: P) -> Self {
        Source::Path(path.as_ref().to_path_buf())
    }

    pub fn stream<R: Read + 'a>(reader: R, declared: Option<WorkbookFormat>) -> Self {
        Source::Stream {
            reader: Box::new(reader),
            declared,
        }
    }

    /// Resolve the format without reading any byte.
    ///
    /// # Errors
    ///
    /// `UnsupportedFormat` for unknown path extensions, `InvalidArgument` for
    /// a stream without a declared format.
    pub fn declared_format(&self) -> Result<WorkbookFormat> {
        match self {
            Source::Path(path) => format_from_path(path),
            Source::Stream {
                declared: Some(format),
                ..
            } => Ok(*format),
            Source::Stream { declared: None, .. } => Err(Error::InvalidArgument(
                "stream source requires a declared format".to_string(),
            )),
        }
    }

    /// Human-readable description used in logs and error messages.
    pub fn origin(&self) -> String {
        match self {
            Source::Path(path) => path.display().to_string(),
            Source::Stream { declared, .. } => match declared {
                Some(format) => format!("<{format} stream>"),
                None => "<stream>".to_string(),
            },
        }
    }

    pub fn is_path(&self) -> bool {
        matches!(self, Source::Path(_))
    }

    /// Open the underlying byte stream. The reader is dropped with the
    /// returned value.
    pub fn open(self) -> Result<Box<dyn Read + 'a>> {
        match self {
            Source::Path(path) => {
                trace!("opening {}", path.display());
                Ok(Box::new(BufReader::new(File::open(path)?)))
            },
            Source::Stream { reader, .. } => Ok(reader),
        }
    }

    /// Turn the source into something an extractor can seek over.
    ///
    /// Paths are kept as paths and opened later by the reader; streams are
    /// read to completion into memory and then dropped.
    pub fn materialize(self) -> Result<WorkbookHandle> {
        match self {
            Source::Path(path) => Ok(WorkbookHandle::File(path)),
            Source::Stream { mut reader, .. } => {
                let mut buf = Vec::new();
                reader.read_to_end(&mut buf)?;
                trace!("materialized {} stream bytes", buf.len());
                Ok(WorkbookHandle::Memory(buf))
            },
        }
    }
}

impl fmt::Debug for Source<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Path(path) => f.debug_tuple("Path").field(path).finish(),
            Source::Stream { declared, .. } => f
                .debug_struct("Stream")
                .field("declared", declared)
                .finish_non_exhaustive(),
        }
    }
}
