//! Format dispatch: pick the extractor for a source, normalizing delimited
//! text into a legacy workbook first.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;
use tempfile::NamedTempFile;
use uuid::Uuid;

use super::config::NormalizeConfig;
use super::extract::{Extractor, WorkbookHandle};
use super::source::Source;
use crate::common::detection::check_declared;
use crate::common::{Result, ResultExt, Stage, WorkbookFormat};
use crate::ole::xls::{NormalizedWorkbook, synthesize};
use crate::sheet::text::parse;

/// Resolve the source's format and return the extractor that reads it.
///
/// Delimited text is parsed, synthesized into a BIFF8 workbook and read
/// back through the legacy extractor. For path sources the workbook is
/// written to `<uuid>.xls` in the staging directory and left there; stream
/// sources stay in memory. Native workbooks are passed through untouched.
///
/// The source reader is released before this returns, on success and on
/// every error path.
///
/// # Errors
///
/// `UnsupportedFormat`/`InvalidArgument` when the format cannot be
/// resolved, `Io` for read or write failures (tagged with the failing
/// stage), `MalformedInput` for undecodable text or sheets beyond BIFF8
/// limits.
pub fn dispatch(source: Source<'_>, config: &NormalizeConfig) -> Result<Extractor> {
    let format = source.declared_format()?;
    let origin = source.origin();
    debug!("dispatching {origin} as {format}");

    match format {
        WorkbookFormat::DelimitedText => {
            let is_path = source.is_path();
            let workbook = normalize(source, config, &origin)?;

            let handle = if is_path {
                let dir = config.staging_dir()?;
                let artifact = persist_artifact(&workbook, &dir)
                    .in_stage(Stage::Persist, &dir.display().to_string())?;
                debug!("normalized {origin} into {}", artifact.display());
                WorkbookHandle::File(artifact)
            } else {
                WorkbookHandle::Memory(workbook.to_bytes().in_stage(Stage::Synthesize, &origin)?)
            };
            Ok(Extractor::LegacyBinary(handle))
        },
        WorkbookFormat::LegacyBinary => Ok(Extractor::LegacyBinary(passthrough(
            source, format, &origin,
        )?)),
        WorkbookFormat::XmlZip => Ok(Extractor::XmlZip(passthrough(source, format, &origin)?)),
    }
}

/// Parse and classify a delimited-text source into a workbook.
fn normalize(
    source: Source<'_>,
    config: &NormalizeConfig,
    origin: &str,
) -> Result<NormalizedWorkbook> {
    let reader = source.open().in_stage(Stage::Open, origin)?;
    let grid = parse(reader, &config.csv).in_stage(Stage::Parse, origin)?;
    synthesize(&grid).in_stage(Stage::Synthesize, origin)
}

fn passthrough(
    source: Source<'_>,
    declared: WorkbookFormat,
    origin: &str,
) -> Result<WorkbookHandle> {
    let handle = source.materialize().in_stage(Stage::Open, origin)?;
    if let Some(bytes) = handle.bytes() {
        check_declared(declared, bytes, origin);
    }
    Ok(handle)
}

/// Write the workbook to a fresh `<uuid>.xls` in `dir`.
fn persist_artifact(workbook: &NormalizedWorkbook, dir: &Path) -> Result<PathBuf> {
    stage_file(dir, |file| workbook.write_to(file))
}

/// Fill a temporary file in `dir` with `write` and rename it to `<uuid>.xls`.
///
/// The rename happens only once the contents are complete and synced. On any
/// failure the temporary file is dropped, leaving nothing behind.
fn stage_file<F>(dir: &Path, write: F) -> Result<PathBuf>
where
    F: FnOnce(&mut File) -> Result<()>,
{
    let mut tmp = NamedTempFile::new_in(dir)?;
    write(tmp.as_file_mut())?;
    tmp.as_file_mut().flush()?;
    tmp.as_file().sync_all()?;

    let target = dir.join(format!(
        "{}.{}",
        Uuid::new_v4(),
        WorkbookFormat::LegacyBinary.extension()
    ));
    tmp.persist_noclobber(&target).map_err(|err| err.error)?;
    Ok(target)
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::common::Error;

    #[test]
    fn test_stage_file_failed_write_leaves_nothing() {
        let dir = tempfile::tempdir().unwrap();

        let err = stage_file(dir.path(), |file| {
            file.write_all(b"partial workbook")?;
            Err(Error::Io(io::Error::other("disk full")))
        })
        .unwrap_err();

        assert!(matches!(err, Error::Io(_)));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_stage_file_names_artifact_as_xls() {
        let dir = tempfile::tempdir().unwrap();

        let path = stage_file(dir.path(), |file| Ok(file.write_all(b"wb")?)).unwrap();
        assert_eq!(path.parent(), Some(dir.path()));
        assert_eq!(path.extension().unwrap(), "xls");
        assert_eq!(std::fs::read(&path).unwrap(), b"wb");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
