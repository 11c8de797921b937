//! Workbook ingestion pipeline.
//!
//! A [`Source`] (path or stream) is resolved to a [`WorkbookFormat`] before
//! any byte is read. [`dispatch`] then returns an [`Extractor`]: native
//! `.xls`/`.xlsx` workbooks pass straight through, while delimited text is
//! parsed and synthesized into a legacy workbook first. The extractor walks
//! the first worksheet and binds rows through [`FromRow`].
//!
//! Every call owns its handles; nothing is shared between calls.
//!
//! [`WorkbookFormat`]: crate::common::WorkbookFormat
//! [`FromRow`]: crate::sheet::FromRow

pub mod config;
pub mod dispatch;
pub mod extract;
pub mod source;

pub use config::{ExtractOptions, IngestOptions, NormalizeConfig};
pub use dispatch::dispatch;
pub use extract::{Extractor, WorkbookHandle};
pub use source::Source;
