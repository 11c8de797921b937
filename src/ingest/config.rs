//! Configuration for normalization and extraction.

use std::path::PathBuf;

use crate::common::Result;
use crate::sheet::text::CsvConfig;

/// How non-native sources are turned into a readable workbook.
#[derive(Debug, Clone, Default)]
pub struct NormalizeConfig {
    /// Delimited-text decoding
    pub csv: CsvConfig,
    /// Directory receiving synthesized `.xls` artifacts for path sources.
    /// `None` means the process working directory.
    pub staging_dir: Option<PathBuf>,
}

impl NormalizeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_csv(mut self, csv: CsvConfig) -> Self {
        self.csv = csv;
        self
    }

    pub fn with_staging_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.staging_dir = Some(dir.into());
        self
    }

    /// Directory artifacts are written to, resolved now.
    pub fn staging_dir(&self) -> Result<PathBuf> {
        match &self.staging_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(std::env::current_dir()?),
        }
    }
}

/// How extracted rows are handed to the binding layer.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Leading sheet rows skipped before binding (header rows)
    pub skip: u32,
    /// Trim surrounding whitespace from string cells
    pub trim_cell_values: bool,
    /// Skip rows whose cells are all blank
    pub ignore_blank_rows: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            skip: 1,
            trim_cell_values: false,
            ignore_blank_rows: false,
        }
    }
}

impl ExtractOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_skip(mut self, skip: u32) -> Self {
        self.skip = skip;
        self
    }

    pub fn with_trim_cell_values(mut self, trim: bool) -> Self {
        self.trim_cell_values = trim;
        self
    }

    pub fn with_ignore_blank_rows(mut self, ignore: bool) -> Self {
        self.ignore_blank_rows = ignore;
        self
    }
}

/// Options for a complete ingestion call.
#[derive(Debug, Clone, Default)]
pub struct IngestOptions {
    pub normalize: NormalizeConfig,
    pub extract: ExtractOptions,
}

impl IngestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_normalize(mut self, normalize: NormalizeConfig) -> Self {
        self.normalize = normalize;
        self
    }

    pub fn with_extract(mut self, extract: ExtractOptions) -> Self {
        self.extract = extract;
        self
    }

    /// Shorthand for replacing the delimited-text settings.
    pub fn with_csv(mut self, csv: CsvConfig) -> Self {
        self.normalize.csv = csv;
        self
    }
}
