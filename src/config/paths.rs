//! Path management for cashflow-report
//!
//! ## Path Resolution
//!
//! Input defaults to `data/transactions.csv` and the report goes under `out/`,
//! both relative to the working directory. `--input` and `--output-dir`
//! override them.

use std::path::{Path, PathBuf};

use crate::export::ReportFormat;

/// Default ledger location
pub const DEFAULT_INPUT: &str = "data/transactions.csv";

/// Default output directory
pub const DEFAULT_OUTPUT_DIR: &str = "out";

/// Manages the input and output locations of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    input: PathBuf,
    output_dir: PathBuf,
}

impl Default for ReportPaths {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT, DEFAULT_OUTPUT_DIR)
    }
}

impl ReportPaths {
    /// Create paths for an input file and an output directory
    pub fn new(input: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output_dir: output_dir.into(),
        }
    }

    /// Get the input ledger path
    pub fn input(&self) -> &Path {
        &self.input
    }

    /// Get the output directory
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Get the artifact path for a format (e.g. `out/report.html`)
    pub fn artifact_file(&self, format: ReportFormat) -> PathBuf {
        self.output_dir.join(format.file_name())
    }
}
