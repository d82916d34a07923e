//! Report service
//!
//! Runs the load, aggregate, render, write pipeline. Rendering is pure:
//! the same ledger and settings always produce byte-identical output.

use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::config::{ReportPaths, Settings};
use crate::error::ReportResult;
use crate::export::{self, ReportContext};
use crate::models::TransactionRecord;
use crate::reports::{AggregateResult, Insights, MonthlyCashflow};
use crate::services::import::load_transactions;
use crate::storage::write_atomic;

/// Service for report generation
pub struct ReportService<'a> {
    settings: &'a Settings,
}

/// Everything computed from one ledger
#[derive(Debug, Clone)]
pub struct ReportData {
    pub records: Vec<TransactionRecord>,
    pub summary: AggregateResult,
    pub cashflow: Vec<MonthlyCashflow>,
}

impl<'a> ReportService<'a> {
    /// Create a new report service
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Load a ledger and compute its aggregates
    pub fn load(&self, input: &Path) -> ReportResult<ReportData> {
        let records = load_transactions(input)?;
        let summary = AggregateResult::compute(&records)?;
        let cashflow = MonthlyCashflow::compute(&records)?;

        debug!(
            "Aggregated {} records into {} month(s), {} counterparties",
            records.len(),
            summary.monthly_expenses.len(),
            summary.top_counterparties.len()
        );

        Ok(ReportData {
            records,
            summary,
            cashflow,
        })
    }

    /// Render loaded data in the configured format
    pub fn render(&self, data: &ReportData) -> ReportResult<String> {
        let ctx = ReportContext {
            summary: &data.summary,
            cashflow: &data.cashflow,
            currency: &self.settings.currency,
        };
        export::render(self.settings.format, &ctx)
    }

    /// Load and render without touching the filesystem beyond the input
    pub fn generate(&self, input: &Path) -> ReportResult<String> {
        let data = self.load(input)?;
        self.render(&data)
    }

    /// Compute the terminal insights for loaded data
    pub fn insights(&self, data: &ReportData) -> ReportResult<Insights> {
        Insights::compute(
            &data.records,
            &data.summary,
            self.settings.high_value_threshold,
        )
    }

    /// Write rendered output to the artifact path for the configured format
    pub fn write(&self, paths: &ReportPaths, document: &str) -> ReportResult<PathBuf> {
        let target = paths.artifact_file(self.settings.format);
        write_atomic(&target, document)?;
        info!("Wrote {} report to {}", self.settings.format, target.display());
        Ok(target)
    }

    /// Run the full pipeline, returning the artifact path
    ///
    /// Nothing is written unless loading and rendering both succeed.
    pub fn run(&self, paths: &ReportPaths) -> ReportResult<PathBuf> {
        let document = self.generate(paths.input())?;
        self.write(paths, &document)
    }
}
