//! Export module for cashflow-report
//!
//! Renders the aggregated ledger into a single self-contained document:
//! - HTML: the visual report (default)
//! - Markdown: a plain-text summary
//! - JSON: machine-readable totals

pub mod html;
pub mod json;
pub mod markdown;

use std::fmt;

use clap::ValueEnum;

use crate::error::ReportResult;
use crate::models::Currency;
use crate::reports::{AggregateResult, MonthlyCashflow};

pub use html::render_html;
pub use json::render_json;
pub use markdown::render_markdown;

/// Output document format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Html,
    Markdown,
    Json,
}

impl ReportFormat {
    /// File name of the artifact written for this format
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Html => "report.html",
            Self::Markdown => "summary.md",
            Self::Json => "summary.json",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Html => write!(f, "html"),
            Self::Markdown => write!(f, "markdown"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Everything a renderer may draw from
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    pub summary: &'a AggregateResult,
    pub cashflow: &'a [MonthlyCashflow],
    pub currency: &'a Currency,
}

/// Render the document for a format
pub fn render(format: ReportFormat, ctx: &ReportContext<'_>) -> ReportResult<String> {
    match format {
        ReportFormat::Html => Ok(render_html(ctx.summary, ctx.currency)),
        ReportFormat::Markdown => Ok(render_markdown(ctx)),
        ReportFormat::Json => render_json(ctx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::transaction::fixtures::{credit, debit};

    #[test]
    fn test_file_names() {
        assert_eq!(ReportFormat::Html.file_name(), "report.html");
        assert_eq!(ReportFormat::Markdown.file_name(), "summary.md");
        assert_eq!(ReportFormat::Json.file_name(), "summary.json");
        assert_eq!(ReportFormat::default(), ReportFormat::Html);
    }

    #[test]
    fn test_render_dispatch() {
        let records = vec![debit("2024-01-05", "50", "Market"), credit("2024-01-10", "200")];
        let summary = AggregateResult::compute(&records).unwrap();
        let cashflow = MonthlyCashflow::compute(&records).unwrap();
        let currency = Currency::default();
        let ctx = ReportContext {
            summary: &summary,
            cashflow: &cashflow,
            currency: &currency,
        };

        assert!(render(ReportFormat::Html, &ctx).unwrap().starts_with("<!doctype html>"));
        assert!(render(ReportFormat::Markdown, &ctx).unwrap().starts_with("# Financial Summary"));
        assert!(render(ReportFormat::Json, &ctx).unwrap().starts_with('{'));
    }
}
