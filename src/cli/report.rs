//! CLI command for report generation
//!
//! Resolves flags into settings and paths, runs the pipeline and optionally
//! prints the insights summary.

use std::path::PathBuf;

use clap::Args;

use crate::config::paths::{DEFAULT_INPUT, DEFAULT_OUTPUT_DIR};
use crate::config::{ReportPaths, Settings};
use crate::display::format_insights;
use crate::error::ReportResult;
use crate::export::ReportFormat;
use crate::models::Money;
use crate::services::ReportService;

/// Report generation arguments
#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// Transaction ledger (CSV)
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Directory the report is written to
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// ISO 4217 currency code used for display (e.g. USD, EUR)
    #[arg(short, long, env = "CURRENCY")]
    pub currency: Option<String>,

    /// Output document format
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Html)]
    pub format: ReportFormat,

    /// Print an insights summary to the terminal
    #[arg(short, long)]
    pub summary: bool,

    /// Minimum amount listed under high-value transactions
    #[arg(long, default_value = "500", value_parser = parse_threshold)]
    pub threshold: Money,
}

/// Parse a non-negative decimal amount for `--threshold`
fn parse_threshold(s: &str) -> Result<Money, String> {
    let threshold = Money::parse(s).map_err(|e| e.to_string())?;
    if threshold.is_negative() {
        return Err(format!("'{}' must not be negative", s.trim()));
    }
    Ok(threshold)
}

impl ReportArgs {
    /// Resolve run settings from the flags
    pub fn settings(&self) -> ReportResult<Settings> {
        Ok(Settings::with_currency(self.currency.as_deref())?
            .format(self.format)
            .high_value_threshold(self.threshold))
    }

    /// Resolve input and output locations from the flags
    pub fn paths(&self) -> ReportPaths {
        ReportPaths::new(self.input.clone(), self.output_dir.clone())
    }
}

/// Handle the report command, returning the artifact path
pub fn handle_report_command(args: &ReportArgs) -> ReportResult<PathBuf> {
    let settings = args.settings()?;
    let paths = args.paths();
    let service = ReportService::new(&settings);

    let data = service.load(paths.input())?;
    let document = service.render(&data)?;
    let insights = if args.summary {
        Some(service.insights(&data)?)
    } else {
        None
    };

    let artifact = service.write(&paths, &document)?;

    if let Some(insights) = insights {
        print!("{}", format_insights(&insights, &data.cashflow, &settings.currency));
        println!();
    }

    Ok(artifact)
}
