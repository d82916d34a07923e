//! Configuration module for cashflow-report
//!
//! This module provides:
//! - Input/output path resolution
//! - Run settings (currency, output format, insight thresholds)

pub mod paths;
pub mod settings;

pub use paths::ReportPaths;
pub use settings::Settings;
