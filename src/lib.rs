//! cashflow-report - turns a CSV transaction ledger into a cash-flow report
//!
//! A ledger of credits and debits is validated into typed records,
//! aggregated into totals, monthly expense buckets and a counterparty
//! ranking, then rendered into one self-contained document.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Run settings and input/output paths
//! - `error`: Custom error types
//! - `models`: Core data models (money, currency, months, transactions)
//! - `services`: Ledger import and the report pipeline
//! - `reports`: Aggregation and insights
//! - `export`: HTML, Markdown and JSON renderers
//! - `storage`: Atomic artifact writes
//! - `display`: Terminal formatting
//! - `cli`: Command-line argument handling
//!
//! # Example
//!
//! ```rust,ignore
//! use cashflow::config::{ReportPaths, Settings};
//! use cashflow::services::ReportService;
//!
//! let settings = Settings::with_currency(Some("EUR"))?;
//! let artifact = ReportService::new(&settings).run(&ReportPaths::default())?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ReportError, ReportResult, Stage};
