//! Service layer for cashflow-report
//!
//! Import turns a ledger file into typed records; the report service
//! chains import, aggregation, rendering and the atomic write.

pub mod import;
pub mod report;

pub use import::{load_transactions, parse_transactions};
pub use report::{ReportData, ReportService};
