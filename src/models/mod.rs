//! Core data models for cashflow-report
//!
//! Ledger records and the value types the aggregates are expressed in.

pub mod currency;
pub mod money;
pub mod period;
pub mod transaction;

pub use currency::{Currency, DEFAULT_CURRENCY};
pub use money::Money;
pub use period::MonthKey;
pub use transaction::{FlowType, TransactionRecord};
