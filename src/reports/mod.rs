//! Reports module for cashflow-report
//!
//! Aggregations computed from a loaded ledger: the headline cash-flow
//! summary, a per-month income/expense breakdown and spending insights.

pub mod insights;
pub mod monthly;
pub mod summary;

pub use insights::{Anomaly, CategorySpending, ExpenseOverview, ForecastMonth, Insights, RecurringCharge};
pub use monthly::MonthlyCashflow;
pub use summary::{AggregateResult, CounterpartyTotal, TOP_COUNTERPARTY_LIMIT};

use crate::error::{ReportError, ReportResult};
use crate::models::Money;

/// Add an amount to a running total, failing rather than overflowing
pub(crate) fn accumulate(total: &mut Money, amount: Money, name: &str) -> ReportResult<()> {
    *total = total
        .checked_add(amount)
        .ok_or_else(|| ReportError::overflow(name))?;
    Ok(())
}
