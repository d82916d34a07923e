//! Monthly cash-flow breakdown
//!
//! Income, expenses and net per month across both flow directions.

use std::collections::BTreeMap;

use serde::Serialize;

use super::accumulate;
use crate::error::{ReportError, ReportResult};
use crate::models::{MonthKey, Money, TransactionRecord};

/// Income and expenses for one month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyCashflow {
    pub month: MonthKey,
    pub income: Money,
    pub expenses: Money,
    pub net: Money,
}

impl MonthlyCashflow {
    /// Group records by month, oldest month first
    pub fn compute(records: &[TransactionRecord]) -> ReportResult<Vec<Self>> {
        let mut by_month: BTreeMap<MonthKey, (Money, Money)> = BTreeMap::new();

        for txn in records {
            let (income, expenses) = by_month.entry(txn.month()).or_default();
            if txn.is_credit() {
                accumulate(income, txn.amount, "monthly income")?;
            } else {
                accumulate(expenses, txn.amount, "monthly expense")?;
            }
        }

        by_month
            .into_iter()
            .map(|(month, (income, expenses))| {
                let net = income
                    .checked_sub(expenses)
                    .ok_or_else(|| ReportError::overflow("monthly net"))?;
                Ok(Self {
                    month,
                    income,
                    expenses,
                    net,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::transaction::fixtures::{credit, debit};
    use rust_decimal_macros::dec;

    #[test]
    fn test_monthly_cashflow() {
        let records = vec![
            credit("2024-02-01", "1000"),
            debit("2024-01-03", "40", "Market"),
            debit("2024-02-10", "250.50", "Rent"),
            credit("2024-01-31", "100"),
        ];
        let months = MonthlyCashflow::compute(&records).unwrap();

        assert_eq!(months.len(), 2);
        assert_eq!(months[0].month.to_string(), "2024-01");
        assert_eq!(months[0].income.value(), dec!(100));
        assert_eq!(months[0].expenses.value(), dec!(40));
        assert_eq!(months[0].net.value(), dec!(60));

        assert_eq!(months[1].month.to_string(), "2024-02");
        assert_eq!(months[1].net.value(), dec!(749.50));
    }

    #[test]
    fn test_credit_only_month_has_zero_expenses() {
        let months = MonthlyCashflow::compute(&[credit("2024-05-01", "10")]).unwrap();
        assert_eq!(months.len(), 1);
        assert!(months[0].expenses.is_zero());
    }

    #[test]
    fn test_empty() {
        assert!(MonthlyCashflow::compute(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_overflowing_month_is_error() {
        let records = vec![
            debit("2024-01-01", "79228162514264337593543950335", "Vault"),
            debit("2024-01-02", "1", "Vault"),
        ];
        let err = MonthlyCashflow::compute(&records).unwrap_err();
        assert!(matches!(err, ReportError::Overflow(_)));
    }
}
