//! Cash-flow summary
//!
//! Totals by flow direction, expenses per month and the largest expense
//! counterparties. Recomputed from the full record list on every run.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use super::accumulate;
use crate::error::{ReportError, ReportResult};
use crate::models::{MonthKey, Money, TransactionRecord};

/// Number of counterparties kept in the ranking
pub const TOP_COUNTERPARTY_LIMIT: usize = 5;

/// Total spent with one counterparty
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CounterpartyTotal {
    pub counterparty: String,
    pub total: Money,
}

/// Aggregates derived from a transaction list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregateResult {
    pub total_income: Money,
    pub total_expense: Money,
    pub net_cashflow: Money,
    /// Debit totals per month, chronological
    pub monthly_expenses: BTreeMap<MonthKey, Money>,
    /// Largest debit counterparties, descending; ties keep first-seen order
    pub top_counterparties: Vec<CounterpartyTotal>,
}

impl AggregateResult {
    /// Aggregate a record list
    ///
    /// Fails with [`ReportError::Overflow`] if a total leaves the decimal range.
    pub fn compute(records: &[TransactionRecord]) -> ReportResult<Self> {
        let mut total_income = Money::zero();
        let mut total_expense = Money::zero();
        let mut monthly_expenses: BTreeMap<MonthKey, Money> = BTreeMap::new();

        // Insertion-ordered so the stable sort below breaks ties by first sighting
        let mut counterparties: Vec<CounterpartyTotal> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for txn in records {
            if txn.is_credit() {
                accumulate(&mut total_income, txn.amount, "total income")?;
                continue;
            }

            accumulate(&mut total_expense, txn.amount, "total expense")?;
            let month = monthly_expenses.entry(txn.month()).or_default();
            accumulate(month, txn.amount, "monthly expense")?;

            match index.get(txn.counterparty.as_str()) {
                Some(&i) => accumulate(&mut counterparties[i].total, txn.amount, "counterparty total")?,
                None => {
                    index.insert(txn.counterparty.as_str(), counterparties.len());
                    counterparties.push(CounterpartyTotal {
                        counterparty: txn.counterparty.clone(),
                        total: txn.amount,
                    });
                }
            }
        }

        counterparties.sort_by(|a, b| b.total.cmp(&a.total));
        counterparties.truncate(TOP_COUNTERPARTY_LIMIT);

        let net_cashflow = total_income
            .checked_sub(total_expense)
            .ok_or_else(|| ReportError::overflow("net cash flow"))?;

        Ok(Self {
            total_income,
            total_expense,
            net_cashflow,
            monthly_expenses,
            top_counterparties: counterparties,
        })
    }

    /// Largest monthly expense total, or one when there is nothing to scale by
    pub fn max_monthly_expense(&self) -> Money {
        self.monthly_expenses
            .values()
            .copied()
            .max()
            .filter(|max| !max.is_zero())
            .unwrap_or_else(|| Money::new(rust_decimal::Decimal::ONE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::transaction::fixtures::{credit, debit};
    use rust_decimal_macros::dec;

    #[test]
    fn test_worked_example() {
        let records = vec![
            debit("2024-01-05", "50.00", "Market"),
            credit("2024-01-10", "200.00"),
        ];
        let result = AggregateResult::compute(&records).unwrap();

        assert_eq!(result.total_income.value(), dec!(200.00));
        assert_eq!(result.total_expense.value(), dec!(50.00));
        assert_eq!(result.net_cashflow.value(), dec!(150.00));
        assert_eq!(result.monthly_expenses.len(), 1);
        assert_eq!(
            result.monthly_expenses[&records[0].month()].value(),
            dec!(50.00)
        );
        assert_eq!(
            result.top_counterparties,
            vec![CounterpartyTotal {
                counterparty: "Market".into(),
                total: Money::new(dec!(50.00)),
            }]
        );
    }

    #[test]
    fn test_empty_records() {
        let result = AggregateResult::compute(&[]).unwrap();
        assert!(result.total_income.is_zero());
        assert!(result.total_expense.is_zero());
        assert!(result.net_cashflow.is_zero());
        assert!(result.monthly_expenses.is_empty());
        assert!(result.top_counterparties.is_empty());
        assert_eq!(result.max_monthly_expense().value(), dec!(1));
    }

    #[test]
    fn test_months_are_chronological_and_sum_to_total() {
        let records = vec![
            debit("2024-03-02", "10.10", "A"),
            debit("2023-12-31", "5.05", "B"),
            credit("2024-02-01", "1000"),
            debit("2024-01-15", "7.333", "A"),
            debit("2024-03-20", "2.2", "C"),
        ];
        let result = AggregateResult::compute(&records).unwrap();

        let months: Vec<String> = result.monthly_expenses.keys().map(|k| k.to_string()).collect();
        assert_eq!(months, vec!["2023-12", "2024-01", "2024-03"]);

        let monthly_sum = Money::checked_sum(result.monthly_expenses.values().copied()).unwrap();
        assert_eq!(monthly_sum, result.total_expense);
        assert_eq!(result.total_expense.value(), dec!(24.683));
        assert_eq!(
            result.total_income.checked_sub(result.total_expense),
            Some(result.net_cashflow)
        );
    }

    #[test]
    fn test_top_counterparties_ranked_and_truncated() {
        let records = vec![
            debit("2024-01-01", "10", "One"),
            debit("2024-01-02", "60", "Six"),
            debit("2024-01-03", "30", "Three"),
            debit("2024-01-04", "70", "Seven"),
            debit("2024-01-05", "20", "Two"),
            debit("2024-01-06", "40", "Four"),
            debit("2024-01-07", "25", "Two"),
        ];
        let result = AggregateResult::compute(&records).unwrap();

        let names: Vec<&str> = result
            .top_counterparties
            .iter()
            .map(|c| c.counterparty.as_str())
            .collect();
        assert_eq!(names, vec!["Seven", "Six", "Two", "Four", "Three"]);
        assert_eq!(result.top_counterparties[2].total.value(), dec!(45));
        assert!(result
            .top_counterparties
            .windows(2)
            .all(|w| w[0].total >= w[1].total));
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let records = vec![
            debit("2024-01-01", "15", "Later"),
            debit("2024-01-02", "20", "Bakery"),
            debit("2024-01-03", "20", "Alpha"),
            debit("2024-01-04", "5", "Later"),
        ];
        let result = AggregateResult::compute(&records).unwrap();

        let names: Vec<&str> = result
            .top_counterparties
            .iter()
            .map(|c| c.counterparty.as_str())
            .collect();
        // "Later" reaches 20 too and was seen first
        assert_eq!(names, vec!["Later", "Bakery", "Alpha"]);
    }

    #[test]
    fn test_credits_do_not_rank() {
        let records = vec![credit("2024-01-01", "500"), debit("2024-01-02", "1", "Shop")];
        let result = AggregateResult::compute(&records).unwrap();
        assert_eq!(result.top_counterparties.len(), 1);
        assert_eq!(result.top_counterparties[0].counterparty, "Shop");
    }

    #[test]
    fn test_max_monthly_expense() {
        let records = vec![
            debit("2024-01-01", "30", "A"),
            debit("2024-02-01", "120", "A"),
        ];
        let result = AggregateResult::compute(&records).unwrap();
        assert_eq!(result.max_monthly_expense().value(), dec!(120));

        let zeros = AggregateResult::compute(&[debit("2024-01-01", "0", "A")]).unwrap();
        assert_eq!(zeros.max_monthly_expense().value(), dec!(1));
    }

    #[test]
    fn test_overflowing_totals_are_errors() {
        let records = vec![
            debit("2024-01-01", "79228162514264337593543950335", "Vault"),
            debit("2024-01-02", "1", "Vault"),
        ];
        let err = AggregateResult::compute(&records).unwrap_err();
        assert!(matches!(err, ReportError::Overflow(_)));
        assert!(err.to_string().contains("total expense"));

        let records = vec![
            credit("2024-01-01", "79228162514264337593543950335"),
            credit("2024-01-02", "1"),
        ];
        assert!(AggregateResult::compute(&records).is_err());
    }
}
