//! Spending insights
//!
//! Extra analysis shown in the terminal summary: expense statistics,
//! category breakdown, high-value and recurring charges, outliers and a
//! short expense forecast.

use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::accumulate;
use super::summary::AggregateResult;
use crate::error::{ReportError, ReportResult};
use crate::models::{MonthKey, Money, TransactionRecord};

/// Debits further than this many standard deviations above the mean are outliers
pub const ANOMALY_Z_SCORE: f64 = 1.5;
/// Maximum number of outliers reported
pub const ANOMALY_LIMIT: usize = 3;
/// Months projected past the last month with expenses
pub const FORECAST_MONTHS: u32 = 3;
/// Assumed monthly growth of expenses in the forecast (2%)
const FORECAST_GROWTH: Decimal = Decimal::from_parts(2, 0, 0, false, 2);

/// Count, total, mean and maximum of all debits
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseOverview {
    pub count: usize,
    pub total: Money,
    pub average: Money,
    pub largest: Money,
}

/// Debit spending within one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySpending {
    pub category: String,
    pub total: Money,
    pub count: usize,
    pub average: Money,
}

/// A debit to the same counterparty for the same amount seen more than once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurringCharge {
    pub counterparty: String,
    pub amount: Money,
    pub occurrences: usize,
}

/// An unusually large debit
#[derive(Debug, Clone, PartialEq)]
pub struct Anomaly {
    pub date: NaiveDate,
    pub counterparty: String,
    pub amount: Money,
    pub z_score: f64,
}

/// Projected expenses for a future month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastMonth {
    pub month: MonthKey,
    pub projected: Money,
}

/// All insights for one ledger
#[derive(Debug, Clone)]
pub struct Insights {
    pub overview: ExpenseOverview,
    pub categories: Vec<CategorySpending>,
    pub threshold: Money,
    pub high_value: Vec<TransactionRecord>,
    pub recurring: Vec<RecurringCharge>,
    pub anomalies: Vec<Anomaly>,
    pub burn_rate: Money,
    /// Empty when fewer than two months have expenses
    pub forecast: Vec<ForecastMonth>,
}

impl Insights {
    /// Analyze a record list; `summary` must be computed from the same records
    pub fn compute(
        records: &[TransactionRecord],
        summary: &AggregateResult,
        threshold: Money,
    ) -> ReportResult<Self> {
        let debits: Vec<&TransactionRecord> = records.iter().filter(|t| t.is_debit()).collect();

        Ok(Self {
            overview: expense_overview(&debits)?,
            categories: category_breakdown(&debits)?,
            threshold,
            high_value: records
                .iter()
                .filter(|t| t.amount >= threshold)
                .cloned()
                .collect(),
            recurring: recurring_charges(&debits),
            anomalies: anomalies(&debits),
            burn_rate: burn_rate(records, summary.total_expense),
            forecast: forecast(summary)?,
        })
    }
}

fn average(total: Money, count: usize) -> Money {
    if count == 0 {
        Money::zero()
    } else {
        Money::new(total.value() / Decimal::from(count))
    }
}

fn expense_overview(debits: &[&TransactionRecord]) -> ReportResult<ExpenseOverview> {
    let total = Money::checked_sum(debits.iter().map(|t| t.amount))
        .ok_or_else(|| ReportError::overflow("total expense"))?;
    Ok(ExpenseOverview {
        count: debits.len(),
        total,
        average: average(total, debits.len()),
        largest: debits.iter().map(|t| t.amount).max().unwrap_or_default(),
    })
}

fn category_breakdown(debits: &[&TransactionRecord]) -> ReportResult<Vec<CategorySpending>> {
    let mut categories: Vec<CategorySpending> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for txn in debits {
        let i = *index.entry(txn.category.as_str()).or_insert_with(|| {
            categories.push(CategorySpending {
                category: txn.category.clone(),
                total: Money::zero(),
                count: 0,
                average: Money::zero(),
            });
            categories.len() - 1
        });
        accumulate(&mut categories[i].total, txn.amount, "category total")?;
        categories[i].count += 1;
    }

    for category in &mut categories {
        category.average = average(category.total, category.count);
    }
    categories.sort_by(|a, b| b.total.cmp(&a.total));
    Ok(categories)
}

fn recurring_charges(debits: &[&TransactionRecord]) -> Vec<RecurringCharge> {
    let mut charges: Vec<RecurringCharge> = Vec::new();
    let mut index: HashMap<(&str, Money), usize> = HashMap::new();

    for txn in debits {
        // Normalize scale so 12.5 and 12.50 share a signature
        let key = (txn.counterparty.as_str(), Money::new(txn.amount.value().normalize()));
        match index.get(&key) {
            Some(&i) => charges[i].occurrences += 1,
            None => {
                index.insert(key, charges.len());
                charges.push(RecurringCharge {
                    counterparty: txn.counterparty.clone(),
                    amount: txn.amount,
                    occurrences: 1,
                });
            }
        }
    }

    charges.retain(|c| c.occurrences >= 2);
    charges
}

fn anomalies(debits: &[&TransactionRecord]) -> Vec<Anomaly> {
    if debits.is_empty() {
        return Vec::new();
    }

    let amounts: Vec<f64> = debits.iter().map(|t| t.amount.to_f64()).collect();
    let n = amounts.len() as f64;
    let mean = amounts.iter().sum::<f64>() / n;
    let std_dev = (amounts.iter().map(|a| (a - mean).powi(2)).sum::<f64>() / n).sqrt();
    if std_dev <= 0.0 {
        return Vec::new();
    }

    let mut found: Vec<Anomaly> = debits
        .iter()
        .zip(&amounts)
        .map(|(txn, amount)| (txn, (amount - mean) / std_dev))
        .filter(|(_, z)| *z > ANOMALY_Z_SCORE)
        .map(|(txn, z_score)| Anomaly {
            date: txn.date,
            counterparty: txn.counterparty.clone(),
            amount: txn.amount,
            z_score,
        })
        .collect();

    found.sort_by(|a, b| b.amount.cmp(&a.amount));
    found.truncate(ANOMALY_LIMIT);
    found
}

fn burn_rate(records: &[TransactionRecord], total_expense: Money) -> Money {
    let months: BTreeSet<MonthKey> = records.iter().map(|t| t.month()).collect();
    average(total_expense, months.len().max(1))
}

fn forecast(summary: &AggregateResult) -> ReportResult<Vec<ForecastMonth>> {
    let history = &summary.monthly_expenses;
    let Some(last) = history.keys().next_back() else {
        return Ok(Vec::new());
    };
    if history.len() < 2 {
        return Ok(Vec::new());
    }

    let total = Money::checked_sum(history.values().copied())
        .ok_or_else(|| ReportError::overflow("expense history"))?;
    let mean = average(total, history.len());

    (1..=FORECAST_MONTHS)
        .map(|i| {
            let factor = Decimal::ONE + FORECAST_GROWTH * Decimal::from(i);
            let projected = mean
                .checked_mul(factor)
                .ok_or_else(|| ReportError::overflow("expense forecast"))?;
            Ok(ForecastMonth {
                month: last.plus_months(i),
                projected,
            })
        })
        .collect()
}
