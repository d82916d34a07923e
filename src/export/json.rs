//! JSON summary renderer
//!
//! Amounts are rounded to cents and written as numbers.

use serde::Serialize;

use super::ReportContext;
use crate::error::ReportResult;
use crate::models::{MonthKey, Money};

/// Top-level JSON document
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonSummary {
    pub currency: String,
    pub total_income: Money,
    pub total_expense: Money,
    pub net_cashflow: Money,
    pub monthly_totals: Vec<JsonMonthlyTotal>,
    pub monthly_expenses: Vec<JsonMonthlyExpense>,
    pub top_counterparties: Vec<JsonCounterparty>,
}

#[derive(Debug, Serialize)]
pub struct JsonMonthlyTotal {
    pub month: MonthKey,
    pub income: Money,
    pub expenses: Money,
    pub net: Money,
}

#[derive(Debug, Serialize)]
pub struct JsonMonthlyExpense {
    pub month: MonthKey,
    pub total: Money,
}

#[derive(Debug, Serialize)]
pub struct JsonCounterparty {
    pub counterparty: String,
    pub total: Money,
}

impl JsonSummary {
    /// Build the document from the render context
    pub fn from_context(ctx: &ReportContext<'_>) -> Self {
        let summary = ctx.summary;
        Self {
            currency: ctx.currency.code().to_string(),
            total_income: summary.total_income.rounded(),
            total_expense: summary.total_expense.rounded(),
            net_cashflow: summary.net_cashflow.rounded(),
            monthly_totals: ctx
                .cashflow
                .iter()
                .map(|m| JsonMonthlyTotal {
                    month: m.month,
                    income: m.income.rounded(),
                    expenses: m.expenses.rounded(),
                    net: m.net.rounded(),
                })
                .collect(),
            monthly_expenses: summary
                .monthly_expenses
                .iter()
                .map(|(month, total)| JsonMonthlyExpense {
                    month: *month,
                    total: total.rounded(),
                })
                .collect(),
            top_counterparties: summary
                .top_counterparties
                .iter()
                .map(|c| JsonCounterparty {
                    counterparty: c.counterparty.clone(),
                    total: c.total.rounded(),
                })
                .collect(),
        }
    }
}

/// Render the summary as pretty-printed JSON
pub fn render_json(ctx: &ReportContext<'_>) -> ReportResult<String> {
    let mut json = serde_json::to_string_pretty(&JsonSummary::from_context(ctx))?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::transaction::fixtures::{credit, debit};
    use crate::models::Currency;
    use crate::reports::{AggregateResult, MonthlyCashflow};

    #[test]
    fn test_render_json() {
        let records = vec![
            debit("2024-01-05", "50.005", "Market"),
            credit("2024-01-10", "200.00"),
        ];
        let summary = AggregateResult::compute(&records).unwrap();
        let cashflow = MonthlyCashflow::compute(&records).unwrap();
        let currency = Currency::parse("gbp").unwrap();
        let json = render_json(&ReportContext {
            summary: &summary,
            cashflow: &cashflow,
            currency: &currency,
        })
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["currency"], "GBP");
        assert_eq!(value["totalIncome"], 200.0);
        assert_eq!(value["totalExpense"], 50.01);
        // 149.995 rounds half-up
        assert_eq!(value["netCashflow"], 150.0);
        assert_eq!(value["monthlyTotals"][0]["month"], "2024-01");
        assert_eq!(value["monthlyExpenses"][0]["total"], 50.01);
        assert_eq!(value["topCounterparties"][0]["counterparty"], "Market");
    }

    #[test]
    fn test_render_json_empty() {
        let summary = AggregateResult::compute(&[]).unwrap();
        let currency = Currency::default();
        let json = render_json(&ReportContext {
            summary: &summary,
            cashflow: &[],
            currency: &currency,
        })
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["monthlyExpenses"].as_array().unwrap().len(), 0);
        assert_eq!(value["topCounterparties"].as_array().unwrap().len(), 0);
        assert_eq!(value["totalIncome"], 0.0);
    }
}
