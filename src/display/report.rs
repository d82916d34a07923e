//! Terminal formatting for the insights summary
//!
//! Each section is a `tabled` table; amounts go through the configured
//! currency so the terminal and the document agree.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Currency, Money};
use crate::reports::{Insights, MonthlyCashflow};

/// Width of the text bars in the monthly table
const BAR_WIDTH: usize = 24;

#[derive(Tabled)]
struct MonthRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Expenses")]
    expenses: String,
    #[tabled(rename = "Net")]
    net: String,
    #[tabled(rename = "Trend")]
    trend: String,
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Count")]
    count: usize,
    #[tabled(rename = "Average")]
    average: String,
}

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    flow_type: String,
    #[tabled(rename = "Counterparty")]
    counterparty: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

#[derive(Tabled)]
struct RecurringRow {
    #[tabled(rename = "Counterparty")]
    counterparty: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Seen")]
    occurrences: usize,
}

#[derive(Tabled)]
struct ForecastRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Projected")]
    projected: String,
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

fn render_table<T: Tabled>(rows: Vec<T>) -> String {
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

fn section(output: &mut String, title: &str) {
    output.push('\n');
    output.push_str(title);
    output.push('\n');
    output.push_str(&"-".repeat(title.chars().count()));
    output.push('\n');
}

/// Format the insights summary for terminal display
pub fn format_insights(
    insights: &Insights,
    cashflow: &[MonthlyCashflow],
    currency: &Currency,
) -> String {
    let fmt = |amount: Money| currency.format(amount);
    let mut output = String::new();

    output.push_str("Cash Flow Insights\n");
    output.push_str(&"=".repeat(60));
    output.push('\n');

    section(&mut output, "Expense Overview");
    let overview = &insights.overview;
    output.push_str(&format!("Debit transactions: {}\n", overview.count));
    output.push_str(&format!("Total expenses:     {}\n", fmt(overview.total)));
    output.push_str(&format!("Average expense:    {}\n", fmt(overview.average)));
    output.push_str(&format!("Largest expense:    {}\n", fmt(overview.largest)));
    output.push_str(&format!("Monthly burn rate:  {}\n", fmt(insights.burn_rate)));

    section(&mut output, "Monthly Report");
    if cashflow.is_empty() {
        output.push_str("No transactions.\n");
    } else {
        let max = cashflow.iter().map(|m| m.expenses.to_f64()).fold(0.0, f64::max);
        let rows: Vec<MonthRow> = cashflow
            .iter()
            .map(|m| MonthRow {
                month: m.month.to_string(),
                income: fmt(m.income),
                expenses: fmt(m.expenses),
                net: fmt(m.net),
                trend: format_bar(m.expenses.to_f64(), max, BAR_WIDTH),
            })
            .collect();
        output.push_str(&render_table(rows));
        output.push('\n');
    }

    section(&mut output, "Category Breakdown");
    if insights.categories.is_empty() {
        output.push_str("No expenses.\n");
    } else {
        let rows: Vec<CategoryRow> = insights
            .categories
            .iter()
            .map(|c| CategoryRow {
                category: truncate(&c.category, 24),
                total: fmt(c.total),
                count: c.count,
                average: fmt(c.average),
            })
            .collect();
        output.push_str(&render_table(rows));
        output.push('\n');
    }

    section(
        &mut output,
        &format!("High-Value Transactions (>= {})", fmt(insights.threshold)),
    );
    if insights.high_value.is_empty() {
        output.push_str("None.\n");
    } else {
        let rows: Vec<TransactionRow> = insights
            .high_value
            .iter()
            .map(|t| TransactionRow {
                date: t.date.format("%Y-%m-%d").to_string(),
                flow_type: t.flow_type.to_string(),
                counterparty: truncate(&t.counterparty, 24),
                amount: fmt(t.amount),
            })
            .collect();
        output.push_str(&render_table(rows));
        output.push('\n');
    }

    section(&mut output, "Recurring Charges");
    if insights.recurring.is_empty() {
        output.push_str("None detected.\n");
    } else {
        let rows: Vec<RecurringRow> = insights
            .recurring
            .iter()
            .map(|r| RecurringRow {
                counterparty: truncate(&r.counterparty, 24),
                amount: fmt(r.amount),
                occurrences: r.occurrences,
            })
            .collect();
        output.push_str(&render_table(rows));
        output.push('\n');
    }

    section(&mut output, "Anomalies");
    if insights.anomalies.is_empty() {
        output.push_str("None detected.\n");
    }
    for anomaly in &insights.anomalies {
        output.push_str(&format!(
            "{}  {:<24} {} (z={:.1})\n",
            anomaly.date.format("%Y-%m-%d"),
            truncate(&anomaly.counterparty, 24),
            fmt(anomaly.amount),
            anomaly.z_score
        ));
    }

    section(&mut output, "Expense Forecast");
    if insights.forecast.is_empty() {
        output.push_str("Not enough data for forecast.\n");
    } else {
        let rows: Vec<ForecastRow> = insights
            .forecast
            .iter()
            .map(|f| ForecastRow {
                month: f.month.to_string(),
                projected: fmt(f.projected),
            })
            .collect();
        output.push_str(&render_table(rows));
        output.push('\n');
    }

    output
}
