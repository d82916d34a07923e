//! Markdown summary renderer

use super::ReportContext;

/// Escape characters that would break a Markdown table cell
fn escape_cell(s: &str) -> String {
    s.replace('\\', "\\\\").replace('|', "\\|")
}

/// Render the summary as Markdown
pub fn render_markdown(ctx: &ReportContext<'_>) -> String {
    let currency = ctx.currency;
    let summary = ctx.summary;
    let mut output = String::new();

    output.push_str("# Financial Summary\n\n");
    output.push_str(&format!("- Total income: {}\n", currency.format(summary.total_income)));
    output.push_str(&format!("- Total expenses: {}\n", currency.format(summary.total_expense)));
    output.push_str(&format!("- Net cashflow: {}\n", currency.format(summary.net_cashflow)));

    output.push_str("\n## Monthly Totals\n\n");
    if ctx.cashflow.is_empty() {
        output.push_str("_No transactions._\n");
    }
    for month in ctx.cashflow {
        output.push_str(&format!(
            "- {}: income={} expenses={} net={}\n",
            month.month,
            currency.format(month.income),
            currency.format(month.expenses),
            currency.format(month.net)
        ));
    }

    output.push_str("\n## Monthly Expenses\n\n");
    output.push_str("| Month | Total |\n|---|---:|\n");
    for (month, total) in &summary.monthly_expenses {
        output.push_str(&format!("| {} | {} |\n", month, currency.format(*total)));
    }

    output.push_str("\n## Top Counterparties\n\n");
    output.push_str("| # | Counterparty | Total |\n|---|---|---:|\n");
    for (rank, entry) in summary.top_counterparties.iter().enumerate() {
        output.push_str(&format!(
            "| {} | {} | {} |\n",
            rank + 1,
            escape_cell(&entry.counterparty),
            currency.format(entry.total)
        ));
    }

    output
}
