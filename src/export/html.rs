//! HTML report renderer
//!
//! Produces a single self-contained page: inline CSS, no scripts, no
//! external assets. The output depends only on the aggregates and the
//! currency, so repeated runs are byte-identical.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{Currency, Money};
use crate::reports::AggregateResult;

const STYLE: &str = r#"    body { font-family: "Inter", system-ui, sans-serif; background: #0f172a; color: #e2e8f0; margin: 0; }
    header { padding: 32px 40px; background: linear-gradient(135deg, #1e293b, #0f172a); }
    h1 { margin: 0 0 8px; font-size: 28px; }
    .subtitle { color: #94a3b8; margin: 0; }
    main { padding: 32px 40px 48px; display: grid; gap: 24px; }
    .card { background: #111827; border: 1px solid #1f2937; border-radius: 16px; padding: 20px; }
    .grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 16px; }
    .metric { font-size: 20px; font-weight: 600; }
    .label { color: #94a3b8; font-size: 13px; text-transform: uppercase; letter-spacing: 0.08em; }
    .empty { color: #64748b; }
    table { width: 100%; border-collapse: collapse; margin-top: 12px; font-size: 14px; }
    th, td { padding: 8px 6px; border-bottom: 1px solid #1f2937; text-align: left; }
    td.amount { text-align: right; font-variant-numeric: tabular-nums; }
    .bar { height: 8px; background: #1f2937; border-radius: 999px; overflow: hidden; }
    .bar > span { display: block; height: 8px; background: #38bdf8; }
    footer { color: #64748b; font-size: 12px; text-align: center; padding: 16px 0 32px; }
"#;

/// Width of a month's trend bar, in percent of the largest month
///
/// `max` must be positive; see [`AggregateResult::max_monthly_expense`].
pub fn trend_width(total: Money, max: Money) -> u32 {
    if max.is_zero() {
        return 0;
    }
    (total.value() / max.value() * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or(0)
}

/// Escape text for HTML element content and attribute values
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render the full HTML document
pub fn render_html(summary: &AggregateResult, currency: &Currency) -> String {
    let mut output = String::new();

    output.push_str("<!doctype html>\n<html lang=\"en\">\n<head>\n");
    output.push_str("  <meta charset=\"utf-8\">\n");
    output.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    output.push_str("  <title>Cash Flow Report</title>\n");
    output.push_str("  <style>\n");
    output.push_str(STYLE);
    output.push_str("  </style>\n</head>\n<body>\n");
    output.push_str("<header>\n  <h1>Cash Flow Report</h1>\n");
    output.push_str(&format!(
        "  <p class=\"subtitle\">Income, spending trend and top counterparties in {}.</p>\n",
        escape_html(currency.code())
    ));
    output.push_str("</header>\n<main>\n");

    push_metrics(&mut output, summary, currency);
    push_monthly_table(&mut output, summary, currency);
    push_counterparty_table(&mut output, summary, currency);

    output.push_str("</main>\n<footer>Generated by cashflow-report</footer>\n</body>\n</html>\n");
    output
}

fn push_metrics(output: &mut String, summary: &AggregateResult, currency: &Currency) {
    output.push_str("  <section class=\"grid\">\n");
    for (label, amount) in [
        ("Total Income", summary.total_income),
        ("Total Expenses", summary.total_expense),
        ("Net Cashflow", summary.net_cashflow),
    ] {
        output.push_str("    <div class=\"card\">\n");
        output.push_str(&format!("      <div class=\"label\">{}</div>\n", label));
        output.push_str(&format!(
            "      <div class=\"metric\">{}</div>\n",
            escape_html(&currency.format(amount))
        ));
        output.push_str("    </div>\n");
    }
    output.push_str("  </section>\n");
}

fn push_monthly_table(output: &mut String, summary: &AggregateResult, currency: &Currency) {
    output.push_str("  <section class=\"card\">\n");
    output.push_str("    <div class=\"label\">Monthly Expenses</div>\n");
    output.push_str("    <table>\n");
    output.push_str("      <thead><tr><th>Month</th><th>Total</th><th>Trend</th></tr></thead>\n");
    output.push_str("      <tbody>\n");

    if summary.monthly_expenses.is_empty() {
        output.push_str("        <tr><td class=\"empty\" colspan=\"3\">No expenses recorded</td></tr>\n");
    }

    let max = summary.max_monthly_expense();
    for (month, total) in &summary.monthly_expenses {
        output.push_str(&format!(
            "        <tr><td>{}</td><td class=\"amount\">{}</td><td><div class=\"bar\"><span style=\"width:{}%\"></span></div></td></tr>\n",
            month,
            escape_html(&currency.format(*total)),
            trend_width(*total, max)
        ));
    }

    output.push_str("      </tbody>\n    </table>\n  </section>\n");
}

fn push_counterparty_table(output: &mut String, summary: &AggregateResult, currency: &Currency) {
    output.push_str("  <section class=\"card\">\n");
    output.push_str("    <div class=\"label\">Top Counterparties</div>\n");
    output.push_str("    <table>\n");
    output.push_str("      <thead><tr><th>#</th><th>Counterparty</th><th>Total</th></tr></thead>\n");
    output.push_str("      <tbody>\n");

    if summary.top_counterparties.is_empty() {
        output.push_str("        <tr><td class=\"empty\" colspan=\"3\">No expenses recorded</td></tr>\n");
    }

    for (rank, entry) in summary.top_counterparties.iter().enumerate() {
        output.push_str(&format!(
            "        <tr><td>{}</td><td>{}</td><td class=\"amount\">{}</td></tr>\n",
            rank + 1,
            escape_html(&entry.counterparty),
            escape_html(&currency.format(entry.total))
        ));
    }

    output.push_str("      </tbody>\n    </table>\n  </section>\n");
}
