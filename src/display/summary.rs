//! Summary and amount formatting

use rust_decimal::Decimal;

use crate::models::Summary;

/// Format an amount with a currency symbol and two decimal places
pub fn format_amount(symbol: &str, amount: Decimal) -> String {
    format!("{}{:.2}", symbol, amount)
}

/// Lines describing a summary, as shown in the drawer and the report overlay
pub fn format_summary_lines(summary: &Summary, symbol: &str, date_format: &str) -> Vec<String> {
    vec![
        super::to_long_string(summary.date, date_format),
        format!("Day:   {}", format_amount(symbol, summary.day_total)),
        format!("Month: {}", format_amount(symbol, summary.month_total)),
        format!("Expenses this month: {}", summary.expense_count),
    ]
}
