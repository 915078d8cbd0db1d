//! Report formatting for terminal output
//!
//! Renders every report as plain text. All numeric values arrive as plain
//! decimals; this module owns the formatting so the engine never bakes
//! locale or precision decisions into its results.

use std::collections::BTreeMap;

use crate::analytics::{
    BasicStats, BudgetComparison, BudgetTemplate, CategoryStats, MonthlyStats, SpendingAnalysis,
};

const REPORT_WIDTH: usize = 72;
const BAR_WIDTH: usize = 12;

/// Format an amount with two decimals, sign preserved
pub fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}

/// Format a percentage with precision scaled to its magnitude
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{pct:.2}%")
    } else if pct < 10.0 {
        format!("{pct:.1}%")
    } else {
        format!("{pct:.0}%")
    }
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

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Render whole-batch totals
pub fn render_summary(stats: &BasicStats) -> String {
    let mut output = String::new();
    output.push_str("Summary\n");
    output.push_str(&separator(REPORT_WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "{:<16} {:>14}\n",
        "Income",
        format_amount(stats.total_income)
    ));
    output.push_str(&format!(
        "{:<16} {:>14}\n",
        "Expenses",
        format_amount(stats.total_expense)
    ));
    output.push_str(&format!(
        "{:<16} {:>14}\n",
        "Balance",
        format_amount(stats.balance)
    ));
    output.push_str(&format!(
        "{:<16} {:>14}\n",
        "Transactions", stats.transaction_count
    ));
    output
}

/// Render the per-category breakdown
pub fn render_categories(stats: &BTreeMap<String, CategoryStats>) -> String {
    if stats.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str("By category\n");
    output.push_str(&format!(
        "{:<26} {:>12} {:>6} {:>9} {:>9}\n",
        "Category", "Net", "Count", "Expense", "Income"
    ));
    output.push_str(&separator(REPORT_WIDTH));
    output.push('\n');

    for (category, data) in stats {
        let share = data.expense_percent.max(data.income_percent);
        output.push_str(&format!(
            "{:<26} {:>12} {:>6} {:>9} {:>9}  {}\n",
            category,
            format_amount(data.sum),
            data.count,
            format_percentage(data.expense_percent),
            format_percentage(data.income_percent),
            format_bar(share, 100.0, BAR_WIDTH),
        ));
    }
    output
}

/// Render the monthly income/expense series
pub fn render_monthly(monthly: &BTreeMap<String, MonthlyStats>) -> String {
    if monthly.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str("By month\n");
    output.push_str(&format!(
        "{:<10} {:>14} {:>14}\n",
        "Month", "Income", "Expenses"
    ));
    output.push_str(&separator(REPORT_WIDTH));
    output.push('\n');

    for (month, data) in monthly {
        output.push_str(&format!(
            "{:<10} {:>14} {:>14}\n",
            month,
            format_amount(data.income),
            format_amount(data.expenses)
        ));
    }
    output
}

/// Render the historical spending analysis
pub fn render_analysis(analysis: &SpendingAnalysis) -> String {
    let mut output = String::new();
    output.push_str("Historical spending\n");
    output.push_str(&separator(REPORT_WIDTH));
    output.push('\n');

    for (category, average) in &analysis.average_spending {
        output.push_str(&format!(
            "{:<26} {:>12}\n",
            category,
            format_amount(*average)
        ));
    }

    if analysis.recommendations.is_empty() {
        output.push_str("no recommendations\n");
    } else {
        for recommendation in &analysis.recommendations {
            output.push_str(&format!(" - {recommendation}\n"));
        }
    }
    output
}

/// Render the budget template
pub fn render_budget(budget: &BudgetTemplate) -> String {
    let mut output = String::new();
    output.push_str("Budget template\n");
    output.push_str(&separator(REPORT_WIDTH));
    output.push('\n');

    for (category, amount) in &budget.allocations {
        output.push_str(&format!(
            "{:<26} {:>12}\n",
            category,
            format_amount(*amount)
        ));
    }
    output
}

/// Render the plan-vs-actual comparison
pub fn render_comparison(comparison: &BTreeMap<String, BudgetComparison>) -> String {
    if comparison.is_empty() {
        return "Nothing to compare.\n".to_string();
    }

    let mut output = String::new();
    output.push_str("Plan vs actual\n");
    output.push_str(&format!(
        "{:<26} {:>12} {:>12} {:>12}  {}\n",
        "Category", "Planned", "Actual", "Diff", "Status"
    ));
    output.push_str(&separator(REPORT_WIDTH));
    output.push('\n');

    for (category, row) in comparison {
        output.push_str(&format!(
            "{:<26} {:>12} {:>12} {:>12}  {}\n",
            category,
            format_amount(row.planned),
            format_amount(row.actual),
            format_amount(row.diff),
            row.status,
        ));
    }
    output
}
