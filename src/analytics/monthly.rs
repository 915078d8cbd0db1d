//! Monthly time series
//!
//! Buckets a transaction batch by calendar month, accumulating income and
//! expense totals per `YYYY-MM` key.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{SpendlensError, SpendlensResult};
use crate::models::Transaction;

/// Key format for monthly buckets
const MONTH_KEY_FORMAT: &str = "%Y-%m";

/// Income and expense totals for one calendar month
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MonthlyStats {
    /// Sum of positive amounts
    pub income: f64,

    /// Sum of absolute values of negative amounts
    pub expenses: f64,
}

/// Bucket a batch by calendar month
///
/// Dates are parsed with the caller-supplied chrono format; statement
/// exports differ (`%d.%m.%Y`, `%Y-%m-%d`, ...), so the format is an input
/// rather than a guess. A date that does not match fails the whole call with
/// `MalformedDate` — whether to skip or abort is the caller's decision.
/// Month keys sort naturally, so iteration is already chronological.
pub fn by_month(
    transactions: &[Transaction],
    date_format: &str,
) -> SpendlensResult<BTreeMap<String, MonthlyStats>> {
    let mut monthly: BTreeMap<String, MonthlyStats> = BTreeMap::new();

    for txn in transactions {
        let date = NaiveDate::parse_from_str(&txn.date, date_format)
            .map_err(|_| SpendlensError::malformed_date(&txn.date, date_format))?;
        let entry = monthly
            .entry(date.format(MONTH_KEY_FORMAT).to_string())
            .or_default();
        if txn.amount > 0.0 {
            entry.income += txn.amount;
        } else {
            entry.expenses += txn.amount.abs();
        }
    }

    Ok(monthly)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_by_month_buckets() {
        let transactions = vec![
            Transaction::new("15.01.2024", 50000.0, "зарплата"),
            Transaction::new("16.01.2024", -450.0, "пятерочка"),
            Transaction::new("02.02.2024", -1200.0, "ozon"),
            Transaction::new("28.02.2024", 3000.0, "перевод"),
        ];

        let monthly = by_month(&transactions, "%d.%m.%Y").unwrap();
        assert_eq!(monthly.len(), 2);

        let january = &monthly["2024-01"];
        assert!(approx(january.income, 50000.0));
        assert!(approx(january.expenses, 450.0));

        let february = &monthly["2024-02"];
        assert!(approx(february.income, 3000.0));
        assert!(approx(february.expenses, 1200.0));
    }

    #[test]
    fn test_by_month_iso_format() {
        let transactions = vec![Transaction::new("2024-03-05", -99.0, "steam")];
        let monthly = by_month(&transactions, "%Y-%m-%d").unwrap();
        assert!(approx(monthly["2024-03"].expenses, 99.0));
    }

    #[test]
    fn test_by_month_keys_are_chronological() {
        let transactions = vec![
            Transaction::new("01.12.2024", -1.0, ""),
            Transaction::new("01.01.2024", -1.0, ""),
            Transaction::new("01.06.2024", -1.0, ""),
        ];
        let monthly = by_month(&transactions, "%d.%m.%Y").unwrap();
        let keys: Vec<&str> = monthly.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["2024-01", "2024-06", "2024-12"]);
    }

    #[test]
    fn test_by_month_malformed_date_propagates() {
        let transactions = vec![
            Transaction::new("15.01.2024", -1.0, ""),
            Transaction::new("2024-01-16", -1.0, ""),
        ];
        let err = by_month(&transactions, "%d.%m.%Y").unwrap_err();
        match err {
            SpendlensError::MalformedDate { value, format } => {
                assert_eq!(value, "2024-01-16");
                assert_eq!(format, "%d.%m.%Y");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_by_month_zero_amount_counts_as_expense_of_zero() {
        let transactions = vec![Transaction::new("15.01.2024", 0.0, "")];
        let monthly = by_month(&transactions, "%d.%m.%Y").unwrap();
        assert!(approx(monthly["2024-01"].income, 0.0));
        assert!(approx(monthly["2024-01"].expenses, 0.0));
    }

    #[test]
    fn test_by_month_empty_input() {
        assert!(by_month(&[], "%d.%m.%Y").unwrap().is_empty());
    }
}
