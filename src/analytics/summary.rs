//! Whole-batch and per-category statistics
//!
//! Pure computations over a transaction batch: overall income/expense totals
//! and the per-category breakdown with income/expense shares.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{SpendlensError, SpendlensResult};
use crate::models::Transaction;

/// Totals over a whole transaction batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BasicStats {
    /// Sum of positive amounts
    pub total_income: f64,

    /// Sum of negative amounts (zero or negative)
    pub total_expense: f64,

    /// `total_income + total_expense`
    pub balance: f64,

    /// Number of records, zero-amount ones included
    pub transaction_count: usize,
}

impl BasicStats {
    /// Compute totals over a batch
    ///
    /// Empty input yields the all-zero struct. Zero-amount records count
    /// toward `transaction_count` but contribute to neither total.
    pub fn compute(transactions: &[Transaction]) -> Self {
        let mut stats = Self::default();
        for txn in transactions {
            if txn.amount > 0.0 {
                stats.total_income += txn.amount;
            } else if txn.amount < 0.0 {
                stats.total_expense += txn.amount;
            }
        }
        stats.balance = stats.total_income + stats.total_expense;
        stats.transaction_count = transactions.len();
        stats
    }
}

/// Net position of one category within a batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CategoryStats {
    /// Net signed total
    pub sum: f64,

    /// Number of transactions in the category
    pub count: usize,

    /// Share of the batch's total expense magnitude; 0 for net-positive
    /// categories and when there are no expenses at all
    pub expense_percent: f64,

    /// Share of the batch's total income; 0 for net-negative categories and
    /// when there is no income at all
    pub income_percent: f64,
}

/// Group a batch by its category labels
///
/// Categories must already be assigned; a record without one is a
/// precondition violation and fails the whole call with `MissingField`.
/// Percentages are computed against the batch-wide totals: a category with a
/// negative net sum gets an expense share, any other (including an exactly
/// zero net sum) gets an income share. A zero total on either side yields a
/// 0 share instead of dividing.
pub fn by_category(
    transactions: &[Transaction],
) -> SpendlensResult<BTreeMap<String, CategoryStats>> {
    let totals = BasicStats::compute(transactions);

    let mut stats: BTreeMap<String, CategoryStats> = BTreeMap::new();
    for txn in transactions {
        let category = txn
            .category
            .as_deref()
            .ok_or(SpendlensError::MissingField("category"))?;
        let entry = stats.entry(category.to_string()).or_default();
        entry.sum += txn.amount;
        entry.count += 1;
    }

    for data in stats.values_mut() {
        if data.sum < 0.0 {
            data.expense_percent = if totals.total_expense != 0.0 {
                data.sum.abs() / totals.total_expense.abs() * 100.0
            } else {
                0.0
            };
        } else {
            data.income_percent = if totals.total_income != 0.0 {
                data.sum / totals.total_income * 100.0
            } else {
                0.0
            };
        }
    }

    Ok(stats)
}
