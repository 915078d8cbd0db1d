//! Aggregation engine
//!
//! Pure computations over transaction batches: overall totals, per-category
//! breakdowns, monthly time series, and budget planning. No I/O, no shared
//! state; every call consumes a slice and returns freshly allocated results.

pub mod budget;
pub mod monthly;
pub mod summary;

pub use budget::{
    BudgetComparison, BudgetStatus, BudgetTemplate, SpendingAnalysis, SAVINGS_LABEL, SAVINGS_RATE,
};
pub use monthly::{by_month, MonthlyStats};
pub use summary::{by_category, BasicStats, CategoryStats};
