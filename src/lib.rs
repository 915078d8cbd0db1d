//! spendlens - statement analytics for exported transaction histories
//!
//! This library turns an exported bank statement into aggregate analytics:
//! income/expense totals, per-category breakdowns, monthly trends,
//! keyword-based auto-categorization, and budget-vs-actual comparisons.
//! The engine is a set of pure functions over in-memory transaction
//! batches; CSV loading and terminal rendering are thin layers around it.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `error`: Custom error types
//! - `models`: Transaction record and the category keyword table
//! - `classify`: Keyword classifier (first matching rule wins)
//! - `analytics`: Totals, category breakdown, monthly series, budget planner
//! - `import`: CSV statement loading and writing
//! - `display`: Plain-text report rendering
//! - `cli`: Command handlers for the `spendlens` binary
//!
//! # Example
//!
//! ```rust
//! use spendlens::analytics::BasicStats;
//! use spendlens::classify::categorize_all;
//! use spendlens::models::{CategoryRules, Transaction};
//!
//! let batch = vec![
//!     Transaction::new("15.01.2024", 50000.0, "зарплата"),
//!     Transaction::new("16.01.2024", -450.0, "Покупка в Пятерочке"),
//! ];
//! let categorized = categorize_all(&batch, &CategoryRules::default_rules());
//! let stats = BasicStats::compute(&categorized);
//! assert_eq!(stats.balance, 49550.0);
//! ```

pub mod analytics;
pub mod classify;
pub mod cli;
pub mod display;
pub mod error;
pub mod import;
pub mod models;

pub use error::{SpendlensError, SpendlensResult};
