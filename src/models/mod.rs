//! Core data models for spendlens
//!
//! This module contains the data structures the engine consumes: the
//! transaction record and the ordered category keyword table.

pub mod rules;
pub mod transaction;

pub use rules::{CategoryRule, CategoryRules};
pub use transaction::{Transaction, UNCATEGORIZED};
