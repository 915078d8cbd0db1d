//! Transaction model
//!
//! Represents one line of an exported statement: the date text, a signed
//! amount, an optional category label, and the free-text description used
//! by the classifier.
//!
//! The amount is numeric by the time a `Transaction` exists; the loader owns
//! parsing amount strings. The date deliberately stays statement text: date
//! formats vary across exports, so monthly aggregation parses it with a
//! caller-supplied format instead of this model guessing one.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label assumed for a transaction that carries no category
pub const UNCATEGORIZED: &str = "other";

/// One financial movement from an exported statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction date as exported
    pub date: String,

    /// Amount (positive for income, negative for expense)
    pub amount: f64,

    /// Category label, absent until classified
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Free-text description from the statement
    #[serde(default)]
    pub description: String,
}

impl Transaction {
    /// Create a new uncategorized transaction
    pub fn new(date: impl Into<String>, amount: f64, description: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            amount,
            category: None,
            description: description.into(),
        }
    }

    /// Create a transaction with a category label already assigned
    pub fn with_category(
        date: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let mut txn = Self::new(date, amount, description);
        txn.category = Some(category.into());
        txn
    }

    /// Check if this is an inflow (positive amount)
    pub fn is_inflow(&self) -> bool {
        self.amount > 0.0
    }

    /// Check if this is an outflow (negative amount)
    pub fn is_outflow(&self) -> bool {
        self.amount < 0.0
    }

    /// Category label, falling back to [`UNCATEGORIZED`]
    pub fn category_or_default(&self) -> &str {
        self.category.as_deref().unwrap_or(UNCATEGORIZED)
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.2} {}", self.date, self.amount, self.description)
    }
}
