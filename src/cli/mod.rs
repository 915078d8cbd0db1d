//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the engine: load the statement, optionally
//! classify, aggregate, render.

use std::path::Path;

use crate::error::SpendlensResult;
use crate::import::{self, ColumnMapping};
use crate::models::{CategoryRules, Transaction};

pub mod analyze;
pub mod budget;
pub mod categorize;
pub mod rules;

pub use analyze::{handle_analyze_command, AnalyzeArgs};
pub use budget::{handle_budget_command, BudgetArgs};
pub use categorize::{handle_categorize_command, CategorizeArgs};
pub use rules::{handle_rules_command, RulesArgs};

/// Load the rule table from a YAML file, or the built-in default
pub(crate) fn load_rules(path: Option<&Path>) -> SpendlensResult<CategoryRules> {
    match path {
        Some(path) => CategoryRules::from_yaml_file(path),
        None => Ok(CategoryRules::default_rules()),
    }
}

/// Load a statement with the shared column options
pub(crate) fn load_transactions(
    file: &Path,
    category_column: Option<usize>,
    delimiter: char,
    has_header: bool,
) -> SpendlensResult<Vec<Transaction>> {
    let mut mapping = ColumnMapping::new()
        .with_delimiter(delimiter)
        .with_header(has_header);
    if let Some(column) = category_column {
        mapping = mapping.with_category_column(column);
    }
    import::read_transactions_from_path(file, &mapping)
}
