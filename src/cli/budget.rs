//! `budget` command
//!
//! Profiles a transaction history, derives a proportional budget template
//! for the given income, and compares the plan against actuals (a second
//! statement, or the history itself when none is given).

use std::path::PathBuf;

use clap::Args;
use serde_json::json;

use crate::analytics::{BudgetTemplate, SpendingAnalysis};
use crate::classify::categorize_missing;
use crate::display::{render_analysis, render_budget, render_comparison};
use crate::error::SpendlensResult;
use crate::models::Transaction;

use super::{load_rules, load_transactions};

/// Arguments for the budget command
#[derive(Args, Debug)]
pub struct BudgetArgs {
    /// Path to the transaction history CSV
    pub file: PathBuf,

    /// Income to allocate across the budget
    #[arg(long)]
    pub income: f64,

    /// Statement to compare the plan against; the history when omitted
    #[arg(long)]
    pub actual: Option<PathBuf>,

    /// Category rules file (YAML); built-in table when omitted
    #[arg(long)]
    pub rules: Option<PathBuf>,

    /// Classify records that have no category before planning
    #[arg(long)]
    pub classify: bool,

    /// Emit one JSON document instead of text
    #[arg(long)]
    pub json: bool,

    /// Column index of a pre-assigned category, if the export has one
    #[arg(long)]
    pub category_column: Option<usize>,

    /// CSV delimiter
    #[arg(long, default_value = ",")]
    pub delimiter: char,

    /// Treat the first row as data instead of a header
    #[arg(long)]
    pub no_header: bool,
}

/// Handle the budget command
pub fn handle_budget_command(args: BudgetArgs) -> SpendlensResult<()> {
    let history = load_batch(&args, &args.file)?;
    let analysis = SpendingAnalysis::from_history(&history);
    let budget = BudgetTemplate::build(&analysis, args.income);

    let actuals = match &args.actual {
        Some(path) => load_batch(&args, path)?,
        None => history,
    };
    let comparison = budget.compare(&actuals);

    if args.json {
        let document = json!({
            "analysis": analysis,
            "budget": budget,
            "comparison": comparison,
        });
        println!("{}", serde_json::to_string_pretty(&document)?);
    } else {
        print!("{}", render_analysis(&analysis));
        println!();
        print!("{}", render_budget(&budget));
        println!();
        print!("{}", render_comparison(&comparison));
    }

    Ok(())
}

fn load_batch(args: &BudgetArgs, path: &std::path::Path) -> SpendlensResult<Vec<Transaction>> {
    let transactions =
        load_transactions(path, args.category_column, args.delimiter, !args.no_header)?;
    if args.classify {
        let rules = load_rules(args.rules.as_deref())?;
        Ok(categorize_missing(&transactions, &rules))
    } else {
        Ok(transactions)
    }
}
