//! `analyze` command
//!
//! Loads a statement, optionally classifies unlabelled records, and prints
//! the overall totals, the category breakdown, and (on request) the monthly
//! series — as text or as one JSON document.

use std::path::PathBuf;

use clap::Args;
use serde_json::json;

use crate::analytics::{by_category, by_month, BasicStats};
use crate::classify::categorize_missing;
use crate::display::{render_categories, render_monthly, render_summary};
use crate::error::SpendlensResult;

use super::{load_rules, load_transactions};

/// Arguments for the analyze command
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Path to the statement CSV (date, amount, description)
    pub file: PathBuf,

    /// chrono format of the date column, e.g. "%d.%m.%Y" or "%Y-%m-%d"
    #[arg(long, default_value = "%d.%m.%Y")]
    pub date_format: String,

    /// Category rules file (YAML); built-in table when omitted
    #[arg(long)]
    pub rules: Option<PathBuf>,

    /// Classify records that have no category before aggregating
    #[arg(long)]
    pub classify: bool,

    /// Include the monthly income/expense table
    #[arg(long)]
    pub monthly: bool,

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

/// Handle the analyze command
pub fn handle_analyze_command(args: AnalyzeArgs) -> SpendlensResult<()> {
    let mut transactions = load_transactions(
        &args.file,
        args.category_column,
        args.delimiter,
        !args.no_header,
    )?;

    if args.classify {
        let rules = load_rules(args.rules.as_deref())?;
        transactions = categorize_missing(&transactions, &rules);
    }

    let summary = BasicStats::compute(&transactions);
    let categories = by_category(&transactions)?;
    let monthly = if args.monthly {
        Some(by_month(&transactions, &args.date_format)?)
    } else {
        None
    };

    if args.json {
        let document = json!({
            "summary": summary,
            "categories": categories,
            "monthly": monthly,
        });
        println!("{}", serde_json::to_string_pretty(&document)?);
    } else {
        print!("{}", render_summary(&summary));
        println!();
        print!("{}", render_categories(&categories));
        if let Some(monthly) = monthly {
            println!();
            print!("{}", render_monthly(&monthly));
        }
    }

    Ok(())
}
