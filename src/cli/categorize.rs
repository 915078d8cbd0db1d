//! `categorize` command
//!
//! Runs the keyword classifier over a statement and writes the labelled
//! records back out as CSV.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;

use crate::classify::categorize_all;
use crate::error::{SpendlensError, SpendlensResult};
use crate::import::write_transactions;

use super::{load_rules, load_transactions};

/// Arguments for the categorize command
#[derive(Args, Debug)]
pub struct CategorizeArgs {
    /// Path to the statement CSV (date, amount, description)
    pub file: PathBuf,

    /// Category rules file (YAML); built-in table when omitted
    #[arg(long)]
    pub rules: Option<PathBuf>,

    /// Write the categorized CSV here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// CSV delimiter
    #[arg(long, default_value = ",")]
    pub delimiter: char,

    /// Treat the first row as data instead of a header
    #[arg(long)]
    pub no_header: bool,
}

/// Handle the categorize command
pub fn handle_categorize_command(args: CategorizeArgs) -> SpendlensResult<()> {
    let transactions = load_transactions(&args.file, None, args.delimiter, !args.no_header)?;
    let rules = load_rules(args.rules.as_deref())?;
    let categorized = categorize_all(&transactions, &rules);

    match args.output {
        Some(path) => {
            let mut file = File::create(&path).map_err(|e| {
                SpendlensError::Export(format!("cannot create '{}': {}", path.display(), e))
            })?;
            write_transactions(&mut file, &categorized)?;
            println!("Wrote {} transactions to {}", categorized.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_transactions(&mut handle, &categorized)?;
            handle.flush()?;
        }
    }

    Ok(())
}
