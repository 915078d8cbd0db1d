//! `rules` command
//!
//! Dumps the active category rule table as YAML. With `--rules` this doubles
//! as a validation pass for a hand-edited file; without it, the built-in
//! table is printed so users can bootstrap their own config from it.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{SpendlensError, SpendlensResult};

use super::load_rules;

/// Arguments for the rules command
#[derive(Args, Debug)]
pub struct RulesArgs {
    /// Category rules file (YAML) to load and echo; built-in table when omitted
    #[arg(long)]
    pub rules: Option<PathBuf>,

    /// Write the table here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the rules command
pub fn handle_rules_command(args: RulesArgs) -> SpendlensResult<()> {
    let rules = load_rules(args.rules.as_deref())?;
    let yaml = rules.to_yaml()?;

    match args.output {
        Some(path) => {
            fs::write(&path, yaml).map_err(|e| {
                SpendlensError::Export(format!("cannot write '{}': {}", path.display(), e))
            })?;
            println!("Wrote {} rules to {}", rules.len(), path.display());
        }
        None => print!("{yaml}"),
    }

    Ok(())
}
