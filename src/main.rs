use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use spendlens::cli::{
    handle_analyze_command, handle_budget_command, handle_categorize_command, handle_rules_command,
    AnalyzeArgs, BudgetArgs, CategorizeArgs, RulesArgs,
};

#[derive(Parser)]
#[command(
    name = "spendlens",
    version,
    about = "Statement analytics from the command line",
    long_about = "spendlens analyzes exported transaction CSVs: it assigns \
                  categories by keyword rules, computes income/expense and \
                  per-category statistics with monthly trends, and builds a \
                  proportional budget to compare against actual spending."
)]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate statistics for a statement
    Analyze(AnalyzeArgs),

    /// Assign categories by keyword rules
    #[command(alias = "classify")]
    Categorize(CategorizeArgs),

    /// Build a budget from history and compare it against actuals
    Budget(BudgetArgs),

    /// Show or validate the category rule table
    Rules(RulesArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > --verbose flag > default (warn)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr).compact())
        .init();

    match cli.command {
        Commands::Analyze(args) => handle_analyze_command(args)?,
        Commands::Categorize(args) => handle_categorize_command(args)?,
        Commands::Budget(args) => handle_budget_command(args)?,
        Commands::Rules(args) => handle_rules_command(args)?,
    }

    Ok(())
}
