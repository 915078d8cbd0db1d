//! Terminal rendering
//!
//! Plain-text formatting of engine results. Nothing here computes; it only
//! arranges numbers the engine already produced.

pub mod report;

pub use report::{
    format_amount, format_bar, format_percentage, render_analysis, render_budget,
    render_categories, render_comparison, render_monthly, render_summary, separator,
};
