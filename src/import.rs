//! CSV statement loading and writing
//!
//! Reads exported statements into [`Transaction`] records through a
//! configurable column mapping, and writes categorized batches back out.
//!
//! This is the numeric boundary of the crate: amount text is normalized and
//! parsed to a signed decimal here, so the engine never sees amount strings.
//! Dates pass through as text because monthly aggregation parses them with a
//! caller-supplied format.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use crate::error::{SpendlensError, SpendlensResult};
use crate::models::Transaction;

/// Column layout of a statement export
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    /// Index of the date column
    pub date_column: usize,
    /// Index of the amount column
    pub amount_column: usize,
    /// Index of the description column
    pub description_column: usize,
    /// Index of a pre-assigned category column, if the export has one
    pub category_column: Option<usize>,
    /// Whether the first row is a header
    pub has_header: bool,
    /// Delimiter character
    pub delimiter: char,
}

impl Default for ColumnMapping {
    /// Layout of the reference export: date, amount, description
    fn default() -> Self {
        Self {
            date_column: 0,
            amount_column: 1,
            description_column: 2,
            category_column: None,
            has_header: true,
            delimiter: ',',
        }
    }
}

impl ColumnMapping {
    /// Create the default column mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the column holding a pre-assigned category
    pub fn with_category_column(mut self, column: usize) -> Self {
        self.category_column = Some(column);
        self
    }

    /// Set whether the first row is a header
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Set the delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// Read transactions from a CSV reader
///
/// Fails on the first malformed row, reporting its 1-based position.
/// Skipping bad rows is a caller decision the loader refuses to make.
pub fn read_transactions<R: Read>(
    reader: R,
    mapping: &ColumnMapping,
) -> SpendlensResult<Vec<Transaction>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(mapping.has_header)
        .delimiter(mapping.delimiter as u8)
        .flexible(true)
        .from_reader(reader);

    let mut transactions = Vec::new();
    for (idx, result) in csv_reader.records().enumerate() {
        let record = result?;
        transactions.push(parse_record(&record, idx + 1, mapping)?);
    }
    Ok(transactions)
}

/// Read transactions from a CSV file
pub fn read_transactions_from_path(
    path: impl AsRef<Path>,
    mapping: &ColumnMapping,
) -> SpendlensResult<Vec<Transaction>> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| SpendlensError::Import(format!("cannot open '{}': {}", path.display(), e)))?;
    let transactions = read_transactions(file, mapping)?;
    debug!(count = transactions.len(), file = %path.display(), "loaded statement");
    Ok(transactions)
}

/// Parse a single CSV record
fn parse_record(
    record: &StringRecord,
    row: usize,
    mapping: &ColumnMapping,
) -> SpendlensResult<Transaction> {
    let date = field(record, mapping.date_column, "date")?;
    let amount_text = field(record, mapping.amount_column, "amount")?;
    let description = field(record, mapping.description_column, "description")?;

    let amount = parse_amount(amount_text)
        .map_err(|e| SpendlensError::Import(format!("row {row}: {e}")))?;

    let mut txn = Transaction::new(date, amount, description);
    if let Some(column) = mapping.category_column {
        let category = record.get(column).map(str::trim).unwrap_or("");
        if !category.is_empty() {
            txn.category = Some(category.to_string());
        }
    }
    Ok(txn)
}

fn field<'a>(
    record: &'a StringRecord,
    column: usize,
    name: &'static str,
) -> SpendlensResult<&'a str> {
    record
        .get(column)
        .map(str::trim)
        .ok_or(SpendlensError::MissingField(name))
}

/// Parse an exported amount string into a signed decimal
///
/// Accepts the formats banks actually emit: "-1 234,56" (spaces or
/// non-breaking spaces as thousands separators, decimal comma), "1234.56",
/// "+500", and values with a leading or trailing currency marker.
fn parse_amount(s: &str) -> Result<f64, String> {
    let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    let trimmed = compact
        .trim_start_matches(|c: char| !(c.is_ascii_digit() || c == '-' || c == '+'))
        .trim_end_matches(|c: char| !c.is_ascii_digit());
    let normalized = trimmed.strip_prefix('+').unwrap_or(trimmed).replace(',', ".");
    normalized
        .parse::<f64>()
        .map_err(|_| format!("could not parse amount: '{s}'"))
}

/// Write a transaction batch as CSV
///
/// Header: `date,amount,category,description`. The layout matches the
/// default [`ColumnMapping`] with a category column at index 2, so written
/// files can be read back.
pub fn write_transactions<W: Write>(
    writer: &mut W,
    transactions: &[Transaction],
) -> SpendlensResult<()> {
    writeln!(writer, "date,amount,category,description")
        .map_err(|e| SpendlensError::Export(e.to_string()))?;

    for txn in transactions {
        writeln!(
            writer,
            "{},{:.2},{},{}",
            escape_csv(&txn.date),
            txn.amount,
            escape_csv(txn.category.as_deref().unwrap_or("")),
            escape_csv(&txn.description),
        )
        .map_err(|e| SpendlensError::Export(e.to_string()))?;
    }
    Ok(())
}

fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
