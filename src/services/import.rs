//! CSV import service
//!
//! Reads a ledger CSV into [`TransactionRecord`]s. The header must name every
//! required column; rows are validated one by one and the first bad row
//! aborts the whole load.

use std::fs;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use log::{debug, info, trace};

use crate::error::{ReportError, ReportResult};
use crate::models::{FlowType, Money, TransactionRecord};

/// Date format for the `date` column
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Columns every input file must provide
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "date",
    "description",
    "category",
    "type",
    "amount",
    "balance",
    "destination",
];

/// Column positions resolved from the header row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    pub date: usize,
    pub description: usize,
    pub category: usize,
    pub flow_type: usize,
    pub amount: usize,
    pub balance: usize,
    pub destination: usize,
}

impl ColumnMapping {
    /// Resolve required columns from a header record
    ///
    /// Names are matched case-insensitively after trimming. Extra columns are
    /// ignored; the first missing column is reported.
    pub fn from_headers(headers: &StringRecord) -> ReportResult<Self> {
        let lookup = |name: &str| -> ReportResult<usize> {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
                .ok_or_else(|| ReportError::parse(1, format!("missing required column '{}'", name)))
        };

        Ok(Self {
            date: lookup("date")?,
            description: lookup("description")?,
            category: lookup("category")?,
            flow_type: lookup("type")?,
            amount: lookup("amount")?,
            balance: lookup("balance")?,
            destination: lookup("destination")?,
        })
    }
}

/// Load all transactions from a CSV file
///
/// The file is read in full and closed before parsing, so any I/O failure
/// (missing file, a directory, a failed read) is reported as
/// [`ReportError::InputNotFound`] rather than as a row error.
pub fn load_transactions(path: impl AsRef<Path>) -> ReportResult<Vec<TransactionRecord>> {
    let path = path.as_ref();
    let contents = fs::read(path).map_err(|e| ReportError::input_not_found(path, e))?;
    debug!("Read {} bytes from {}", contents.len(), path.display());

    let records = parse_transactions(contents.as_slice())?;
    info!("Loaded {} transactions from {}", records.len(), path.display());
    Ok(records)
}

/// Parse transactions from any CSV reader
pub fn parse_transactions<R: Read>(reader: R) -> ReportResult<Vec<TransactionRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let mapping = ColumnMapping::from_headers(&headers)?;
    debug!("Resolved column mapping: {:?}", mapping);

    // Every report total is a partial sum of these non-negative amounts, so
    // keeping the grand total in range keeps all of them in range.
    let mut ledger_total = Money::zero();

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let txn = parse_record(&record, line, &mapping)?;
        ledger_total = ledger_total.checked_add(txn.amount).ok_or_else(|| {
            ReportError::parse(
                line,
                format!("amount: '{}' takes the ledger total out of range", txn.amount.value()),
            )
        })?;

        trace!("Line {}: {}", line, txn);
        records.push(txn);
    }

    Ok(records)
}

/// Parse a single CSV record
fn parse_record(
    record: &StringRecord,
    line: u64,
    mapping: &ColumnMapping,
) -> ReportResult<TransactionRecord> {
    let field = |idx: usize, name: &str| -> ReportResult<String> {
        record
            .get(idx)
            .map(|s| s.trim().to_string())
            .ok_or_else(|| ReportError::parse(line, format!("missing field '{}'", name)))
    };

    let date_str = field(mapping.date, "date")?;
    let date = NaiveDate::parse_from_str(&date_str, DATE_FORMAT).map_err(|_| {
        ReportError::parse(
            line,
            format!("date: '{}' does not match YYYY-MM-DD", date_str),
        )
    })?;

    let type_str = field(mapping.flow_type, "type")?;
    let flow_type = FlowType::parse(&type_str).ok_or_else(|| {
        ReportError::parse(
            line,
            format!("type: '{}' is neither credit nor debit", type_str),
        )
    })?;

    let amount = parse_amount(&field(mapping.amount, "amount")?, "amount", line)?;
    if amount.is_negative() {
        return Err(ReportError::parse(
            line,
            format!("amount: '{}' must not be negative", amount.value()),
        ));
    }
    let balance = parse_amount(&field(mapping.balance, "balance")?, "balance", line)?;

    Ok(TransactionRecord {
        date,
        description: field(mapping.description, "description")?,
        category: field(mapping.category, "category")?,
        flow_type,
        amount,
        balance,
        counterparty: field(mapping.destination, "destination")?,
    })
}

fn parse_amount(s: &str, column: &str, line: u64) -> ReportResult<Money> {
    Money::parse(s).map_err(|e| ReportError::parse(line, format!("{}: {}", column, e)))
}
