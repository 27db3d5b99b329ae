//! Keyed row objects, as produced by decoding a spreadsheet sheet.
//!
//! A row is kept when `Date`, `Account` and `Amount` are all present and
//! truthy. Key names are case-sensitive.

use serde_json::Value;

use crate::core::{ExportError, SkipReason, SkippedRow, TransactionRecord};

use super::{ParseOptions, ParseOutcome, parse_amount};

/// One loosely-typed row keyed by column header.
pub type RowObject = serde_json::Map<String, Value>;

/// Parse row objects leniently, keeping only complete rows.
pub fn parse_row_objects(rows: &[RowObject]) -> Vec<TransactionRecord> {
    // Lenient parsing has no failure path.
    parse_row_objects_with(rows, &ParseOptions::default())
        .map(|outcome| outcome.records)
        .unwrap_or_default()
}

/// Parse row objects, reporting dropped rows by 1-based index.
///
/// `skip_header` does not apply to keyed rows and is ignored.
pub fn parse_row_objects_with(
    rows: &[RowObject],
    options: &ParseOptions,
) -> Result<ParseOutcome, ExportError> {
    parse_numbered_rows(rows.iter().enumerate().map(|(i, row)| (i + 1, row)), options)
}

pub(crate) fn parse_numbered_rows<'a>(
    rows: impl IntoIterator<Item = (usize, &'a RowObject)>,
    options: &ParseOptions,
) -> Result<ParseOutcome, ExportError> {
    let mut outcome = ParseOutcome::default();
    for (line, row) in rows {
        match parse_row(row) {
            Ok(record) => outcome.records.push(record),
            Err(reason) => outcome.skip(SkippedRow::new(line, reason), options)?,
        }
    }
    Ok(outcome)
}

fn parse_row(row: &RowObject) -> Result<TransactionRecord, SkipReason> {
    let date = required(row, "Date")?;
    let account = required(row, "Account")?;
    let amount_value = truthy_field(row, "Amount")?;
    let amount = match amount_value {
        Value::Number(n) => parse_amount(&n.to_string()),
        Value::String(s) => parse_amount(s),
        _ => None,
    }
    .ok_or_else(|| SkipReason::InvalidAmount(text(amount_value)))?;
    let description = row
        .get("Description")
        .filter(|v| is_truthy(v))
        .map(text)
        .unwrap_or_default();

    Ok(TransactionRecord {
        date,
        account,
        amount,
        description,
    })
}

fn truthy_field<'a>(row: &'a RowObject, key: &'static str) -> Result<&'a Value, SkipReason> {
    row.get(key)
        .filter(|v| is_truthy(v))
        .ok_or(SkipReason::MissingField(key))
}

fn required(row: &RowObject, key: &'static str) -> Result<String, SkipReason> {
    let value = text(truthy_field(row, key)?);
    if value.is_empty() {
        return Err(SkipReason::MissingField(key));
    }
    Ok(value)
}

/// Falsy values are null, `false`, zero, and the empty string.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                (f as i64).to_string()
            }
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}
