//! Delimited text (CSV) parsing.
//!
//! Fields are positional: date, account, amount, optional description.
//! The delimiter is detected per line, so a file that mixes `;` and `,`
//! lines is read line by line with whichever delimiter each line uses.

use crate::core::{ExportError, SkipReason, SkippedRow, TransactionRecord};

use super::{ParseOptions, ParseOutcome, parse_amount};

/// Parse delimited text leniently, keeping only well-formed lines.
///
/// Every non-blank line is data; there is no header detection.
pub fn parse_delimited_text(content: &str) -> Vec<TransactionRecord> {
    // Lenient parsing has no failure path.
    parse_delimited_text_with(content, &ParseOptions::default())
        .map(|outcome| outcome.records)
        .unwrap_or_default()
}

/// Parse delimited text, reporting dropped lines.
///
/// In strict mode the first malformed line fails the whole parse with
/// [`ExportError::Validation`].
pub fn parse_delimited_text_with(
    content: &str,
    options: &ParseOptions,
) -> Result<ParseOutcome, ExportError> {
    let mut outcome = ParseOutcome::default();
    let mut header_pending = options.skip_header;

    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        if header_pending {
            header_pending = false;
            continue;
        }
        match parse_line(line) {
            Ok(record) => outcome.records.push(record),
            Err(reason) => outcome.skip(SkippedRow::new(idx + 1, reason), options)?,
        }
    }

    Ok(outcome)
}

fn parse_line(line: &str) -> Result<TransactionRecord, SkipReason> {
    let fields = split_fields(line);
    if fields.len() < 3 {
        return Err(SkipReason::TooFewFields(fields.len()));
    }

    let date = required(&fields[0], "date")?;
    let account = required(&fields[1], "account")?;
    let raw_amount = required(&fields[2], "amount")?;
    let amount =
        parse_amount(&raw_amount).ok_or_else(|| SkipReason::InvalidAmount(raw_amount.clone()))?;
    let description = fields.get(3).cloned().unwrap_or_default();

    Ok(TransactionRecord {
        date,
        account,
        amount,
        description,
    })
}

fn required(field: &str, name: &'static str) -> Result<String, SkipReason> {
    if field.is_empty() {
        Err(SkipReason::MissingField(name))
    } else {
        Ok(field.to_string())
    }
}

/// Semicolon wins whenever the line contains one.
pub(crate) fn detect_delimiter(line: &str) -> u8 {
    if line.contains(';') { b';' } else { b',' }
}

fn split_fields(line: &str) -> Vec<String> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .delimiter(detect_delimiter(line))
        .from_reader(line.as_bytes());

    let mut record = csv::StringRecord::new();
    match reader.read_record(&mut record) {
        Ok(true) => record.iter().map(str::to_string).collect(),
        _ => Vec::new(),
    }
}
