//! Tabular input parsing.
//!
//! Normalizes delimited text and keyed row objects (decoded spreadsheet
//! rows) into [`TransactionRecord`]s. Parsing is lenient by default:
//! malformed rows are dropped and reported in [`ParseOutcome::skipped`]
//! instead of failing the whole document.
//!
//! # Example
//!
//! ```
//! use bokfora::tabular::parse_delimited_text;
//!
//! let records = parse_delimited_text("2024-01-01;1910;100.00;Cash sale\n\nshort;line\n");
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].account, "1910");
//! ```

mod delimited;
mod rows;
#[cfg(feature = "xlsx")]
mod spreadsheet;

use std::path::Path;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{ExportError, SkippedRow, TransactionRecord};

pub use delimited::{parse_delimited_text, parse_delimited_text_with};
pub use rows::{RowObject, parse_row_objects, parse_row_objects_with};
#[cfg(feature = "xlsx")]
pub use spreadsheet::read_spreadsheet;

/// Parsing switches. The defaults are lenient and headerless.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Drop the first non-blank line of delimited text.
    pub skip_header: bool,
    /// Fail on the first malformed row instead of skipping it.
    pub strict: bool,
}

/// Accepted records plus the rows that were dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOutcome {
    /// Records in input order.
    pub records: Vec<TransactionRecord>,
    /// Dropped rows in input order.
    pub skipped: Vec<SkippedRow>,
}

impl ParseOutcome {
    fn skip(&mut self, row: SkippedRow, options: &ParseOptions) -> Result<(), ExportError> {
        if options.strict {
            return Err(row.into_error());
        }
        self.skipped.push(row);
        Ok(())
    }
}

/// Kind of source container, derived from the upload's file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputKind {
    /// CSV or other delimited text.
    Delimited,
    /// Spreadsheet workbook (xlsx, xls, ods).
    Spreadsheet,
}

impl InputKind {
    /// Detect the input kind from a file extension (case-insensitive).
    pub fn from_file_name(name: &str) -> Result<Self, ExportError> {
        let ext = Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .ok_or_else(|| {
                ExportError::UnsupportedInputKind(format!("{name:?} has no file extension"))
            })?;
        match ext.as_str() {
            "csv" | "txt" => Ok(Self::Delimited),
            "xlsx" | "xlsm" | "xls" | "ods" => Ok(Self::Spreadsheet),
            other => Err(ExportError::UnsupportedInputKind(format!(".{other}"))),
        }
    }
}

/// Parse a raw upload of the given kind.
///
/// Delimited input must be UTF-8; a leading byte order mark is ignored.
pub fn parse_source(
    kind: InputKind,
    bytes: &[u8],
    options: &ParseOptions,
) -> Result<ParseOutcome, ExportError> {
    match kind {
        InputKind::Delimited => {
            let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
            let content = std::str::from_utf8(bytes)
                .map_err(|e| ExportError::Format(format!("input is not valid UTF-8: {e}")))?;
            parse_delimited_text_with(content, options)
        }
        #[cfg(feature = "xlsx")]
        InputKind::Spreadsheet => {
            let numbered = spreadsheet::read_numbered_rows(bytes)?;
            rows::parse_numbered_rows(numbered.iter().map(|(line, row)| (*line, row)), options)
        }
        #[cfg(not(feature = "xlsx"))]
        InputKind::Spreadsheet => Err(ExportError::UnsupportedInputKind(
            "spreadsheet input requires the `xlsx` feature".into(),
        )),
    }
}

/// Parse an amount token. Accepts plain and scientific notation.
pub(crate) fn parse_amount(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}
