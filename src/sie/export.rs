//! One-call conversion from an uploaded file to SIE text.

use log::{debug, info};

use super::{InterchangeBuilder, SieConfig, declare_accounts};
use crate::core::{ExportError, SkippedRow, TransactionRecord, VoucherSequence};
use crate::tabular::{InputKind, ParseOutcome, RowObject, parse_row_objects_with, parse_source};

/// A rendered document plus what the caller needs to deliver it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Complete document text, terminated by `#END`.
    pub text: String,
    /// Encoding label from the config, to attach when transmitting.
    pub encoding: String,
    /// Input rows that were dropped while parsing.
    pub skipped: Vec<SkippedRow>,
    /// Number of vouchers written.
    pub vouchers: u64,
}

/// Convert an uploaded file, choosing the parser from its extension.
///
/// Fails with [`ExportError::UnsupportedInputKind`] for unknown extensions
/// and [`ExportError::Format`] when the file cannot be read as a table.
pub fn convert(
    file_name: &str,
    bytes: &[u8],
    config: &SieConfig,
) -> Result<Conversion, ExportError> {
    let kind = InputKind::from_file_name(file_name)?;
    let outcome = parse_source(kind, bytes, &config.parse)?;
    Ok(finish(file_name, outcome, config))
}

/// Convert already-decoded spreadsheet rows.
pub fn convert_row_objects(
    rows: &[RowObject],
    config: &SieConfig,
) -> Result<Conversion, ExportError> {
    let outcome = parse_row_objects_with(rows, &config.parse)?;
    Ok(finish("row objects", outcome, config))
}

/// Render records as one voucher each, numbered from 1 in input order.
pub fn convert_records(records: &[TransactionRecord], config: &SieConfig) -> Conversion {
    let mut builder = InterchangeBuilder::from_config(config);
    if config.declare_accounts {
        for entry in declare_accounts(records) {
            builder.add_account_entry(&entry);
        }
    }

    let mut vouchers = VoucherSequence::new();
    for record in records {
        builder.add_record(vouchers.next(), record);
    }

    Conversion {
        text: builder.build(),
        encoding: config.encoding.clone(),
        skipped: Vec::new(),
        vouchers: vouchers.issued(),
    }
}

fn finish(source: &str, outcome: ParseOutcome, config: &SieConfig) -> Conversion {
    for row in &outcome.skipped {
        debug!("{source}: skipped {row}");
    }
    let mut conversion = convert_records(&outcome.records, config);
    info!(
        "{source}: wrote {} vouchers, skipped {} rows",
        conversion.vouchers,
        outcome.skipped.len()
    );
    conversion.skipped = outcome.skipped;
    conversion
}
