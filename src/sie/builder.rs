//! SIE document generation.

use chrono::{Datelike, Local, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};

use super::SieConfig;
use crate::core::{AccountEntry, TransactionRecord};

/// Program name written to `#PROGRAM` and `#GEN`.
pub const PROGRAM_NAME: &str = "bokfora";

/// Currency code written to `#VALUTA`. Not configurable.
pub const CURRENCY: &str = "SEK";

const TRANSFER_FORMAT: &str = "PC8";
const END_MARKER: &str = "#END";

/// Append-only builder for one SIE document.
///
/// The header block is written on construction. Accounts and vouchers are
/// appended in call order, and [`build`](Self::build) consumes the builder,
/// so a document can only be rendered once:
///
/// ```compile_fail
/// use bokfora::sie::InterchangeBuilder;
///
/// let builder = InterchangeBuilder::new("sie4", "UTF-8", "Acme");
/// let first = builder.build();
/// let second = builder.build();
/// ```
#[derive(Debug)]
pub struct InterchangeBuilder {
    lines: Vec<String>,
    format_variant: String,
    encoding: String,
    company_name: String,
}

impl InterchangeBuilder {
    /// Start a document generated today (local time).
    pub fn new(
        format_variant: &str,
        encoding: impl Into<String>,
        company_name: impl Into<String>,
    ) -> Self {
        Self::new_on(format_variant, encoding, company_name, Local::now().date_naive())
    }

    /// Start a document with a fixed generation date.
    ///
    /// The fiscal year (`#RAR 0`) is the calendar year of `generated`.
    pub fn new_on(
        format_variant: &str,
        encoding: impl Into<String>,
        company_name: impl Into<String>,
        generated: NaiveDate,
    ) -> Self {
        let mut builder = Self {
            lines: Vec::new(),
            format_variant: strip_variant_prefix(format_variant).to_string(),
            encoding: encoding.into(),
            company_name: company_name.into(),
        };
        builder.write_header(generated);
        builder
    }

    /// Start a document from a [`SieConfig`].
    pub fn from_config(config: &SieConfig) -> Self {
        let generated = config
            .generated_on
            .unwrap_or_else(|| Local::now().date_naive());
        Self::new_on(
            &config.format_variant,
            config.encoding.clone(),
            config.company_name.clone(),
            generated,
        )
    }

    fn write_header(&mut self, generated: NaiveDate) {
        let year = generated.year();
        let program = quote(PROGRAM_NAME);

        self.lines.push("#FLAGGA 0".into());
        self.lines.push(format!("#PROGRAM {program} {}", env!("CARGO_PKG_VERSION")));
        self.lines.push(format!("#FORMAT {TRANSFER_FORMAT}"));
        self.lines.push(format!("#GEN {} {program}", generated.format("%Y%m%d")));
        self.lines.push(format!("#SIETYP {}", self.format_variant));
        self.lines.push(format!("#FNAMN {}", quote(&self.company_name)));
        self.lines.push(format!("#RAR 0 {year:04}0101 {year:04}1231"));
        self.lines.push(format!("#VALUTA {CURRENCY}"));
    }

    /// Declare an account. Duplicates are written as given.
    pub fn add_account(&mut self, number: &str, name: &str) {
        self.lines.push(format!("#KONTO {number} {}", quote(name)));
    }

    /// Declare an [`AccountEntry`].
    pub fn add_account_entry(&mut self, entry: &AccountEntry) {
        self.add_account(&entry.number, &entry.name);
    }

    /// Append a voucher holding a single transaction line.
    ///
    /// The account does not have to be declared first.
    pub fn add_transaction(
        &mut self,
        voucher: u64,
        date: &str,
        account: &str,
        amount: Decimal,
        description: &str,
    ) {
        self.lines.push(format!("#VER {voucher} {date} {}", quote(description)));
        self.lines.push("{".into());
        self.lines.push(format!("#TRANS {account} {{}} {}", format_amount(amount)));
        self.lines.push("}".into());
    }

    /// Append a voucher for a parsed record.
    pub fn add_record(&mut self, voucher: u64, record: &TransactionRecord) {
        self.add_transaction(
            voucher,
            &record.date,
            &record.account,
            record.amount,
            &record.description,
        );
    }

    /// Format variant digits written to `#SIETYP`.
    pub fn format_variant(&self) -> &str {
        &self.format_variant
    }

    /// Encoding label supplied at construction.
    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    /// Company name supplied at construction.
    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    /// Number of lines written so far, excluding the terminator.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Terminate the document and render it.
    ///
    /// Lines are joined with `\n`; there is no trailing newline.
    pub fn build(mut self) -> String {
        self.lines.push(END_MARKER.into());
        self.lines.join("\n")
    }
}

/// Strip any non-digit prefix: `"sie4"` becomes `"4"`.
pub fn strip_variant_prefix(variant: &str) -> &str {
    variant.trim_start_matches(|c: char| !c.is_ascii_digit())
}

/// Fixed-point amount with exactly two decimals and `.` as separator.
fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}

/// Double-quote a field, escaping `"` and `\`. Line breaks become spaces.
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\r' | '\n' => out.push(' '),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
