use thiserror::Error;

/// Errors that can abort a conversion.
///
/// Malformed individual rows are never reported here in lenient mode; they
/// are collected as [`SkippedRow`]s instead.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExportError {
    /// The source document cannot be read as tabular data at all.
    #[error("format error: {0}")]
    Format(String),

    /// The file extension or container has no parser.
    #[error("unsupported input kind: {0}")]
    UnsupportedInputKind(String),

    /// A row was rejected while parsing in strict mode.
    #[error("validation failed: {0}")]
    Validation(String),
}

/// Why a line or row was left out of the parsed records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Fewer than the three positional fields (date, account, amount).
    TooFewFields(usize),
    /// A required field is absent, empty, or falsy.
    MissingField(&'static str),
    /// The amount field is not a decimal number.
    InvalidAmount(String),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooFewFields(n) => write!(f, "expected at least 3 fields, found {n}"),
            Self::MissingField(name) => write!(f, "missing field {name}"),
            Self::InvalidAmount(raw) => write!(f, "amount {raw:?} is not a number"),
        }
    }
}

/// A single dropped input row with its 1-based position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// Source line (delimited text) or row number (row objects), 1-based.
    pub line: usize,
    /// Why the row was dropped.
    pub reason: SkipReason,
}

impl std::fmt::Display for SkippedRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.reason)
    }
}

impl SkippedRow {
    /// Create a skipped-row entry.
    pub fn new(line: usize, reason: SkipReason) -> Self {
        Self { line, reason }
    }

    /// Convert into the error raised for this row in strict mode.
    pub fn into_error(self) -> ExportError {
        ExportError::Validation(self.to_string())
    }
}
