use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One normalized transaction row, ready to become a voucher.
///
/// `date` is passed through verbatim; its format is whatever the source
/// file used. `account` does not need to be declared in the chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Date token, non-empty.
    pub date: String,
    /// Account code.
    pub account: String,
    /// Signed amount.
    pub amount: Decimal,
    /// Free text, empty when the source had none.
    #[serde(default)]
    pub description: String,
}

impl TransactionRecord {
    /// Create a record.
    pub fn new(
        date: impl Into<String>,
        account: impl Into<String>,
        amount: Decimal,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            account: account.into(),
            amount,
            description: description.into(),
        }
    }
}

/// A chart-of-accounts declaration. Duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountEntry {
    /// Account number, emitted unquoted.
    pub number: String,
    /// Display name, emitted quoted.
    pub name: String,
}

impl AccountEntry {
    /// Create an account entry.
    pub fn new(number: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            name: name.into(),
        }
    }
}
