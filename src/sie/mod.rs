//! SIE-style interchange export.
//!
//! Renders a simplified subset of the Swedish SIE bookkeeping format: a
//! fixed header block, `#KONTO` account declarations, one `#VER` voucher per
//! transaction, and a closing `#END`. Conformance with the full SIE standard
//! is not a goal.
//!
//! # Example
//!
//! ```
//! use bokfora::sie::InterchangeBuilder;
//! use rust_decimal::Decimal;
//!
//! let mut builder = InterchangeBuilder::new("sie4", "UTF-8", "Acme");
//! builder.add_account("1910", "Kassa");
//! builder.add_transaction(1, "20240101", "1910", Decimal::new(15050, 2), "Sale");
//! let text = builder.build();
//!
//! assert!(text.contains("#TRANS 1910 {} 150.50"));
//! assert!(text.ends_with("#END"));
//! ```

mod accounts;
mod builder;
mod config;
mod export;

pub use accounts::{NamedAccount, account_by_name, account_by_number, declare_accounts};
pub use builder::{CURRENCY, InterchangeBuilder, PROGRAM_NAME, strip_variant_prefix};
pub use config::{SieConfig, SieConfigBuilder};
pub use export::{Conversion, convert, convert_records, convert_row_objects};
