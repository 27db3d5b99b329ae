//! # bokfora
//!
//! Turns tabular transaction files (CSV text or spreadsheets) into a
//! simplified SIE bookkeeping interchange document.
//!
//! All amounts use [`rust_decimal::Decimal`], never floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use bokfora::sie::{SieConfigBuilder, convert};
//!
//! let config = SieConfigBuilder::new("Acme").declare_accounts(true).build();
//! let csv = "20240101;1910;150.50;Sale\n20240102,1930,-20,Fee\nbroken line\n";
//!
//! let conversion = convert("bank.csv", csv.as_bytes(), &config).unwrap();
//! assert_eq!(conversion.vouchers, 2);
//! assert_eq!(conversion.skipped.len(), 1);
//! assert!(conversion.text.contains("#KONTO 1910 \"Kassa\""));
//! assert!(conversion.text.ends_with("#END"));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Record types, delimited/row parsing, SIE builder |
//! | `xlsx` | Spreadsheet input (xlsx, xls, ods) via calamine |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod tabular;

#[cfg(feature = "core")]
pub mod sie;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
