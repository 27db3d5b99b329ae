//! Core record types, errors, and voucher numbering.
//!
//! These are the shapes shared by the tabular parser and the SIE
//! document builder.

mod error;
mod numbering;
mod types;

pub use error::*;
pub use numbering::*;
pub use types::*;
