//! Conversion configuration.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::tabular::ParseOptions;

/// Parameters for one SIE conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SieConfig {
    /// Format variant identifier, e.g. "sie4". Non-digit prefix is stripped.
    pub format_variant: String,
    /// Character-encoding label handed back with the document. No
    /// transcoding happens; the text is always a Rust `String`.
    pub encoding: String,
    /// Company display name for the `#FNAMN` line.
    pub company_name: String,
    /// Emit `#KONTO` lines for every account the records post to.
    pub declare_accounts: bool,
    /// Pin the generation date. Today's local date when `None`.
    pub generated_on: Option<NaiveDate>,
    /// Tabular parsing switches.
    pub parse: ParseOptions,
}

impl Default for SieConfig {
    fn default() -> Self {
        Self {
            format_variant: "sie4".into(),
            encoding: "UTF-8".into(),
            company_name: String::new(),
            declare_accounts: false,
            generated_on: None,
            parse: ParseOptions::default(),
        }
    }
}

/// Builder for [`SieConfig`].
///
/// # Example
///
/// ```
/// use bokfora::sie::SieConfigBuilder;
///
/// let config = SieConfigBuilder::new("Acme AB")
///     .format_variant("sie4")
///     .encoding("CP437")
///     .declare_accounts(true)
///     .build();
/// assert_eq!(config.company_name, "Acme AB");
/// ```
pub struct SieConfigBuilder {
    config: SieConfig,
}

impl SieConfigBuilder {
    /// Create a new builder for the given company.
    pub fn new(company_name: impl Into<String>) -> Self {
        Self {
            config: SieConfig {
                company_name: company_name.into(),
                ..Default::default()
            },
        }
    }

    /// Set the format variant (e.g. "sie4", "sie5").
    pub fn format_variant(mut self, variant: impl Into<String>) -> Self {
        self.config.format_variant = variant.into();
        self
    }

    /// Set the encoding label.
    pub fn encoding(mut self, label: impl Into<String>) -> Self {
        self.config.encoding = label.into();
        self
    }

    /// Declare referenced accounts from the BAS table.
    pub fn declare_accounts(mut self, declare: bool) -> Self {
        self.config.declare_accounts = declare;
        self
    }

    /// Pin the `#GEN` date and fiscal year.
    pub fn generated_on(mut self, date: NaiveDate) -> Self {
        self.config.generated_on = Some(date);
        self
    }

    /// Drop the first non-blank line of delimited input.
    pub fn skip_header(mut self, skip: bool) -> Self {
        self.config.parse.skip_header = skip;
        self
    }

    /// Fail on malformed rows instead of skipping them.
    pub fn strict(mut self, strict: bool) -> Self {
        self.config.parse.strict = strict;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> SieConfig {
        self.config
    }
}
