//! BAS chart of accounts excerpt.
//!
//! Only the accounts a small business typically posts to are listed. Used to
//! name accounts that a transaction file references without declaring.

use std::collections::HashSet;

use serde::Serialize;

use crate::core::{AccountEntry, TransactionRecord};

/// A named account from the built-in BAS table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NamedAccount {
    /// Account number.
    pub number: &'static str,
    /// Swedish account name (e.g. "Kassa").
    pub name: &'static str,
}

const fn bas(number: &'static str, name: &'static str) -> NamedAccount {
    NamedAccount { number, name }
}

const BAS_ACCOUNTS: &[NamedAccount] = &[
    bas("1510", "Kundfordringar"),
    bas("1630", "Skattekonto"),
    bas("1910", "Kassa"),
    bas("1920", "PlusGiro"),
    bas("1930", "Företagskonto"),
    bas("1940", "Övriga bankkonton"),
    bas("2010", "Eget kapital"),
    bas("2081", "Aktiekapital"),
    bas("2091", "Balanserad vinst eller förlust"),
    bas("2099", "Årets resultat"),
    bas("2440", "Leverantörsskulder"),
    bas("2610", "Utgående moms, 25 %"),
    bas("2620", "Utgående moms, 12 %"),
    bas("2630", "Utgående moms, 6 %"),
    bas("2640", "Ingående moms"),
    bas("2650", "Redovisningskonto för moms"),
    bas("2710", "Personalskatt"),
    bas("2731", "Avräkning lagstadgade sociala avgifter"),
    bas("3001", "Försäljning inom Sverige, 25 % moms"),
    bas("3002", "Försäljning inom Sverige, 12 % moms"),
    bas("3003", "Försäljning inom Sverige, 6 % moms"),
    bas("3004", "Försäljning inom Sverige, momsfri"),
    bas("3740", "Öres- och kronutjämning"),
    bas("4010", "Inköp material och varor"),
    bas("5010", "Lokalhyra"),
    bas("5410", "Förbrukningsinventarier"),
    bas("5460", "Förbrukningsmaterial"),
    bas("5611", "Drivmedel för personbilar"),
    bas("5800", "Resekostnader"),
    bas("6071", "Representation, avdragsgill"),
    bas("6110", "Kontorsmateriel"),
    bas("6212", "Mobiltelefon"),
    bas("6230", "Datakommunikation"),
    bas("6570", "Bankkostnader"),
    bas("7010", "Löner till kollektivanställda"),
    bas("7210", "Löner till tjänstemän"),
    bas("7510", "Arbetsgivaravgifter"),
    bas("8310", "Ränteintäkter från omsättningstillgångar"),
    bas("8410", "Räntekostnader för långfristiga skulder"),
    bas("8999", "Årets resultat"),
];

/// Find accounts whose name contains `search` (case-insensitive).
pub fn account_by_name(search: &str) -> Vec<&'static NamedAccount> {
    let search_lower = search.to_lowercase();
    BAS_ACCOUNTS
        .iter()
        .filter(|a| a.name.to_lowercase().contains(&search_lower))
        .collect()
}

/// Look up an account by number.
pub fn account_by_number(number: &str) -> Option<&'static NamedAccount> {
    BAS_ACCOUNTS.iter().find(|a| a.number == number)
}

/// Declare every account the records post to, in order of first use.
///
/// Known BAS numbers get their standard name; anything else is named
/// `Konto <number>`.
pub fn declare_accounts(records: &[TransactionRecord]) -> Vec<AccountEntry> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter(|r| seen.insert(r.account.as_str()))
        .map(|r| match account_by_number(&r.account) {
            Some(known) => AccountEntry::new(known.number, known.name),
            None => AccountEntry::new(&r.account, format!("Konto {}", r.account)),
        })
        .collect()
}
