#![cfg(feature = "core")]

use bokfora::core::*;
use bokfora::sie::*;
use chrono::NaiveDate;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn acme_document() -> String {
    let mut builder = InterchangeBuilder::new_on("sie4", "UTF-8", "Acme", date(2024, 6, 15));
    builder.add_account("1910", "Kassa");
    builder.add_transaction(1, "20240101", "1910", dec!(150.5), "Sale");
    builder.build()
}

#[test]
fn acme_end_to_end_lines() {
    let doc = acme_document();
    let program = format!("#PROGRAM \"bokfora\" {}", env!("CARGO_PKG_VERSION"));
    let lines: Vec<&str> = doc.split('\n').collect();
    assert_eq!(
        lines,
        vec![
            "#FLAGGA 0",
            program.as_str(),
            "#FORMAT PC8",
            "#GEN 20240615 \"bokfora\"",
            "#SIETYP 4",
            "#FNAMN \"Acme\"",
            "#RAR 0 20240101 20241231",
            "#VALUTA SEK",
            "#KONTO 1910 \"Kassa\"",
            "#VER 1 20240101 \"Sale\"",
            "{",
            "#TRANS 1910 {} 150.50",
            "}",
            "#END",
        ]
    );
}

#[test]
fn acme_snapshot() {
    let doc = acme_document().replace(env!("CARGO_PKG_VERSION"), "[version]");
    insta::assert_snapshot!(doc, @r##"
    #FLAGGA 0
    #PROGRAM "bokfora" [version]
    #FORMAT PC8
    #GEN 20240615 "bokfora"
    #SIETYP 4
    #FNAMN "Acme"
    #RAR 0 20240101 20241231
    #VALUTA SEK
    #KONTO 1910 "Kassa"
    #VER 1 20240101 "Sale"
    {
    #TRANS 1910 {} 150.50
    }
    #END
    "##);
}

#[test]
fn today_header_uses_current_year() {
    use chrono::Datelike;

    let today = chrono::Local::now().date_naive();
    let doc = InterchangeBuilder::new("sie5", "UTF-8", "Acme").build();
    let year = today.year();
    assert!(doc.contains("#SIETYP 5\n"));
    assert!(doc.contains(&format!("#RAR 0 {year}0101 {year}1231\n")));
}

#[test]
fn one_block_per_record_in_order() {
    let records = vec![
        TransactionRecord::new("20240101", "1910", dec!(100), "First"),
        TransactionRecord::new("20240102", "1930", dec!(-12.5), "Second"),
        TransactionRecord::new("20240103", "3001", dec!(0.1), "Third"),
    ];
    let mut builder = InterchangeBuilder::new_on("sie4", "UTF-8", "Acme", date(2024, 1, 1));
    let mut seq = VoucherSequence::new();
    for record in &records {
        builder.add_record(seq.next(), record);
    }
    let doc = builder.build();
    let lines: Vec<&str> = doc.split('\n').collect();

    // 8 header lines, 4 per voucher, terminator
    assert_eq!(lines.len(), 8 + 4 * records.len() + 1);
    for (i, record) in records.iter().enumerate() {
        let block = &lines[8 + 4 * i..8 + 4 * (i + 1)];
        assert_eq!(
            block[0],
            format!("#VER {} {} \"{}\"", i + 1, record.date, record.description)
        );
        assert_eq!(block[1], "{");
        assert!(block[2].starts_with(&format!("#TRANS {} {{}} ", record.account)));
        assert_eq!(block[3], "}");
    }
    assert!(lines[10].ends_with(" 100.00"));
    assert!(lines[14].ends_with(" -12.50"));
    assert!(lines[18].ends_with(" 0.10"));
}

#[test]
fn undeclared_account_is_allowed() {
    let mut builder = InterchangeBuilder::new_on("sie4", "UTF-8", "Acme", date(2024, 1, 1));
    builder.add_transaction(1, "20240101", "9999", dec!(1), "");
    let doc = builder.build();
    assert!(doc.contains("#TRANS 9999 {} 1.00"));
    assert!(!doc.contains("#KONTO"));
    assert!(doc.contains("#VER 1 20240101 \"\""));
}

#[test]
fn quotes_in_names_are_escaped() {
    let mut builder =
        InterchangeBuilder::new_on("sie4", "UTF-8", "Acme \"Nordic\" AB", date(2024, 1, 1));
    builder.add_account("1910", "Kassa \"petty\"");
    builder.add_transaction(1, "20240101", "1910", dec!(1), "Line one\nline two");
    let doc = builder.build();
    assert!(doc.contains("#FNAMN \"Acme \\\"Nordic\\\" AB\""));
    assert!(doc.contains("#KONTO 1910 \"Kassa \\\"petty\\\"\""));
    assert!(doc.contains("#VER 1 20240101 \"Line one line two\""));
    // Still exactly one line per record
    assert_eq!(doc.split('\n').count(), 8 + 1 + 4 + 1);
}

#[test]
fn builder_from_config() {
    let config = SieConfigBuilder::new("Config AB")
        .format_variant("SIE5")
        .encoding("CP437")
        .generated_on(date(2025, 2, 3))
        .build();
    let builder = InterchangeBuilder::from_config(&config);
    assert_eq!(builder.format_variant(), "5");
    assert_eq!(builder.encoding(), "CP437");
    let doc = builder.build();
    assert!(doc.contains("#GEN 20250203 \"bokfora\""));
    assert!(doc.contains("#FNAMN \"Config AB\""));
}

#[test]
fn account_entry_helper() {
    let mut builder = InterchangeBuilder::new_on("sie4", "UTF-8", "Acme", date(2024, 1, 1));
    for entry in declare_accounts(&[TransactionRecord::new("20240101", "2440", dec!(-5), "")]) {
        builder.add_account_entry(&entry);
    }
    assert!(builder.build().contains("#KONTO 2440 \"Leverantörsskulder\""));
}
