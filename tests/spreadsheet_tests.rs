#![cfg(feature = "xlsx")]

use bokfora::core::*;
use bokfora::sie::*;
use bokfora::tabular::*;
use chrono::NaiveDate;
use rust_decimal_macros::dec;
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};
use serde_json::Value;

/// Sheet layout (1-based rows):
/// 1 header, 2 numeric date/account, 3 blank, 4 date cell, 5 missing amount.
fn ledger_workbook() -> Vec<u8> {
    let mut workbook = Workbook::new();
    let date_format = Format::new().set_num_format("yyyy-mm-dd");
    {
        let sheet = workbook.add_worksheet();
        for (col, title) in ["Date", "Account", "Amount", "Description"].iter().enumerate() {
            sheet.write_string(0, col as u16, *title).unwrap();
        }

        sheet.write_number(1, 0, 20240101).unwrap();
        sheet.write_number(1, 1, 1910).unwrap();
        sheet.write_number(1, 2, 150.5).unwrap();
        sheet.write_string(1, 3, "Sale").unwrap();

        let jan_2 = ExcelDateTime::from_ymd(2024, 1, 2).unwrap();
        sheet.write_datetime_with_format(3, 0, &jan_2, &date_format).unwrap();
        sheet.write_number(3, 1, 1930).unwrap();
        sheet.write_number(3, 2, -20).unwrap();
        sheet.write_string(3, 3, "Fee").unwrap();

        sheet.write_number(4, 0, 20240103).unwrap();
        sheet.write_number(4, 1, 1930).unwrap();
        sheet.write_string(4, 3, "No amount").unwrap();
    }
    workbook.save_to_buffer().unwrap()
}

fn config() -> SieConfig {
    SieConfigBuilder::new("Acme")
        .declare_accounts(true)
        .generated_on(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
        .build()
}

#[test]
fn header_row_supplies_keys() {
    let rows = read_spreadsheet(&ledger_workbook()).unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].get("Account"), Some(&Value::from(1910)));
    assert_eq!(rows[0].get("Date"), Some(&Value::from(20240101)));
    assert_eq!(rows[1].get("Date"), Some(&Value::from("20240102")));
    assert_eq!(rows[2].get("Amount"), Some(&Value::Null));
}

#[test]
fn workbook_records_and_skipped_lines() {
    let outcome = parse_source(
        InputKind::Spreadsheet,
        &ledger_workbook(),
        &ParseOptions::default(),
    )
    .unwrap();
    assert_eq!(
        outcome.records,
        vec![
            TransactionRecord::new("20240101", "1910", dec!(150.5), "Sale"),
            TransactionRecord::new("20240102", "1930", dec!(-20), "Fee"),
        ]
    );
    assert_eq!(
        outcome.skipped,
        vec![SkippedRow::new(5, SkipReason::MissingField("Amount"))]
    );
}

#[test]
fn workbook_converts_with_plain_tokens() {
    let conversion = convert("ledger.xlsx", &ledger_workbook(), &config()).unwrap();
    let text = &conversion.text;

    assert_eq!(conversion.vouchers, 2);
    assert!(text.contains("#KONTO 1910 \"Kassa\""));
    assert!(text.contains("#KONTO 1930 \"Företagskonto\""));
    assert!(text.contains("#VER 1 20240101 \"Sale\"\n{\n#TRANS 1910 {} 150.50\n}"));
    assert!(text.contains("#VER 2 20240102 \"Fee\"\n{\n#TRANS 1930 {} -20.00\n}"));
    assert!(!text.contains("1910.0"));
    assert!(!text.contains("20240101.0"));
    assert_eq!(conversion.skipped.len(), 1);
    assert_eq!(conversion.skipped[0].line, 5);
}
