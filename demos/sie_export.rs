//! Convert a CSV or spreadsheet file to SIE text on stdout.
//!
//! ```text
//! RUST_LOG=debug cargo run --example sie_export --features xlsx -- bank.csv "Acme AB"
//! ```

use bokfora::sie::{SieConfigBuilder, convert};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: sie_export <file.csv|file.xlsx> [company name]");
        std::process::exit(2);
    };
    let company = args.next().unwrap_or_else(|| "Demo AB".into());

    let bytes = std::fs::read(&path).expect("read input file");
    let config = SieConfigBuilder::new(company)
        .format_variant("sie4")
        .declare_accounts(true)
        .build();

    match convert(&path, &bytes, &config) {
        Ok(conversion) => {
            println!("{}", conversion.text);
            eprintln!(
                "{} vouchers, {} skipped rows, encoding {}",
                conversion.vouchers,
                conversion.skipped.len(),
                conversion.encoding
            );
            for row in &conversion.skipped {
                eprintln!("  {row}");
            }
        }
        Err(e) => {
            eprintln!("conversion failed: {e}");
            std::process::exit(1);
        }
    }
}
