use bokfora::core::VoucherSequence;
use bokfora::sie::{InterchangeBuilder, account_by_name};
use bokfora::tabular::parse_delimited_text;

fn main() {
    let csv = "\
20240301;1930;-499.00;Bredband mars
20240305;1930;12500.00;Faktura 1001
20240310,1910,-89.50,Kontorsmaterial
";
    let records = parse_delimited_text(csv);

    let mut builder = InterchangeBuilder::new("sie4", "UTF-8", "Demo AB");
    builder.add_account("1910", "Kassa");
    builder.add_account("1930", "Företagskonto");

    let mut vouchers = VoucherSequence::new();
    for record in &records {
        builder.add_record(vouchers.next(), record);
    }

    println!("=== SIE document ({} vouchers) ===", vouchers.issued());
    println!("{}", builder.build());

    println!("\nBAS accounts matching 'moms':");
    for acc in account_by_name("moms") {
        println!("  {} {}", acc.number, acc.name);
    }
}
