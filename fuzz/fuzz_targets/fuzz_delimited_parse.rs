#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Lenient parsing must never fail and must account for every line.
        let outcome =
            bokfora::tabular::parse_delimited_text_with(s, &Default::default()).unwrap();
        let non_blank = s.lines().filter(|l| !l.trim().is_empty()).count();
        assert_eq!(outcome.records.len() + outcome.skipped.len(), non_blank);
    }
});
