#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Must not panic; errors are fine.
    let config = bokfora::sie::SieConfig::default();
    if let Ok(conversion) = bokfora::sie::convert("fuzz.csv", data, &config) {
        assert!(conversion.text.ends_with("#END"));
    }
    let _ = bokfora::sie::convert("fuzz.xlsx", data, &config);
});
