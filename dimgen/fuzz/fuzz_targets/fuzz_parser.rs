#![no_main]

use dimgen::{parse, GeneratorLimits};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = parse(s, Some("fuzz.units".to_string()), &GeneratorLimits::default());
    }
});
