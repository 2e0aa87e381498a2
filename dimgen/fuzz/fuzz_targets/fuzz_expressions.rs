#![no_main]

use dimgen::{catalog, evaluate_dimension, format_dimension, Generator};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let Ok(spec) = Generator::new().validate(&catalog::cgs()) else {
            return;
        };
        if let Ok(dimension) = evaluate_dimension(&spec, s) {
            let _ = format_dimension(&spec, &dimension);
        }
    }
});
