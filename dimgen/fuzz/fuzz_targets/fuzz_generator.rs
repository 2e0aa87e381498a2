#![no_main]

use dimgen::{parse, Generator, GeneratorLimits};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let code = format!("system Fuzz\nunits Meter\nsymbols m\nconstants meter\n{}\n", s);
        if let Ok(definitions) = parse(&code, None, &GeneratorLimits::default()) {
            let generator = Generator::new();
            for definition in &definitions {
                let _ = generator.generate(definition);
            }
        }
    }
});
