#![no_main]

use libfuzzer_sys::fuzz_target;
use smooth_bezier::io::parse_knots;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = parse_knots(text);
    }
});
