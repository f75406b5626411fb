#![no_main]

use kuruma::data::WMI_TABLE;
use kuruma::vin::{VinDecoder, expected_check_character, is_valid_vin};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Malformed input must come back as None, never a panic.
        let _ = is_valid_vin(s);
        let _ = expected_check_character(s);
        let _ = VinDecoder::new(WMI_TABLE, 2024).decode(s);
    }
});
