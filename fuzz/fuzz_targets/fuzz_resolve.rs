#![no_main]

use chrono::NaiveDate;
use kuruma::Engine;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — unresolved identities are fine, panics are bugs.
        let engine =
            Engine::builtin().as_of(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        let _ = engine.resolve_and_infer(s, &["US", "DE"]);
        let _ = engine.resolve_and_infer(s, &[]);
    }
});
