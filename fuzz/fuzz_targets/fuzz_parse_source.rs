#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // A parsed source is never null and always renders back to JSON
        if let Ok(value) = servicepack::parse_source(content) {
            assert!(!value.is_null());
            let _ = serde_json::to_string(&value);
        }
    }
});
