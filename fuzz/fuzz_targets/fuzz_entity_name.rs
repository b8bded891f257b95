#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        // Accepted names must stay inside the source directory
        if let Ok(name) = servicepack::EntityName::new(raw) {
            let path = name.source_path(std::path::Path::new("services"), "yml");
            assert_eq!(path.parent(), Some(std::path::Path::new("services")));
        }
    }
});
