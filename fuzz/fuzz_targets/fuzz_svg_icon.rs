#![no_main]

use libfuzzer_sys::fuzz_target;
use servicepack::{ContentValidator, EntityName, ParsedEntity, SvgIconValidator};

fuzz_target!(|data: &[u8]| {
    if let Ok(markup) = std::str::from_utf8(data) {
        let Ok(name) = EntityName::new("fuzz") else {
            return;
        };
        let entity = ParsedEntity::new(name, serde_json::json!({ "icon_svg": markup }));
        let _ = SvgIconValidator::new().validate(&[entity]);
    }
});
