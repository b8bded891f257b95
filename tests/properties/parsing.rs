//! Property tests for source parsing and icon validation.

use proptest::prelude::*;
use serde_json::json;

use servicepack::{parse_source, ContentValidator, EntityName, ParsedEntity, SvgIconValidator};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: parsing arbitrary text never panics.
    #[test]
    fn property_parse_source_never_panics(input in "\\PC{0,200}") {
        let _ = parse_source(&input);
    }

    /// PROPERTY: a parsed document is never null.
    #[test]
    fn property_parse_source_rejects_null(input in "[ \\n#a-z:~-]{0,40}") {
        if let Ok(value) = parse_source(&input) {
            prop_assert!(!value.is_null());
        }
    }

    /// PROPERTY: icon validation never panics and always names the entity.
    #[test]
    fn property_svg_validation_never_panics(icon in "\\PC{0,120}") {
        let entity = ParsedEntity::new(
            EntityName::new("svc").unwrap(),
            json!({ "icon_svg": icon }),
        );
        if let Err(violations) = SvgIconValidator::new().validate(&[entity]) {
            prop_assert!(violations.iter().all(|v| v.entity.as_str() == "svc"));
        }
    }
}
