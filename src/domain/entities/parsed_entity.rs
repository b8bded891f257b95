//! ParsedEntity - one service decoded from its source file

use serde_json::Value;

use crate::domain::value_objects::EntityName;

/// A service definition decoded from `<name>.<ext>`
///
/// The name is kept for diagnostics and tie-breaking; only the value is
/// serialized into the output document.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedEntity {
    name: EntityName,
    value: Value,
}

impl ParsedEntity {
    pub fn new(name: EntityName, value: Value) -> Self {
        Self { name, value }
    }

    pub fn name(&self) -> &EntityName {
        &self.name
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Look up a top-level field when the value is a mapping
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.value.as_object().and_then(|map| map.get(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn field_reads_top_level_keys() {
        let entity = ParsedEntity::new(
            EntityName::new("youtube").unwrap(),
            json!({"id": "youtube", "name": "YouTube"}),
        );
        assert_eq!(entity.field("name"), Some(&json!("YouTube")));
        assert_eq!(entity.field("missing"), None);
    }

    #[test]
    fn field_is_none_for_non_objects() {
        let entity = ParsedEntity::new(EntityName::new("list").unwrap(), json!([1, 2]));
        assert_eq!(entity.field("id"), None);
    }
}
