//! ContentValidator port - domain checks over the whole collection
//!
//! Runs once, after every source has parsed and before anything is written.
//! Any returned violation blocks the write.

use crate::domain::entities::ParsedEntity;
use crate::error::ContentViolation;

/// Inspects the parsed collection for invalid domain content
pub trait ContentValidator {
    /// Return every violation found, or `Ok(())` if the collection is clean.
    fn validate(&self, entities: &[ParsedEntity]) -> Result<(), Vec<ContentViolation>>;
}

impl<F> ContentValidator for F
where
    F: Fn(&[ParsedEntity]) -> Result<(), Vec<ContentViolation>>,
{
    fn validate(&self, entities: &[ParsedEntity]) -> Result<(), Vec<ContentViolation>> {
        self(entities)
    }
}

/// Validator that accepts everything (`--no-validate`)
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl ContentValidator for AcceptAll {
    fn validate(&self, _entities: &[ParsedEntity]) -> Result<(), Vec<ContentViolation>> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::EntityName;
    use serde_json::json;

    #[test]
    fn closures_are_validators() {
        let reject_all = |entities: &[ParsedEntity]| -> Result<(), Vec<ContentViolation>> {
            Err(entities
                .iter()
                .map(|e| ContentViolation::new(e.name(), "id", "rejected"))
                .collect())
        };
        let entities = vec![ParsedEntity::new(
            EntityName::new("a").unwrap(),
            json!({"id": "a"}),
        )];

        let violations = reject_all.validate(&entities).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].entity.as_str(), "a");
    }

    #[test]
    fn accept_all_accepts() {
        assert!(AcceptAll.validate(&[]).is_ok());
    }
}
