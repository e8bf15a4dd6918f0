//! Validation of metadata going in and classes coming out.

use std::collections::HashSet;

use crate::diagnostic::GeneratorError;
use crate::ir::ControllerDefinition;
use crate::syntax::ClassDefinition;

/// Rejects metadata that breaks the discovery contract.
///
/// A nameless controller would produce an identifier like `Controller` in
/// checked-in code, so generation stops instead of guessing.
pub fn validate_controllers(controllers: &[ControllerDefinition]) -> Result<(), GeneratorError> {
    for (index, controller) in controllers.iter().enumerate() {
        if controller.name.trim().is_empty() {
            return Err(GeneratorError::MissingControllerName {
                index,
                area: controller.area.clone(),
            });
        }
    }
    Ok(())
}

/// Ensures no two classes share an identifier within the namespace.
pub fn validate_unique_classes(
    namespace: &str,
    classes: &[ClassDefinition],
) -> Result<(), GeneratorError> {
    let mut seen = HashSet::new();
    for class in classes {
        if !seen.insert(class.identifier().value()) {
            return Err(GeneratorError::DuplicateClass {
                identifier: class.identifier().to_string(),
                namespace: namespace.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::ClassBuilder;

    #[test]
    fn test_missing_name() {
        let controllers = vec![
            ControllerDefinition::new("Home"),
            ControllerDefinition::new("").with_area("Admin"),
        ];
        let err = validate_controllers(&controllers).unwrap_err();
        assert!(matches!(err, GeneratorError::MissingControllerName { index: 1, ref area } if area == "Admin"));
    }

    #[test]
    fn test_empty_collection_is_valid() {
        assert!(validate_controllers(&[]).is_ok());
    }

    #[test]
    fn test_duplicate_class() {
        let classes = vec![
            ClassBuilder::new("AdminAreaClass").build(),
            ClassBuilder::new("AdminAreaClass").build(),
        ];
        let err = validate_unique_classes("R4Mvc", &classes).unwrap_err();
        assert!(matches!(err, GeneratorError::DuplicateClass { .. }));
    }
}
