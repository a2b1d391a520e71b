use crate::domain::{
    entities::ClassModel,
    error::DomainError,
};

/// Centralized whole-model validation.
///
/// The mutation API keeps a model consistent call by call; this facade
/// re-checks the aggregate as a unit. Importers run it before handing a
/// populated model to callers, and property tests use it to assert that no
/// operation sequence can leave the model inconsistent.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_model(model: &ClassModel) -> Result<(), DomainError> {
        // Every alias/exclusion reference must still name a registered trait.
        for alias in model.composition().aliases() {
            Self::require_trait(model, alias.reference().trait_name())?;
        }
        for exclusion in model.composition().exclusions() {
            Self::require_trait(model, exclusion.reference().trait_name())?;
        }

        // Alias targets share the method name space.
        for alias in model.composition().aliases() {
            let target = alias.alias();
            if model
                .methods()
                .iter()
                .any(|m| m.name().eq_ignore_ascii_case(target))
            {
                return Err(DomainError::DuplicateMember {
                    kind: "method",
                    name: target.to_string(),
                });
            }
        }

        // Constants carry literal values only.
        for constant in model.constants() {
            if constant.default_value().is_some_and(|v| !v.is_literal()) {
                return Err(DomainError::InvalidValue {
                    name: constant.name().to_string(),
                });
            }
        }

        Ok(())
    }

    fn require_trait(model: &ClassModel, name: &str) -> Result<(), DomainError> {
        if model.has_trait(name) {
            Ok(())
        } else {
            Err(DomainError::UnknownTrait {
                name: name.to_string(),
            })
        }
    }
}
