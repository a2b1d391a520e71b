// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for classgen.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! Rendering of members, methods, and docblocks is handled via ports
//! (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable-by-API entities**: every mutation goes through the
//!   aggregate's fallible operations; a failed call changes nothing
//! - **Rich domain model**: invariants live on the entities, not services
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod value;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    AliasSpec, ClassModel, DocBlock, DocTag, ExcludedTraits, ExclusionSpec, Member, MemberKind,
    MethodSpec, Parameter, TraitAlias, TraitComposition, TraitExclusion, TraitUsage, UseImport,
    NAMESPACE_SEPARATOR,
};

pub use error::{DomainError, ErrorCategory};

pub use value::ValueSpec;

pub use value_objects::{ClassModifier, MethodReference, Visibility};

pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    // ========================================================================
    // Value Object Tests
    // ========================================================================

    #[test]
    fn visibility_parses_correctly() {
        assert_eq!(Visibility::from_str("public").unwrap(), Visibility::Public);
        assert_eq!(
            Visibility::from_str("protected").unwrap(),
            Visibility::Protected
        );
        assert_eq!(
            Visibility::from_str("private").unwrap(),
            Visibility::Private
        );
        assert!(matches!(
            Visibility::from_str("friend"),
            Err(DomainError::InvalidVisibility { .. })
        ));
    }

    #[test]
    fn method_reference_parses_two_part_format() {
        let reference = MethodReference::from_str("myTrait::method").unwrap();
        assert_eq!(reference.trait_name(), "myTrait");
        assert_eq!(reference.method(), "method");
        assert_eq!(reference.to_string(), "myTrait::method");
    }

    #[test]
    fn method_reference_rejects_invalid_format() {
        for bad in ["method", "a::b::c", "::m", "t::", "::"] {
            assert!(
                matches!(
                    MethodReference::from_str(bad),
                    Err(DomainError::InvalidReferenceFormat { .. })
                ),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn class_modifier_keywords() {
        assert_eq!(ClassModifier::None.keyword(), "");
        assert_eq!(ClassModifier::Abstract.keyword(), "abstract ");
        assert_eq!(ClassModifier::Final.keyword(), "final ");
    }

    // ========================================================================
    // Literal Value Tests
    // ========================================================================

    #[test]
    fn literal_values_accept_scalars_and_nesting() {
        let value = ValueSpec::mapping([(
            "v1",
            ValueSpec::mapping([("v2", ValueSpec::from("v3"))]),
        )]);
        assert!(value.is_literal());
        assert!(ValueSpec::Null.is_literal());
        assert!(ValueSpec::sequence([1i64, 2, 3]).is_literal());
    }

    #[test]
    fn opaque_values_are_not_literal_even_when_nested() {
        let nested = ValueSpec::Sequence(vec![ValueSpec::Opaque("new \\stdClass()".into())]);
        assert!(!nested.is_literal());

        let deep = ValueSpec::mapping([("k", ValueSpec::Sequence(vec![ValueSpec::Opaque(
            "fopen('php://memory', 'r')".into(),
        )]))]);
        assert!(!deep.is_literal());
    }

    // ========================================================================
    // Identity: name and namespace derivation
    // ========================================================================

    #[test]
    fn name_accessors() {
        let model = ClassModel::new("TestClass").unwrap();
        assert_eq!(model.name(), "TestClass");
        assert_eq!(model.namespace(), None);
    }

    #[test]
    fn set_name_determines_namespace_segment() {
        let mut model = ClassModel::new("TestClass").unwrap();
        model.set_name("My\\Namespaced\\FunClass").unwrap();
        assert_eq!(model.namespace(), Some("My\\Namespaced"));
        assert_eq!(model.name(), "FunClass");
        assert_eq!(model.qualified_name(), "My\\Namespaced\\FunClass");
    }

    #[test]
    fn reset_name_rederives_namespace() {
        let mut model = ClassModel::new("My\\Namespaced\\FunClass").unwrap();
        model.set_name("Plain").unwrap();
        assert_eq!(model.namespace(), None);
        assert_eq!(model.name(), "Plain");
    }

    #[test]
    fn empty_name_is_rejected() {
        assert!(matches!(
            ClassModel::new(""),
            Err(DomainError::InvalidName { .. })
        ));
    }

    // ========================================================================
    // Inheritance and imports
    // ========================================================================

    #[test]
    fn extended_class_accessors() {
        let mut model = ClassModel::new("MyClass").unwrap();
        model.set_extended_class("ExtendedClass");
        assert_eq!(model.extended_class(), Some("ExtendedClass"));
    }

    #[test]
    fn empty_extended_class_normalizes_to_none() {
        let mut model = ClassModel::new("MyClass").unwrap();
        model.set_extended_class("ParentClass");
        model.set_extended_class("");
        assert_eq!(model.extended_class(), None);
    }

    #[test]
    fn implemented_interfaces_keep_order_and_duplicates() {
        let mut model = ClassModel::new("MyClass").unwrap();
        model.set_implemented_interfaces(["Iterator", "Traversable", "Iterator"]);
        assert_eq!(
            model.implemented_interfaces(),
            ["Iterator", "Traversable", "Iterator"]
        );
    }

    #[test]
    fn adding_one_use_twice_only_adds_one() {
        let mut model = ClassModel::new("My\\Class").unwrap();
        model.add_use("My\\First\\Use\\Class").unwrap();
        model.add_use("My\\First\\Use\\Class").unwrap();
        assert_eq!(model.uses().len(), 1);
    }

    #[test]
    fn use_alias_is_first_write_wins() {
        let mut model = ClassModel::new("My\\Class").unwrap();
        model
            .add_use_with_alias("My\\Second\\Use\\Class", "MyAlias")
            .unwrap();
        model
            .add_use_with_alias("My\\Second\\Use\\Class", "OtherAlias")
            .unwrap();

        assert_eq!(model.uses().len(), 1);
        assert_eq!(model.uses()[0].alias(), Some("MyAlias"));
    }

    #[test]
    fn use_without_alias_keeps_no_alias_on_rewrite() {
        let mut model = ClassModel::new("My\\Class").unwrap();
        model.add_use("My\\First\\Use\\Class").unwrap();
        model
            .add_use_with_alias("My\\First\\Use\\Class", "Late")
            .unwrap();
        assert_eq!(model.uses()[0].alias(), None);
    }

    // ========================================================================
    // Constants & properties: one shared name space
    // ========================================================================

    #[test]
    fn property_accessors() {
        let mut model = ClassModel::new("MyClass").unwrap();
        model
            .add_properties(["propOne", "propTwo"])
            .unwrap()
            .add_property("prop3")
            .unwrap();

        assert_eq!(model.properties().count(), 3);
        assert_eq!(model.get_property("propTwo").unwrap().name(), "propTwo");
    }

    #[test]
    fn duplicate_property_is_rejected() {
        let mut model = ClassModel::new("MyClass").unwrap();
        model.add_property("prop3").unwrap();

        assert!(matches!(
            model.add_property("prop3"),
            Err(DomainError::DuplicateMember { .. })
        ));
    }

    #[test]
    fn property_lookup_is_case_insensitive() {
        let mut model = ClassModel::new("MyClass").unwrap();
        model.add_property("propertyOne").unwrap();

        assert!(model.has_property("propertyOne"));
        assert!(model.has_property("PROPERTYONE"));

        model.remove_property("pRoPeRtYoNe");
        assert!(!model.has_property("propertyOne"));
    }

    #[test]
    fn can_add_constant() {
        let mut model = ClassModel::new("My\\Class").unwrap();
        model.add_constant("x", "value").unwrap();

        assert!(model.has_constant("x"));
        let constant = model.get_constant("x").unwrap();
        assert!(constant.is_constant());
        assert_eq!(constant.default_value(), Some(&ValueSpec::from("value")));
    }

    #[test]
    fn constant_accepts_mixed_scalars() {
        let mut model = ClassModel::new("MyClass").unwrap();
        model.add_constant("a", "v").unwrap();
        model.add_constant("b", 123i64).unwrap();
        model.add_constant("c", 123.456).unwrap();
        model.add_constant("d", ValueSpec::Sequence(vec![])).unwrap();
        model
            .add_constant("e", ValueSpec::mapping([("v1", "v2")]))
            .unwrap();
        model
            .add_constant(
                "f",
                ValueSpec::mapping([("v1", ValueSpec::mapping([("v2", "v3")]))]),
            )
            .unwrap();
        model.add_constant("g", ()).unwrap();

        assert_eq!(model.constants().count(), 7);
        assert_eq!(
            model.get_constant("b").unwrap().default_value(),
            Some(&ValueSpec::Int(123))
        );
        assert_eq!(
            model.get_constant("g").unwrap().default_value(),
            Some(&ValueSpec::Null)
        );
    }

    #[test]
    fn constant_rejects_opaque_value_and_stays_unchanged() {
        let mut model = ClassModel::new("MyClass").unwrap();

        let result = model.add_constant("a", ValueSpec::Opaque("new \\stdClass()".into()));
        assert!(matches!(result, Err(DomainError::InvalidValue { .. })));
        assert_eq!(model.constants().count(), 0);
    }

    #[test]
    fn constant_rejects_nested_opaque_value() {
        let mut model = ClassModel::new("MyClass").unwrap();

        let nested = ValueSpec::Sequence(vec![ValueSpec::Opaque("$handle".into())]);
        assert!(matches!(
            model.add_constant("a", nested),
            Err(DomainError::InvalidValue { .. })
        ));
        assert_eq!(model.constants().count(), 0);
    }

    #[test]
    fn empty_constant_name_is_rejected() {
        let mut model = ClassModel::new("MyClass").unwrap();
        assert!(matches!(
            model.add_constant("", "value"),
            Err(DomainError::InvalidName { .. })
        ));
    }

    #[test]
    fn duplicate_constant_is_rejected() {
        let mut model = ClassModel::new("MyClass").unwrap();
        model.add_constant("x", "value1").unwrap();
        assert!(matches!(
            model.add_constant("x", "value1"),
            Err(DomainError::DuplicateMember { .. })
        ));
    }

    #[test]
    fn constant_and_property_share_one_name_space() {
        let mut model = ClassModel::new("MyClass").unwrap();
        model.add_property("shared").unwrap();
        assert!(matches!(
            model.add_constant("shared", "v"),
            Err(DomainError::DuplicateMember { .. })
        ));

        let mut model = ClassModel::new("MyClass").unwrap();
        model.add_constant("shared", "v").unwrap();
        assert!(matches!(
            model.add_property("SHARED"),
            Err(DomainError::DuplicateMember { .. })
        ));
    }

    #[test]
    fn constant_kind_property_is_filed_as_constant() {
        let mut model = ClassModel::new("MyClass").unwrap();
        model
            .add_property(Member::constant("x", "value1"))
            .unwrap();

        assert!(model.has_constant("x"));
        assert!(!model.has_property("x"));
        assert_eq!(
            model.get_constant("x").unwrap().default_value(),
            Some(&ValueSpec::from("value1"))
        );
    }

    #[test]
    fn add_constants_accepts_constant_members_only() {
        let mut model = ClassModel::new("MyClass").unwrap();
        model
            .add_constants([
                Member::constant("x", "value1"),
                Member::constant("y", "value2"),
            ])
            .unwrap();
        assert_eq!(model.constants().count(), 2);

        assert!(matches!(
            model.add_constants([Member::property("z")]),
            Err(DomainError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn remove_constant_leaves_properties_alone() {
        let mut model = ClassModel::new("MyClass").unwrap();
        model.add_constant("x", "v").unwrap();
        model.add_property("y").unwrap();

        model.remove_constant("X");
        assert!(!model.has_constant("x"));
        assert!(model.has_property("y"));
    }

    // ========================================================================
    // Methods
    // ========================================================================

    #[test]
    fn method_accessors() {
        let mut model = ClassModel::new("MyClass").unwrap();
        model
            .add_methods(["methodOne", "methodTwo"])
            .unwrap()
            .add_method(MethodSpec::new("methodThree"))
            .unwrap();

        assert_eq!(model.methods().len(), 3);
        assert_eq!(model.get_method("methodOne").unwrap().name(), "methodOne");
    }

    #[test]
    fn duplicate_method_is_rejected() {
        let mut model = ClassModel::new("MyClass").unwrap();
        model.add_method("foo").unwrap();
        assert!(matches!(
            model.add_method(MethodSpec::new("foo")),
            Err(DomainError::DuplicateMember { .. })
        ));
    }

    #[test]
    fn has_method_is_case_insensitive() {
        let mut model = ClassModel::new("MyClass").unwrap();
        model.add_method("methodOne").unwrap();

        assert!(model.has_method("methodOne"));
        assert!(model.has_method("MethoDonE"));
    }

    #[test]
    fn remove_method_is_case_insensitive() {
        let mut model = ClassModel::new("MyClass").unwrap();
        model.add_method("methodOne").unwrap();

        model.remove_method("METHODONe");
        assert!(!model.has_method("methodOne"));
    }

    #[test]
    fn method_colliding_with_alias_target_is_rejected() {
        let mut model = ClassModel::new("MyClass").unwrap();
        model.add_trait("myTrait").unwrap();
        model
            .add_trait_alias("myTrait::method", "useMe", None)
            .unwrap();

        assert!(matches!(
            model.add_method("USEme"),
            Err(DomainError::DuplicateMember { .. })
        ));
    }

    // ========================================================================
    // Trait composition
    // ========================================================================

    #[test]
    fn can_add_trait_with_string() {
        let mut model = ClassModel::new("MyClass").unwrap();
        model.add_trait("myTrait").unwrap();
        assert!(model.has_trait("myTrait"));
    }

    #[test]
    fn duplicate_traits_are_ignored() {
        let mut model = ClassModel::new("MyClass").unwrap();
        model.add_traits(["myTrait", "myTrait", "hisTrait"]).unwrap();
        assert_eq!(model.traits(), ["myTrait", "hisTrait"]);
    }

    #[test]
    fn can_remove_trait() {
        let mut model = ClassModel::new("MyClass").unwrap();
        model.add_trait("myTrait").unwrap();
        assert!(model.has_trait("myTrait"));

        model.remove_trait("myTrait");
        assert!(!model.has_trait("myTrait"));
    }

    #[test]
    fn can_add_trait_usage_descriptor() {
        let mut model = ClassModel::new("MyClass").unwrap();
        let usage = TraitUsage::new("myTrait").alias(
            MethodReference::new("myTrait", "method").unwrap(),
            "useMe",
            Some(Visibility::Private),
        );
        model.add_trait_usage(usage).unwrap();

        assert!(model.has_trait("myTrait"));
        let aliases = model.composition().aliases();
        assert_eq!(aliases.len(), 1);
        assert_eq!(aliases[0].alias(), "useMe");
        assert_eq!(aliases[0].visibility(), Some(Visibility::Private));
    }

    #[test]
    fn can_add_trait_alias_with_string_reference() {
        let mut model = ClassModel::new("MyClass").unwrap();
        model.add_trait("myTrait").unwrap();
        model
            .add_trait_alias("myTrait::method", "useMe", Some(Visibility::Private))
            .unwrap();

        let aliases = model.composition().aliases();
        assert_eq!(aliases[0].reference().to_string(), "myTrait::method");
        assert_eq!(aliases[0].alias(), "useMe");
        assert_eq!(aliases[0].visibility(), Some(Visibility::Private));
    }

    #[test]
    fn trait_alias_rejects_invalid_method_format() {
        let mut model = ClassModel::new("MyClass").unwrap();
        model.add_trait("myTrait").unwrap();

        assert!(matches!(
            model.add_trait_alias("method", "useMe", None),
            Err(DomainError::InvalidReferenceFormat { .. })
        ));
    }

    #[test]
    fn trait_alias_rejects_unknown_trait() {
        let mut model = ClassModel::new("MyClass").unwrap();
        model.add_trait("myTrait").unwrap();

        assert!(matches!(
            model.add_trait_alias("unknown::method", "useMe", None),
            Err(DomainError::UnknownTrait { .. })
        ));
    }

    #[test]
    fn trait_alias_rejects_existing_method_name() {
        let mut model = ClassModel::new("MyClass").unwrap();
        model.add_method("methodOne").unwrap();
        model.add_trait("myTrait").unwrap();

        assert!(matches!(
            model.add_trait_alias("myTrait::method", "methodOne", None),
            Err(DomainError::DuplicateMember { .. })
        ));
    }

    #[test]
    fn can_add_trait_override() {
        let mut model = ClassModel::new("MyClass").unwrap();
        model.add_traits(["myTrait", "histTrait"]).unwrap();
        model.add_trait_override("myTrait::foo", "hisTrait").unwrap();

        let exclusions = model.composition().exclusions();
        assert_eq!(exclusions.len(), 1);
        assert_eq!(exclusions[0].reference().to_string(), "myTrait::foo");
        assert_eq!(exclusions[0].excluded(), ["hisTrait"]);
    }

    #[test]
    fn can_add_multiple_trait_overrides() {
        let mut model = ClassModel::new("MyClass").unwrap();
        model
            .add_traits(["myTrait", "histTrait", "thatTrait"])
            .unwrap();
        model
            .add_trait_override("myTrait::foo", vec!["hisTrait", "thatTrait"])
            .unwrap();

        let exclusions = model.composition().exclusions();
        assert_eq!(exclusions[0].excluded(), ["hisTrait", "thatTrait"]);
    }

    #[test]
    fn repeated_overrides_accumulate() {
        let mut model = ClassModel::new("MyClass").unwrap();
        model.add_traits(["myTrait", "other"]).unwrap();
        model.add_trait_override("myTrait::foo", "a").unwrap();
        model.add_trait_override("myTrait::foo", "a").unwrap();

        assert_eq!(model.composition().exclusions()[0].excluded(), ["a", "a"]);
    }

    #[test]
    fn trait_override_rejects_invalid_method_format() {
        let mut model = ClassModel::new("MyClass").unwrap();
        model.add_trait("myTrait").unwrap();

        assert!(matches!(
            model.add_trait_override("method", "useMe"),
            Err(DomainError::InvalidReferenceFormat { .. })
        ));
    }

    #[test]
    fn trait_override_rejects_unknown_trait() {
        let mut model = ClassModel::new("MyClass").unwrap();
        model.add_trait("myTrait").unwrap();

        assert!(matches!(
            model.add_trait_override("unknown::method", "useMe"),
            Err(DomainError::UnknownTrait { .. })
        ));
    }

    #[test]
    fn trait_override_rejects_empty_excluded_name() {
        let mut model = ClassModel::new("MyClass").unwrap();
        model.add_trait("myTrait").unwrap();

        assert!(matches!(
            model.add_trait_override("myTrait::method", vec!["methodOne", ""]),
            Err(DomainError::InvalidArgument { .. })
        ));
        assert!(model.composition().exclusions().is_empty());
    }

    #[test]
    fn can_remove_single_trait_override() {
        let mut model = ClassModel::new("MyClass").unwrap();
        model
            .add_traits(["myTrait", "histTrait", "thatTrait"])
            .unwrap();
        model
            .add_trait_override("myTrait::foo", vec!["hisTrait", "thatTrait"])
            .unwrap();

        model
            .remove_trait_override("myTrait::foo", Some("hisTrait"))
            .unwrap();

        assert_eq!(model.composition().exclusions()[0].excluded(), ["thatTrait"]);
    }

    #[test]
    fn can_remove_all_trait_overrides() {
        let mut model = ClassModel::new("MyClass").unwrap();
        model
            .add_traits(["myTrait", "histTrait", "thatTrait"])
            .unwrap();
        model
            .add_trait_override("myTrait::foo", vec!["hisTrait", "thatTrait"])
            .unwrap();

        model.remove_trait_override("myTrait::foo", None).unwrap();

        assert!(model.composition().exclusions().is_empty());
    }

    #[test]
    fn removing_trait_cascades_aliases_and_overrides() {
        let mut model = ClassModel::new("MyClass").unwrap();
        model.add_traits(["myTrait", "hisTrait"]).unwrap();
        model
            .add_trait_alias("myTrait::method", "useMe", None)
            .unwrap();
        model
            .add_trait_override("myTrait::foo", "hisTrait")
            .unwrap();
        model
            .add_trait_alias("hisTrait::other", "keepMe", None)
            .unwrap();

        model.remove_trait("myTrait");

        let composition = model.composition();
        assert!(!composition.has_trait("myTrait"));
        assert!(composition
            .aliases()
            .iter()
            .all(|a| a.reference().trait_name() != "myTrait"));
        assert!(composition
            .exclusions()
            .iter()
            .all(|e| e.reference().trait_name() != "myTrait"));
        assert_eq!(composition.aliases().len(), 1);
        assert!(DomainValidator::validate_model(&model).is_ok());
    }

    #[test]
    fn alias_for_same_reference_replaces_previous() {
        let mut model = ClassModel::new("MyClass").unwrap();
        model.add_trait("myTrait").unwrap();
        model
            .add_trait_alias("myTrait::method", "first", None)
            .unwrap();
        model
            .add_trait_alias("myTrait::method", "second", Some(Visibility::Protected))
            .unwrap();

        let aliases = model.composition().aliases();
        assert_eq!(aliases.len(), 1);
        assert_eq!(aliases[0].alias(), "second");
    }

    // ========================================================================
    // Whole-model validation
    // ========================================================================

    #[test]
    fn validator_accepts_model_built_through_the_api() {
        let mut model = ClassModel::new("My\\Ns\\Klass").unwrap();
        model
            .add_trait("myTrait")
            .unwrap()
            .add_constant("VERSION", "1.0")
            .unwrap()
            .add_property("state")
            .unwrap()
            .add_method("run")
            .unwrap();
        model
            .add_trait_alias("myTrait::run", "runFromTrait", None)
            .unwrap();

        assert!(DomainValidator::validate_model(&model).is_ok());
    }
}
