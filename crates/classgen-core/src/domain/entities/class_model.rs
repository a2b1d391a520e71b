//! Class model aggregate and its mutation API.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Class Model Domain                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ClassModel (Aggregate Root)                                │
//! │  ├── name / namespace (derived, never set independently)    │
//! │  ├── ClassModifier (Value Object) - none | abstract | final │
//! │  ├── UseImport list (first-write-wins per imported name)    │
//! │  ├── Vec<Member> - ONE collection for constants+properties  │
//! │  ├── Vec<MethodSpec>                                        │
//! │  ├── TraitComposition (owned sub-table)                     │
//! │  └── DocBlock (optional)                                    │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Invariants (enforced per mutation call, fail-fast)         │
//! │  ├── member names unique across constants AND properties    │
//! │  │   (case-insensitive)                                     │
//! │  ├── method names unique, also against trait alias targets  │
//! │  ├── constant values are recursively literal                │
//! │  └── alias/exclusion references name a registered trait     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lifecycle
//!
//! 1. **Construction:** `ClassModel::new("My\\Ns\\Klass")` or via the
//!    importer port
//! 2. **Mutation:** exclusively through the fallible API below; a failed
//!    call leaves the model untouched
//! 3. **Emission:** `ClassEmitter::emit` walks the finished model; the
//!    model itself is never mutated by emission
//!
//! The aggregate is a plain mutable value with no internal synchronization;
//! single-owner use during a build sequence is the intended discipline.

use crate::domain::entities::doc_block::DocBlock;
use crate::domain::entities::member::{Member, MemberKind};
use crate::domain::entities::method::MethodSpec;
use crate::domain::entities::trait_composition::{ExcludedTraits, TraitComposition, TraitUsage};
use crate::domain::error::DomainError;
use crate::domain::value::ValueSpec;
use crate::domain::value_objects::{ClassModifier, MethodReference, Visibility};

/// The namespace separator in qualified class names.
pub const NAMESPACE_SEPARATOR: &str = "\\";

/// A single namespace import, optionally aliased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UseImport {
    name: String,
    alias: Option<String>,
}

impl UseImport {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }
}

/// The aggregate root: a mutable, emittable class declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassModel {
    name: String,
    namespace: Option<String>,
    modifier: ClassModifier,
    extended_class: Option<String>,
    implemented_interfaces: Vec<String>,
    uses: Vec<UseImport>,
    members: Vec<Member>,
    methods: Vec<MethodSpec>,
    composition: TraitComposition,
    doc_block: Option<DocBlock>,
}

impl ClassModel {
    /// Create a model from a possibly-qualified name.
    ///
    /// `My\Namespaced\FunClass` yields simple name `FunClass` and namespace
    /// `My\Namespaced`.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let mut model = Self {
            name: String::new(),
            namespace: None,
            modifier: ClassModifier::None,
            extended_class: None,
            implemented_interfaces: Vec::new(),
            uses: Vec::new(),
            members: Vec::new(),
            methods: Vec::new(),
            composition: TraitComposition::new(),
            doc_block: None,
        };
        model.set_name(name)?;
        Ok(model)
    }

    // -------------------------------------------------------------------------
    // Identity
    // -------------------------------------------------------------------------

    /// Set the class name, re-deriving the namespace from any separator
    /// prefix. The namespace is never settable on its own.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<&mut Self, DomainError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::InvalidName { what: "class" });
        }
        match name.rsplit_once(NAMESPACE_SEPARATOR) {
            Some((namespace, simple)) if !simple.is_empty() => {
                self.namespace = Some(namespace.to_string());
                self.name = simple.to_string();
            }
            _ => {
                self.namespace = None;
                self.name = name;
            }
        }
        Ok(self)
    }

    /// Simple (unqualified) class name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Namespace prefix derived from the last `set_name` call.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Fully qualified name, namespace included when present.
    pub fn qualified_name(&self) -> String {
        match &self.namespace {
            Some(namespace) => format!("{namespace}{NAMESPACE_SEPARATOR}{}", self.name),
            None => self.name.clone(),
        }
    }

    // -------------------------------------------------------------------------
    // Header: modifier, inheritance, interfaces, docblock
    // -------------------------------------------------------------------------

    pub fn set_modifier(&mut self, modifier: ClassModifier) -> &mut Self {
        self.modifier = modifier;
        self
    }

    pub fn modifier(&self) -> ClassModifier {
        self.modifier
    }

    /// Set the parent class. An empty string normalizes to "no parent",
    /// not to an empty `extends` clause.
    pub fn set_extended_class(&mut self, name: impl Into<String>) -> &mut Self {
        let name = name.into();
        self.extended_class = if name.is_empty() { None } else { Some(name) };
        self
    }

    pub fn extended_class(&self) -> Option<&str> {
        self.extended_class.as_deref()
    }

    /// Replace the interface list wholesale. Order is preserved and
    /// duplicates are kept exactly as given.
    pub fn set_implemented_interfaces(
        &mut self,
        interfaces: impl IntoIterator<Item = impl Into<String>>,
    ) -> &mut Self {
        self.implemented_interfaces = interfaces.into_iter().map(Into::into).collect();
        self
    }

    pub fn add_interface(&mut self, name: impl Into<String>) -> &mut Self {
        self.implemented_interfaces.push(name.into());
        self
    }

    pub fn implemented_interfaces(&self) -> &[String] {
        &self.implemented_interfaces
    }

    pub fn set_doc_block(&mut self, doc_block: DocBlock) -> &mut Self {
        self.doc_block = Some(doc_block);
        self
    }

    pub fn doc_block(&self) -> Option<&DocBlock> {
        self.doc_block.as_ref()
    }

    // -------------------------------------------------------------------------
    // Namespace imports
    // -------------------------------------------------------------------------

    /// Import a name. Re-adding an already-imported name is a no-op.
    pub fn add_use(&mut self, name: impl Into<String>) -> Result<&mut Self, DomainError> {
        self.push_use(name.into(), None)
    }

    /// Import a name under a local alias. First write wins: if the name was
    /// imported before, the original alias (or lack of one) is kept.
    pub fn add_use_with_alias(
        &mut self,
        name: impl Into<String>,
        alias: impl Into<String>,
    ) -> Result<&mut Self, DomainError> {
        self.push_use(name.into(), Some(alias.into()))
    }

    pub fn uses(&self) -> &[UseImport] {
        &self.uses
    }

    fn push_use(&mut self, name: String, alias: Option<String>) -> Result<&mut Self, DomainError> {
        if name.is_empty() {
            return Err(DomainError::InvalidName { what: "import" });
        }
        if !self.uses.iter().any(|u| u.name == name) {
            self.uses.push(UseImport { name, alias });
        }
        Ok(self)
    }

    // -------------------------------------------------------------------------
    // Constants & properties (one shared name space)
    // -------------------------------------------------------------------------

    /// Add a property-or-constant member. A member of constant kind is
    /// validated and filed as a constant; bare `&str` names make plain
    /// public properties.
    pub fn add_property(&mut self, member: impl Into<Member>) -> Result<&mut Self, DomainError> {
        let member = member.into();
        if member.name().is_empty() {
            return Err(DomainError::InvalidName { what: "property" });
        }
        if let Some(existing) = self.find_member(member.name()) {
            return Err(DomainError::DuplicateMember {
                kind: kind_label(existing.kind()),
                name: existing.name().to_string(),
            });
        }
        if member.is_constant() {
            Self::require_literal(&member)?;
        }
        self.members.push(member);
        Ok(self)
    }

    /// Add several members; stops at the first failing one.
    pub fn add_properties(
        &mut self,
        members: impl IntoIterator<Item = impl Into<Member>>,
    ) -> Result<&mut Self, DomainError> {
        for member in members {
            self.add_property(member)?;
        }
        Ok(self)
    }

    /// Add a constant. Sugar for `add_property` with a constant-kind member;
    /// additionally rejects values that are not recursively literal.
    pub fn add_constant(
        &mut self,
        name: impl Into<String>,
        value: impl Into<ValueSpec>,
    ) -> Result<&mut Self, DomainError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::InvalidName { what: "constant" });
        }
        self.add_property(Member::constant(name, value))
    }

    /// Add several constant-kind members. Non-constant items are rejected
    /// with `InvalidArgument`.
    pub fn add_constants(
        &mut self,
        members: impl IntoIterator<Item = Member>,
    ) -> Result<&mut Self, DomainError> {
        for member in members {
            if !member.is_constant() {
                return Err(DomainError::InvalidArgument {
                    reason: format!("member {} is not a constant", member.name()),
                });
            }
            self.add_property(member)?;
        }
        Ok(self)
    }

    pub fn has_property(&self, name: &str) -> bool {
        self.get_property(name).is_some()
    }

    pub fn get_property(&self, name: &str) -> Option<&Member> {
        self.find_member(name).filter(|m| !m.is_constant())
    }

    /// Remove a property by any case variant of its name. Constants are
    /// left alone.
    pub fn remove_property(&mut self, name: &str) -> &mut Self {
        self.members
            .retain(|m| m.is_constant() || !m.name().eq_ignore_ascii_case(name));
        self
    }

    pub fn has_constant(&self, name: &str) -> bool {
        self.get_constant(name).is_some()
    }

    pub fn get_constant(&self, name: &str) -> Option<&Member> {
        self.find_member(name).filter(|m| m.is_constant())
    }

    pub fn remove_constant(&mut self, name: &str) -> &mut Self {
        self.members
            .retain(|m| !m.is_constant() || !m.name().eq_ignore_ascii_case(name));
        self
    }

    /// Constant-kind members, insertion order.
    pub fn constants(&self) -> impl Iterator<Item = &Member> {
        self.members.iter().filter(|m| m.is_constant())
    }

    /// Property-kind members, insertion order.
    pub fn properties(&self) -> impl Iterator<Item = &Member> {
        self.members.iter().filter(|m| !m.is_constant())
    }

    fn find_member(&self, name: &str) -> Option<&Member> {
        self.members
            .iter()
            .find(|m| m.name().eq_ignore_ascii_case(name))
    }

    fn require_literal(member: &Member) -> Result<(), DomainError> {
        match member.default_value() {
            Some(value) if !value.is_literal() => Err(DomainError::InvalidValue {
                name: member.name().to_string(),
            }),
            _ => Ok(()),
        }
    }

    // -------------------------------------------------------------------------
    // Methods
    // -------------------------------------------------------------------------

    /// Add a method. Bare `&str` names make empty public methods. The name
    /// must not collide (case-insensitively) with an existing method or
    /// with a registered trait alias target.
    pub fn add_method(&mut self, method: impl Into<MethodSpec>) -> Result<&mut Self, DomainError> {
        let method = method.into();
        if method.name().is_empty() {
            return Err(DomainError::InvalidName { what: "method" });
        }
        // Alias targets share the method name space: a method may not take
        // the name a trait method was aliased to.
        if self.has_method(method.name())
            || self
                .composition
                .alias_targets()
                .any(|t| t.eq_ignore_ascii_case(method.name()))
        {
            return Err(DomainError::DuplicateMember {
                kind: "method",
                name: method.name().to_string(),
            });
        }
        self.methods.push(method);
        Ok(self)
    }

    /// Add several methods; stops at the first failing one.
    pub fn add_methods(
        &mut self,
        methods: impl IntoIterator<Item = impl Into<MethodSpec>>,
    ) -> Result<&mut Self, DomainError> {
        for method in methods {
            self.add_method(method)?;
        }
        Ok(self)
    }

    pub fn has_method(&self, name: &str) -> bool {
        self.methods
            .iter()
            .any(|m| m.name().eq_ignore_ascii_case(name))
    }

    pub fn get_method(&self, name: &str) -> Option<&MethodSpec> {
        self.methods
            .iter()
            .find(|m| m.name().eq_ignore_ascii_case(name))
    }

    pub fn remove_method(&mut self, name: &str) -> &mut Self {
        self.methods.retain(|m| !m.name().eq_ignore_ascii_case(name));
        self
    }

    pub fn methods(&self) -> &[MethodSpec] {
        &self.methods
    }

    // -------------------------------------------------------------------------
    // Trait composition
    // -------------------------------------------------------------------------

    /// Register a used trait. Duplicates are ignored.
    pub fn add_trait(&mut self, name: impl Into<String>) -> Result<&mut Self, DomainError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::InvalidName { what: "trait" });
        }
        self.composition.add_trait(name);
        Ok(self)
    }

    pub fn add_traits(
        &mut self,
        names: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<&mut Self, DomainError> {
        for name in names {
            self.add_trait(name)?;
        }
        Ok(self)
    }

    /// Register a full trait-usage descriptor: the trait plus any aliases
    /// and exclusions, all funneled through the validated single-entry
    /// operations.
    pub fn add_trait_usage(&mut self, usage: TraitUsage) -> Result<&mut Self, DomainError> {
        let TraitUsage {
            name,
            aliases,
            exclusions,
        } = usage;
        self.add_trait(name)?;
        for alias in aliases {
            self.add_trait_alias(alias.reference, &alias.alias, alias.visibility)?;
        }
        for exclusion in exclusions {
            self.add_trait_override(exclusion.reference, exclusion.excluded)?;
        }
        Ok(self)
    }

    pub fn has_trait(&self, name: &str) -> bool {
        self.composition.has_trait(name)
    }

    pub fn traits(&self) -> &[String] {
        self.composition.traits()
    }

    /// Remove a trait; its aliases and exclusions are removed with it.
    pub fn remove_trait(&mut self, name: &str) -> &mut Self {
        self.composition.remove_trait(name);
        self
    }

    /// Alias a trait method on inclusion.
    ///
    /// `reference` accepts `"trait::method"` (parsed, `InvalidReferenceFormat`
    /// on anything else) or an already-built [`MethodReference`]. The alias
    /// must not collide with an existing method name, and the referenced
    /// trait must be registered.
    pub fn add_trait_alias<R>(
        &mut self,
        reference: R,
        alias: &str,
        visibility: Option<Visibility>,
    ) -> Result<&mut Self, DomainError>
    where
        R: TryInto<MethodReference>,
        R::Error: Into<DomainError>,
    {
        let reference = reference.try_into().map_err(Into::into)?;
        if self.has_method(alias) {
            return Err(DomainError::DuplicateMember {
                kind: "method",
                name: alias.to_string(),
            });
        }
        self.composition.add_alias(reference, alias, visibility)?;
        Ok(self)
    }

    /// Exclude traits from supplying a method (`insteadof`). `excluded`
    /// accepts a single name or a list; repeated calls accumulate.
    pub fn add_trait_override<R>(
        &mut self,
        reference: R,
        excluded: impl Into<ExcludedTraits>,
    ) -> Result<&mut Self, DomainError>
    where
        R: TryInto<MethodReference>,
        R::Error: Into<DomainError>,
    {
        let reference = reference.try_into().map_err(Into::into)?;
        self.composition
            .add_exclusion(reference, excluded.into().into_names())?;
        Ok(self)
    }

    /// Remove overrides for a reference: one excluded name, or all of them
    /// when `excluded` is `None`.
    pub fn remove_trait_override<R>(
        &mut self,
        reference: R,
        excluded: Option<&str>,
    ) -> Result<&mut Self, DomainError>
    where
        R: TryInto<MethodReference>,
        R::Error: Into<DomainError>,
    {
        let reference = reference.try_into().map_err(Into::into)?;
        self.composition.remove_exclusion(&reference, excluded);
        Ok(self)
    }

    pub fn composition(&self) -> &TraitComposition {
        &self.composition
    }
}

const fn kind_label(kind: MemberKind) -> &'static str {
    match kind {
        MemberKind::Constant => "constant",
        MemberKind::Property => "property",
    }
}
