//! Trait composition table: used traits, method aliases, and insteadof
//! exclusions.
//!
//! The table owns three ordered collections:
//!
//! - `traits` — trait names in insertion order, duplicates ignored;
//! - `aliases` — one entry per `trait::method` reference, renaming that
//!   method on inclusion, optionally with a visibility keyword;
//! - `exclusions` — per `trait::method` reference, the ordered list of
//!   traits that must NOT supply that method (the `insteadof` set).
//!
//! Invariant: every alias/exclusion *reference* names a trait present in the
//! trait set, checked when the entry is registered. The trait names inside
//! an exclusion list are not checked against the set. Removing a trait
//! cascades: entries whose reference names it are deleted with it.
//!
//! Alias targets additionally must not collide with class method names; that
//! check belongs to the owning [`ClassModel`](crate::domain::ClassModel),
//! which validates before delegating storage here.

use crate::domain::error::DomainError;
use crate::domain::value_objects::{MethodReference, Visibility};

/// A registered method alias.
#[derive(Debug, Clone, PartialEq)]
pub struct TraitAlias {
    reference: MethodReference,
    alias: String,
    visibility: Option<Visibility>,
}

impl TraitAlias {
    pub fn reference(&self) -> &MethodReference {
        &self.reference
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// `None` renders without a visibility keyword.
    pub fn visibility(&self) -> Option<Visibility> {
        self.visibility
    }
}

/// A registered insteadof entry.
#[derive(Debug, Clone, PartialEq)]
pub struct TraitExclusion {
    reference: MethodReference,
    excluded: Vec<String>,
}

impl TraitExclusion {
    pub fn reference(&self) -> &MethodReference {
        &self.reference
    }

    /// Excluded trait names, insertion order, duplicates preserved.
    pub fn excluded(&self) -> &[String] {
        &self.excluded
    }
}

/// The composition table owned by a class model.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TraitComposition {
    traits: Vec<String>,
    aliases: Vec<TraitAlias>,
    exclusions: Vec<TraitExclusion>,
}

impl TraitComposition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a trait name; re-adding an existing name is a no-op.
    pub fn add_trait(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.has_trait(&name) {
            self.traits.push(name);
        }
    }

    pub fn has_trait(&self, name: &str) -> bool {
        self.traits.iter().any(|t| t.eq_ignore_ascii_case(name))
    }

    pub fn traits(&self) -> &[String] {
        &self.traits
    }

    /// Remove a trait and every alias/exclusion registered under it.
    pub fn remove_trait(&mut self, name: &str) {
        self.traits.retain(|t| !t.eq_ignore_ascii_case(name));
        self.aliases
            .retain(|a| !a.reference.trait_name().eq_ignore_ascii_case(name));
        self.exclusions
            .retain(|e| !e.reference.trait_name().eq_ignore_ascii_case(name));
    }

    /// Register an alias for `reference`. A second registration for the same
    /// reference replaces the first.
    ///
    /// Fails with `UnknownTrait` when the referenced trait is not in the set.
    pub fn add_alias(
        &mut self,
        reference: MethodReference,
        alias: impl Into<String>,
        visibility: Option<Visibility>,
    ) -> Result<(), DomainError> {
        self.require_trait(reference.trait_name())?;
        let entry = TraitAlias {
            reference,
            alias: alias.into(),
            visibility,
        };
        if let Some(existing) = self
            .aliases
            .iter_mut()
            .find(|a| a.reference == entry.reference)
        {
            *existing = entry;
        } else {
            self.aliases.push(entry);
        }
        Ok(())
    }

    pub fn aliases(&self) -> &[TraitAlias] {
        &self.aliases
    }

    /// Alias target names, for collision checks on the owning model.
    pub fn alias_targets(&self) -> impl Iterator<Item = &str> {
        self.aliases.iter().map(|a| a.alias.as_str())
    }

    /// Append excluded traits for `reference`. Repeated calls accumulate;
    /// duplicate names are kept as given.
    ///
    /// Fails with `UnknownTrait` when the referenced trait is not in the
    /// set, and with `InvalidArgument` when an excluded name is empty.
    pub fn add_exclusion(
        &mut self,
        reference: MethodReference,
        excluded: Vec<String>,
    ) -> Result<(), DomainError> {
        self.require_trait(reference.trait_name())?;
        if excluded.iter().any(String::is_empty) {
            return Err(DomainError::InvalidArgument {
                reason: "excluded traits must be non-empty strings".into(),
            });
        }
        if let Some(entry) = self
            .exclusions
            .iter_mut()
            .find(|e| e.reference == reference)
        {
            entry.excluded.extend(excluded);
        } else {
            self.exclusions.push(TraitExclusion {
                reference,
                excluded,
            });
        }
        Ok(())
    }

    /// Remove exclusions for `reference`: the single `excluded` name when
    /// given, the whole entry otherwise. Unknown references are a no-op.
    pub fn remove_exclusion(&mut self, reference: &MethodReference, excluded: Option<&str>) {
        match excluded {
            None => self.exclusions.retain(|e| e.reference != *reference),
            Some(name) => {
                if let Some(entry) = self
                    .exclusions
                    .iter_mut()
                    .find(|e| e.reference == *reference)
                {
                    entry.excluded.retain(|t| !t.eq_ignore_ascii_case(name));
                }
                self.exclusions.retain(|e| !e.excluded.is_empty());
            }
        }
    }

    pub fn exclusions(&self) -> &[TraitExclusion] {
        &self.exclusions
    }

    pub fn is_empty(&self) -> bool {
        self.traits.is_empty()
    }

    /// Whether the use block needs the braced conflict-resolution form.
    pub fn has_resolutions(&self) -> bool {
        !self.aliases.is_empty() || !self.exclusions.is_empty()
    }

    fn require_trait(&self, name: &str) -> Result<(), DomainError> {
        if self.has_trait(name) {
            Ok(())
        } else {
            Err(DomainError::UnknownTrait {
                name: name.to_string(),
            })
        }
    }
}

// ── Usage descriptors ────────────────────────────────────────────────────────

/// Alias request inside a [`TraitUsage`] descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct AliasSpec {
    pub reference: MethodReference,
    pub alias: String,
    pub visibility: Option<Visibility>,
}

/// Exclusion request inside a [`TraitUsage`] descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct ExclusionSpec {
    pub reference: MethodReference,
    pub excluded: Vec<String>,
}

/// Structured form of the "add trait" operation: the trait name plus any
/// aliases and exclusions to register with it. Applied through the model's
/// validated operations, so a bad entry fails exactly like the equivalent
/// sequence of single calls.
#[derive(Debug, Clone, PartialEq)]
pub struct TraitUsage {
    pub name: String,
    pub aliases: Vec<AliasSpec>,
    pub exclusions: Vec<ExclusionSpec>,
}

impl TraitUsage {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            exclusions: Vec::new(),
        }
    }

    pub fn alias(
        mut self,
        reference: MethodReference,
        alias: impl Into<String>,
        visibility: Option<Visibility>,
    ) -> Self {
        self.aliases.push(AliasSpec {
            reference,
            alias: alias.into(),
            visibility,
        });
        self
    }

    pub fn exclude(mut self, reference: MethodReference, excluded: impl Into<ExcludedTraits>) -> Self {
        self.exclusions.push(ExclusionSpec {
            reference,
            excluded: excluded.into().into_names(),
        });
        self
    }
}

/// One-or-many excluded trait names for the override operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcludedTraits(Vec<String>);

impl ExcludedTraits {
    pub fn into_names(self) -> Vec<String> {
        self.0
    }
}

impl From<&str> for ExcludedTraits {
    fn from(name: &str) -> Self {
        Self(vec![name.to_string()])
    }
}

impl From<String> for ExcludedTraits {
    fn from(name: String) -> Self {
        Self(vec![name])
    }
}

impl From<Vec<String>> for ExcludedTraits {
    fn from(names: Vec<String>) -> Self {
        Self(names)
    }
}

impl From<Vec<&str>> for ExcludedTraits {
    fn from(names: Vec<&str>) -> Self {
        Self(names.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for ExcludedTraits {
    fn from(names: &[&str]) -> Self {
        Self(names.iter().map(|n| n.to_string()).collect())
    }
}
