//! Declaration snapshots: what a reflection/introspection source hands the
//! importer port.
//!
//! A [`ClassDeclaration`] is a plain, serde-enabled description of an
//! existing class: its qualified name, parent chain, interfaces (inherited
//! ones included), members, methods, traits, and imports. Member and method
//! snapshots carry a `declared_by` marker so the importer can distinguish
//! directly declared members from inherited ones.
//!
//! These are DTOs, not domain entities: nothing here is validated. The
//! importer funnels every field through the class model's mutation API,
//! which is where the invariants bite.

use serde::{Deserialize, Serialize};

use crate::domain::{ClassModifier, MethodReference, ValueSpec, Visibility};

/// Snapshot of an existing class declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassDeclaration {
    /// Fully qualified name, namespace separators included.
    pub name: String,

    #[serde(default)]
    pub modifier: ClassModifier,

    /// Parent declaration, recursively. Used both for the `extends` clause
    /// and for filtering inherited interfaces.
    #[serde(default)]
    pub parent: Option<Box<ClassDeclaration>>,

    /// Implemented interfaces as the source reports them — including the
    /// ones inherited from the parent chain.
    #[serde(default)]
    pub interfaces: Vec<String>,

    #[serde(default)]
    pub uses: Vec<UseSnapshot>,

    #[serde(default)]
    pub traits: Vec<TraitSnapshot>,

    #[serde(default)]
    pub constants: Vec<MemberSnapshot>,

    #[serde(default)]
    pub properties: Vec<MemberSnapshot>,

    #[serde(default)]
    pub methods: Vec<MethodSnapshot>,

    #[serde(default)]
    pub doc: Option<DocBlockSnapshot>,
}

impl ClassDeclaration {
    /// Interfaces declared anywhere along the parent chain.
    pub fn inherited_interfaces(&self) -> Vec<&str> {
        let mut inherited = Vec::new();
        let mut parent = self.parent.as_deref();
        while let Some(declaration) = parent {
            inherited.extend(declaration.interfaces.iter().map(String::as_str));
            parent = declaration.parent.as_deref();
        }
        inherited
    }

    /// Whether a snapshot marked `declared_by` belongs to this declaration.
    pub fn declares(&self, declared_by: Option<&str>) -> bool {
        match declared_by {
            None => true,
            Some(owner) => owner == self.name,
        }
    }
}

/// A namespace import on the declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UseSnapshot {
    pub name: String,
    #[serde(default)]
    pub alias: Option<String>,
}

/// A used trait plus its conflict-resolution entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraitSnapshot {
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<AliasSnapshot>,
    #[serde(default)]
    pub insteadof: Vec<InsteadofSnapshot>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AliasSnapshot {
    pub reference: MethodReference,
    pub alias: String,
    #[serde(default)]
    pub visibility: Option<Visibility>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsteadofSnapshot {
    pub reference: MethodReference,
    pub excluded: Vec<String>,
}

/// A constant or property on the declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberSnapshot {
    pub name: String,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub default: Option<ValueSpec>,
    /// Qualified name of the declaring class; `None` means declared here.
    #[serde(default)]
    pub declared_by: Option<String>,
}

/// A method on the declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodSnapshot {
    pub name: String,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub is_abstract: bool,
    #[serde(default)]
    pub is_final: bool,
    #[serde(default)]
    pub parameters: Vec<ParameterSnapshot>,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub doc: Option<DocBlockSnapshot>,
    /// Qualified name of the declaring class; `None` means declared here.
    #[serde(default)]
    pub declared_by: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterSnapshot {
    pub name: String,
    #[serde(default)]
    pub default: Option<ValueSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DocBlockSnapshot {
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub long_description: Option<String>,
    #[serde(default)]
    pub tags: Vec<DocTagSnapshot>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocTagSnapshot {
    pub name: String,
    #[serde(default)]
    pub content: Option<String>,
}
