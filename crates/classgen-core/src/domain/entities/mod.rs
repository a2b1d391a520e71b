//! Domain entities and value objects owned by the class model.

pub mod class_model;
pub mod doc_block;
pub mod member;
pub mod method;
pub mod trait_composition;

pub use class_model::{ClassModel, UseImport, NAMESPACE_SEPARATOR};
pub use doc_block::{DocBlock, DocTag};
pub use member::{Member, MemberKind};
pub use method::{MethodSpec, Parameter};
pub use trait_composition::{
    AliasSpec, ExcludedTraits, ExclusionSpec, TraitAlias, TraitComposition, TraitExclusion,
    TraitUsage,
};
