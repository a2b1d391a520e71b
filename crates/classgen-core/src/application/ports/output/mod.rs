//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the emission engine and host applications need
//! from the outside world. The `classgen-adapters` crate provides the PHP
//! implementations.
//!
//! The renderer ports are infallible by contract: emission is a total
//! function over a model built through the validated mutation API, so a
//! renderer has nothing left to reject. Rendered fragments are returned
//! WITHOUT a trailing newline; the engine owns line separation and blank
//! lines.

use crate::application::declaration::ClassDeclaration;
use crate::domain::{ClassModel, DocBlock, Member, MethodSpec};
use crate::error::ClassgenResult;

#[cfg(test)]
use mockall::automock;

/// Port for rendering a single constant or property.
///
/// Implemented by:
/// - `classgen_adapters::renderer::PhpMemberRenderer` (production)
///
/// ## Contract
///
/// Emit the visibility keyword, the `const` qualifier when applicable, the
/// name, and an `= <literal>` clause exactly when a default was supplied.
/// `indent_level` counts 4-space units; every emitted line is pre-indented.
#[cfg_attr(test, automock)]
pub trait MemberRenderer: Send + Sync {
    fn render(&self, member: &Member, indent_level: usize) -> String;
}

/// Port for rendering a single method.
///
/// Emits visibility, optional static/abstract/final qualifiers, the
/// signature, and the body block — or a terminated signature for abstract
/// methods.
#[cfg_attr(test, automock)]
pub trait MethodRenderer: Send + Sync {
    fn render(&self, method: &MethodSpec, indent_level: usize) -> String;
}

/// Port for rendering a documentation comment block.
#[cfg_attr(test, automock)]
pub trait DocBlockRenderer: Send + Sync {
    fn render(&self, doc_block: &DocBlock) -> String;
}

/// Port for the import collaborator: turning an existing declaration into a
/// populated class model.
///
/// Implemented by:
/// - `classgen_adapters::importer::SnapshotImporter` (production)
///
/// ## Contract
///
/// `populate_from_existing` keeps only what the declaration itself
/// declares: interfaces not present on the parent chain, and members whose
/// `declared_by` is the declaration's own name. `populate_with_inherited`
/// keeps everything the source reported. Both populate exclusively through
/// the model's mutation API, so an inconsistent snapshot fails with the
/// same domain errors a caller would get building the model by hand.
#[cfg_attr(test, automock)]
pub trait ClassImporter: Send + Sync {
    /// Populate a model from the directly declared surface of `declaration`.
    fn populate_from_existing(&self, declaration: &ClassDeclaration)
        -> ClassgenResult<ClassModel>;

    /// Populate a model including inherited members and interfaces.
    fn populate_with_inherited(&self, declaration: &ClassDeclaration)
        -> ClassgenResult<ClassModel>;
}
