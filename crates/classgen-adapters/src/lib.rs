//! Infrastructure adapters for classgen.
//!
//! This crate implements the ports defined in
//! `classgen-core::application::ports`: the PHP renderers, the declaration
//! importer, and the TOML manifest loader.

pub mod importer;
pub mod manifest_loader;
pub mod renderer;

// Re-export commonly used adapters
pub use importer::SnapshotImporter;
pub use renderer::{PhpDocBlockRenderer, PhpMemberRenderer, PhpMethodRenderer};

use classgen_core::application::ClassEmitter;

/// An emission engine wired with the PHP renderer adapters.
pub fn php_emitter() -> ClassEmitter {
    ClassEmitter::new(
        Box::new(PhpMemberRenderer::new()),
        Box::new(PhpMethodRenderer::new()),
        Box::new(PhpDocBlockRenderer::new()),
    )
}
