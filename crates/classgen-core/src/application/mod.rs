//! Application layer for classgen.
//!
//! This layer contains:
//! - **Services**: the emission engine (`ClassEmitter`)
//! - **Ports**: interface definitions (traits) for the external renderer
//!   and importer collaborators
//! - **Declaration**: the snapshot DTO the importer port consumes
//! - **Errors**: application-specific error types
//!
//! The application layer sequences the domain layer but contains no
//! business rules itself. All invariants live in `crate::domain`.

pub mod declaration;
pub mod error;
pub mod ports;
pub mod services;

// Re-export the emission engine
pub use services::{ClassEmitter, SourceBuffer};

// Re-export port traits (for adapter implementation)
pub use ports::{ClassImporter, DocBlockRenderer, MemberRenderer, MethodRenderer};

pub use declaration::{
    AliasSnapshot, ClassDeclaration, DocBlockSnapshot, DocTagSnapshot, InsteadofSnapshot,
    MemberSnapshot, MethodSnapshot, ParameterSnapshot, TraitSnapshot, UseSnapshot,
};

pub use error::ApplicationError;
