//! classgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the classgen
//! class-source generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          Host application               │
//! │   (builds models, requests emission)    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Application Services             │
//! │           (ClassEmitter)                │
//! │      Sequences model → source text      │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Member/Method/DocBlock renderers,     │
//! │   ClassImporter)                        │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    classgen-adapters (Infrastructure)   │
//! │  (PHP renderers, SnapshotImporter,      │
//! │   manifest loader)                      │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Domain Layer (Pure Logic)         │
//! │  (ClassModel, TraitComposition,         │
//! │   Member, MethodSpec, ValueSpec)        │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use classgen_core::domain::{ClassModel, ClassModifier};
//!
//! // 1. Build the model through the validated mutation API
//! let mut model = ClassModel::new("My\\Namespaced\\FunClass").unwrap();
//! model
//!     .set_modifier(ClassModifier::Abstract)
//!     .set_extended_class("BaseClass");
//! model.add_constant("VERSION", "1.0").unwrap();
//! model.add_method("run").unwrap();
//!
//! // 2. Emit through the engine (with injected renderer adapters)
//! // let emitter = ClassEmitter::new(members, methods, doc_blocks);
//! // let source = emitter.emit(&model);
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (emission + ports)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ports::{ClassImporter, DocBlockRenderer, MemberRenderer, MethodRenderer},
        ClassDeclaration, ClassEmitter, SourceBuffer,
    };
    pub use crate::domain::{
        ClassModel, ClassModifier, DocBlock, DocTag, Member, MemberKind, MethodReference,
        MethodSpec, Parameter, TraitUsage, ValueSpec, Visibility,
    };
    pub use crate::error::{ClassgenError, ClassgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
