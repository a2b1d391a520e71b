//! Application services: the emission engine.

pub mod emitter;

pub use emitter::{indent, ClassEmitter, SourceBuffer, INDENT_UNIT};
