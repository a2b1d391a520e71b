//! Application ports (traits) for external collaborators.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `classgen-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by the emission engine and by hosts,
//!   implemented by infrastructure
//!   - `MemberRenderer`: constant/property text fragments
//!   - `MethodRenderer`: method text fragments
//!   - `DocBlockRenderer`: documentation comment blocks
//!   - `ClassImporter`: populate a model from an existing declaration

pub mod output;

pub use output::{ClassImporter, DocBlockRenderer, MemberRenderer, MethodRenderer};
