//! Renderer adapters implementing the core's renderer ports.

pub mod php;

pub use php::{PhpDocBlockRenderer, PhpMemberRenderer, PhpMethodRenderer};
