// ============================================================================
// domain/error.rs - DOMAIN ERROR TAXONOMY
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Every mutation-API failure is one of these variants, raised synchronously
/// at the offending call. A failed call never leaves partial state behind:
/// validation happens before any collection is touched.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Name Validation
    // ========================================================================
    #[error("invalid name for {what}: name must be a non-empty identifier")]
    InvalidName { what: &'static str },

    #[error("a {kind} by name {name} already exists in this class")]
    DuplicateMember { kind: &'static str, name: String },

    // ========================================================================
    // Value Validation
    // ========================================================================
    #[error("invalid value for {name}: only null, scalars, sequences and mappings are allowed")]
    InvalidValue { name: String },

    // ========================================================================
    // Trait Composition
    // ========================================================================
    #[error("invalid format: {given} must be in the format of trait::method")]
    InvalidReferenceFormat { given: String },

    #[error("invalid trait: {name} does not exist on this class")]
    UnknownTrait { name: String },

    #[error("invalid visibility {given}: must be one of public, protected, private")]
    InvalidVisibility { given: String },

    // ========================================================================
    // Argument Shape
    // ========================================================================
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },
}

impl DomainError {
    /// Error category for display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidName { .. }
            | Self::DuplicateMember { .. }
            | Self::InvalidValue { .. }
            | Self::InvalidReferenceFormat { .. }
            | Self::InvalidVisibility { .. }
            | Self::InvalidArgument { .. } => ErrorCategory::Validation,
            Self::UnknownTrait { .. } => ErrorCategory::NotFound,
        }
    }
}

// Lets generic `TryInto<MethodReference>` bounds accept an already-built
// reference, whose conversion error is `Infallible`.
impl From<std::convert::Infallible> for DomainError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
