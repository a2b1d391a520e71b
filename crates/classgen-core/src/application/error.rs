//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A declaration snapshot could not be turned into a class model.
    #[error("declaration import failed: {reason}")]
    ImportFailed { reason: String },

    /// A class manifest could not be read or parsed.
    #[error("manifest error at {path}: {reason}")]
    ManifestError { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ImportFailed { .. } => ErrorCategory::Validation,
            Self::ManifestError { .. } => ErrorCategory::Internal,
        }
    }
}
