//! Domain value objects: Visibility, ClassModifier, MethodReference.
//!
//! # Design
//!
//! These are pure value types — equality-by-value, no identity. This file's
//! only job is to define the types, their string representations, and their
//! fallible parsers. Collection behavior and invariants live on the
//! aggregate in `entities/`.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Visibility ───────────────────────────────────────────────────────────────

/// Member visibility keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

impl Visibility {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Visibility {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(Self::Public),
            "protected" => Ok(Self::Protected),
            "private" => Ok(Self::Private),
            other => Err(DomainError::InvalidVisibility {
                given: other.to_string(),
            }),
        }
    }
}

// ── ClassModifier ────────────────────────────────────────────────────────────

/// Class-level modifier keyword.
///
/// A single enumerated state instead of independent abstract/final booleans,
/// so "both set" is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassModifier {
    #[default]
    None,
    Abstract,
    Final,
}

impl ClassModifier {
    /// Header keyword including the trailing space, empty for `None`.
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::Abstract => "abstract ",
            Self::Final => "final ",
        }
    }
}

// ── MethodReference ──────────────────────────────────────────────────────────

/// A `trait::method` reference used by the trait composition table.
///
/// Invariant: both segments are non-empty. Enforced at construction; the
/// `&str` parser accepts exactly one `::` separator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodReference {
    trait_name: String,
    method: String,
}

impl MethodReference {
    pub fn new(
        trait_name: impl Into<String>,
        method: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let trait_name = trait_name.into();
        let method = method.into();
        if trait_name.is_empty() {
            return Err(DomainError::InvalidArgument {
                reason: "missing required argument \"traitName\" for method reference".into(),
            });
        }
        if method.is_empty() {
            return Err(DomainError::InvalidArgument {
                reason: "missing required argument \"method\" for method reference".into(),
            });
        }
        Ok(Self { trait_name, method })
    }

    pub fn trait_name(&self) -> &str {
        &self.trait_name
    }

    pub fn method(&self) -> &str {
        &self.method
    }
}

impl fmt::Display for MethodReference {
    /// Display as `trait::method` format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.trait_name, self.method)
    }
}

impl FromStr for MethodReference {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split("::");
        match (parts.next(), parts.next(), parts.next()) {
            (Some(trait_name), Some(method), None)
                if !trait_name.is_empty() && !method.is_empty() =>
            {
                Self::new(trait_name, method)
            }
            _ => Err(DomainError::InvalidReferenceFormat {
                given: s.to_string(),
            }),
        }
    }
}

impl TryFrom<&str> for MethodReference {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl TryFrom<(&str, &str)> for MethodReference {
    type Error = DomainError;

    fn try_from((trait_name, method): (&str, &str)) -> Result<Self, Self::Error> {
        Self::new(trait_name, method)
    }
}
