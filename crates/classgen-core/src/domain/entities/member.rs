//! Constant/property member value object.

use crate::domain::value::ValueSpec;
use crate::domain::value_objects::Visibility;

/// Discriminant for the unified member collection.
///
/// Constants and properties share one case-insensitive name space on the
/// class model; the kind decides which collection view a member appears in
/// and how the renderer qualifies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Constant,
    Property,
}

/// A class constant or property.
///
/// Identity plus attributes only — rendering is delegated to the
/// [`MemberRenderer`](crate::application::ports::MemberRenderer) port.
/// Name validity and uniqueness are enforced by the owning
/// [`ClassModel`](crate::domain::ClassModel) at add time, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    name: String,
    kind: MemberKind,
    visibility: Visibility,
    default: Option<ValueSpec>,
}

impl Member {
    /// Create a property with no default value.
    pub fn property(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: MemberKind::Property,
            visibility: Visibility::Public,
            default: None,
        }
    }

    /// Create a constant with the given value.
    pub fn constant(name: impl Into<String>, value: impl Into<ValueSpec>) -> Self {
        Self {
            name: name.into(),
            kind: MemberKind::Constant,
            visibility: Visibility::Public,
            default: Some(value.into()),
        }
    }

    /// Set the default value, consuming self.
    pub fn with_default(mut self, value: impl Into<ValueSpec>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> MemberKind {
        self.kind
    }

    pub fn is_constant(&self) -> bool {
        self.kind == MemberKind::Constant
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn default_value(&self) -> Option<&ValueSpec> {
        self.default.as_ref()
    }
}

/// Bare names make plain properties, mirroring the bare-name form of the
/// mutation API.
impl From<&str> for Member {
    fn from(name: &str) -> Self {
        Self::property(name)
    }
}

impl From<String> for Member {
    fn from(name: String) -> Self {
        Self::property(name)
    }
}
