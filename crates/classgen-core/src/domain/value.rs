//! Literal default values for constants and properties.
//!
//! A [`ValueSpec`] is the tagged literal a member carries as its default:
//! null, scalars, sequences, and string-keyed mappings, nesting freely
//! through the sequence/mapping variants. [`ValueSpec::Opaque`] carries a
//! raw expression or runtime handle — it is the one variant that is *not* a
//! serializable literal, and constant values reject it anywhere in the
//! structure.

use serde::{Deserialize, Serialize};

/// A member default value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSpec {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// Ordered list; renders as a bracketed list.
    Sequence(Vec<ValueSpec>),
    /// Ordered key-value pairs; renders as a key => value bracketed list.
    Mapping(Vec<(String, ValueSpec)>),
    /// Raw expression or runtime handle, emitted verbatim. Never a literal.
    Opaque(String),
}

impl ValueSpec {
    /// Whether the value is built exclusively from literal kinds,
    /// recursively through sequences and mappings.
    pub fn is_literal(&self) -> bool {
        match self {
            Self::Null | Self::Bool(_) | Self::Int(_) | Self::Float(_) | Self::Str(_) => true,
            Self::Sequence(items) => items.iter().all(ValueSpec::is_literal),
            Self::Mapping(pairs) => pairs.iter().all(|(_, value)| value.is_literal()),
            Self::Opaque(_) => false,
        }
    }

    /// Convenience constructor for a mapping from string-keyed pairs.
    pub fn mapping<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<ValueSpec>,
    {
        Self::Mapping(
            pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Convenience constructor for a sequence.
    pub fn sequence<V>(items: impl IntoIterator<Item = V>) -> Self
    where
        V: Into<ValueSpec>,
    {
        Self::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl From<&str> for ValueSpec {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for ValueSpec {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for ValueSpec {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for ValueSpec {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for ValueSpec {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<Vec<ValueSpec>> for ValueSpec {
    fn from(items: Vec<ValueSpec>) -> Self {
        Self::Sequence(items)
    }
}

impl From<()> for ValueSpec {
    fn from(_: ()) -> Self {
        Self::Null
    }
}
