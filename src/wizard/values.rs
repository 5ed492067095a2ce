//! Typed field values and the session-owned value map.
//!
//! One map, indexed by field key, holds every value the wizard collects.
//! All schema keys are always present (seeded with defaults), so "undefined"
//! never exists inside a session — absent prefill simply leaves the default.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::SessionError;
use crate::schema::{self, LOCALE_SEEDED_KEYS, ValueKind};

/// A typed value for one field.
///
/// Untagged serde, so values serialize to the plain JSON shapes the profile
/// wire format uses (`"text"`, `true`, `["a", "b"]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Tags(Vec<String>),
}

impl FieldValue {
    /// The kind this value belongs to.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Text(_) => ValueKind::Text,
            Self::Flag(_) => ValueKind::Flag,
            Self::Tags(_) => ValueKind::Tags,
        }
    }

    /// Default value for a field of the given kind.
    pub fn default_for(kind: ValueKind) -> Self {
        match kind {
            ValueKind::Text => Self::Text(String::new()),
            ValueKind::Flag => Self::Flag(false),
            ValueKind::Tags => Self::Tags(Vec::new()),
        }
    }

    /// Whether the value counts as "present" for step completeness.
    ///
    /// Text must be non-whitespace, tags must be non-empty; booleans are
    /// always present regardless of truthiness.
    pub fn is_present(&self) -> bool {
        match self {
            Self::Text(s) => !s.trim().is_empty(),
            Self::Flag(_) => true,
            Self::Tags(tags) => !tags.is_empty(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_tags(&self) -> Option<&[String]> {
        match self {
            Self::Tags(tags) => Some(tags),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        Self::Flag(b)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(tags: Vec<String>) -> Self {
        Self::Tags(tags)
    }
}

/// The full field-value map for one wizard session.
///
/// Rejects unknown keys and kind mismatches so the invariants hold under
/// arbitrary navigation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueMap {
    inner: HashMap<&'static str, FieldValue>,
}

impl ValueMap {
    /// Build a map with every schema key at its declared default: empty
    /// string, `false`, or empty array. The language triple seeds from the
    /// active interface locale instead of the empty string.
    pub fn with_defaults(locale: &str) -> Self {
        let mut inner = HashMap::with_capacity(schema::FIELDS.len());
        for (key, kind) in schema::FIELDS {
            let value = if LOCALE_SEEDED_KEYS.contains(key) {
                FieldValue::Text(locale.to_string())
            } else {
                FieldValue::default_for(*kind)
            };
            inner.insert(*key, value);
        }
        Self { inner }
    }

    /// The value under `key`. All schema keys are always present.
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.inner.get(key)
    }

    /// Set the value under `key`, enforcing the declared kind.
    pub fn set(&mut self, key: &str, value: FieldValue) -> Result<(), SessionError> {
        let (key, kind) = schema::field_kind(key)
            .ok_or_else(|| SessionError::UnknownKey(key.to_string()))?;
        if value.kind() != kind {
            return Err(SessionError::KindMismatch {
                key: key.to_string(),
                expected: match kind {
                    ValueKind::Text => "text",
                    ValueKind::Flag => "flag",
                    ValueKind::Tags => "tags",
                },
            });
        }
        self.inner.insert(key, value);
        Ok(())
    }

    /// Convenience: the trimmed text under a text field, `""` otherwise.
    pub fn text(&self, key: &str) -> &str {
        self.get(key).and_then(FieldValue::as_text).unwrap_or("")
    }

    /// Convenience: the boolean under a flag field, `false` otherwise.
    pub fn flag(&self, key: &str) -> bool {
        self.get(key).and_then(FieldValue::as_flag).unwrap_or(false)
    }

    /// Convenience: the tags under an array field, empty otherwise.
    pub fn tags(&self, key: &str) -> &[String] {
        self.get(key).and_then(FieldValue::as_tags).unwrap_or(&[])
    }

    /// Iterate key/value pairs in schema (registry) order.
    pub fn iter_in_schema_order(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> {
        schema::FIELDS.iter().filter_map(|(key, _)| {
            self.inner.get(key).map(|value| (*key, value))
        })
    }
}
