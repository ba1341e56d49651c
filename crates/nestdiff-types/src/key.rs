use std::fmt;

use serde::Serialize;

/// A field key within a container.
///
/// Sequences are keyed by position, mappings by name. A name that is the
/// canonical decimal rendering of an integer is folded into an [`Key::Index`]
/// when built through [`Key::parse`], so `{"0": ..}` and `[..]` address the
/// same field.
///
/// `Name` is expected to hold a non-canonical name. A directly built
/// `Key::Name("0")` is folded by [`Key::canonical`], which [`normalize`]
/// applies to every mapping key.
///
/// [`normalize`]: fn@crate::normalize
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Key {
    Index(i64),
    Name(String),
}

impl Key {
    /// Build a key from a mapping member name.
    pub fn parse(name: &str) -> Self {
        match canonical_index(name) {
            Some(index) => Key::Index(index),
            None => Key::Name(name.to_string()),
        }
    }

    /// Fold a `Name` holding a canonical decimal into an `Index`.
    pub fn canonical(self) -> Self {
        match self {
            Key::Name(name) => match canonical_index(&name) {
                Some(index) => Key::Index(index),
                None => Key::Name(name),
            },
            index => index,
        }
    }
}

/// Parse `name` as an integer only if formatting it back yields `name`.
fn canonical_index(name: &str) -> Option<i64> {
    let index: i64 = name.parse().ok()?;
    (index.to_string() == name).then_some(index)
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(i) => write!(f, "{i}"),
            Key::Name(n) => f.write_str(n),
        }
    }
}

impl From<i64> for Key {
    fn from(index: i64) -> Self {
        Key::Index(index)
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Key::Index(index as i64)
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::parse(name)
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::parse(&name)
    }
}
