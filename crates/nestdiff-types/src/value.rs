use indexmap::IndexMap;
use serde::Serialize;

use crate::key::Key;
use crate::scalar::Scalar;

/// Ordered mapping from field key to canonical value. Iteration follows
/// insertion order.
pub type Container = IndexMap<Key, CanonicalValue>;

/// A normalized value: either a leaf or an ordered container.
///
/// Produced by [`normalize`](crate::normalize). The differ only ever sees
/// this form.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CanonicalValue {
    Scalar(Scalar),
    Container(Container),
}

impl CanonicalValue {
    /// An empty container.
    pub fn empty() -> Self {
        CanonicalValue::Container(Container::new())
    }

    pub fn is_container(&self) -> bool {
        matches!(self, CanonicalValue::Container(_))
    }

    pub fn as_container(&self) -> Option<&Container> {
        match self {
            CanonicalValue::Container(c) => Some(c),
            CanonicalValue::Scalar(_) => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            CanonicalValue::Scalar(s) => Some(s),
            CanonicalValue::Container(_) => None,
        }
    }
}

impl From<Scalar> for CanonicalValue {
    fn from(s: Scalar) -> Self {
        CanonicalValue::Scalar(s)
    }
}

impl From<Container> for CanonicalValue {
    fn from(c: Container) -> Self {
        CanonicalValue::Container(c)
    }
}

/// A raw, un-normalized input value.
///
/// Besides scalars and the two container shapes, inputs may carry objects
/// with named properties and opaque host handles. Both of those degrade
/// during normalization; see [`normalize`](crate::normalize).
#[derive(Clone, Debug, PartialEq)]
pub enum InputValue {
    Scalar(Scalar),
    /// Indexable sequence, keyed by position.
    List(Vec<InputValue>),
    /// Ordered key to value mapping.
    Map(Vec<(Key, InputValue)>),
    /// An object with enumerable properties.
    Object {
        class: String,
        properties: Vec<(String, InputValue)>,
    },
    /// A value with no introspectable structure (a file handle, a closure).
    Opaque(String),
}

impl InputValue {
    pub fn null() -> Self {
        InputValue::Scalar(Scalar::Null)
    }

    /// Build a mapping from `(key, value)` pairs.
    pub fn map<K, I>(entries: I) -> Self
    where
        K: Into<Key>,
        I: IntoIterator<Item = (K, InputValue)>,
    {
        InputValue::Map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl From<Scalar> for InputValue {
    fn from(s: Scalar) -> Self {
        InputValue::Scalar(s)
    }
}

impl From<&str> for InputValue {
    fn from(s: &str) -> Self {
        InputValue::Scalar(Scalar::from(s))
    }
}

impl From<i64> for InputValue {
    fn from(i: i64) -> Self {
        InputValue::Scalar(Scalar::Int(i))
    }
}

impl From<Vec<InputValue>> for InputValue {
    fn from(items: Vec<InputValue>) -> Self {
        InputValue::List(items)
    }
}

impl From<CanonicalValue> for InputValue {
    fn from(value: CanonicalValue) -> Self {
        match value {
            CanonicalValue::Scalar(s) => InputValue::Scalar(s),
            CanonicalValue::Container(c) => {
                InputValue::Map(c.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}
