//! Leaf values and the two equality relations used by the differ.
//!
//! *Identity* equality requires the same kind and the same value. *Loose*
//! equality coerces across kinds: booleans compare by truthiness, numbers
//! compare numerically with numeric strings, and `Null` matches the zero
//! value of whatever it is compared against.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A non-container value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

/// The kind of a [`Scalar`], independent of its value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Null,
    Bool,
    Int,
    Float,
    Str,
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScalarKind::Null => "null",
            ScalarKind::Bool => "bool",
            ScalarKind::Int => "int",
            ScalarKind::Float => "float",
            ScalarKind::Str => "string",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug)]
enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    fn equals(self, other: Number) -> bool {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            (a, b) => a.as_f64() == b.as_f64(),
        }
    }

    fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }
}

impl Scalar {
    pub fn kind(&self) -> ScalarKind {
        match self {
            Scalar::Null => ScalarKind::Null,
            Scalar::Bool(_) => ScalarKind::Bool,
            Scalar::Int(_) => ScalarKind::Int,
            Scalar::Float(_) => ScalarKind::Float,
            Scalar::Str(_) => ScalarKind::Str,
        }
    }

    /// Truthiness used when a boolean takes part in a loose comparison.
    pub fn is_truthy(&self) -> bool {
        match self {
            Scalar::Null => false,
            Scalar::Bool(b) => *b,
            Scalar::Int(i) => *i != 0,
            Scalar::Float(f) => *f != 0.0,
            Scalar::Str(s) => !(s.is_empty() || s == "0"),
        }
    }

    /// Same kind and same value. Two NaNs are identical.
    pub fn identical(&self, other: &Scalar) -> bool {
        match (self, other) {
            (Scalar::Float(a), Scalar::Float(b)) => a == b || (a.is_nan() && b.is_nan()),
            (a, b) => a == b,
        }
    }

    /// Coercive equality.
    pub fn loosely_equals(&self, other: &Scalar) -> bool {
        match (self, other) {
            (Scalar::Null, Scalar::Null) => true,
            (Scalar::Bool(b), o) | (o, Scalar::Bool(b)) => *b == o.is_truthy(),
            (Scalar::Null, Scalar::Str(s)) | (Scalar::Str(s), Scalar::Null) => s.is_empty(),
            (Scalar::Null, n) | (n, Scalar::Null) => !n.is_truthy(),
            (Scalar::Str(a), Scalar::Str(b)) => match (numeric(a), numeric(b)) {
                (Some(x), Some(y)) => x.equals(y),
                _ => a == b,
            },
            (Scalar::Str(s), n) | (n, Scalar::Str(s)) => {
                let Some(num) = n.as_number() else {
                    return false;
                };
                match numeric(s) {
                    Some(parsed) => num.equals(parsed),
                    None => n.to_string() == *s,
                }
            }
            (a, b) => match (a.as_number(), b.as_number()) {
                (Some(x), Some(y)) => x.equals(y),
                _ => false,
            },
        }
    }

    fn as_number(&self) -> Option<Number> {
        match self {
            Scalar::Int(i) => Some(Number::Int(*i)),
            Scalar::Float(f) => Some(Number::Float(*f)),
            _ => None,
        }
    }
}

/// Parse a numeric string (surrounding whitespace allowed). Rejects the
/// textual infinities and NaN that `f64::from_str` would accept.
fn numeric(s: &str) -> Option<Number> {
    let trimmed = s.trim();
    if trimmed.is_empty()
        || !trimmed
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
        || !trimmed.chars().any(|c| c.is_ascii_digit())
    {
        return None;
    }
    if let Ok(i) = trimmed.parse::<i64>() {
        return Some(Number::Int(i));
    }
    trimmed.parse::<f64>().ok().map(Number::Float)
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => Ok(()),
            Scalar::Bool(true) => f.write_str("1"),
            Scalar::Bool(false) => Ok(()),
            Scalar::Int(i) => write!(f, "{i}"),
            Scalar::Float(x) if x.is_finite() && x.fract() == 0.0 && x.abs() < 1e15 => {
                write!(f, "{}", *x as i64)
            }
            Scalar::Float(x) => write!(f, "{x}"),
            Scalar::Str(s) => f.write_str(s),
        }
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

impl From<i64> for Scalar {
    fn from(i: i64) -> Self {
        Scalar::Int(i)
    }
}

impl From<f64> for Scalar {
    fn from(f: f64) -> Self {
        Scalar::Float(f)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Str(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &str) -> Scalar {
        Scalar::from(v)
    }

    #[test]
    fn identity_requires_same_kind() {
        assert!(Scalar::Int(1).identical(&Scalar::Int(1)));
        assert!(!Scalar::Int(1).identical(&s("1")));
        assert!(!Scalar::Int(1).identical(&Scalar::Float(1.0)));
        assert!(Scalar::Float(f64::NAN).identical(&Scalar::Float(f64::NAN)));
        assert!(Scalar::Null.identical(&Scalar::Null));
    }

    #[test]
    fn loose_numbers_and_numeric_strings() {
        assert!(Scalar::Int(1).loosely_equals(&s("1")));
        assert!(s("1").loosely_equals(&Scalar::Int(1)));
        assert!(Scalar::Int(1).loosely_equals(&Scalar::Float(1.0)));
        assert!(s("10").loosely_equals(&s("1e1")));
        assert!(s(" 5").loosely_equals(&Scalar::Int(5)));
        assert!(!s("abc").loosely_equals(&Scalar::Int(0)));
        assert!(!s("1a").loosely_equals(&Scalar::Int(1)));
        assert!(!s("abc").loosely_equals(&s("ABC")));
    }

    #[test]
    fn loose_null_and_bool() {
        assert!(Scalar::Null.loosely_equals(&s("")));
        assert!(!Scalar::Null.loosely_equals(&s("0")));
        assert!(Scalar::Null.loosely_equals(&Scalar::Int(0)));
        assert!(Scalar::Null.loosely_equals(&Scalar::Bool(false)));
        assert!(Scalar::Bool(true).loosely_equals(&s("bar")));
        assert!(Scalar::Bool(false).loosely_equals(&s("0")));
        assert!(!Scalar::Bool(true).loosely_equals(&Scalar::Int(0)));
    }

    #[test]
    fn textual_infinity_is_not_numeric() {
        assert!(numeric("inf").is_none());
        assert!(numeric("NaN").is_none());
        assert!(numeric("-").is_none());
        assert!(matches!(numeric("2.5"), Some(Number::Float(f)) if f == 2.5));
    }

    #[test]
    fn float_display_drops_integral_fraction() {
        assert_eq!(Scalar::Float(3.0).to_string(), "3");
        assert_eq!(Scalar::Float(1.5).to_string(), "1.5");
        assert!(Scalar::Float(3.0).loosely_equals(&s("3")));
    }
}
