//! Building [`InputValue`]s from serialized documents.
//!
//! JSON and TOML documents map onto the scalar, sequence, and mapping
//! shapes. Member order is preserved, and member names that are decimal
//! integers become positional keys.

use serde::{Deserialize, Serialize};

use crate::error::TypeResult;
use crate::key::Key;
use crate::scalar::Scalar;
use crate::value::InputValue;

/// Supported document formats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    #[default]
    Json,
    Toml,
}

impl InputFormat {
    /// Pick a format from a file extension. Anything unknown is JSON.
    pub fn from_extension(ext: Option<&str>) -> Self {
        match ext.map(str::to_ascii_lowercase).as_deref() {
            Some("toml") => InputFormat::Toml,
            _ => InputFormat::Json,
        }
    }

    /// Parse `text` in this format.
    pub fn parse(self, text: &str) -> TypeResult<InputValue> {
        match self {
            InputFormat::Json => parse_json(text),
            InputFormat::Toml => parse_toml(text),
        }
    }
}

/// Parse a JSON document.
pub fn parse_json(text: &str) -> TypeResult<InputValue> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    Ok(value.into())
}

/// Parse a TOML document.
pub fn parse_toml(text: &str) -> TypeResult<InputValue> {
    let table: toml::Table = toml::from_str(text)?;
    Ok(toml::Value::Table(table).into())
}

impl From<serde_json::Value> for InputValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => InputValue::Scalar(Scalar::Null),
            Value::Bool(b) => InputValue::Scalar(Scalar::Bool(b)),
            Value::Number(n) => match n.as_i64() {
                Some(i) => InputValue::Scalar(Scalar::Int(i)),
                None => InputValue::Scalar(Scalar::Float(n.as_f64().unwrap_or(f64::NAN))),
            },
            Value::String(s) => InputValue::Scalar(Scalar::Str(s)),
            Value::Array(items) => InputValue::List(items.into_iter().map(Into::into).collect()),
            Value::Object(members) => InputValue::Map(
                members
                    .into_iter()
                    .map(|(name, v)| (Key::parse(&name), v.into()))
                    .collect(),
            ),
        }
    }
}

impl From<toml::Value> for InputValue {
    fn from(value: toml::Value) -> Self {
        use toml::Value;

        match value {
            Value::String(s) => InputValue::Scalar(Scalar::Str(s)),
            Value::Integer(i) => InputValue::Scalar(Scalar::Int(i)),
            Value::Float(f) => InputValue::Scalar(Scalar::Float(f)),
            Value::Boolean(b) => InputValue::Scalar(Scalar::Bool(b)),
            Value::Datetime(dt) => InputValue::Scalar(Scalar::Str(dt.to_string())),
            Value::Array(items) => InputValue::List(items.into_iter().map(Into::into).collect()),
            Value::Table(members) => InputValue::Map(
                members
                    .into_iter()
                    .map(|(name, v)| (Key::parse(&name), v.into()))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TypeError;
    use serde_json::json;

    #[test]
    fn json_shapes() {
        let input = InputValue::from(json!({"b": 1, "a": [true, null, 2.5], "0": "d"}));
        assert_eq!(
            input,
            InputValue::map([
                (Key::from("b"), InputValue::from(1i64)),
                (
                    Key::from("a"),
                    InputValue::List(vec![
                        Scalar::Bool(true).into(),
                        InputValue::null(),
                        Scalar::Float(2.5).into(),
                    ])
                ),
                (Key::Index(0), InputValue::from("d")),
            ])
        );
    }

    #[test]
    fn json_member_order_is_preserved() {
        let input = parse_json(r#"{"z": 1, "m": 2, "a": 3}"#).unwrap();
        let InputValue::Map(entries) = input else {
            panic!("expected a map");
        };
        let names: Vec<String> = entries.iter().map(|(k, _)| k.to_string()).collect();
        assert_eq!(names, vec!["z", "m", "a"]);
    }

    #[test]
    fn toml_document() {
        let input = parse_toml("title = \"x\"\n[server]\nport = 8080\n").unwrap();
        assert_eq!(
            input,
            InputValue::map([
                ("title", InputValue::from("x")),
                ("server", InputValue::map([("port", InputValue::from(8080i64))])),
            ])
        );
    }

    #[test]
    fn malformed_documents_error() {
        assert!(matches!(parse_json("{"), Err(TypeError::Json(_))));
        assert!(matches!(parse_toml("= nope"), Err(TypeError::Toml(_))));
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(InputFormat::from_extension(Some("TOML")), InputFormat::Toml);
        assert_eq!(InputFormat::from_extension(Some("json")), InputFormat::Json);
        assert_eq!(InputFormat::from_extension(None), InputFormat::Json);
    }
}
