use std::io::Read;
use std::path::Path;

use anyhow::Context;
use tracing::debug;

use nestdiff_types::{InputFormat, InputValue};

/// Load a document from `path`, or JSON from stdin when `path` is `-`.
pub fn load(path: &Path) -> anyhow::Result<InputValue> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading stdin")?;
        return InputFormat::Json.parse(&text).context("parsing stdin");
    }

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let format = InputFormat::from_extension(path.extension().and_then(|e| e.to_str()));
    debug!(path = %path.display(), ?format, bytes = text.len(), "loading input");
    format
        .parse(&text)
        .with_context(|| format!("parsing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_json() {
        let file = temp(".json", r#"{"a": [1, 2]}"#);
        let value = load(file.path()).unwrap();
        assert_eq!(
            value,
            InputValue::map([("a", InputValue::List(vec![1i64.into(), 2i64.into()]))])
        );
    }

    #[test]
    fn loads_toml_by_extension() {
        let file = temp(".toml", "a = 1\n");
        let value = load(file.path()).unwrap();
        assert_eq!(value, InputValue::map([("a", InputValue::from(1i64))]));
    }

    #[test]
    fn unknown_extension_is_json() {
        let file = temp(".data", "[true]");
        assert!(matches!(load(file.path()).unwrap(), InputValue::List(_)));
    }

    #[test]
    fn parse_errors_name_the_file() {
        let file = temp(".json", "{");
        let err = load(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("parsing "));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load(Path::new("/nonexistent/input.json")).unwrap_err();
        assert!(err.to_string().contains("reading"));
    }
}
