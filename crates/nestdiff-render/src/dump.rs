//! Textual forms of cell values.

use nestdiff_types::Scalar;

/// Typed dump of a scalar: `string(4) "bar2"`, `int(1)`, `float(1.5)`,
/// `bool(true)`, `NULL`.
pub fn dump_scalar(value: &Scalar) -> String {
    let kind = value.kind();
    match value {
        Scalar::Null => "NULL".to_string(),
        Scalar::Bool(b) => format!("{kind}({b})"),
        Scalar::Int(_) | Scalar::Float(_) => format!("{kind}({value})"),
        Scalar::Str(s) => format!("{kind}({}) \"{s}\"", s.len()),
    }
}

/// Summary shown for a container cell.
pub fn dump_container(count: usize) -> String {
    format!("Array({count})")
}

pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
