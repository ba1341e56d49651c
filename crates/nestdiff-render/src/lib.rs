//! HTML presentation of nestdiff comparisons.
//!
//! [`diff`] is the one-call entry point: it normalizes both inputs, compares
//! them, and returns a self-contained HTML fragment with per-row
//! expand/collapse toggles. Each fragment is namespaced by its own root id,
//! so any number of them can be embedded in the same page.
//!
//! ```no_run
//! use nestdiff_render::{diff, RenderOptions};
//! use nestdiff_types::parse_json;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let expected = parse_json(r#"{"a": 1, "b": [1, 2]}"#)?;
//! let actual = parse_json(r#"{"a": "1", "b": [1, 3]}"#)?;
//! let output = diff(&expected, &actual, false, &RenderOptions::default());
//! println!("{output}");
//! # Ok(())
//! # }
//! ```

pub mod dump;
pub mod error;
pub mod html;
pub mod options;

use nestdiff_diff::{DiffOptions, Row};
use nestdiff_types::{normalize, InputValue};
use nestdiff_view::DiffView;

pub use dump::{dump_container, dump_scalar, escape_html};
pub use error::{RenderError, RenderResult};
pub use html::{render_view, RenderedOutput};
pub use options::RenderOptions;

/// Compare `first` with `second` and render the result.
///
/// `strict_equality` compares scalars by kind and value; otherwise loose
/// equality applies and loosely-equal rows of different kinds are marked.
pub fn diff(
    first: &InputValue,
    second: &InputValue,
    strict_equality: bool,
    options: &RenderOptions,
) -> RenderedOutput {
    let diff_options = DiffOptions {
        strict: strict_equality,
        no_second: options.no_second,
    };
    let root = nestdiff_diff::diff(&normalize(first), &normalize(second), &diff_options);
    render(&root, options)
}

/// Render an already computed comparison tree under its initial toggle states.
pub fn render(root: &Row, options: &RenderOptions) -> RenderedOutput {
    let view = DiffView::new(root);
    render_view(&view, &view.initial_states(), options)
}
