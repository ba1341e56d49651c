//! HTML rendering of a row view.
//!
//! The output is one self-contained fragment: a scoped `<style>` block, the
//! comparison table, and a script wiring the toggles. Every instance gets a
//! fresh `__nestdiff_<n>` root id so several comparisons can share a page.
//!
//! Each data row carries `data-row` (its [`RowId`]), `data-end` (one past
//! the last row of its subtree), and `data-ancestors` (space separated ids
//! of its ancestors). The script keeps a set of collapsed ids and, after a
//! toggle, recomputes the subtree's visibility as "no ancestor collapsed",
//! the same rule [`DiffView::is_visible`] applies.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::debug;

use nestdiff_diff::Side;
use nestdiff_view::{DiffView, RowId, RowView, ToggleState, ToggleStates};

use crate::dump::{dump_container, dump_scalar, escape_html};
use crate::options::RenderOptions;

static INSTANCE_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Root element id for the next rendered instance.
fn next_instance_id() -> String {
    let n = INSTANCE_COUNTER.fetch_add(1, Ordering::Relaxed) + 1;
    format!("__nestdiff_{n}")
}

/// A rendered comparison, ready to embed in a page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedOutput {
    /// Id of the instance's root element.
    pub id: String,
    pub html: String,
}

impl fmt::Display for RenderedOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.html)
    }
}

/// Render `view` with the given toggle states.
pub fn render_view(
    view: &DiffView<'_>,
    states: &ToggleStates,
    options: &RenderOptions,
) -> RenderedOutput {
    let id = next_instance_id();
    let html = Fragment {
        id: &id,
        view,
        states,
        options,
    }
    .to_string();
    debug!(
        instance = %id,
        rows = view.len(),
        collapsed = states.collapsed().count(),
        bytes = html.len(),
        "rendered comparison"
    );
    RenderedOutput { id, html }
}

struct Fragment<'a> {
    id: &'a str,
    view: &'a DiffView<'a>,
    states: &'a ToggleStates,
    options: &'a RenderOptions,
}

impl fmt::Display for Fragment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_style(f)?;
        writeln!(f, "<div id=\"{}\" class=\"nestdiff\">", self.id)?;
        writeln!(f, "<table>")?;
        self.write_header(f)?;
        for row in self.view.rows() {
            self.write_row(f, row)?;
        }
        writeln!(f, "</table>")?;
        writeln!(f, "</div>")?;
        self.write_script(f)
    }
}

impl Fragment<'_> {
    fn write_style(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = self.id;
        writeln!(f, "<style type=\"text/css\">")?;
        writeln!(f, "#{id} {{ font-family: arial; font-size: 11px; }}")?;
        writeln!(f, "#{id} table {{ border-collapse: collapse; font-size: 11px; }}")?;
        writeln!(
            f,
            "#{id} td, #{id} th {{ border: 1px solid #000000; vertical-align: top; text-align: left; }}"
        )?;
        writeln!(f, "#{id} tr.nd-equal {{ background-color: #6F6; }}")?;
        writeln!(f, "#{id} tr.nd-type-different {{ background-color: #CFC; }}")?;
        writeln!(f, "#{id} tr.nd-not-equal {{ background-color: #FCC; }}")?;
        writeln!(f, "#{id} td.nd-no-value {{ background-color: #F88; }}")?;
        writeln!(
            f,
            "#{id} .nd-toggle {{ border: 1px solid #666666; font-size: 20px; line-height: 12px; cursor: pointer; text-align: center; }}"
        )?;
        writeln!(f, "</style>")
    }

    fn write_header(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<tr><th>&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;</th><th>Field</th><th>{} structure</th>",
            escape_html(&self.options.title1)
        )?;
        if !self.options.no_second {
            write!(f, "<th>{} structure</th>", escape_html(&self.options.title2))?;
        }
        writeln!(f, "</tr>")
    }

    fn write_row(&self, f: &mut fmt::Formatter<'_>, view: &RowView<'_>) -> fmt::Result {
        let row = view.row;
        let mut class = String::from(if row.equal { "nd-equal" } else { "nd-not-equal" });
        if row.equal_but_type_different {
            class.push_str(" nd-type-different");
        }
        let ancestors: Vec<String> = view.ancestors.iter().map(RowId::to_string).collect();

        write!(
            f,
            "<tr data-row=\"{}\" data-end=\"{}\" data-ancestors=\"{}\" class=\"{class}\"",
            view.id,
            view.id.0 + row.row_count,
            ancestors.join(" "),
        )?;
        if !self.view.is_visible(view.id, self.states) {
            write!(f, " style=\"display:none\"")?;
        }
        write!(f, ">")?;

        write!(f, "<td>")?;
        if view.has_toggle() {
            match self.states.get(view.id).unwrap_or(ToggleState::Expanded) {
                ToggleState::Collapsed => {
                    write!(f, "<div class=\"nd-toggle\" data-state=\"collapsed\">+</div>")?
                }
                ToggleState::Expanded => {
                    write!(f, "<div class=\"nd-toggle\" data-state=\"expanded\">&ndash;</div>")?
                }
            }
        }
        write!(f, "</td><th>{}</th>", escape_html(&view.path))?;

        self.write_cell(f, view, Side::First)?;
        if !self.options.no_second {
            self.write_cell(f, view, Side::Second)?;
        }
        writeln!(f, "</tr>")
    }

    fn write_cell(&self, f: &mut fmt::Formatter<'_>, view: &RowView<'_>, side: Side) -> fmt::Result {
        let row = view.row;
        if !row.is_present(side) {
            return write!(f, "<td class=\"nd-no-value\">&nbsp;</td>");
        }
        let text = match (row.scalar(side), row.child_count(side)) {
            (Some(value), _) => dump_scalar(value),
            (None, Some(count)) => dump_container(count),
            (None, None) => String::new(),
        };
        write!(f, "<td>{}</td>", escape_html(&text))
    }

    fn write_script(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<script type=\"text/javascript\">")?;
        writeln!(f, "(function () {{")?;
        writeln!(f, "  var root = document.getElementById('{}');", self.id)?;
        f.write_str(TOGGLE_SCRIPT)?;
        writeln!(f, "}})();")?;
        writeln!(f, "</script>")
    }
}

/// Body of the per-instance toggle script; expects `root` in scope.
const TOGGLE_SCRIPT: &str = r#"  if (!root) { return; }
  var rows = Array.prototype.slice.call(root.querySelectorAll('tr[data-row]'));
  var collapsed = {};
  rows.forEach(function (tr) {
    var toggle = tr.querySelector('.nd-toggle');
    if (toggle && toggle.getAttribute('data-state') === 'collapsed') {
      collapsed[tr.getAttribute('data-row')] = true;
    }
  });
  function isVisible(tr) {
    var ancestors = tr.getAttribute('data-ancestors');
    if (!ancestors) { return true; }
    return ancestors.split(' ').every(function (id) { return !collapsed[id]; });
  }
  rows.forEach(function (tr) {
    var toggle = tr.querySelector('.nd-toggle');
    if (!toggle) { return; }
    var id = tr.getAttribute('data-row');
    var start = parseInt(id, 10) + 1;
    var end = parseInt(tr.getAttribute('data-end'), 10);
    toggle.onclick = function () {
      collapsed[id] = !collapsed[id];
      toggle.setAttribute('data-state', collapsed[id] ? 'collapsed' : 'expanded');
      toggle.innerHTML = collapsed[id] ? '+' : '&ndash;';
      for (var i = start; i < end; i++) {
        rows[i].style.display = isVisible(rows[i]) ? '' : 'none';
      }
    };
  });
"#;
