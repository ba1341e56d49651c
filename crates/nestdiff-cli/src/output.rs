use colored::{ColoredString, Colorize};
use serde::Serialize;

use nestdiff_diff::{DiffStats, Row, Side};
use nestdiff_render::{dump_container, dump_scalar, RenderOptions};
use nestdiff_view::{DiffView, RowView, ToggleState, ToggleStates};

/// Indented tree of the rows visible under `states`, one line per row.
pub fn render_text(view: &DiffView<'_>, states: &ToggleStates, options: &RenderOptions) -> String {
    let mut out = String::new();
    for id in view.visible_rows(states) {
        let Some(row_view) = view.get(id) else {
            continue;
        };
        out.push_str(&text_line(row_view, states, options));
        out.push('\n');
    }
    out
}

fn text_line(view: &RowView<'_>, states: &ToggleStates, options: &RenderOptions) -> String {
    let row = view.row;
    let marker = match states.get(view.id) {
        Some(ToggleState::Collapsed) => "+",
        Some(ToggleState::Expanded) => "-",
        None => " ",
    };
    let field = row
        .field
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_else(|| "(root)".into());

    let mut line = format!(
        "{}{marker} {}: {}",
        "  ".repeat(view.depth),
        paint(&field, row),
        cell(row, Side::First)
    );
    if !options.no_second {
        line.push_str(" | ");
        line.push_str(&cell(row, Side::Second));
    }
    line
}

fn paint(text: &str, row: &Row) -> ColoredString {
    if !row.equal {
        text.red().bold()
    } else if row.equal_but_type_different {
        text.yellow()
    } else {
        text.green()
    }
}

fn cell(row: &Row, side: Side) -> String {
    if !row.is_present(side) {
        return "(missing)".dimmed().to_string();
    }
    match (row.scalar(side), row.child_count(side)) {
        (Some(value), _) => dump_scalar(value),
        (None, Some(count)) => dump_container(count),
        (None, None) => String::new(),
    }
}

/// One-line summary of a comparison.
pub fn summary(stats: &DiffStats, equal: bool) -> String {
    let verdict = if equal {
        "equal".green().bold()
    } else {
        "different".red().bold()
    };
    format!(
        "{verdict}: {} rows, {} unequal, {} loosely equal, {} missing from first, {} missing from second",
        stats.rows, stats.unequal, stats.type_different, stats.missing_from_first, stats.missing_from_second
    )
}

#[derive(Serialize)]
struct JsonReport<'a> {
    equal: bool,
    stats: DiffStats,
    root: &'a Row,
}

/// The comparison tree and its stats as pretty-printed JSON.
pub fn render_json(root: &Row) -> anyhow::Result<String> {
    let report = JsonReport {
        equal: root.equal,
        stats: root.stats(),
        root,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nestdiff_diff::{diff, DiffOptions};
    use nestdiff_types::{normalize, parse_json};

    fn row(a: &str, b: &str, options: DiffOptions) -> Row {
        diff(
            &normalize(&parse_json(a).unwrap()),
            &normalize(&parse_json(b).unwrap()),
            &options,
        )
    }

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn text_shows_visible_rows_only() {
        plain();
        let root = row(
            r#"{"same": {"x": 1}, "diff": {"y": 1}}"#,
            r#"{"same": {"x": 1}, "diff": {"y": 2}}"#,
            DiffOptions::strict(),
        );
        let view = DiffView::new(&root);
        let text = render_text(&view, &view.initial_states(), &RenderOptions::default());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "+ same: Array(1) | Array(1)",
                "- diff: Array(1) | Array(1)",
                "    y: int(1) | int(2)",
            ]
        );
    }

    #[test]
    fn text_single_column_when_no_second() {
        plain();
        let root = row(
            r#"{"a": "x"}"#,
            "{}",
            DiffOptions {
                strict: true,
                no_second: true,
            },
        );
        let view = DiffView::new(&root);
        let text = render_text(&view, &view.initial_states(), &RenderOptions::single());
        assert_eq!(text, "  a: string(1) \"x\"\n");
    }

    #[test]
    fn text_marks_missing_values() {
        plain();
        let root = row(r#"{}"#, r#"{"b": null}"#, DiffOptions::strict());
        let view = DiffView::new(&root);
        let text = render_text(&view, &view.initial_states(), &RenderOptions::default());
        assert_eq!(text, "  b: (missing) | NULL\n");
    }

    #[test]
    fn json_report_has_stats_and_tree() {
        let root = row(r#"{"a": 1}"#, r#"{"a": 2}"#, DiffOptions::strict());
        let json: serde_json::Value = serde_json::from_str(&render_json(&root).unwrap()).unwrap();
        assert_eq!(json["equal"], false);
        assert_eq!(json["stats"]["rows"], 2);
        assert_eq!(json["root"]["children"][0]["field"], "a");
        assert_eq!(json["root"]["children"][0]["aScalar"], 1);
    }

    #[test]
    fn summary_counts() {
        plain();
        let root = row(r#"{"a": 1}"#, r#"{"a": "1"}"#, DiffOptions::default());
        let line = summary(&root.stats(), root.equal);
        assert_eq!(
            line,
            "equal: 2 rows, 0 unequal, 1 loosely equal, 0 missing from first, 0 missing from second"
        );
    }
}
