//! Flattened, pre-ordered row views over a comparison tree.
//!
//! Every row of the tree below the root becomes one [`RowView`]. Because the
//! flattening is pre-order, a row's subtree is the contiguous run of views
//! that follows it, `row_count - 1` entries long.
//!
//! A row is visible iff none of its ancestors is collapsed. Expanding a row
//! therefore reveals its descendants except those below a collapsed
//! descendant, and collapsing a row hides its whole subtree while leaving the
//! descendants' own states untouched.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use nestdiff_diff::Row;

use crate::toggle::{ToggleState, ToggleStates, VisibilityChange};

/// Position of a row in the flattened view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RowId(pub usize);

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One displayable row.
#[derive(Clone, Debug)]
pub struct RowView<'a> {
    pub id: RowId,
    pub row: &'a Row,
    /// Number of ancestors within the view.
    pub depth: usize,
    /// Bracketed key path from the top, e.g. `[c][foo2][0]`.
    pub path: String,
    /// Ancestors within the view, outermost first. Each one bears a toggle.
    pub ancestors: Vec<RowId>,
    end: usize,
}

impl RowView<'_> {
    pub fn parent(&self) -> Option<RowId> {
        self.ancestors.last().copied()
    }

    /// Returns `true` when the row carries an expand/collapse toggle.
    pub fn has_toggle(&self) -> bool {
        self.row.is_expandable()
    }

    /// Ids of every row produced from this row's children, recursively.
    pub fn subtree(&self) -> impl Iterator<Item = RowId> {
        (self.id.0 + 1..self.end).map(RowId)
    }
}

/// The adapter between a [`Row`] tree and an interactive presentation.
#[derive(Clone, Debug)]
pub struct DiffView<'a> {
    rows: Vec<RowView<'a>>,
}

impl<'a> DiffView<'a> {
    /// Flatten `root`. A root holding containers on both sides contributes
    /// its children as the top-level rows. Any other root is shown as a row
    /// of its own with an empty path, above its children if it has any.
    pub fn new(root: &'a Row) -> Self {
        let mut rows = Vec::with_capacity(root.row_count);
        let mut ancestors = Vec::new();
        if root.a_child_count.is_some() && root.b_child_count.is_some() {
            for child in root.children() {
                flatten(child, "", &mut ancestors, &mut rows);
            }
        } else {
            flatten(root, "", &mut ancestors, &mut rows);
        }

        let view = Self { rows };
        debug!(
            rows = view.rows.len(),
            toggles = view.rows.iter().filter(|r| r.has_toggle()).count(),
            "row view built"
        );
        view
    }

    pub fn rows(&self) -> &[RowView<'a>] {
        &self.rows
    }

    pub fn get(&self, id: RowId) -> Option<&RowView<'a>> {
        self.rows.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Collapsed for equal rows, expanded for unequal ones.
    pub fn initial_states(&self) -> ToggleStates {
        self.rows
            .iter()
            .filter(|r| r.has_toggle())
            .map(|r| (r.id, ToggleState::initial(r.row.equal)))
            .collect()
    }

    /// Rows produced from `id`'s children, recursively. Empty for unknown ids.
    pub fn subtree(&self, id: RowId) -> Vec<RowId> {
        self.get(id).map(|r| r.subtree().collect()).unwrap_or_default()
    }

    pub fn is_visible(&self, id: RowId, states: &ToggleStates) -> bool {
        self.get(id)
            .is_some_and(|r| r.ancestors.iter().all(|a| !states.is_collapsed(*a)))
    }

    pub fn visible_rows(&self, states: &ToggleStates) -> Vec<RowId> {
        self.rows
            .iter()
            .filter(|r| self.is_visible(r.id, states))
            .map(|r| r.id)
            .collect()
    }

    /// Toggle `id` and report which rows of its subtree appeared or
    /// disappeared. Rows without a toggle leave everything unchanged.
    pub fn toggle(&self, id: RowId, states: &ToggleStates) -> (ToggleStates, VisibilityChange) {
        let next = states.toggle(id);
        let mut change = VisibilityChange::default();
        if let Some(view) = self.get(id) {
            for row in view.subtree() {
                match (self.is_visible(row, states), self.is_visible(row, &next)) {
                    (false, true) => change.shown.push(row),
                    (true, false) => change.hidden.push(row),
                    _ => {}
                }
            }
        }
        (next, change)
    }
}

fn flatten<'a>(
    row: &'a Row,
    parent_path: &str,
    ancestors: &mut Vec<RowId>,
    out: &mut Vec<RowView<'a>>,
) {
    let id = RowId(out.len());
    let path = match &row.field {
        Some(key) => format!("{parent_path}[{key}]"),
        None => parent_path.to_string(),
    };
    out.push(RowView {
        id,
        row,
        depth: ancestors.len(),
        path: path.clone(),
        ancestors: ancestors.clone(),
        end: id.0 + row.row_count,
    });

    ancestors.push(id);
    for child in row.children() {
        flatten(child, &path, ancestors, out);
    }
    ancestors.pop();
}
