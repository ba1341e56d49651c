//! Expand/collapse state for toggle-bearing rows.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::view::RowId;

/// State of one toggle-bearing row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleState {
    Expanded,
    Collapsed,
}

impl ToggleState {
    /// Equal subtrees start collapsed, unequal ones expanded.
    pub fn initial(equal: bool) -> Self {
        if equal {
            ToggleState::Collapsed
        } else {
            ToggleState::Expanded
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            ToggleState::Expanded => ToggleState::Collapsed,
            ToggleState::Collapsed => ToggleState::Expanded,
        }
    }
}

/// The toggle state of every toggle-bearing row in a view.
///
/// Values are immutable; [`ToggleStates::toggle`] returns the next states and
/// leaves `self` untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ToggleStates {
    states: BTreeMap<RowId, ToggleState>,
}

impl ToggleStates {
    pub fn get(&self, id: RowId) -> Option<ToggleState> {
        self.states.get(&id).copied()
    }

    /// Returns `true` only for known rows in the collapsed state.
    pub fn is_collapsed(&self, id: RowId) -> bool {
        self.get(id) == Some(ToggleState::Collapsed)
    }

    /// Flip the state of `id`. Rows without a toggle are ignored.
    pub fn toggle(&self, id: RowId) -> Self {
        let mut next = self.clone();
        if let Some(state) = next.states.get_mut(&id) {
            *state = state.flipped();
        }
        next
    }

    /// Ids of all collapsed rows, in row order.
    pub fn collapsed(&self) -> impl Iterator<Item = RowId> + '_ {
        self.states
            .iter()
            .filter(|(_, s)| **s == ToggleState::Collapsed)
            .map(|(id, _)| *id)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl FromIterator<(RowId, ToggleState)> for ToggleStates {
    fn from_iter<I: IntoIterator<Item = (RowId, ToggleState)>>(iter: I) -> Self {
        Self {
            states: iter.into_iter().collect(),
        }
    }
}

/// Rows whose visibility changed because of one toggle.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct VisibilityChange {
    pub shown: Vec<RowId>,
    pub hidden: Vec<RowId>,
}

impl VisibilityChange {
    pub fn is_empty(&self) -> bool {
        self.shown.is_empty() && self.hidden.is_empty()
    }
}
