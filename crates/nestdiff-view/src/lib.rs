//! Row-view adapter for nestdiff comparison trees.
//!
//! Flattens a [`Row`](nestdiff_diff::Row) tree into displayable rows and owns
//! the expand/collapse protocol: every row with children bears a toggle,
//! equal subtrees start collapsed, and toggling is a pure reducer over
//! [`ToggleStates`].
//!
//! # Key Types
//!
//! - [`DiffView`] / [`RowView`] / [`RowId`] -- Flattened, pre-ordered rows
//! - [`ToggleState`] / [`ToggleStates`] -- Per-row expand/collapse state
//! - [`VisibilityChange`] -- Rows shown or hidden by one toggle

pub mod toggle;
pub mod view;

pub use toggle::{ToggleState, ToggleStates, VisibilityChange};
pub use view::{DiffView, RowId, RowView};
