//! The comparison output: one [`Row`] per field path.

use serde::Serialize;

use nestdiff_types::{Key, Scalar};

/// Which of the two compared structures a value came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    First,
    Second,
}

/// One node of the comparison tree.
///
/// A row describes a single field path. Rows where at least one side holds a
/// container carry `children`; leaf rows carry the scalar values instead.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    /// Key within the parent container. `None` at the root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<Key>,
    /// `true` when this row and its subtree match.
    pub equal: bool,
    /// Loosely equal scalars of different kinds somewhere at or below this row.
    pub equal_but_type_different: bool,
    pub a_present: bool,
    pub b_present: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub a_scalar: Option<Scalar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub b_scalar: Option<Scalar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub a_child_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub b_child_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Row>>,
    /// This row plus every descendant.
    pub row_count: usize,
}

impl Row {
    /// A row comparing two scalars.
    pub(crate) fn leaf(a: &Scalar, b: &Scalar, equal: bool, type_different: bool) -> Self {
        Self {
            field: None,
            equal,
            equal_but_type_different: type_different,
            a_present: true,
            b_present: true,
            a_scalar: Some(a.clone()),
            b_scalar: Some(b.clone()),
            a_child_count: None,
            b_child_count: None,
            children: None,
            row_count: 1,
        }
    }

    /// A row with values on both sides, before children are attached.
    pub(crate) fn both_present() -> Self {
        Self {
            a_present: true,
            b_present: true,
            ..Self::one_sided(Side::First, true)
        }
    }

    /// A row whose value exists on `side` only.
    pub(crate) fn one_sided(side: Side, equal: bool) -> Self {
        Self {
            field: None,
            equal,
            equal_but_type_different: false,
            a_present: side == Side::First,
            b_present: side == Side::Second,
            a_scalar: None,
            b_scalar: None,
            a_child_count: None,
            b_child_count: None,
            children: None,
            row_count: 1,
        }
    }

    pub(crate) fn with_field(mut self, key: &Key) -> Self {
        self.field = Some(key.clone());
        self
    }

    pub(crate) fn set_scalar(&mut self, side: Side, value: &Scalar) {
        match side {
            Side::First => self.a_scalar = Some(value.clone()),
            Side::Second => self.b_scalar = Some(value.clone()),
        }
    }

    pub(crate) fn set_child_count(&mut self, side: Side, count: usize) {
        match side {
            Side::First => self.a_child_count = Some(count),
            Side::Second => self.b_child_count = Some(count),
        }
    }

    /// Attach `children` and fold their row counts in.
    pub(crate) fn set_children(&mut self, children: Vec<Row>) {
        self.row_count = 1 + children.iter().map(|c| c.row_count).sum::<usize>();
        self.children = Some(children);
    }

    /// Child rows, empty for leaf rows.
    pub fn children(&self) -> &[Row] {
        self.children.as_deref().unwrap_or_default()
    }

    /// Returns `true` when at least one side held a container.
    pub fn is_container(&self) -> bool {
        self.children.is_some()
    }

    /// Returns `true` when the row has child rows to expand.
    pub fn is_expandable(&self) -> bool {
        !self.children().is_empty()
    }

    /// Returns `true` when `side` holds a value for this row.
    pub fn is_present(&self, side: Side) -> bool {
        match side {
            Side::First => self.a_present,
            Side::Second => self.b_present,
        }
    }

    pub fn scalar(&self, side: Side) -> Option<&Scalar> {
        match side {
            Side::First => self.a_scalar.as_ref(),
            Side::Second => self.b_scalar.as_ref(),
        }
    }

    pub fn child_count(&self, side: Side) -> Option<usize> {
        match side {
            Side::First => self.a_child_count,
            Side::Second => self.b_child_count,
        }
    }

    /// The direct child row for `key`.
    pub fn child(&self, key: &Key) -> Option<&Row> {
        self.children().iter().find(|c| c.field.as_ref() == Some(key))
    }

    /// Follow `path` from this row.
    pub fn find<K, I>(&self, path: I) -> Option<&Row>
    where
        K: Into<Key>,
        I: IntoIterator<Item = K>,
    {
        path.into_iter()
            .try_fold(self, |row, key| row.child(&key.into()))
    }

    /// Depth-first, pre-order iterator over this row and its descendants.
    pub fn iter(&self) -> Rows<'_> {
        Rows { stack: vec![self] }
    }

    /// Aggregate counts over the subtree.
    pub fn stats(&self) -> DiffStats {
        let mut stats = DiffStats::default();
        for row in self.iter() {
            stats.rows += 1;
            if !row.equal {
                stats.unequal += 1;
            }
            if row.equal_but_type_different && !row.is_container() {
                stats.type_different += 1;
            }
            if !row.a_present {
                stats.missing_from_first += 1;
            }
            if !row.b_present {
                stats.missing_from_second += 1;
            }
        }
        stats
    }
}

/// Pre-order iterator returned by [`Row::iter`].
pub struct Rows<'a> {
    stack: Vec<&'a Row>,
}

impl<'a> Iterator for Rows<'a> {
    type Item = &'a Row;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.stack.pop()?;
        self.stack.extend(row.children().iter().rev());
        Some(row)
    }
}

/// Counts gathered by [`Row::stats`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffStats {
    pub rows: usize,
    pub unequal: usize,
    /// Leaf rows whose scalars only matched loosely.
    pub type_different: usize,
    pub missing_from_first: usize,
    pub missing_from_second: usize,
}
