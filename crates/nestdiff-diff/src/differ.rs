//! Recursive lock-step comparison of two canonical values.
//!
//! The walk dispatches on the kinds found at each position:
//!
//! - both containers: the ordered union of keys (first structure's order,
//!   then keys only the second has) becomes the child rows;
//! - one container: children are built from that side alone;
//! - both scalars: a leaf row compared with identity or loose equality.
//!
//! Rows for values that exist on one side only are equal exactly when the
//! value comes from the first structure and `no_second` is set. A value
//! missing from the first structure is never equal, even under `no_second`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use nestdiff_types::{CanonicalValue, Container, Scalar};

use crate::row::{Row, Side};

/// Comparison switches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffOptions {
    /// Compare scalars by identity instead of loose equality.
    pub strict: bool,
    /// There is no meaningful second structure; values missing from it match.
    pub no_second: bool,
}

impl DiffOptions {
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Default::default()
        }
    }
}

/// Compare `a` against `b` and return the root row.
pub fn diff(a: &CanonicalValue, b: &CanonicalValue, options: &DiffOptions) -> Row {
    let root = Differ { options }.compare(a, b);
    debug!(
        rows = root.row_count,
        equal = root.equal,
        strict = options.strict,
        no_second = options.no_second,
        "diff computed"
    );
    root
}

struct Differ<'o> {
    options: &'o DiffOptions,
}

impl Differ<'_> {
    fn compare(&self, a: &CanonicalValue, b: &CanonicalValue) -> Row {
        match (a, b) {
            (CanonicalValue::Container(ca), CanonicalValue::Container(cb)) => {
                self.both_containers(ca, cb)
            }
            (CanonicalValue::Container(ca), CanonicalValue::Scalar(sb)) => {
                self.container_against_scalar(Side::First, ca, sb)
            }
            (CanonicalValue::Scalar(sa), CanonicalValue::Container(cb)) => {
                self.container_against_scalar(Side::Second, cb, sa)
            }
            (CanonicalValue::Scalar(sa), CanonicalValue::Scalar(sb)) => self.scalars(sa, sb),
        }
    }

    fn both_containers(&self, ca: &Container, cb: &Container) -> Row {
        let mut children = Vec::with_capacity(ca.len().max(cb.len()));

        for (key, va) in ca {
            let child = match cb.get(key) {
                Some(vb) => self.compare(va, vb),
                None => self.one_sided(Side::First, va),
            };
            children.push(child.with_field(key));
        }
        for (key, vb) in cb {
            if ca.contains_key(key) {
                continue;
            }
            let mut child = self.one_sided(Side::Second, vb);
            child.equal = false;
            children.push(child.with_field(key));
        }

        let mut row = Row::both_present();
        row.equal = children.iter().all(|c| c.equal);
        row.equal_but_type_different = children.iter().any(|c| c.equal_but_type_different);
        row.a_child_count = Some(ca.len());
        row.b_child_count = Some(cb.len());
        row.set_children(children);
        row
    }

    /// The container on `side` faces a scalar on the other side.
    fn container_against_scalar(&self, side: Side, container: &Container, other: &Scalar) -> Row {
        let mut row = self.one_sided_container(side, container);
        let other_side = match side {
            Side::First => Side::Second,
            Side::Second => Side::First,
        };
        row.a_present = true;
        row.b_present = true;
        row.set_scalar(other_side, other);
        if side == Side::Second {
            row.equal = false;
        }
        row
    }

    fn scalars(&self, a: &Scalar, b: &Scalar) -> Row {
        let identical = a.identical(b);
        if self.options.strict {
            Row::leaf(a, b, identical, false)
        } else {
            let loose = a.loosely_equals(b);
            Row::leaf(a, b, loose, loose && !identical)
        }
    }

    /// A value present on `side` only, with every descendant one-sided too.
    fn one_sided(&self, side: Side, value: &CanonicalValue) -> Row {
        match value {
            CanonicalValue::Scalar(s) => {
                let mut row = Row::one_sided(side, self.options.no_second);
                row.set_scalar(side, s);
                row
            }
            CanonicalValue::Container(c) => self.one_sided_container(side, c),
        }
    }

    fn one_sided_container(&self, side: Side, container: &Container) -> Row {
        let mut row = Row::one_sided(side, self.options.no_second);
        row.set_child_count(side, container.len());
        row.set_children(
            container
                .iter()
                .map(|(key, v)| self.one_sided(side, v).with_field(key))
                .collect(),
        );
        row
    }
}
