//! Structural comparison engine for nestdiff.
//!
//! Walks two canonical values in lock-step and produces a nested [`Row`]
//! tree, one row per field path, annotated with equality status, presence
//! on each side, and aggregate row counts.
//!
//! # Key Types
//!
//! - [`diff`] / [`DiffOptions`] -- Entry point and comparison switches
//! - [`Row`] -- One node of the comparison tree
//! - [`DiffStats`] -- Aggregate counts over a row subtree

pub mod differ;
pub mod row;

pub use differ::{diff, DiffOptions};
pub use row::{DiffStats, Row, Rows, Side};
