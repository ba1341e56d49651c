//! Foundation types for nestdiff.
//!
//! This crate provides the value model shared by every other nestdiff crate:
//! the raw [`InputValue`] a caller hands in, the [`normalize`] pass that
//! turns it into a [`CanonicalValue`], and the [`Scalar`] equality relations
//! the differ builds on.
//!
//! # Key Types
//!
//! - [`Key`] -- Field key within a container (position or name)
//! - [`Scalar`] -- Leaf value with identity and loose equality
//! - [`CanonicalValue`] / [`Container`] -- Normalized, ordered value tree
//! - [`InputValue`] -- Raw input, including objects and opaque handles
//! - [`InputFormat`] -- JSON / TOML document loading

pub mod error;
pub mod input;
pub mod key;
pub mod normalize;
pub mod scalar;
pub mod value;

pub use error::{TypeError, TypeResult};
pub use input::{parse_json, parse_toml, InputFormat};
pub use key::Key;
pub use normalize::normalize;
pub use scalar::{Scalar, ScalarKind};
pub use value::{CanonicalValue, Container, InputValue};
