// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_relation --heading-base-level=0

//! Understory Relation: the relation index behind dependent (cascading) selects.
//!
//! Given a flat collection of records and three extractors (value, label, parent reference), it
//! builds:
//!
//! - a [`RelationMap`]: `parent key → child value → labels`, ordered by first appearance, with
//!   labels in input order, and
//! - an [`InvertedMap`]: `child value → parent key`, used to walk from a selected value to the
//!   ancestors that must be selected for it to be visible.
//!
//! Keys and values are stringified through [`IntoKey`] before they are compared or stored,
//! because everything ends up in string-typed option values.
//!
//! ## Ambiguous values
//!
//! When the same child value appears under more than one parent, the inverted map can only hold
//! one of them and keeps the last in iteration order. Upward preselection through such a value
//! follows that parent. This is a known limitation, not something the index tries to repair.
//!
//! ## Example
//!
//! ```
//! use understory_relation::index;
//!
//! struct City { id: u32, name: &'static str, region: Option<u32> }
//!
//! let cities = [
//!     City { id: 1, name: "Munich", region: Some(10) },
//!     City { id: 2, name: "Nuremberg", region: Some(10) },
//!     City { id: 3, name: "Dresden", region: Some(11) },
//! ];
//! let idx = index(&cities, |c| c.id, |c| c.name, |c| c.region);
//!
//! let bavaria: Vec<_> = idx.relations.options("10").collect();
//! assert_eq!(bavaria, vec![("1", "Munich"), ("2", "Nuremberg")]);
//! assert_eq!(idx.inverted.get("3"), Some("11"));
//! ```

mod error;
mod fields;
mod indexer;
mod key;
mod relation;

pub use error::RelationError;
pub use fields::{FieldAccess, index_fields};
pub use indexer::{Indexed, index, try_index};
pub use key::IntoKey;
pub use relation::{Bucket, InvertedMap, RelationMap};
