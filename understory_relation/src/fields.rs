// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Extraction by field name.
//!
//! Hosts that describe a collection by field names (for example `"id"`, `"name"`,
//! `"country_id"`) rather than closures implement [`FieldAccess`] for their record type and call
//! [`index_fields`].

use std::cell::Cell;
use std::collections::{BTreeMap, HashMap};

use serde_json::Value;

use crate::error::RelationError;
use crate::indexer::{Indexed, try_index};

/// Read a named field from a record in its string form.
pub trait FieldAccess {
    /// Returns the field's string form, or `None` if the record has no such field.
    fn field(&self, name: &str) -> Option<String>;
}

impl<R: FieldAccess + ?Sized> FieldAccess for &R {
    fn field(&self, name: &str) -> Option<String> {
        (**self).field(name)
    }
}

impl FieldAccess for HashMap<String, String> {
    fn field(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl FieldAccess for BTreeMap<String, String> {
    fn field(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// JSON objects expose their members. Strings are used verbatim, `null` reads as the empty
/// string, and other scalars use their JSON text. Non-objects have no fields.
impl FieldAccess for Value {
    fn field(&self, name: &str) -> Option<String> {
        let member = self.as_object()?.get(name)?;
        Some(match member {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        })
    }
}

/// Index `records` by field names.
///
/// Fails with [`RelationError::MissingField`] on the first record that lacks one of the fields.
///
/// ```
/// use serde_json::json;
/// use understory_relation::index_fields;
///
/// let rows = vec![
///     json!({ "id": 1, "name": "Lyon", "country": "fr" }),
///     json!({ "id": 2, "name": "Porto", "country": "pt" }),
/// ];
/// let idx = index_fields(&rows, "id", "name", "country").unwrap();
/// assert_eq!(idx.relations.labels("pt", "2"), ["Porto"]);
/// ```
pub fn index_fields<R, I>(
    records: I,
    value_field: &str,
    text_field: &str,
    reference_field: &str,
) -> Result<Indexed, RelationError>
where
    I: IntoIterator<Item = R>,
    R: FieldAccess,
{
    let position = Cell::new(0_usize);
    let lookup = |record: &R, field: &str| {
        record.field(field).ok_or_else(|| RelationError::MissingField {
            field: field.to_string(),
            position: position.get(),
        })
    };
    // Extractors run reference, value, then text for each record; text advances the position.
    try_index(
        records,
        |r| lookup(r, value_field),
        |r| {
            let text = lookup(r, text_field);
            position.set(position.get() + 1);
            text
        },
        |r| lookup(r, reference_field),
    )
}
