// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element naming: default ids and names, and parent references.

use indexmap::IndexMap;

/// Extra attributes for the rendered `<select>`, in insertion order.
///
/// `id` and `name` entries override the computed defaults.
pub type Attributes = IndexMap<String, String>;

/// Identifier of the parent select.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParentRef {
    /// A literal element id.
    Id(String),
    /// Parts joined with `_`, e.g. `["address", "country"]` → `address_country`.
    Composite(Vec<String>),
}

impl ParentRef {
    /// Build a composite reference from parts.
    pub fn composite<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Composite(parts.into_iter().map(Into::into).collect())
    }

    /// The element id this reference resolves to.
    pub fn element_id(&self) -> String {
        match self {
            Self::Id(id) => id.clone(),
            Self::Composite(parts) => parts.join("_"),
        }
    }
}

impl From<&str> for ParentRef {
    fn from(id: &str) -> Self {
        Self::Id(id.to_string())
    }
}

impl From<String> for ParentRef {
    fn from(id: String) -> Self {
        Self::Id(id)
    }
}

/// Naming inputs of one cascaded select: the bound object/attribute pair and its parent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CascadeField {
    /// Object name, e.g. `address` or `user[address]`.
    pub object: String,
    /// Attribute name, e.g. `region_id`.
    pub method: String,
    /// Parent select reference.
    pub parent: ParentRef,
}

impl CascadeField {
    /// Create a field description.
    pub fn new(
        object: impl Into<String>,
        method: impl Into<String>,
        parent: impl Into<ParentRef>,
    ) -> Self {
        Self {
            object: object.into(),
            method: method.into(),
            parent: parent.into(),
        }
    }

    /// `<sanitized object>_<method>`, unless `attrs` carries an `id`.
    pub fn element_id(&self, attrs: &Attributes) -> String {
        match attrs.get("id") {
            Some(id) => id.clone(),
            None => format!(
                "{}_{}",
                sanitize_object_name(&self.object),
                sanitize_method_name(&self.method)
            ),
        }
    }

    /// `<object>[<method>]`, unless `attrs` carries a `name`.
    pub fn element_name(&self, attrs: &Attributes) -> String {
        match attrs.get("name") {
            Some(name) => name.clone(),
            None => format!("{}[{}]", self.object, self.method),
        }
    }

    /// Resolved parent element id.
    pub fn parent_id(&self) -> String {
        self.parent.element_id()
    }
}

/// Map `][` and characters outside `[-a-zA-Z0-9:.]` to `_`, then drop one trailing `_`.
pub(crate) fn sanitize_object_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();
    while let Some(c) = chars.next() {
        if c == ']' && chars.peek() == Some(&'[') {
            chars.next();
            out.push('_');
        } else if c.is_ascii_alphanumeric() || matches!(c, '-' | ':' | '.') {
            out.push(c);
        } else {
            out.push('_');
        }
    }
    if out.ends_with('_') {
        out.pop();
    }
    out
}

fn sanitize_method_name(name: &str) -> &str {
    name.strip_suffix('?').unwrap_or(name)
}
