// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The forward relation map and its inverse.

use indexmap::IndexMap;

/// Child-value → labels bucket stored under one parent key.
///
/// Values keep their first-insertion order; labels keep input order within each value.
pub type Bucket = IndexMap<String, Vec<String>>;

/// Ordered mapping `parent key → child value → labels`.
///
/// A value may carry more than one label when the source collection repeats it; every label is
/// kept and later rendered as its own option sharing that value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RelationMap {
    buckets: IndexMap<String, Bucket>,
}

impl RelationMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `label` to the `(parent, value)` bucket, creating empty buckets as needed.
    pub fn insert(&mut self, parent: String, value: String, label: String) {
        self.buckets
            .entry(parent)
            .or_default()
            .entry(value)
            .or_default()
            .push(label);
    }

    /// The child bucket for `parent`, if any record referenced it.
    pub fn get(&self, parent: &str) -> Option<&Bucket> {
        self.buckets.get(parent)
    }

    /// Labels recorded for `value` under `parent`, in input order.
    pub fn labels(&self, parent: &str, value: &str) -> &[String] {
        self.buckets
            .get(parent)
            .and_then(|b| b.get(value))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Flattened `(value, label)` pairs for `parent`, one per label.
    pub fn options<'a>(
        &'a self,
        parent: &str,
    ) -> impl Iterator<Item = (&'a str, &'a str)> + use<'a> {
        self.buckets
            .get(parent)
            .into_iter()
            .flat_map(|bucket| bucket.iter())
            .flat_map(|(value, labels)| labels.iter().map(move |l| (value.as_str(), l.as_str())))
    }

    /// Parent keys in first-seen order.
    pub fn parents(&self) -> impl Iterator<Item = &str> {
        self.buckets.keys().map(String::as_str)
    }

    /// Iterate `(parent, bucket)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Bucket)> {
        self.buckets.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of parent keys.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Whether no record was indexed.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Derive the `child value → parent key` map.
    ///
    /// A value that appears under several parents keeps the last parent in iteration order.
    /// Upward preselection through such a value is therefore ambiguous; the collision is logged
    /// and otherwise left alone.
    pub fn invert(&self) -> InvertedMap {
        let mut parents = IndexMap::new();
        let mut collisions = 0_usize;
        for (parent, bucket) in &self.buckets {
            for value in bucket.keys() {
                if let Some(prev) = parents.insert(value.clone(), parent.clone())
                    && prev != *parent
                {
                    collisions += 1;
                    tracing::debug!(
                        value = %value,
                        previous = %prev,
                        parent = %parent,
                        "child value appears under more than one parent; keeping the last"
                    );
                }
            }
        }
        if collisions > 0 {
            tracing::debug!(collisions, "inverted relation map has ambiguous values");
        }
        InvertedMap { parents }
    }
}

/// Mapping `child value → parent key`, used to walk from a selected value to its ancestors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InvertedMap {
    parents: IndexMap<String, String>,
}

impl InvertedMap {
    /// Parent key recorded for `value`.
    pub fn get(&self, value: &str) -> Option<&str> {
        self.parents.get(value).map(String::as_str)
    }

    /// Number of distinct child values.
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Iterate `(value, parent)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.parents.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for InvertedMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            parents: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
