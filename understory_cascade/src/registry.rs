// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-render registry of cascaded selects and the upward selection walk.
//!
//! ## Overview
//!
//! Every cascaded select rendered during a pass records its parent id and the inverted
//! `value → parent value` map of its collection. Walking those entries from a leaf reconstructs
//! the chain of selections that make a saved leaf value visible, in the same way a responder
//! chain is rebuilt from parent links: collect leaf → root, then reverse.
//!
//! The registry lives inside a [`RenderSession`](crate::RenderSession) and must not outlive
//! the page render that filled it.

use indexmap::IndexMap;
use indexmap::map::Entry;
use understory_relation::InvertedMap;

/// One registered select.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CascadeEntry {
    /// Id of the registered select.
    pub element_id: String,
    /// Id of its parent select.
    pub parent_id: String,
    /// `child value → parent value` for the select's collection.
    pub inverted: InvertedMap,
}

/// One `(element, value)` step of a [`SelectionChain`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainLink {
    /// Element to select in.
    pub element_id: String,
    /// Value to select; `None` where the inverted map had no parent for the child's value.
    pub value: Option<String>,
}

/// Selections needed to show a saved leaf value, ordered root → leaf.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionChain {
    links: Vec<ChainLink>,
}

impl SelectionChain {
    /// Links in root → leaf order.
    pub fn links(&self) -> &[ChainLink] {
        &self.links
    }

    /// Number of links.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Whether the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

/// Registry of cascaded selects for a single render pass.
#[derive(Clone, Debug, Default)]
pub struct CascadeRegistry {
    entries: IndexMap<String, CascadeEntry>,
}

impl CascadeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a select. The first registration of an id wins; later ones are ignored.
    ///
    /// Returns `true` when the entry was inserted.
    pub fn register(
        &mut self,
        element_id: impl Into<String>,
        parent_id: impl Into<String>,
        inverted: InvertedMap,
    ) -> bool {
        let element_id = element_id.into();
        let parent_id = parent_id.into();
        match self.entries.entry(element_id) {
            Entry::Occupied(existing) => {
                if existing.get().parent_id != parent_id {
                    tracing::warn!(
                        element = %existing.key(),
                        kept = %existing.get().parent_id,
                        ignored = %parent_id,
                        "select registered twice with different parents; keeping the first"
                    );
                }
                false
            }
            Entry::Vacant(slot) => {
                tracing::debug!(element = %slot.key(), parent = %parent_id, "registered cascaded select");
                let element_id = slot.key().clone();
                slot.insert(CascadeEntry {
                    element_id,
                    parent_id,
                    inverted,
                });
                true
            }
        }
    }

    /// Entry for `element_id`, if registered.
    pub fn lookup(&self, element_id: &str) -> Option<&CascadeEntry> {
        self.entries.get(element_id)
    }

    /// Drop every entry.
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    /// Number of registered selects.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Walk from `(element_id, value)` up through registered parents.
    ///
    /// The walk stops at the first id without an entry (the root). A value missing from an
    /// inverted map does not stop it; the link carries `None` and so do its ancestors. An id
    /// seen twice ends the walk with what was collected so far.
    pub fn chain(&self, element_id: &str, value: Option<&str>) -> SelectionChain {
        let mut links = vec![ChainLink {
            element_id: element_id.to_string(),
            value: value.map(str::to_string),
        }];
        let mut current = element_id;
        let mut current_value = value;
        while let Some(entry) = self.lookup(current) {
            if links.iter().any(|l| l.element_id == entry.parent_id) {
                tracing::warn!(
                    element = %element_id,
                    repeated = %entry.parent_id,
                    "cyclic cascade registration; preselection chain truncated"
                );
                break;
            }
            let parent_value = current_value.and_then(|v| entry.inverted.get(v));
            links.push(ChainLink {
                element_id: entry.parent_id.clone(),
                value: parent_value.map(str::to_string),
            });
            current = &entry.parent_id;
            current_value = parent_value;
        }
        links.reverse();
        SelectionChain { links }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inv(pairs: &[(&str, &str)]) -> InvertedMap {
        pairs.iter().copied().collect()
    }

    fn metro_registry() -> CascadeRegistry {
        let mut r = CascadeRegistry::new();
        r.register("Neighborhood7", "Area2", inv(&[("N7", "A-value")]));
        r.register("Area2", "Metro1", inv(&[("A-value", "M-value")]));
        r
    }

    fn pairs(chain: &SelectionChain) -> Vec<(&str, Option<&str>)> {
        chain
            .links()
            .iter()
            .map(|l| (l.element_id.as_str(), l.value.as_deref()))
            .collect()
    }

    #[test]
    fn first_registration_wins() {
        let mut r = CascadeRegistry::new();
        assert!(r.register("city", "region", inv(&[("1", "a")])));
        assert!(!r.register("city", "country", inv(&[("1", "b")])));
        let entry = r.lookup("city").unwrap();
        assert_eq!(entry.parent_id, "region");
        assert_eq!(entry.inverted.get("1"), Some("a"));
        assert_eq!(r.len(), 1);
    }

    #[test]
    fn reset_forgets_everything() {
        let mut r = metro_registry();
        assert_eq!(r.len(), 2);
        r.reset();
        assert!(r.is_empty());
        assert!(r.lookup("Area2").is_none());
        assert_eq!(r.chain("Neighborhood7", Some("N7")).len(), 1);
    }

    #[test]
    fn chain_is_root_to_leaf() {
        let r = metro_registry();
        let chain = r.chain("Neighborhood7", Some("N7"));
        assert_eq!(
            pairs(&chain),
            vec![
                ("Metro1", Some("M-value")),
                ("Area2", Some("A-value")),
                ("Neighborhood7", Some("N7")),
            ]
        );
    }

    #[test]
    fn unregistered_element_is_its_own_root() {
        let r = CascadeRegistry::new();
        assert_eq!(pairs(&r.chain("lonely", Some("x"))), vec![("lonely", Some("x"))]);
    }

    #[test]
    fn broken_link_propagates_none_without_stopping() {
        let r = metro_registry();
        let chain = r.chain("Neighborhood7", Some("N99"));
        assert_eq!(
            pairs(&chain),
            vec![
                ("Metro1", None),
                ("Area2", None),
                ("Neighborhood7", Some("N99")),
            ]
        );
    }

    #[test]
    fn cycles_terminate() {
        let mut r = CascadeRegistry::new();
        r.register("a", "b", inv(&[("1", "2")]));
        r.register("b", "a", inv(&[("2", "1")]));
        let chain = r.chain("a", Some("1"));
        assert_eq!(pairs(&chain), vec![("b", Some("2")), ("a", Some("1"))]);
    }
}
