// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Script payloads for cascaded selects.
//!
//! ## Overview
//!
//! Three payloads are produced per rendered select, in this order:
//!
//! 1. runtime support, once per page ([`ScriptEmitter::emit_runtime_support`]),
//! 2. the hookup that links the select to its parent and attaches its option table
//!    ([`ScriptEmitter::emit_hookup`]),
//! 3. the preselection that replays the saved value root → leaf
//!    ([`ScriptEmitter::emit_preselection`]).
//!
//! ## Option tables
//!
//! The option list installed for each parent value is, in order: the blank option (if any),
//! the prompt (only when nothing is selected), then the collection's options in input order.
//! Entries are `[value, label]` pairs of script string literals.

use core::fmt::Write as _;

use understory_relation::RelationMap;

use crate::config::EmitterConfig;
use crate::js;
use crate::options::SelectOptions;
use crate::registry::CascadeRegistry;
use crate::runtime;
use crate::session::RenderSession;

/// Produces the client-side script for cascaded selects.
#[derive(Clone, Debug, Default)]
pub struct ScriptEmitter {
    config: EmitterConfig,
}

impl ScriptEmitter {
    /// Create an emitter with the given configuration.
    pub fn new(config: EmitterConfig) -> Self {
        Self { config }
    }

    /// The emitter configuration.
    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }

    /// Unconditional runtime source.
    pub fn runtime_source(&self) -> String {
        runtime::source(&self.config.namespace)
    }

    /// Runtime source the first time it is requested in `session`, `None` afterwards.
    pub fn emit_runtime_support(&self, session: &mut RenderSession) -> Option<String> {
        if session.claim_runtime() {
            tracing::trace!(namespace = %self.config.namespace, "emitting cascade runtime");
            Some(self.runtime_source())
        } else {
            None
        }
    }

    /// Link `select_id` under `parent_id` and attach its option table.
    ///
    /// Both elements are extended idempotently. The first hookup of a select wins, like its
    /// registry entry: once linked, later hookups leave its parent and option table alone.
    pub fn emit_hookup(
        &self,
        select_id: &str,
        parent_id: &str,
        relations: &RelationMap,
        selected: Option<&str>,
        options: &SelectOptions,
    ) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "(function (C) {{");
        let _ = writeln!(
            out,
            "  var p = C.extend({}), c = C.extend({});",
            js::string(parent_id),
            js::string(select_id)
        );
        let _ = writeln!(out, "  if (!p || !c) return;");
        let _ = writeln!(out, "  if (c.selectParent) return;");
        let _ = writeln!(out, "  p.addChild(c);");
        let _ = writeln!(out, "  c.selectParent = p;");
        let _ = writeln!(
            out,
            "  c.relationHash = {};",
            self.relation_hash(relations, selected, options)
        );
        let _ = writeln!(out, "}})({});", runtime::handle(&self.config.namespace));
        out
    }

    /// The `relationHash` object literal: parent value → `[value, label]` list.
    pub fn relation_hash(
        &self,
        relations: &RelationMap,
        selected: Option<&str>,
        options: &SelectOptions,
    ) -> String {
        let mut leading: Vec<(&str, &str)> = Vec::new();
        if let Some(blank) = options.include_blank.option() {
            leading.push(blank);
        }
        if selected.is_none_or(str::is_empty)
            && let Some(label) = options.prompt.label(&self.config.default_prompt)
        {
            leading.push(("", label));
        }

        let mut out = String::from("{");
        for (i, parent) in relations.parents().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push_str(&js::string(parent));
            out.push_str(":[");
            let entries = leading
                .iter()
                .copied()
                .chain(relations.options(parent))
                .map(|(value, label)| format!("[{},{}]", js::string(value), js::string(label)));
            for (j, entry) in entries.enumerate() {
                if j > 0 {
                    out.push(',');
                }
                out.push_str(&entry);
            }
            out.push(']');
        }
        out.push('}');
        out
    }

    /// Replay `selected` on `element_id` and every registered ancestor, root first.
    ///
    /// Without a selected value the element is only refreshed, deriving its options from the
    /// parent's current state.
    pub fn emit_preselection(
        &self,
        registry: &CascadeRegistry,
        element_id: &str,
        selected: Option<&str>,
    ) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "(function (C) {{");
        match selected.filter(|s| !s.is_empty()) {
            None => {
                let _ = writeln!(out, "  var s = C.extend({});", js::string(element_id));
                let _ = writeln!(out, "  if (s) s.refresh();");
            }
            Some(value) => {
                let chain = registry.chain(element_id, Some(value));
                let _ = writeln!(out, "  var s;");
                for link in chain.links() {
                    tracing::trace!(element = %link.element_id, value = ?link.value, "preselect");
                    let _ = writeln!(
                        out,
                        "  if ((s = C.extend({}))) s.select({});",
                        js::string(&link.element_id),
                        js::opt_string(link.value.as_deref())
                    );
                }
            }
        }
        let _ = writeln!(out, "}})({});", runtime::handle(&self.config.namespace));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{IncludeBlank, Prompt};
    use understory_relation::{InvertedMap, index};

    fn inv(pairs: &[(&str, &str)]) -> InvertedMap {
        pairs.iter().copied().collect()
    }

    fn regions() -> RelationMap {
        let rows = [
            ("de", "by", "Bavaria"),
            ("de", "sn", "Saxony"),
            ("at", "t", "Tyrol"),
        ];
        index(rows, |r| r.1, |r| r.2, |r| r.0).relations
    }

    #[test]
    fn runtime_once_per_session() {
        let emitter = ScriptEmitter::default();
        let mut session = RenderSession::new();
        assert!(emitter.emit_runtime_support(&mut session).is_some());
        assert!(emitter.emit_runtime_support(&mut session).is_none());
        assert!(emitter.emit_runtime_support(&mut session).is_none());
        session.reset();
        assert!(emitter.emit_runtime_support(&mut session).is_some());
    }

    #[test]
    fn relation_hash_lists_data_in_order() {
        let emitter = ScriptEmitter::default();
        let hash = emitter.relation_hash(&regions(), Some("by"), &SelectOptions::default());
        assert_eq!(
            hash,
            r#"{"de":[["by","Bavaria"],["sn","Saxony"]],"at":[["t","Tyrol"]]}"#
        );
    }

    #[test]
    fn blank_pair_precedes_data_regardless_of_prompt() {
        let emitter = ScriptEmitter::default();
        let options = SelectOptions {
            selected: Some("by".into()),
            include_blank: IncludeBlank::Pair {
                label: "Please choose".into(),
                value: String::new(),
            },
            prompt: Prompt::Label("Pick one".into()),
        };
        let hash = emitter.relation_hash(&regions(), options.selected(), &options);
        assert_eq!(
            hash,
            r#"{"de":[["","Please choose"],["by","Bavaria"],["sn","Saxony"]],"at":[["","Please choose"],["t","Tyrol"]]}"#
        );
        assert_eq!(hash.matches("Please choose").count(), 2);
    }

    #[test]
    fn prompt_only_without_selection() {
        let emitter = ScriptEmitter::default();
        let options = SelectOptions {
            selected: None,
            include_blank: IncludeBlank::Placeholder("-".into()),
            prompt: Prompt::Default,
        };
        let hash = emitter.relation_hash(&regions(), None, &options);
        assert!(hash.starts_with(r#"{"de":[["","-"],["","Please select"],["by","Bavaria"]"#));

        let hash = emitter.relation_hash(&regions(), Some("sn"), &options);
        assert!(!hash.contains("Please select"));
    }

    #[test]
    fn labels_are_escaped() {
        let emitter = ScriptEmitter::default();
        let rows = [("1", "x", "</script><script>alert(1)</script>")];
        let relations = index(rows, |r| r.1, |r| r.2, |r| r.0).relations;
        let hash = emitter.relation_hash(&relations, None, &SelectOptions::default());
        assert!(!hash.contains('<'));
        assert!(hash.contains(r"\u003c/script\u003e"));
    }

    #[test]
    fn hookup_extends_links_and_attaches() {
        let emitter = ScriptEmitter::default();
        let js = emitter.emit_hookup(
            "address_region",
            "address_country",
            &regions(),
            None,
            &SelectOptions::default(),
        );
        assert!(js.contains(r#"var p = C.extend("address_country"), c = C.extend("address_region");"#));
        let guard = js.find("if (c.selectParent) return;").unwrap();
        let link = js.find("p.addChild(c);").unwrap();
        let back = js.find("c.selectParent = p;").unwrap();
        let hash = js.find(r#"c.relationHash = {"de":"#).unwrap();
        assert!(guard < link && link < back && back < hash, "{js}");
        assert!(js.ends_with("})(window[\"CascadeSelect\"]);\n"));
    }

    #[test]
    fn preselection_without_value_only_refreshes() {
        let emitter = ScriptEmitter::default();
        let registry = CascadeRegistry::new();
        for selected in [None, Some("")] {
            let js = emitter.emit_preselection(&registry, "city", selected);
            assert_eq!(js.matches("refresh()").count(), 1);
            assert!(!js.contains(".select("));
        }
    }

    #[test]
    fn preselection_walks_root_to_leaf() {
        let emitter = ScriptEmitter::default();
        let mut registry = CascadeRegistry::new();
        registry.register("Neighborhood7", "Area2", inv(&[("N7", "A-value")]));
        registry.register("Area2", "Metro1", inv(&[("A-value", "M-value")]));

        let js = emitter.emit_preselection(&registry, "Neighborhood7", Some("N7"));
        let selects: Vec<&str> = js.lines().filter(|l| l.contains(".select(")).collect();
        assert_eq!(
            selects,
            vec![
                r#"  if ((s = C.extend("Metro1"))) s.select("M-value");"#,
                r#"  if ((s = C.extend("Area2"))) s.select("A-value");"#,
                r#"  if ((s = C.extend("Neighborhood7"))) s.select("N7");"#,
            ]
        );
        assert!(!js.contains("refresh()"));
    }

    #[test]
    fn preselection_broken_link_selects_null() {
        let emitter = ScriptEmitter::default();
        let mut registry = CascadeRegistry::new();
        registry.register("city", "region", inv(&[]));
        let js = emitter.emit_preselection(&registry, "city", Some("c1"));
        assert!(js.contains(r#"if ((s = C.extend("region"))) s.select(null);"#));
        assert!(js.contains(r#"if ((s = C.extend("city"))) s.select("c1");"#));
    }

    #[test]
    fn custom_namespace_is_used_everywhere() {
        let emitter = ScriptEmitter::new(EmitterConfig {
            namespace: "Chained".into(),
            ..EmitterConfig::default()
        });
        let js = emitter.emit_preselection(&CascadeRegistry::new(), "x", None);
        assert!(js.ends_with("})(window[\"Chained\"]);\n"));
        assert!(emitter.runtime_source().contains("(window, \"Chained\")"));
    }
}
