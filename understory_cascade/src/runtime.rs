// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Client runtime for cascaded selects.
//!
//! The runtime defines a `CascadeSelect` wrapper per select element with the fixed capability set
//! `select`, `addChild`, `refreshChildren`, `refresh` and `onChange`. Wrappers live in a side table
//! keyed by element id: `extend(id)` creates one the first time and returns the same wrapper
//! afterwards, and `lookup(id)` only reads the table. Elements themselves are never mutated
//! beyond their option lists and a `change` listener.
//!
//! A wrapper goes `uninitialized → extended` exactly once, then cycles through `refresh` and
//! `select` in response to change events for the lifetime of the page. Propagation is
//! synchronous and depth-first, so a parent always finishes installing its options before any
//! child refreshes.

use crate::js;

const RUNTIME: &str = r#"(function (w, ns) {
  if (w[ns]) return;
  var wrappers = {};
  function has(o, k) { return Object.prototype.hasOwnProperty.call(o, k); }
  function CascadeSelect(el) {
    var self = this;
    this.el = el;
    this.selectChildren = [];
    this.selectParent = null;
    this.relationHash = null;
    el.addEventListener("change", function () { self.onChange(); });
  }
  CascadeSelect.prototype.select = function (value) {
    var opts = this.el.options;
    for (var i = 0; i < opts.length; i++) {
      if (opts[i].value === value) { this.el.selectedIndex = i; break; }
    }
    this.refreshChildren();
  };
  CascadeSelect.prototype.addChild = function (child) {
    this.selectChildren.push(child);
  };
  CascadeSelect.prototype.refreshChildren = function () {
    for (var i = 0; i < this.selectChildren.length; i++) this.selectChildren[i].refresh();
  };
  CascadeSelect.prototype.refresh = function () {
    var el = this.el, parent = this.selectParent, hash = this.relationHash;
    while (el.options.length) el.remove(0);
    if (!parent || !hash || parent.el.selectedIndex < 0) return;
    var key = parent.el.value;
    if (!has(hash, key)) return;
    var list = hash[key];
    for (var i = 0; i < list.length; i++) el.add(new Option(list[i][1], list[i][0]));
    this.refreshChildren();
  };
  CascadeSelect.prototype.onChange = function () {
    this.refreshChildren();
  };
  CascadeSelect.extend = function (id) {
    if (has(wrappers, id)) return wrappers[id];
    var el = w.document.getElementById(id);
    if (!el) return null;
    return (wrappers[id] = new CascadeSelect(el));
  };
  CascadeSelect.lookup = function (id) {
    return has(wrappers, id) ? wrappers[id] : null;
  };
  w[ns] = CascadeSelect;
})(window, __NS__);
"#;

/// Runtime source installing the wrapper type under `namespace`.
pub(crate) fn source(namespace: &str) -> String {
    RUNTIME.replace("__NS__", &js::string(namespace))
}

/// Expression evaluating to the installed runtime, used as the argument of emitted snippets.
pub(crate) fn handle(namespace: &str) -> String {
    format!("window[{}]", js::string(namespace))
}
