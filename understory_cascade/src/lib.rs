// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_cascade --heading-base-level=0

//! Understory Cascade: chained `<select>` elements (Country → Region → City) without a server
//! round trip.
//!
//! ## Overview
//!
//! Each cascaded select is rendered as an empty `<select>` shell followed by script that fills
//! it from its parent's current value. The option data comes from a relation index built by
//! [`understory_relation`]; this crate turns that index into client script and keeps the
//! per-render bookkeeping needed to preselect a saved value across the whole chain.
//!
//! ## Pieces
//!
//! - [`CascadeRegistry`]: per-render map `element id → (parent id, inverted map)`. First
//!   registration of an id wins. [`CascadeRegistry::chain`] walks from a leaf up to the root.
//! - [`RenderSession`]: the page context. Owns the registry and the "runtime already emitted"
//!   flag; one per render pass, never shared between passes.
//! - [`ScriptEmitter`]: emits the runtime (once per session), the hookup that links a select to
//!   its parent and attaches its option table, and the preselection.
//! - [`CascadeHelper`]: the render call. Computes the element id and name, renders the shell
//!   through a [`Markup`] collaborator, and returns the fragments in their fixed order.
//!
//! ## Preselection
//!
//! A saved leaf value is replayed root first: the registry walk collects `(element, value)`
//! pairs leaf → root through each select's inverted map, and the emitted script applies them in
//! reverse so every parent has installed its options before the child selects from them.
//! A value missing from an inverted map yields `select(null)` for that ancestor instead of
//! aborting the walk. Without a saved value the select is only refreshed from its parent.
//!
//! ## Example
//!
//! ```
//! use understory_cascade::{Attributes, CascadeField, CascadeHelper, RenderSession, SelectOptions};
//! use understory_relation::index;
//!
//! let regions = [(10, "Bavaria", "de"), (11, "Saxony", "de"), (20, "Tyrol", "at")];
//! let indexed = index(&regions, |r| r.0, |r| r.1, |r| r.2);
//!
//! let helper: CascadeHelper = CascadeHelper::default();
//! let mut session = RenderSession::new();
//! let out = helper.render(
//!     &mut session,
//!     &CascadeField::new("address", "region_id", "address_country_id"),
//!     &indexed,
//!     &SelectOptions { selected: Some("11".into()), ..SelectOptions::default() },
//!     &Attributes::new(),
//! );
//!
//! assert!(out.select.starts_with(r#"<select id="address_region_id""#));
//! assert!(out.runtime.is_some());
//! assert!(out.hookup.contains(r#""de":[["10","Bavaria"],["11","Saxony"]]"#));
//! assert!(out.preselection.contains(r#"s.select("de")"#));
//! session.finish();
//! ```

mod config;
mod element;
mod emitter;
mod error;
mod js;
mod markup;
mod options;
mod registry;
mod render;
mod runtime;
mod session;

pub use config::EmitterConfig;
pub use element::{Attributes, CascadeField, ParentRef};
pub use emitter::ScriptEmitter;
pub use error::CascadeError;
pub use markup::{HtmlMarkup, Markup};
pub use options::{IncludeBlank, Prompt, SelectOptions};
pub use registry::{CascadeEntry, CascadeRegistry, ChainLink, SelectionChain};
pub use render::{CascadeHelper, FieldNames, RenderedSelect};
pub use session::RenderSession;
