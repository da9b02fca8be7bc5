// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The render call tying indexing, registration and script emission together.

use core::fmt;

use understory_relation::{FieldAccess, Indexed, index_fields};

use crate::element::{Attributes, CascadeField};
use crate::emitter::ScriptEmitter;
use crate::error::CascadeError;
use crate::markup::{HtmlMarkup, Markup};
use crate::options::SelectOptions;
use crate::session::RenderSession;

/// Markup fragments for one cascaded select, in output order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedSelect {
    /// Id of the rendered select.
    pub element_id: String,
    /// The empty `<select>` shell.
    pub select: String,
    /// Runtime support; present only for the first cascaded select of the page.
    pub runtime: Option<String>,
    /// Parent link and option table.
    pub hookup: String,
    /// Initial selection.
    pub preselection: String,
}

impl RenderedSelect {
    /// All fragments concatenated: select, runtime, hookup, preselection.
    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RenderedSelect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.select)?;
        if let Some(runtime) = &self.runtime {
            f.write_str(runtime)?;
        }
        f.write_str(&self.hookup)?;
        f.write_str(&self.preselection)
    }
}

/// Field names used to read value, label and parent reference from records.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FieldNames<'a> {
    /// Field holding the option value.
    pub value: &'a str,
    /// Field holding the option label.
    pub text: &'a str,
    /// Field holding the parent key.
    pub reference: &'a str,
}

/// Renders cascaded selects through a [`Markup`] collaborator.
#[derive(Clone, Debug, Default)]
pub struct CascadeHelper<M = HtmlMarkup> {
    emitter: ScriptEmitter,
    markup: M,
}

impl CascadeHelper<HtmlMarkup> {
    /// Helper with [`HtmlMarkup`].
    pub fn new(emitter: ScriptEmitter) -> Self {
        Self::with_markup(emitter, HtmlMarkup)
    }
}

impl<M: Markup> CascadeHelper<M> {
    /// Helper with a host-provided markup collaborator.
    pub fn with_markup(emitter: ScriptEmitter, markup: M) -> Self {
        Self { emitter, markup }
    }

    /// The script emitter.
    pub fn emitter(&self) -> &ScriptEmitter {
        &self.emitter
    }

    /// Render one cascaded select from an already indexed collection.
    ///
    /// Registers the select in `session` before emitting its preselection, so the preselection
    /// can walk through it and every ancestor rendered earlier in the pass.
    pub fn render(
        &self,
        session: &mut RenderSession,
        field: &CascadeField,
        indexed: &Indexed,
        options: &SelectOptions,
        html_attributes: &Attributes,
    ) -> RenderedSelect {
        let element_id = field.element_id(html_attributes);
        let element_name = field.element_name(html_attributes);
        let parent_id = field.parent_id();
        let selected = options.selected();

        let mut attrs: Vec<(&str, &str)> =
            vec![("id", element_id.as_str()), ("name", element_name.as_str())];
        attrs.extend(
            html_attributes
                .iter()
                .filter(|(k, _)| !matches!(k.as_str(), "id" | "name"))
                .map(|(k, v)| (k.as_str(), v.as_str())),
        );
        let select = self.markup.select_shell(&attrs);

        let runtime = self
            .emitter
            .emit_runtime_support(session)
            .map(|body| self.wrap(&body));
        let hookup = self.wrap(&self.emitter.emit_hookup(
            &element_id,
            &parent_id,
            &indexed.relations,
            selected,
            options,
        ));
        session
            .registry_mut()
            .register(element_id.as_str(), parent_id.as_str(), indexed.inverted.clone());
        let preselection = self.wrap(&self.emitter.emit_preselection(
            session.registry(),
            &element_id,
            selected,
        ));

        tracing::debug!(
            element = %element_id,
            parent = %parent_id,
            selected = ?selected,
            with_runtime = runtime.is_some(),
            "rendered cascaded select"
        );

        RenderedSelect {
            element_id,
            select,
            runtime,
            hookup,
            preselection,
        }
    }

    /// Index `records` by field names, then [`render`](Self::render).
    pub fn render_collection<R, I>(
        &self,
        session: &mut RenderSession,
        field: &CascadeField,
        records: I,
        names: FieldNames<'_>,
        options: &SelectOptions,
        html_attributes: &Attributes,
    ) -> Result<RenderedSelect, CascadeError>
    where
        I: IntoIterator<Item = R>,
        R: FieldAccess,
    {
        let indexed = index_fields(records, names.value, names.text, names.reference)?;
        Ok(self.render(session, field, &indexed, options, html_attributes))
    }

    fn wrap(&self, body: &str) -> String {
        if self.emitter.config().wrap_scripts {
            self.markup.script(body)
        } else {
            body.to_string()
        }
    }
}
