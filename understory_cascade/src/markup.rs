// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! HTML collaborator.
//!
//! Element generation and attribute escaping belong to the host's templating layer. The
//! cascade helpers only need an empty select shell and script wrapping, expressed by [`Markup`].
//! [`HtmlMarkup`] is a plain implementation for hosts without their own tag helpers.

/// Tag generation used by the render helper.
pub trait Markup {
    /// An empty `<select>` carrying `attrs` in order.
    fn select_shell(&self, attrs: &[(&str, &str)]) -> String;

    /// `body` wrapped as an inline script element.
    fn script(&self, body: &str) -> String;
}

/// Minimal HTML markup with escaped attribute values.
#[derive(Copy, Clone, Debug, Default)]
pub struct HtmlMarkup;

impl Markup for HtmlMarkup {
    fn select_shell(&self, attrs: &[(&str, &str)]) -> String {
        let mut out = String::from("<select");
        for (name, value) in attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_html(value));
            out.push('"');
        }
        out.push_str("></select>");
        out
    }

    fn script(&self, body: &str) -> String {
        format!("<script type=\"text/javascript\">\n{body}</script>")
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
