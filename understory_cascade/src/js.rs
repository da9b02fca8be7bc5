// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Script literal encoding.

use serde_json::Value;

/// Render `s` as a double-quoted script string literal that is also safe inside `<script>`.
///
/// `<`, `>` and `&` never appear raw, so no data can open a comment, start or close a script
/// element, or form a character reference.
pub(crate) fn string(s: &str) -> String {
    Value::from(s)
        .to_string()
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029")
}

/// Like [`string`], with `None` rendered as `null`.
pub(crate) fn opt_string(s: Option<&str>) -> String {
    s.map_or_else(|| "null".to_string(), string)
}
