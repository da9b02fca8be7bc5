// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-select rendering options: selected value, blank placeholder, and prompt.
//!
//! These come from host code or from JSON. Loosely typed inputs are validated once, here, so an
//! unrecognized `include_blank` shape is a caller error instead of a silent default.

use serde::de::{Deserializer, Error as _};
use serde::Deserialize;
use serde_json::Value;

use crate::error::CascadeError;

/// Leading blank option rendered before every option list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum IncludeBlank {
    /// No blank option.
    #[default]
    Off,
    /// A blank option with this label and an empty value.
    Placeholder(String),
    /// A blank option with an explicit label and value.
    Pair {
        /// Display label.
        label: String,
        /// Option value.
        value: String,
    },
}

impl IncludeBlank {
    /// The `(value, label)` of the blank option, if one is rendered.
    pub fn option(&self) -> Option<(&str, &str)> {
        match self {
            Self::Off => None,
            Self::Placeholder(label) => Some(("", label.as_str())),
            Self::Pair { label, value } => Some((value.as_str(), label.as_str())),
        }
    }
}

impl TryFrom<&Value> for IncludeBlank {
    type Error = CascadeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null | Value::Bool(false) => Ok(Self::Off),
            Value::Bool(true) => Ok(Self::Placeholder(String::new())),
            Value::String(label) => Ok(Self::Placeholder(label.clone())),
            Value::Array(pair) => match pair.as_slice() {
                [Value::String(label), Value::String(value)] => Ok(Self::Pair {
                    label: label.clone(),
                    value: value.clone(),
                }),
                _ => Err(CascadeError::InvalidIncludeBlank(value.to_string())),
            },
            other => Err(CascadeError::InvalidIncludeBlank(other.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for IncludeBlank {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Self::try_from(&raw).map_err(D::Error::custom)
    }
}

/// Prompt option shown only while nothing is selected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Prompt {
    /// No prompt.
    #[default]
    None,
    /// A prompt using the configured default text.
    Default,
    /// A prompt with this label.
    Label(String),
}

impl Prompt {
    /// The prompt label, resolving [`Prompt::Default`] to `default_text`.
    pub fn label<'a>(&'a self, default_text: &'a str) -> Option<&'a str> {
        match self {
            Self::None => None,
            Self::Default => Some(default_text),
            Self::Label(label) => Some(label.as_str()),
        }
    }
}

impl TryFrom<&Value> for Prompt {
    type Error = CascadeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null | Value::Bool(false) => Ok(Self::None),
            Value::Bool(true) => Ok(Self::Default),
            Value::String(label) => Ok(Self::Label(label.clone())),
            other => Err(CascadeError::InvalidPrompt(other.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for Prompt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Self::try_from(&raw).map_err(D::Error::custom)
    }
}

/// Options for one cascaded select.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SelectOptions {
    /// Previously saved value to preselect. Empty strings count as absent.
    #[serde(deserialize_with = "selected_value")]
    pub selected: Option<String>,
    /// Leading blank option.
    #[serde(alias = "includeBlank")]
    pub include_blank: IncludeBlank,
    /// Prompt option, shown when nothing is selected.
    pub prompt: Prompt,
}

impl SelectOptions {
    /// Parse options from a JSON object.
    ///
    /// ```
    /// use understory_cascade::{IncludeBlank, SelectOptions};
    ///
    /// let opts = SelectOptions::from_json(r#"{ "selected": 7, "includeBlank": ["Please choose", ""] }"#).unwrap();
    /// assert_eq!(opts.selected(), Some("7"));
    /// assert_eq!(opts.include_blank.option(), Some(("", "Please choose")));
    /// ```
    pub fn from_json(json: &str) -> Result<Self, CascadeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The selected value, treating the empty string as absent.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref().filter(|s| !s.is_empty())
    }
}

fn selected_value<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        other => Err(D::Error::custom(format!(
            "selected must be a scalar, got {other}"
        ))),
    }
}
