// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Emitter configuration.

use serde::Deserialize;

use crate::error::CascadeError;

/// Emitter configuration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EmitterConfig {
    /// Global name the client runtime is installed under.
    pub namespace: String,
    /// Label used for [`Prompt::Default`](crate::Prompt::Default).
    pub default_prompt: String,
    /// Wrap script fragments in `<script>` elements.
    pub wrap_scripts: bool,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            namespace: "CascadeSelect".to_string(),
            default_prompt: "Please select".to_string(),
            wrap_scripts: true,
        }
    }
}

impl EmitterConfig {
    /// Parse a configuration object; missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, CascadeError> {
        Ok(serde_json::from_str(json)?)
    }
}
