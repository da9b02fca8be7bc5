// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type of the cascade helpers.

use thiserror::Error;
use understory_relation::RelationError;

/// Errors surfaced to the caller of the cascade helpers.
#[derive(Debug, Error)]
pub enum CascadeError {
    /// `include_blank` was neither `false`, `true`, a string, nor a `[label, value]` pair.
    #[error("invalid include_blank: expected false, true, a label, or [label, value]; got {0}")]
    InvalidIncludeBlank(String),

    /// `prompt` was neither a boolean nor a string.
    #[error("invalid prompt: expected true, false, or a label; got {0}")]
    InvalidPrompt(String),

    /// Field extraction from the collection failed.
    #[error(transparent)]
    Relation(#[from] RelationError),

    /// Options or configuration could not be parsed.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}
