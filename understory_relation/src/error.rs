// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Field extraction errors.

use thiserror::Error;

/// Errors raised while extracting fields from records.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RelationError {
    /// A record did not expose a field named by the caller.
    #[error("record #{position} has no field `{field}`")]
    MissingField {
        /// Field name that was requested.
        field: String,
        /// Zero-based position of the record in the input collection.
        position: usize,
    },
}
