// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page-scoped render state.

use crate::registry::CascadeRegistry;

/// State of one page render: the cascade registry and whether the client runtime was emitted.
///
/// Create one per render pass and drop (or [`reset`](Self::reset)) it afterwards. Concurrent
/// renders each get their own session; nothing here is shared between them.
#[derive(Clone, Debug, Default)]
pub struct RenderSession {
    registry: CascadeRegistry,
    runtime_emitted: bool,
}

impl RenderSession {
    /// Start a new render pass.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry of selects rendered so far in this pass.
    pub fn registry(&self) -> &CascadeRegistry {
        &self.registry
    }

    /// Mutable access to the registry.
    pub fn registry_mut(&mut self) -> &mut CascadeRegistry {
        &mut self.registry
    }

    /// Whether the client runtime has been emitted on this page.
    pub fn runtime_emitted(&self) -> bool {
        self.runtime_emitted
    }

    /// Mark the runtime as emitted. Returns `true` only on the first call of the pass.
    pub(crate) fn claim_runtime(&mut self) -> bool {
        !core::mem::replace(&mut self.runtime_emitted, true)
    }

    /// Clear all state so the session can serve an unrelated render pass.
    pub fn reset(&mut self) {
        self.registry.reset();
        self.runtime_emitted = false;
    }

    /// End the pass, discarding its state.
    pub fn finish(self) {
        tracing::debug!(selects = self.registry.len(), "render pass finished");
    }
}
