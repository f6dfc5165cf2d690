use rivet_common::{DiagnosticCategory, Span};

use crate::context::CheckContext;

impl CheckContext {
    /// `PendingAccess`: read/write of a `PENDING` symbol, including the
    /// scope-exit case of §3.2.1.
    pub(crate) fn pending_access(&mut self, span: Span, name: &str) {
        self.error(
            span,
            DiagnosticCategory::PendingAccess,
            format!("cannot access task handle '{name}' before synchronization"),
        );
    }

    /// `FrozenMutation`: a write/mutation on a symbol with `freeze_count > 0`.
    pub(crate) fn frozen_mutation(&mut self, span: Span, name: &str) {
        self.error(
            span,
            DiagnosticCategory::FrozenMutation,
            format!("cannot mutate '{name}': frozen by a pending spawn"),
        );
    }

    /// `PrivateSpawnReturn`: a `private` spawn's callee returns a
    /// non-primitive type (§4.3.6).
    pub(crate) fn private_spawn_return(&mut self, span: Span) {
        self.error(
            span,
            DiagnosticCategory::PrivateSpawnReturn,
            "private spawn must return a primitive or void",
        );
    }
}
