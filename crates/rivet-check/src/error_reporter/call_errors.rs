use rivet_common::{DiagnosticCategory, Span};

use crate::context::CheckContext;

impl CheckContext {
    /// `ArityMismatch`: fixed-arity call or variadic minimum violated (§4.3.4).
    pub(crate) fn arity_mismatch(&mut self, span: Span, message: impl Into<String>) {
        self.error(span, DiagnosticCategory::ArityMismatch, message);
    }

    /// `SpawnShape`: a spawn target is not a direct call expression, or the
    /// callee is not a FUNCTION (§4.3.6).
    pub(crate) fn spawn_shape(&mut self, span: Span, message: impl Into<String>) {
        self.error(span, DiagnosticCategory::SpawnShape, message);
    }
}
