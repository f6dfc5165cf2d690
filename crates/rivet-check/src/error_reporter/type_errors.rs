use rivet_common::{DiagnosticCategory, Span};

use crate::context::CheckContext;

impl CheckContext {
    /// `TypeMismatch`: structural inequality where equality was required.
    pub(crate) fn type_mismatch(&mut self, span: Span, message: impl Into<String>) {
        self.error(span, DiagnosticCategory::TypeMismatch, message);
    }

    /// `InvalidOperator`: an operator applied to operand types it does not
    /// support (§4.3.2).
    pub(crate) fn invalid_operator(&mut self, span: Span, message: impl Into<String>) {
        self.error(span, DiagnosticCategory::InvalidOperator, message);
    }
}
