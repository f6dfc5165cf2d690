use rivet_common::{DiagnosticCategory, Span};

use crate::context::CheckContext;

impl CheckContext {
    /// `EscapeViolation`: a non-primitive value assigned to a name declared
    /// outside the current `private` scope (§4.5).
    pub(crate) fn escape_violation(&mut self, span: Span) {
        self.error(
            span,
            DiagnosticCategory::EscapeViolation,
            "cannot assign non-primitive type to variable declared outside private block",
        );
    }
}
