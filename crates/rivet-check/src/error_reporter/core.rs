use rivet_common::{DiagnosticCategory, Span};

use crate::context::CheckContext;

impl CheckContext {
    pub(crate) fn error(&mut self, span: Span, category: DiagnosticCategory, message: impl Into<String>) {
        self.sink.error(span, category, message);
    }

    pub(crate) fn error_with_suggestion(
        &mut self,
        span: Span,
        category: DiagnosticCategory,
        message: impl Into<String>,
        suggestion: impl Into<String>,
    ) {
        self.sink.error_with_suggestion(span, category, message, suggestion);
    }

    /// Compute a "did you mean?" suggestion over `candidates` if the
    /// `CheckerOptions` toggle for it is on (§1.1: suggestion search has a
    /// cost on large scopes that some embedders may want to skip).
    pub(crate) fn suggest<'a>(&self, name: &str, candidates: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
        if !self.options.suggest_names {
            return None;
        }
        rivet_common::edit_distance::best_suggestion(name, candidates, self.options.suggestion_max_distance)
    }
}
