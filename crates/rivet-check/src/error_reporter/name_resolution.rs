use rivet_common::{DiagnosticCategory, Span};

use crate::context::CheckContext;

impl CheckContext {
    /// `UndefinedName`: a variable/function/method/namespace lookup missed
    /// (§4.3.1). Looks up a spelling suggestion over every name currently
    /// visible in the symbol table.
    pub(crate) fn undefined_name(&mut self, span: Span, name: &str) {
        let suggestion = self
            .suggest(name, self.symbols.visible_names())
            .map(String::from);
        match suggestion {
            Some(s) => self.error_with_suggestion(
                span,
                DiagnosticCategory::UndefinedName,
                format!("undefined name '{name}'"),
                s,
            ),
            None => self.error(span, DiagnosticCategory::UndefinedName, format!("undefined name '{name}'")),
        }
    }

    /// `ImportError`: unknown module, or a named import whose alias
    /// collides with a reserved keyword (§4.4).
    pub(crate) fn import_error(&mut self, span: Span, message: impl Into<String>) {
        self.error(span, DiagnosticCategory::ImportError, message);
    }
}
