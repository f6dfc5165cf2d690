//! Diagnostic model shared by every analysis phase.
//!
//! Mirrors the shape of a production diagnostic sink: a severity, a source
//! span, a category tag, human text, and an optional "did you mean?"
//! suggestion (see [`crate::edit_distance`]). The sink accumulates
//! diagnostics and flips a single `had_error` flag; it never panics and
//! never discards a diagnostic.

use crate::span::Span;
use std::fmt;

/// Severity of a diagnostic. The core only ever emits `Error` today;
/// `Warning` exists so a future lint-style check (e.g. unused imports)
/// has somewhere to live without widening the enum again.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// Stable category tag for a diagnostic. Every category here corresponds
/// to a specific checking rule; see the crate-level docs of `rivet-check`
/// for which component raises which category.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DiagnosticCategory {
    UndefinedName,
    TypeMismatch,
    ArityMismatch,
    InvalidOperator,
    InvalidMember,
    EscapeViolation,
    FrozenMutation,
    PendingAccess,
    SpawnShape,
    PrivateSpawnReturn,
    ImportError,
    UnknownStaticType,
}

impl DiagnosticCategory {
    /// Short machine-stable tag, useful for test assertions and for any
    /// downstream tool that wants to filter diagnostics by kind without
    /// matching on message text.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::UndefinedName => "undefined-name",
            Self::TypeMismatch => "type-mismatch",
            Self::ArityMismatch => "arity-mismatch",
            Self::InvalidOperator => "invalid-operator",
            Self::InvalidMember => "invalid-member",
            Self::EscapeViolation => "escape-violation",
            Self::FrozenMutation => "frozen-mutation",
            Self::PendingAccess => "pending-access",
            Self::SpawnShape => "spawn-shape",
            Self::PrivateSpawnReturn => "private-spawn-return",
            Self::ImportError => "import-error",
            Self::UnknownStaticType => "unknown-static-type",
        }
    }
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A single diagnostic: severity, location, category, message, and an
/// optional spelling suggestion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub span: Span,
    pub category: DiagnosticCategory,
    pub message: String,
    pub suggestion: Option<String>,
}

impl Diagnostic {
    pub fn error(span: Span, category: DiagnosticCategory, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            span,
            category,
            message: message.into(),
            suggestion: None,
        }
    }

    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Render the message plus suggestion the way a terminal reporter would,
    /// e.g. `undefined variable 'lenght' (did you mean 'length'?)`.
    pub fn rendered_text(&self) -> String {
        match &self.suggestion {
            Some(s) => format!("{} (did you mean '{s}'?)", self.message),
            None => self.message.clone(),
        }
    }
}

/// Accumulates diagnostics for a single checking run and tracks whether
/// code generation should be suppressed.
///
/// `DiagnosticSink` is the only mutable piece of global-ish state the
/// checker needs; unlike the reference implementation's single global
/// flag, it lives on a context struct that is passed explicitly so that
/// multiple checking runs (e.g. concurrent LSP requests) never share it.
#[derive(Debug, Default)]
pub struct DiagnosticSink {
    diagnostics: Vec<Diagnostic>,
    had_error: bool,
}

impl DiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity == Severity::Error {
            self.had_error = true;
        }
        tracing::debug!(
            category = %diagnostic.category,
            span = %diagnostic.span,
            "{}",
            diagnostic.rendered_text()
        );
        self.diagnostics.push(diagnostic);
    }

    pub fn error(&mut self, span: Span, category: DiagnosticCategory, message: impl Into<String>) {
        self.push(Diagnostic::error(span, category, message));
    }

    pub fn error_with_suggestion(
        &mut self,
        span: Span,
        category: DiagnosticCategory,
        message: impl Into<String>,
        suggestion: impl Into<String>,
    ) {
        self.push(Diagnostic::error(span, category, message).with_suggestion(suggestion));
    }

    pub fn had_error(&self) -> bool {
        self.had_error
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

#[cfg(test)]
#[path = "../tests/diagnostics.rs"]
mod tests;
