//! Common types shared by every crate in the semantic-analysis core.
//!
//! This crate provides foundational, AST-independent building blocks:
//! - Source spans (`Span`, `Spanned`, `SpanBuilder`, `ByteSpan`)
//! - The diagnostic model (`Diagnostic`, `DiagnosticCategory`, `DiagnosticSink`)
//! - Edit-distance "did you mean?" suggestions
//! - Checker-wide configuration (`CheckerOptions`)
//! - The host/embedding error channel (`CheckError`)

pub mod checker_options;
pub mod diagnostics;
pub mod edit_distance;
pub mod error;
pub mod modifiers;
pub mod span;

pub use checker_options::CheckerOptions;
pub use diagnostics::{Diagnostic, DiagnosticCategory, DiagnosticSink, Severity};
pub use error::{CheckError, CheckResult};
pub use modifiers::{MemQual, Modifier};
pub use span::{ByteSpan, Span, SpanBuilder, Spanned};
