//! Host/embedding error channel.
//!
//! Distinct from [`crate::diagnostics::Diagnostic`]: a `Diagnostic` reports
//! an ill-typed *user program* and is always recoverable. A `CheckError`
//! reports a caller misusing the core's own API — a structural precondition
//! of the interface, not of the analyzed program — and is the one place
//! this crate returns `Result` instead of accumulating into a sink.
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    /// `exit_scope` was called with no corresponding `enter_scope`.
    UnbalancedScope,
    /// A span handed to the checker falls outside the source text the
    /// caller claims it belongs to.
    SpanOutOfBounds { start: u32, end: u32, source_len: u32 },
    /// An internal invariant (e.g. a freeze-count accounting mismatch) was
    /// violated. This should never happen for a checker-internal call path;
    /// seeing it means the caller poked at `SymbolTable` state directly in
    /// a way the checker does not expect.
    InvariantViolation(String),
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnbalancedScope => {
                write!(f, "exit_scope called with no matching enter_scope")
            }
            Self::SpanOutOfBounds {
                start,
                end,
                source_len,
            } => write!(
                f,
                "span {start}..{end} falls outside source of length {source_len}"
            ),
            Self::InvariantViolation(detail) => {
                write!(f, "internal invariant violated: {detail}")
            }
        }
    }
}

impl std::error::Error for CheckError {}

pub type CheckResult<T> = Result<T, CheckError>;
