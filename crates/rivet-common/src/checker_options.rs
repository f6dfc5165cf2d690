//! Checker-wide configuration.
//!
//! Lives in `rivet-common` (rather than `rivet-check`) so that both
//! `rivet-types` and `rivet-check` can reference `CheckerOptions` without a
//! circular dependency.
//!
//! This is deliberately small: the core is a library, not a CLI. A
//! containing binary owns argument parsing, config-file loading, and
//! environment variables, and constructs `CheckerOptions` itself.

/// Toggles that change what the semantic analysis core actually checks.
#[derive(Debug, Clone)]
pub struct CheckerOptions {
    /// Compute Levenshtein-based "did you mean?" suggestions for undefined
    /// names and unknown members. Disabling this skips an O(n) scan over
    /// in-scope names / method-table entries per miss, which matters for
    /// pathologically large generated scopes.
    pub suggest_names: bool,
    /// Maximum edit distance accepted for a suggestion (see
    /// `rivet_common::edit_distance::best_suggestion`).
    pub suggestion_max_distance: usize,
    /// Run the escape analyzer (§4.5). A caller that only wants
    /// type information (e.g. hover-on-identifier in an editor) can turn
    /// this off to avoid paying for ownership diagnostics it will discard.
    pub check_escapes: bool,
    /// Run the concurrency analyzer (§4.6). Same rationale as `check_escapes`.
    pub check_concurrency: bool,
}

impl Default for CheckerOptions {
    fn default() -> Self {
        Self {
            suggest_names: true,
            suggestion_max_distance: 2,
            check_escapes: true,
            check_concurrency: true,
        }
    }
}
