//! Expression/Statement checkers, built-in/static resolvers, escape
//! analyzer, and concurrency analyzer (§2 items 4, 6, 7, 8, 9).
//!
//! `rivet-check` is the one crate in the workspace that is stateful: every
//! other crate (`rivet-ast`, `rivet-types`, `rivet-symbols`) is pure data or
//! pure functions over data handed in by the caller. Here, [`CheckContext`]
//! owns the Symbol Table, the Type Registry, and the diagnostic sink, and
//! every checking phase is a method on it rather than a free function
//! threading five parameters (see `context` module docs).
//!
//! Diagnostic emission is split by category into `error_reporter`'s
//! submodules rather than kept as one monolithic `impl` block; the tables
//! behind built-in methods and static calls are data-driven per §9's
//! design note rather than spelled out as `if`-cascades.

mod builtin_methods;
mod concurrency;
pub mod context;
mod error_reporter;
mod escape;
mod expr_checker;
mod prelude;
mod static_resolver;
mod stmt_checker;

pub use context::CheckContext;
