//! Escape Analyzer (§2 item 8, §4.5): consulted when binding a value to a
//! symbol declared in an enclosing scope, inside a `private` region.

use rivet_common::Span;
use rivet_symbols::SymbolId;
use rivet_types::Type;

use crate::context::CheckContext;

impl CheckContext {
    /// Rejects binding `value_ty` to `target` if `target` was declared in a
    /// strictly shallower scope than the current one, `value_ty` is not
    /// primitive, and a `PRIVATE` block/function is currently active.
    /// Returns `true` if the binding is permitted.
    pub(crate) fn check_escape(&mut self, target: SymbolId, value_ty: &Type, span: Span) -> bool {
        if !self.options.check_escapes || !self.in_private_scope() {
            return true;
        }
        let target_depth = self.symbols.symbol(target).arena_depth;
        let current_depth = self.symbols.arena_depth();
        if target_depth >= current_depth {
            return true;
        }
        if value_ty.crosses_private_boundary() {
            return true;
        }
        self.escape_violation(span);
        false
    }
}

#[cfg(test)]
#[path = "../tests/escape.rs"]
mod tests;
