//! Concurrency Analyzer (§2 item 9, §4.6): consulted on spawn and sync
//! expressions; mutates symbol thread-state and freeze counters.

use rivet_common::{MemQual, Span};
use rivet_symbols::{SymbolId, ThreadState};
use rivet_types::{PrimitiveKind, Type};

use crate::context::CheckContext;

/// Whether an argument's base symbol must be frozen for the duration of a
/// spawned task: an explicit `AS_REF` qualifier, or a reference type
/// (ARRAY, STRING, any BUILTIN_CLASS) regardless of qualifier (§4.3.6).
pub(crate) fn requires_freeze(mem_qual: MemQual, ty: &Type) -> bool {
    if mem_qual.implies_reference() {
        return true;
    }
    matches!(ty, Type::Array(_) | Type::BuiltinClass(_))
        || matches!(ty, Type::Primitive(PrimitiveKind::String))
}

impl CheckContext {
    /// `on_spawn(call, result_symbol_or_none)`: freezes every base symbol
    /// that must snapshot-immutable for the task's lifetime, and — only
    /// when the spawn is bound to a simple variable — marks that variable
    /// `PENDING` with the frozen set recorded as `frozen_args`.
    pub(crate) fn on_spawn(&mut self, result_symbol: Option<SymbolId>, frozen_bases: &[SymbolId]) {
        if !self.options.check_concurrency {
            return;
        }
        for &base in frozen_bases {
            self.symbols.freeze(base);
        }
        if let Some(r) = result_symbol {
            self.symbols.mark_pending(r, frozen_bases.iter().copied().collect());
        }
    }

    /// Scalar sync `h!`. Requires `h` to be `PENDING`; unfreezes every
    /// recorded base symbol and transitions `h` to `SYNCHRONIZED`.
    pub(crate) fn on_sync_scalar(&mut self, handle: SymbolId, name: &str, span: Span) {
        if !self.options.check_concurrency {
            return;
        }
        let state = self.symbols.symbol(handle).thread_state;
        match state {
            ThreadState::Pending => self.symbols.mark_synchronized(handle),
            ThreadState::Synchronized => {}
            ThreadState::Normal => {
                self.type_mismatch(span, format!("cannot sync '{name}': not a pending task handle"));
            }
        }
    }

    /// Array sync `[h1, h2, ...]!`. Elements already `SYNCHRONIZED` are
    /// silently skipped; mixed states across the array are not an error.
    pub(crate) fn on_sync_array(&mut self, handles: &[SymbolId]) {
        if !self.options.check_concurrency {
            return;
        }
        for &handle in handles {
            if self.symbols.symbol(handle).thread_state == ThreadState::Pending {
                self.symbols.mark_synchronized(handle);
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/concurrency.rs"]
mod tests;
