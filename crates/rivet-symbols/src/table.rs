//! Symbol Table (§2 item 2, §4.2): lexically scoped name resolution plus
//! escape/thread-state/freeze bookkeeping, keyed on [`SymbolId`].

use rustc_hash::FxHashMap;
use tracing::trace;

use rivet_common::{CheckError, CheckResult, Span};
use rivet_types::Type;

use crate::symbol::{FrozenArgs, Symbol};
use crate::symbol_id::SymbolId;
use crate::thread_state::ThreadState;

/// Outcome of [`SymbolTable::declare`]: declaring a name already present in
/// the *same* scope is an error (§4.2), surfaced to the caller rather than
/// silently shadowing or panicking so the Statement Checker can raise a
/// diagnostic at the redeclaration's span.
pub enum DeclareOutcome {
    Declared(SymbolId),
    AlreadyDeclared(SymbolId),
}

struct Scope {
    names: FxHashMap<String, SymbolId>,
}

impl Scope {
    fn new() -> Self {
        Self {
            names: FxHashMap::default(),
        }
    }
}

pub struct SymbolTable {
    arena: Vec<Symbol>,
    scopes: Vec<Scope>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    pub fn new() -> Self {
        Self {
            arena: Vec::new(),
            scopes: vec![Scope::new()],
        }
    }

    pub fn enter_scope(&mut self) {
        self.scopes.push(Scope::new());
    }

    /// Pops the innermost scope, returning the ids of any symbols it
    /// declared that are still `PENDING` (§3.2.1) — the caller raises a
    /// `PendingAccess` diagnostic per returned id, anchored at each symbol's
    /// own `decl_span`, before discarding them.
    pub fn exit_scope(&mut self) -> CheckResult<Vec<SymbolId>> {
        let scope = self.scopes.pop().ok_or(CheckError::UnbalancedScope)?;
        trace!(symbol_count = scope.names.len(), "exiting scope");
        let pending = scope
            .names
            .values()
            .copied()
            .filter(|id| self.arena[id.index()].thread_state == ThreadState::Pending)
            .collect();
        Ok(pending)
    }

    pub fn arena_depth(&self) -> u32 {
        u32::try_from(self.scopes.len() - 1).unwrap_or(u32::MAX)
    }

    pub fn declare(&mut self, name: impl Into<String>, ty: Type, decl_span: Span) -> DeclareOutcome {
        let name = name.into();
        let depth = self.arena_depth();
        if let Some(&existing) = self.scopes.last().and_then(|s| s.names.get(&name)) {
            return DeclareOutcome::AlreadyDeclared(existing);
        }
        let id = SymbolId::from_index(self.arena.len());
        self.arena.push(Symbol::new(name.clone(), ty, depth, decl_span));
        self.scopes
            .last_mut()
            .expect("at least one scope is always present")
            .names
            .insert(name, id);
        DeclareOutcome::Declared(id)
    }

    pub fn lookup(&self, name: &str) -> Option<SymbolId> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.names.get(name).copied())
    }

    /// Every name currently declared in any live scope, for "did you mean?"
    /// suggestion search (§4.3.1). Duplicates across scopes are harmless:
    /// [`rivet_common::edit_distance::best_suggestion`] just sees the same
    /// candidate twice.
    pub fn visible_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.scopes
            .iter()
            .flat_map(|scope| scope.names.keys().map(String::as_str))
    }

    pub fn is_namespace(&self, name: &str) -> bool {
        self.lookup(name)
            .is_some_and(|id| self.arena[id.index()].is_namespace)
    }

    pub fn symbol(&self, id: SymbolId) -> &Symbol {
        &self.arena[id.index()]
    }

    pub fn symbol_mut(&mut self, id: SymbolId) -> &mut Symbol {
        &mut self.arena[id.index()]
    }

    pub fn mark_pending(&mut self, id: SymbolId, frozen_args: FrozenArgs) {
        let symbol = self.symbol_mut(id);
        symbol.thread_state = ThreadState::Pending;
        symbol.frozen_args = Some(frozen_args);
    }

    pub fn mark_synchronized(&mut self, id: SymbolId) {
        let frozen_args = self.symbol_mut(id).frozen_args.take();
        if let Some(args) = frozen_args {
            for arg in args {
                self.unfreeze(arg);
            }
        }
        self.symbol_mut(id).thread_state = ThreadState::Synchronized;
    }

    pub fn freeze(&mut self, id: SymbolId) {
        let symbol = self.symbol_mut(id);
        symbol.freeze_count = symbol.freeze_count.saturating_add(1);
    }

    pub fn unfreeze(&mut self, id: SymbolId) {
        let symbol = self.symbol_mut(id);
        symbol.freeze_count = symbol.freeze_count.saturating_sub(1);
    }

    pub fn set_frozen_args(&mut self, id: SymbolId, frozen_args: FrozenArgs) {
        self.symbol_mut(id).frozen_args = Some(frozen_args);
    }
}

#[cfg(test)]
#[path = "../tests/table.rs"]
mod tests;
