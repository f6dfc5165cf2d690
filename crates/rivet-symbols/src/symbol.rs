//! Per-symbol metadata (§3.2).

use smallvec::SmallVec;

use rivet_common::{Modifier, Span};
use rivet_types::Type;

use crate::symbol_id::SymbolId;
use crate::thread_state::ThreadState;

/// Base symbols frozen by a spawn rarely exceed a handful; `SmallVec<[_; 4]>`
/// avoids a heap allocation for the common case (§1.1).
pub type FrozenArgs = SmallVec<[SymbolId; 4]>;

#[derive(Clone, Debug)]
pub struct Symbol {
    pub name: String,
    pub ty: Type,
    pub arena_depth: u32,
    /// Span of the declaration that introduced this symbol, used to anchor
    /// the scope-exit `PendingAccess` diagnostic (§3.2.1) at the handle's
    /// own declaration rather than at the scope that happened to drop it.
    pub decl_span: Span,
    pub is_function: bool,
    pub func_mod: Modifier,
    pub thread_state: ThreadState,
    pub freeze_count: u32,
    pub frozen_args: Option<FrozenArgs>,
    pub is_namespace: bool,
}

impl Symbol {
    pub fn new(name: impl Into<String>, ty: Type, arena_depth: u32, decl_span: Span) -> Self {
        Self {
            name: name.into(),
            ty,
            arena_depth,
            decl_span,
            is_function: false,
            func_mod: Modifier::Default,
            thread_state: ThreadState::Normal,
            freeze_count: 0,
            frozen_args: None,
            is_namespace: false,
        }
    }

    pub fn is_frozen(&self) -> bool {
        self.freeze_count > 0
    }
}
