//! Shared mutable state threaded through every checking phase.
//!
//! One struct owns the Symbol Table, the Type Registry, the diagnostic
//! sink, and the handful of cross-phase context fields (current function
//! return type, private-scope depth), and every checking phase is an
//! `impl CheckContext` method rather than a free function threading five
//! parameters.

use rustc_hash::FxHashMap;

use rivet_ast::NodeId;
use rivet_common::{CheckerOptions, DiagnosticSink};
use rivet_symbols::SymbolTable;
use rivet_types::{Type, TypeRegistry};

/// External memoization of per-node inferred types (§9 design note: "An
/// implementation that memoizes externally ... is equivalent" to a mutable
/// slot on the node itself). Keeping this in `rivet-check` rather than on
/// `Expr` avoids `rivet-ast` depending on `rivet-types`.
#[derive(Default)]
pub struct TypeCache {
    node_types: FxHashMap<NodeId, Type>,
}

impl TypeCache {
    pub fn get(&self, id: NodeId) -> Option<&Type> {
        self.node_types.get(&id)
    }

    pub fn set(&mut self, id: NodeId, ty: Type) -> Type {
        self.node_types.insert(id, ty.clone());
        ty
    }
}

pub struct CheckContext {
    pub symbols: SymbolTable,
    pub types: TypeRegistry,
    pub sink: DiagnosticSink,
    pub options: CheckerOptions,
    pub type_cache: TypeCache,
    /// `Some` while checking a function body; compared against `return`
    /// expressions (§4.4).
    pub current_return_type: Option<Type>,
    /// Incremented on entry to a `PRIVATE` block/function, decremented on
    /// exit. Non-zero means the Escape Analyzer (§4.5) is active.
    pub private_depth: u32,
}

impl CheckContext {
    /// Builds a fresh checking context with the Symbol Table seeded per
    /// §6 ("External Interfaces": built-in free functions `len` and the
    /// printing primitives — see `crate::prelude`).
    pub fn new(options: CheckerOptions) -> Self {
        let mut symbols = SymbolTable::new();
        crate::prelude::seed_builtins(&mut symbols);
        Self {
            symbols,
            types: TypeRegistry::new(),
            sink: DiagnosticSink::default(),
            options,
            type_cache: TypeCache::default(),
            current_return_type: None,
            private_depth: 0,
        }
    }

    pub fn in_private_scope(&self) -> bool {
        self.private_depth > 0
    }
}
