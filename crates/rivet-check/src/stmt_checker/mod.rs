//! Statement Checker (§2 item 7, §4.4): walks statements, manages scopes,
//! updates symbol metadata, and threads a "current function return type"
//! context. Split the same way `expr_checker` is: this module owns the
//! dispatch and the scope-management helpers every other submodule shares;
//! `decls` and `control_flow` hold the individual statement forms.

mod control_flow;
mod decls;

use rivet_ast::{Module, Stmt};
use rivet_common::{Modifier, Span};
use rivet_symbols::{DeclareOutcome, SymbolId};
use rivet_types::Type;

use crate::context::CheckContext;

impl CheckContext {
    /// Top-level entry point (§6, "External Interfaces"): checks every
    /// top-level statement of a parsed module, in program order.
    pub fn check_module(&mut self, module: &Module) {
        self.check_stmt_sequence(&module.statements);
    }

    /// Walks a statement sequence in program order — shared by a module's
    /// top level, a block body, and a lambda's block body (§4.3.8).
    pub(crate) fn check_stmt_sequence(&mut self, stmts: &[Stmt]) {
        for stmt in stmts {
            self.check_stmt(stmt);
        }
    }

    fn check_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::VarDecl { span, name, mem_qual, declared_type, initializer, .. } => {
                self.check_var_decl(*span, name, *mem_qual, declared_type.as_ref(), initializer.as_ref());
            }
            Stmt::ExprStmt { expr, .. } => {
                self.check_expr(expr);
            }
            Stmt::Block { span, modifier, stmts, .. } => {
                self.check_block(*span, *modifier, stmts);
            }
            Stmt::If { cond, then_branch, else_branch, .. } => {
                self.check_if(cond, then_branch, else_branch.as_deref());
            }
            Stmt::While { span, shared, cond, body, .. } => {
                self.check_while(*span, *shared, cond, body);
            }
            Stmt::ForC { span, shared, init, cond, step, body, .. } => {
                self.check_for_c(*span, *shared, init.as_deref(), cond.as_ref(), step.as_ref(), body);
            }
            Stmt::ForEach { span, shared, var_name, iterable, body, .. } => {
                self.check_for_each(*span, *shared, var_name, iterable, body);
            }
            Stmt::FuncDecl { span, name, func_mod, params, return_type, body, .. } => {
                self.check_func_decl(*span, name, *func_mod, params, return_type, body);
            }
            Stmt::Return { span, value, .. } => {
                self.check_return(*span, value.as_ref());
            }
            Stmt::Import { span, module, alias, .. } => {
                self.check_import(*span, module, alias.as_deref());
            }
        }
    }

    /// `{ ... }` (§4.4): pushes a scope at a new arena depth; a `PRIVATE`
    /// modifier activates the Escape Analyzer for the block's duration.
    pub(crate) fn check_block(&mut self, span: Span, modifier: Modifier, stmts: &[Stmt]) {
        let _span = tracing::debug_span!("check_block", private = modifier.is_private()).entered();
        self.symbols.enter_scope();
        if modifier.is_private() {
            self.private_depth += 1;
        }
        self.check_stmt_sequence(stmts);
        if modifier.is_private() {
            self.private_depth -= 1;
        }
        self.exit_scope_checked(span);
    }

    /// Pops the innermost scope, raising `PendingAccess` against every
    /// symbol the scope leaves `PENDING` (§3.2.1 supplement, scenario S8):
    /// a task handle that goes out of scope unsynced can never be synced
    /// afterward, so it is flagged at its own declaration span exactly as
    /// if it had been accessed there. `span` is only used to report an
    /// unbalanced scope stack, which should never happen in practice.
    pub(crate) fn exit_scope_checked(&mut self, span: Span) {
        match self.symbols.exit_scope() {
            Ok(pending) => {
                for id in pending {
                    let symbol = self.symbols.symbol(id);
                    let name = symbol.name.clone();
                    let decl_span = symbol.decl_span;
                    self.pending_access(decl_span, &name);
                }
            }
            Err(err) => {
                tracing::error!(%err, %span, "exit_scope called on an unbalanced scope stack");
            }
        }
    }

    /// Declares `name: ty` in the current scope. Declaring a name already
    /// present in the same scope is an error (§4.2); the existing symbol is
    /// returned so the caller can keep checking against *some* type rather
    /// than aborting the statement outright (error-recovery per §4.7).
    pub(crate) fn declare_checked(&mut self, span: Span, name: &str, ty: Type) -> SymbolId {
        match self.symbols.declare(name, ty, span) {
            DeclareOutcome::Declared(id) => id,
            DeclareOutcome::AlreadyDeclared(id) => {
                self.type_mismatch(span, format!("'{name}' is already declared in this scope"));
                id
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/stmt_checker.rs"]
mod tests;
