//! `if`, `while`, C-style `for`, and `for-each` (§4.4). Each accepts an
//! optional `SHARED` prefix that the type checker only has to accept
//! syntactically — it is "consumed by later stages, not by the type
//! checker beyond well-formedness" (§4.4), so `shared` is unused here.

use rivet_ast::{Expr, Stmt};
use rivet_common::Span;
use rivet_types::{PrimitiveKind, Type};

use crate::context::CheckContext;

impl CheckContext {
    pub(super) fn check_if(&mut self, cond: &Expr, then_branch: &Stmt, else_branch: Option<&Stmt>) {
        self.check_bool_condition(cond);
        self.check_stmt(then_branch);
        if let Some(else_branch) = else_branch {
            self.check_stmt(else_branch);
        }
    }

    pub(super) fn check_while(&mut self, _span: Span, _shared: bool, cond: &Expr, body: &Stmt) {
        self.check_bool_condition(cond);
        self.check_stmt(body);
    }

    /// C-style `for (init; cond; step) body`: `init` and any name it
    /// declares live in a scope that also encloses `body`, so the loop gets
    /// its own scope distinct from the body block's own (§4.4 "Block").
    pub(super) fn check_for_c(
        &mut self,
        span: Span,
        _shared: bool,
        init: Option<&Stmt>,
        cond: Option<&Expr>,
        step: Option<&Expr>,
        body: &Stmt,
    ) {
        self.symbols.enter_scope();
        if let Some(init) = init {
            self.check_stmt(init);
        }
        if let Some(cond) = cond {
            self.check_bool_condition(cond);
        }
        if let Some(step) = step {
            self.check_expr(step);
        }
        self.check_stmt(body);
        self.exit_scope_checked(span);
    }

    /// `for (x in iterable) body`: `iterable` must be an array; `x` is
    /// declared in a scope enclosing `body` with the array's element type.
    pub(super) fn check_for_each(&mut self, span: Span, _shared: bool, var_name: &str, iterable: &Expr, body: &Stmt) {
        let elem_ty = match self.check_expr(iterable) {
            Some(Type::Array(elem)) => Some((*elem).clone()),
            Some(other) => {
                self.type_mismatch(iterable.span(), format!("for-each target must be an array, found {other:?}"));
                None
            }
            None => None,
        };

        self.symbols.enter_scope();
        if let Some(elem_ty) = elem_ty {
            self.declare_checked(span, var_name, elem_ty);
        }
        self.check_stmt(body);
        self.exit_scope_checked(span);
    }

    fn check_bool_condition(&mut self, cond: &Expr) {
        match self.check_expr(cond) {
            Some(Type::Primitive(PrimitiveKind::Bool)) | None => {}
            Some(other) => {
                self.type_mismatch(cond.span(), format!("condition must be bool, found {other:?}"));
            }
        }
    }
}
