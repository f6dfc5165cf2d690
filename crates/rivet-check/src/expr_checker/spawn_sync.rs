//! Spawn and sync expressions (§4.3.6): the concurrency surface of the
//! expression checker. Argument freezing and thread-state transitions
//! themselves live in [`crate::concurrency`]; this module only establishes
//! the expression shape and threads the result into that analyzer.

use rivet_ast::{Expr, SyncTarget};
use rivet_common::{Modifier, Span};
use rivet_symbols::{SymbolId, ThreadState};
use rivet_types::{PrimitiveKind, Type};

use crate::context::CheckContext;

impl CheckContext {
    /// `&CALL(args...)` (§4.3.6). `result_symbol` is `Some` only when this
    /// spawn is the direct initializer of a `var` declaration or the
    /// right-hand side of an assignment to a simple variable — the two
    /// binding forms the concurrency analyzer recognizes. Any other
    /// context (a bare statement, an index/member assignment target) passes
    /// `None` and the spawn is treated as fire-and-forget, which the source
    /// language only allows for a void-returning task.
    pub(crate) fn check_spawn(
        &mut self,
        span: Span,
        modifier: Modifier,
        call: &Expr,
        result_symbol: Option<SymbolId>,
    ) -> Option<Type> {
        let Expr::Call { callee, args, .. } = call else {
            self.spawn_shape(span, "spawn target must be a direct call expression");
            return None;
        };

        let (return_ty, frozen_bases) = self.check_call_inner(call.span(), callee, args, true)?;

        if modifier.is_private() && !is_primitive_or_void(&return_ty) {
            self.private_spawn_return(span);
            return None;
        }

        match result_symbol {
            Some(id) => {
                if return_ty == Type::Primitive(PrimitiveKind::Void) {
                    self.spawn_shape(span, "a void-returning spawn cannot be bound to a variable");
                    return None;
                }
                self.on_spawn(Some(id), &frozen_bases);
            }
            None => {
                if return_ty != Type::Primitive(PrimitiveKind::Void) {
                    self.spawn_shape(
                        span,
                        "spawn result is discarded: bind it to a variable or call a void-returning task",
                    );
                    return None;
                }
                self.on_spawn(None, &frozen_bases);
            }
        }

        Some(return_ty)
    }

    /// `H!` / `[H1, H2, ...]!` (§4.3.6).
    pub(crate) fn check_sync(&mut self, span: Span, target: &SyncTarget) -> Option<Type> {
        match target {
            SyncTarget::Scalar(expr) => {
                let Expr::Variable { name, .. } = expr.as_ref() else {
                    self.type_mismatch(expr.span(), "sync target must be a variable");
                    return None;
                };
                let id = self.resolve_variable(expr.span(), name)?;
                if self.options.check_concurrency
                    && self.symbols.symbol(id).thread_state == ThreadState::Normal
                {
                    self.type_mismatch(span, format!("cannot sync '{name}': not a pending task handle"));
                    return None;
                }
                let ty = self.symbols.symbol(id).ty.clone();
                self.on_sync_scalar(id, name, span);
                Some(ty)
            }
            SyncTarget::Array(exprs) => {
                let mut ids = Vec::with_capacity(exprs.len());
                for expr in exprs {
                    let Expr::Variable { name, .. } = expr else {
                        self.type_mismatch(expr.span(), "sync target must be a variable");
                        return None;
                    };
                    ids.push(self.resolve_variable(expr.span(), name)?);
                }
                self.on_sync_array(&ids);
                Some(Type::Primitive(PrimitiveKind::Void))
            }
        }
    }
}

fn is_primitive_or_void(ty: &Type) -> bool {
    matches!(ty, Type::Primitive(k) if k.crosses_private_boundary() || matches!(k, PrimitiveKind::Void))
}
