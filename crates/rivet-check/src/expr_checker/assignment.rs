//! Assignment and index-assignment (§4.3.3).

use rivet_ast::Expr;
use rivet_common::Span;
use rivet_types::{PrimitiveKind, Type};

use crate::context::CheckContext;

impl CheckContext {
    /// `x = v` (§4.3.3 item 1). The target must be a simple variable name —
    /// the source language has no other assignable form besides the
    /// dedicated `IndexAssign` node for `a[i] = v`.
    pub(super) fn check_assign(&mut self, span: Span, target: &Expr, value: &Expr) -> Option<Type> {
        let Expr::Variable { name, .. } = target else {
            self.type_mismatch(span, "assignment target must be a variable");
            return None;
        };
        let id = self.resolve_variable(span, name)?;
        let symbol = self.symbols.symbol(id);
        if symbol.thread_state == rivet_symbols::ThreadState::Pending {
            self.pending_access(span, name);
            return None;
        }
        if symbol.is_frozen() {
            self.frozen_mutation(span, name);
            return None;
        }
        let target_ty = symbol.ty.clone();

        // A spawn right-hand side bound to a simple variable additionally
        // runs the Concurrency Analyzer (§4.6: "if the left-hand side is a
        // simple variable, thread-state bookkeeping is performed"), the
        // same handling a spawn-initialized `var` declaration gets. §4.6
        // only excuses *that bookkeeping* for a non-variable left-hand
        // side; escape analysis still applies to every assignment
        // uniformly (§4.3.3), so this path runs `check_escape` exactly
        // like the non-spawn path below.
        if let Expr::Spawn { span: spawn_span, modifier, call, .. } = value {
            let value_ty = self.check_spawn(*spawn_span, *modifier, call, Some(id))?;
            if value_ty != target_ty {
                self.type_mismatch(span, format!("cannot assign {value_ty:?} to '{name}' of type {target_ty:?}"));
                return None;
            }
            if !self.check_escape(id, &value_ty, span) {
                return None;
            }
            return Some(target_ty);
        }

        let value_ty = self.check_expr(value)?;
        if value_ty != target_ty {
            self.type_mismatch(span, format!("cannot assign {value_ty:?} to '{name}' of type {target_ty:?}"));
            return None;
        }
        if !self.check_escape(id, &value_ty, span) {
            return None;
        }
        Some(target_ty)
    }

    /// `a[i] = v` (§4.3.3 item 2): `a` ARRAY, `i` INT, `type(v)` equals the
    /// element type.
    pub(super) fn check_index_assign(&mut self, span: Span, array: &Expr, index: &Expr, value: &Expr) -> Option<Type> {
        let array_ty = self.check_expr(array)?;
        let index_ty = self.check_expr(index)?;
        let value_ty = self.check_expr(value)?;

        let Type::Array(element) = &array_ty else {
            self.type_mismatch(array.span(), "index assignment target must be an array");
            return None;
        };
        if index_ty != Type::Primitive(PrimitiveKind::Int) {
            self.type_mismatch(index.span(), "array index must be int");
            return None;
        }
        if let Some(name) = array.base_symbol_name() {
            if let Some(id) = self.symbols.lookup(name) {
                if self.symbols.symbol(id).is_frozen() {
                    self.frozen_mutation(span, name);
                    return None;
                }
            }
        }
        if value_ty != **element {
            self.type_mismatch(value.span(), "assigned value does not match array element type");
            return None;
        }
        Some((**element).clone())
    }
}
