//! Expression Checker (§2 item 4, §4.3): `check(expr, table) -> Option<Type>`,
//! memoizing the result externally by [`rivet_ast::NodeId`] rather than on
//! a mutable slot on the node (§9 design note).

mod arrays;
mod assignment;
mod calls;
mod lambdas;
mod members;
mod operators;
mod spawn_sync;

use rivet_ast::{Expr, LiteralValue};
use rivet_types::{BuiltinClass, PrimitiveKind, Type};

use crate::context::CheckContext;

impl CheckContext {
    /// Top-level entry point. A second call on the same node returns the
    /// cached value without re-walking (idempotence, §8 property 1).
    pub fn check_expr(&mut self, expr: &Expr) -> Option<Type> {
        if let Some(cached) = self.type_cache.get(expr.id()) {
            return Some(cached.clone());
        }
        let result = self.check_expr_uncached(expr);
        if let Some(ty) = result.clone() {
            self.type_cache.set(expr.id(), ty);
        }
        result
    }

    fn check_expr_uncached(&mut self, expr: &Expr) -> Option<Type> {
        match expr {
            Expr::Literal { value, .. } => self.check_literal(value),
            Expr::Variable { span, name, .. } => self.check_variable(*span, name),
            Expr::Interpolated { parts, .. } => self.check_interpolated(parts),
            Expr::Binary { span, op, left, right, .. } => self.check_binary(*span, *op, left, right),
            Expr::Unary { span, op, operand, .. } => self.check_unary(*span, *op, operand),
            Expr::Assign { span, target, value, .. } => self.check_assign(*span, target, value),
            Expr::IndexAssign { span, array, index, value, .. } => {
                self.check_index_assign(*span, array, index, value)
            }
            Expr::IncDec { span, operand, .. } => self.check_inc_dec(*span, operand),
            Expr::Call { span, callee, args, .. } => self.check_call(*span, callee, args),
            Expr::StaticCall { span, type_name, method, args, .. } => {
                self.check_static_call(*span, type_name, method, args)
            }
            Expr::MemberAccess { span, object, member, .. } => self.check_member_access(*span, object, member),
            Expr::Spawn { span, modifier, call, .. } => self.check_spawn(*span, *modifier, call, None),
            Expr::Sync { span, target, .. } => self.check_sync(*span, target),
            Expr::ArrayLiteral { span, elements, .. } => self.check_array_literal(*span, elements),
            Expr::Index { span, array, index, .. } => self.check_index(*span, array, index),
            Expr::Slice { span, array, start, end, .. } => self.check_slice(*span, array, start.as_deref(), end.as_deref()),
            Expr::Range { span, start, end, .. } => self.check_range(*span, start, end),
            Expr::SizedArray { span, element_type, size, default, .. } => {
                self.check_sized_array(*span, element_type, size, default.as_deref())
            }
            Expr::Lambda { span, params, return_type, body, .. } => {
                self.check_lambda(*span, params, return_type.as_ref(), body, None)
            }
        }
    }

    fn check_literal(&mut self, value: &LiteralValue) -> Option<Type> {
        let kind = match value {
            LiteralValue::Int(_) => PrimitiveKind::Int,
            LiteralValue::Long(_) => PrimitiveKind::Long,
            LiteralValue::Double(_) => PrimitiveKind::Double,
            LiteralValue::Float(_) => PrimitiveKind::Float,
            LiteralValue::Char(_) => PrimitiveKind::Char,
            LiteralValue::Byte(_) => PrimitiveKind::Byte,
            LiteralValue::Bool(_) => PrimitiveKind::Bool,
            LiteralValue::Str(_) => PrimitiveKind::String,
            LiteralValue::Nil => PrimitiveKind::Nil,
        };
        Some(Type::Primitive(kind))
    }

    fn check_variable(&mut self, span: rivet_common::Span, name: &str) -> Option<Type> {
        let id = self.resolve_variable(span, name)?;
        let symbol = self.symbols.symbol(id);
        if symbol.thread_state == rivet_symbols::ThreadState::Pending {
            self.pending_access(span, name);
            return None;
        }
        Some(symbol.ty.clone())
    }

    /// Embedded expressions in an interpolated string must be printable
    /// (§4.3.1); the overall result is always STRING.
    fn check_interpolated(&mut self, parts: &[Expr]) -> Option<Type> {
        let mut ok = true;
        for part in parts {
            match self.check_expr(part) {
                Some(ty) if ty.is_printable() => {}
                Some(_) => {
                    self.type_mismatch(part.span(), "interpolated expression must be printable");
                    ok = false;
                }
                None => ok = false,
            }
        }
        ok.then_some(Type::Primitive(PrimitiveKind::String))
    }

    /// Resolve a simple variable by name, emitting `UndefinedName` on a miss.
    pub(crate) fn resolve_variable(&mut self, span: rivet_common::Span, name: &str) -> Option<rivet_symbols::SymbolId> {
        match self.symbols.lookup(name) {
            Some(id) => Some(id),
            None => {
                self.undefined_name(span, name);
                None
            }
        }
    }

    pub(crate) fn resolve_builtin_class(ty: &Type) -> Option<BuiltinClass> {
        match ty {
            Type::BuiltinClass(class) => Some(*class),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/expr_checker.rs"]
mod tests;
