//! Binary, unary, and increment/decrement operators (§4.3.2).

use rivet_ast::{BinaryOp, Expr, UnaryOp};
use rivet_common::Span;
use rivet_types::{PrimitiveKind, Type};

use crate::context::CheckContext;

impl CheckContext {
    pub(super) fn check_binary(&mut self, span: Span, op: BinaryOp, left: &Expr, right: &Expr) -> Option<Type> {
        let left_ty = self.check_expr(left)?;
        let right_ty = self.check_expr(right)?;

        if op.is_logical() {
            if left_ty == Type::Primitive(PrimitiveKind::Bool) && right_ty == Type::Primitive(PrimitiveKind::Bool) {
                return Some(Type::Primitive(PrimitiveKind::Bool));
            }
            self.invalid_operator(span, "logical operators require bool operands");
            return None;
        }

        if op.is_comparison() {
            if left_ty == right_ty || (left_ty.is_numeric() && right_ty.is_numeric()) {
                return Some(Type::Primitive(PrimitiveKind::Bool));
            }
            self.invalid_operator(span, "comparison requires equal or numeric operands");
            return None;
        }

        if op == BinaryOp::Add {
            let either_string = left_ty == Type::Primitive(PrimitiveKind::String)
                || right_ty == Type::Primitive(PrimitiveKind::String);
            if either_string && left_ty.is_printable() && right_ty.is_printable() {
                return Some(Type::Primitive(PrimitiveKind::String));
            }
        }

        debug_assert!(op.is_arithmetic());
        match rivet_types::promote(&left_ty, &right_ty) {
            Some(result) => Some(result),
            None => {
                self.invalid_operator(span, "arithmetic operator requires numeric operands");
                None
            }
        }
    }

    pub(super) fn check_unary(&mut self, span: Span, op: UnaryOp, operand: &Expr) -> Option<Type> {
        let operand_ty = self.check_expr(operand)?;
        match op {
            UnaryOp::Neg if operand_ty.is_numeric() => Some(operand_ty),
            UnaryOp::Neg => {
                self.invalid_operator(span, "unary '-' requires a numeric operand");
                None
            }
            UnaryOp::Not if operand_ty == Type::Primitive(PrimitiveKind::Bool) => Some(operand_ty),
            UnaryOp::Not => {
                self.invalid_operator(span, "unary '!' requires a bool operand");
                None
            }
        }
    }

    pub(super) fn check_inc_dec(&mut self, span: Span, operand: &Expr) -> Option<Type> {
        let operand_ty = self.check_expr(operand)?;
        if !operand_ty.is_numeric() {
            self.invalid_operator(span, "'++'/'--' require a numeric operand");
            return None;
        }
        if let Some(name) = operand.base_symbol_name() {
            let id = self.resolve_variable(span, name)?;
            if self.symbols.symbol(id).is_frozen() {
                self.frozen_mutation(span, name);
                return None;
            }
        }
        Some(operand_ty)
    }
}
