//! Array-shaped expressions (§4.3.7): literals, index, slice, range, and
//! the fixed-size constructor.

use rivet_ast::{ArrayElement, Expr};
use rivet_common::Span;
use rivet_types::{PrimitiveKind, Type};

use crate::context::CheckContext;

impl CheckContext {
    /// `{ e1, e2, ... }`. An empty literal is the NIL-element sentinel
    /// (§3.1); a bare `range` element flattens into the outer literal,
    /// contributing its element type rather than nesting as `int[]`.
    pub(super) fn check_array_literal(&mut self, _span: Span, elements: &[ArrayElement]) -> Option<Type> {
        if elements.is_empty() {
            return Some(Type::array_of(Type::Primitive(PrimitiveKind::Nil)));
        }

        let mut elem_ty: Option<Type> = None;
        let mut ok = true;
        for element in elements {
            let contributed = match element {
                ArrayElement::Value(Expr::Range { start, end, span: range_span, .. }) => {
                    match self.check_range(*range_span, start, end) {
                        Some(_) => Some(Type::Primitive(PrimitiveKind::Int)),
                        None => None,
                    }
                }
                ArrayElement::Value(e) => self.check_expr(e),
                ArrayElement::Spread(e) => match self.check_expr(e) {
                    Some(Type::Array(inner)) => Some((*inner).clone()),
                    Some(other) => {
                        self.type_mismatch(e.span(), format!("spread element must be an array, found {other:?}"));
                        None
                    }
                    None => None,
                },
            };

            let Some(contributed) = contributed else {
                ok = false;
                continue;
            };
            match &elem_ty {
                None => elem_ty = Some(contributed),
                Some(existing) if *existing == contributed => {}
                Some(existing) => {
                    self.type_mismatch(
                        element_span(element),
                        format!("array element type {contributed:?} does not match {existing:?}"),
                    );
                    ok = false;
                }
            }
        }

        if !ok {
            return None;
        }
        elem_ty.map(Type::array_of)
    }

    /// `a[i]` (§4.3.7): `a` must be ARRAY, `i` numeric.
    pub(super) fn check_index(&mut self, _span: Span, array: &Expr, index: &Expr) -> Option<Type> {
        let array_ty = self.check_expr(array)?;
        let index_ty = self.check_expr(index)?;
        let Type::Array(elem) = array_ty else {
            self.type_mismatch(array.span(), format!("index target must be an array, found {array_ty:?}"));
            return None;
        };
        if !index_ty.is_numeric() {
            self.type_mismatch(index.span(), format!("array index must be numeric, found {index_ty:?}"));
            return None;
        }
        Some((*elem).clone())
    }

    /// `a[start..end]`/`a[start..]`/`a[..end]`/`a[..]` (§4.3.7): result is
    /// the same ARRAY type as `a`; any present bound must be numeric.
    pub(super) fn check_slice(
        &mut self,
        _span: Span,
        array: &Expr,
        start: Option<&Expr>,
        end: Option<&Expr>,
    ) -> Option<Type> {
        let array_ty = self.check_expr(array)?;
        if !matches!(array_ty, Type::Array(_)) {
            self.type_mismatch(array.span(), format!("slice target must be an array, found {array_ty:?}"));
            return None;
        }
        let mut ok = true;
        for bound in [start, end].into_iter().flatten() {
            match self.check_expr(bound) {
                Some(ty) if ty.is_numeric() => {}
                Some(ty) => {
                    self.type_mismatch(bound.span(), format!("slice bound must be numeric, found {ty:?}"));
                    ok = false;
                }
                None => ok = false,
            }
        }
        ok.then_some(array_ty)
    }

    /// `start..end` (§4.3.7): both bounds numeric; result is always `int[]`.
    pub(super) fn check_range(&mut self, span: Span, start: &Expr, end: &Expr) -> Option<Type> {
        let start_ty = self.check_expr(start)?;
        let end_ty = self.check_expr(end)?;
        if !start_ty.is_numeric() || !end_ty.is_numeric() {
            self.type_mismatch(span, "range bounds must be numeric");
            return None;
        }
        Some(Type::array_of(Type::Primitive(PrimitiveKind::Int)))
    }

    /// `new T[n]` / `new T[n](default)` (§4.3.7): `n` is `int` or `long`; a
    /// present default must equal `T` or be numerically promotable to it.
    pub(super) fn check_sized_array(
        &mut self,
        span: Span,
        element_type: &rivet_ast::TypeAnnotation,
        size: &Expr,
        default: Option<&Expr>,
    ) -> Option<Type> {
        let elem_ty = match self.types.resolve_annotation(element_type) {
            Ok(t) => self.types.intern(t),
            Err(name) => {
                self.type_mismatch(span, format!("unknown type '{name}'"));
                return None;
            }
        };

        let size_ty = self.check_expr(size)?;
        if !matches!(size_ty, Type::Primitive(PrimitiveKind::Int) | Type::Primitive(PrimitiveKind::Long)) {
            self.type_mismatch(size.span(), format!("array size must be int or long, found {size_ty:?}"));
            return None;
        }

        if let Some(default_expr) = default {
            let default_ty = self.check_expr(default_expr)?;
            let compatible = default_ty == elem_ty
                || rivet_types::promote(&default_ty, &elem_ty).as_ref() == Some(&elem_ty);
            if !compatible {
                self.type_mismatch(
                    default_expr.span(),
                    format!("default value type {default_ty:?} is not compatible with element type {elem_ty:?}"),
                );
                return None;
            }
        }

        Some(Type::array_of(elem_ty))
    }
}

fn element_span(element: &ArrayElement) -> Span {
    match element {
        ArrayElement::Value(e) | ArrayElement::Spread(e) => e.span(),
    }
}
