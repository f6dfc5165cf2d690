//! Ordinary call expressions (§2 item 6 overlap, §4.3.4): the built-in
//! `len` hardcode, Random's collection-family parametric rules, and the
//! generic FUNCTION-callee path. `spawn_sync.rs` reuses [`Self::check_call_inner`]
//! for the call a spawn encloses.

use smallvec::SmallVec;

use rivet_ast::Expr;
use rivet_common::{MemQual, Span};
use rivet_symbols::SymbolId;
use rivet_types::{BuiltinClass, PrimitiveKind, Type};

use crate::concurrency::requires_freeze;
use crate::context::CheckContext;

impl CheckContext {
    pub(super) fn check_call(&mut self, span: Span, callee: &Expr, args: &[Expr]) -> Option<Type> {
        let (ty, _) = self.check_call_inner(span, callee, args, false)?;
        Some(ty)
    }

    /// Shared machinery for an ordinary call and the call a spawn encloses
    /// (§4.3.4, §4.3.6). `is_spawn` additionally collects the base symbols
    /// that must be frozen for the task's lifetime.
    pub(crate) fn check_call_inner(
        &mut self,
        span: Span,
        callee: &Expr,
        args: &[Expr],
        is_spawn: bool,
    ) -> Option<(Type, SmallVec<[SymbolId; 4]>)> {
        if let Expr::Variable { name, .. } = callee {
            if name == "len" {
                return self.check_len_call(span, args).map(|t| (t, SmallVec::new()));
            }
        }

        if let Expr::MemberAccess { object, member, .. } = callee {
            if let Some(result) = self.try_check_random_collection_call(span, object, member, args) {
                return result.map(|t| (t, SmallVec::new()));
            }
        }

        let callee_ty = self.check_expr(callee)?;
        let Type::Function(func) = &callee_ty else {
            self.type_mismatch(callee.span(), format!("callee is not a function, found {callee_ty:?}"));
            return None;
        };
        let func = func.clone();

        let fixed_count = func.params.len();
        if args.len() < fixed_count || (!func.is_variadic && args.len() != fixed_count) {
            self.arity_mismatch(
                span,
                format!(
                    "expected {} argument(s){}, found {}",
                    fixed_count,
                    if func.is_variadic { " or more" } else { "" },
                    args.len()
                ),
            );
            return None;
        }

        let mut frozen = SmallVec::new();
        let mut ok = true;
        for (i, arg) in args.iter().enumerate() {
            if i < fixed_count {
                let param_ty = (*func.params[i]).clone();
                let Some(arg_ty) = self.check_call_argument(arg, &param_ty) else {
                    ok = false;
                    continue;
                };
                if is_spawn {
                    self.collect_frozen_base(func.param_mem_quals[i], &arg_ty, arg, &mut frozen);
                }
            } else {
                let Some(arg_ty) = self.check_expr(arg) else {
                    ok = false;
                    continue;
                };
                if !arg_ty.is_variadic_compatible() {
                    self.type_mismatch(arg.span(), format!("variadic argument of type {arg_ty:?} is not printable"));
                    ok = false;
                    continue;
                }
                if is_spawn {
                    self.collect_frozen_base(MemQual::Default, &arg_ty, arg, &mut frozen);
                }
            }
        }
        if !ok {
            return None;
        }

        Some(((*func.return_type).clone(), frozen))
    }

    /// Checks one fixed-position argument, filling a lambda literal's
    /// unannotated parameter/return slots from the parameter's declared
    /// type first (§4.3.8 bidirectional inference).
    fn check_call_argument(&mut self, arg: &Expr, expected: &Type) -> Option<Type> {
        if let Expr::Lambda { span, params, return_type, body, .. } = arg {
            if matches!(expected, Type::Function(_)) {
                let needs_inference = params.iter().any(|p| p.ty.is_none()) || return_type.is_none();
                if needs_inference {
                    return self.check_lambda(*span, params, return_type.as_ref(), body, Some(expected));
                }
            }
        }

        let arg_ty = self.check_expr(arg)?;
        if matches!(expected, Type::Primitive(PrimitiveKind::Any)) {
            if !arg_ty.is_printable() {
                self.type_mismatch(arg.span(), format!("argument of type {arg_ty:?} is not valid for an 'any' parameter"));
                return None;
            }
            return Some(arg_ty);
        }
        if &arg_ty != expected {
            self.type_mismatch(
                arg.span(),
                format!("argument type {arg_ty:?} does not match parameter type {expected:?}"),
            );
            return None;
        }
        Some(arg_ty)
    }

    fn collect_frozen_base(&mut self, mem_qual: MemQual, ty: &Type, arg: &Expr, out: &mut SmallVec<[SymbolId; 4]>) {
        if !requires_freeze(mem_qual, ty) {
            return;
        }
        if let Some(name) = arg.base_symbol_name() {
            if let Some(id) = self.symbols.lookup(name) {
                out.push(id);
            }
        }
    }

    fn check_len_call(&mut self, span: Span, args: &[Expr]) -> Option<Type> {
        if args.len() != 1 {
            self.arity_mismatch(span, "'len' expects exactly one argument");
            return None;
        }
        let ty = self.check_expr(&args[0])?;
        match ty {
            Type::Array(_) | Type::Primitive(PrimitiveKind::String) => Some(Type::Primitive(PrimitiveKind::Int)),
            other => {
                self.type_mismatch(args[0].span(), format!("'len' requires an array or string argument, found {other:?}"));
                None
            }
        }
    }

    /// Random's collection-family methods (§4.3.4 item 2): `choice`,
    /// `shuffle`, `weightedChoice`, `sample`, whose return types depend on
    /// the argument array's element type rather than a fixed table entry
    /// (§9 design note, and the deliberate omission in
    /// [`crate::builtin_methods::resolve_builtin_class_member`]).
    ///
    /// Returns `None` when `member` isn't one of these four names or
    /// `object`'s type isn't `Random`, so the caller falls through to the
    /// generic call path; `Some(None)` when it matched but the call itself
    /// failed to type-check.
    fn try_check_random_collection_call(
        &mut self,
        span: Span,
        object: &Expr,
        member: &str,
        args: &[Expr],
    ) -> Option<Option<Type>> {
        if !matches!(member, "choice" | "shuffle" | "weightedChoice" | "sample") {
            return None;
        }
        match self.check_expr(object) {
            Some(Type::BuiltinClass(BuiltinClass::Random)) => {}
            Some(_) => return None,
            // The receiver itself failed to check; propagate the failure
            // rather than falling through and re-checking it generically.
            None => return Some(None),
        }

        let result = match member {
            "shuffle" => {
                if args.len() != 1 {
                    self.arity_mismatch(span, "'shuffle' expects exactly one argument");
                    None
                } else {
                    match self.check_expr(&args[0]) {
                        Some(Type::Array(_)) => Some(Type::Primitive(PrimitiveKind::Void)),
                        Some(_) => {
                            self.type_mismatch(args[0].span(), "'shuffle' requires an array argument");
                            None
                        }
                        None => None,
                    }
                }
            }
            "choice" => {
                if args.len() != 1 {
                    self.arity_mismatch(span, "'choice' expects exactly one argument");
                    None
                } else {
                    match self.check_expr(&args[0]) {
                        Some(Type::Array(elem)) => Some((*elem).clone()),
                        Some(_) => {
                            self.type_mismatch(args[0].span(), "'choice' requires an array argument");
                            None
                        }
                        None => None,
                    }
                }
            }
            "sample" => {
                if args.len() != 2 {
                    self.arity_mismatch(span, "'sample' expects exactly two arguments");
                    None
                } else {
                    let arr_ty = self.check_expr(&args[0]);
                    let n_ty = self.check_expr(&args[1]);
                    match (arr_ty, n_ty) {
                        (Some(Type::Array(elem)), Some(Type::Primitive(PrimitiveKind::Int))) => {
                            Some(Type::array_of((*elem).clone()))
                        }
                        (Some(Type::Array(_)), Some(_)) => {
                            self.type_mismatch(args[1].span(), "'sample' count must be int");
                            None
                        }
                        (Some(_), _) => {
                            self.type_mismatch(args[0].span(), "'sample' requires an array argument");
                            None
                        }
                        _ => None,
                    }
                }
            }
            "weightedChoice" => {
                if args.len() != 2 {
                    self.arity_mismatch(span, "'weightedChoice' expects exactly two arguments");
                    None
                } else {
                    let items_ty = self.check_expr(&args[0]);
                    let weights_ty = self.check_expr(&args[1]);
                    let expected_weights = Type::array_of(Type::Primitive(PrimitiveKind::Double));
                    match (items_ty, weights_ty) {
                        (Some(Type::Array(elem)), Some(w)) if w == expected_weights => Some((*elem).clone()),
                        (Some(Type::Array(_)), Some(_)) => {
                            self.type_mismatch(args[1].span(), "'weightedChoice' weights must be double[]");
                            None
                        }
                        (Some(_), _) => {
                            self.type_mismatch(args[0].span(), "'weightedChoice' requires an array argument");
                            None
                        }
                        _ => None,
                    }
                }
            }
            _ => unreachable!("guarded by the match above"),
        };
        Some(result)
    }
}
