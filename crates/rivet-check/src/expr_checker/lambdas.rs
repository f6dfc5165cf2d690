//! Lambda literals (§4.3.8): bidirectional parameter/return-type inference
//! from the surrounding call argument or assignment/declaration context.

use rivet_ast::{LambdaBody, LambdaParam, TypeAnnotation};
use rivet_common::Span;
use rivet_types::{FunctionType, Type};

use crate::context::CheckContext;

impl CheckContext {
    /// `expected` is the FUNCTION type the surrounding context wants —
    /// a call's parameter type, or a `var`/assignment's declared type.
    /// Any parameter or return slot the lambda itself leaves unannotated
    /// is filled from `expected`; if it's missing there too, inference
    /// fails and the lambda cannot be checked.
    pub(crate) fn check_lambda(
        &mut self,
        span: Span,
        params: &[LambdaParam],
        return_type: Option<&TypeAnnotation>,
        body: &LambdaBody,
        expected: Option<&Type>,
    ) -> Option<Type> {
        let expected_fn: Option<FunctionType> = expected.and_then(|ty| match ty {
            Type::Function(f) => Some((**f).clone()),
            _ => None,
        });

        let mut param_types = Vec::with_capacity(params.len());
        for (i, param) in params.iter().enumerate() {
            let ty = match &param.ty {
                Some(ann) => match self.types.resolve_annotation(ann) {
                    Ok(t) => Some(self.types.intern(t)),
                    Err(name) => {
                        self.type_mismatch(span, format!("unknown type '{name}' for parameter '{}'", param.name));
                        None
                    }
                },
                None => expected_fn.as_ref().and_then(|f| f.params.get(i)).map(|t| (**t).clone()),
            };
            let Some(ty) = ty else {
                self.type_mismatch(span, format!("cannot infer type of lambda parameter '{}'", param.name));
                return None;
            };
            param_types.push(ty);
        }

        let declared_return = match return_type {
            Some(ann) => match self.types.resolve_annotation(ann) {
                Ok(t) => Some(self.types.intern(t)),
                Err(name) => {
                    self.type_mismatch(span, format!("unknown return type '{name}'"));
                    return None;
                }
            },
            None => expected_fn.as_ref().map(|f| (*f.return_type).clone()),
        };
        let Some(declared_return) = declared_return else {
            self.type_mismatch(span, "cannot infer lambda return type");
            return None;
        };

        self.symbols.enter_scope();
        for (param, ty) in params.iter().zip(param_types.iter()) {
            self.declare_checked(span, &param.name, ty.clone());
        }

        let prev_return = self.current_return_type.replace(declared_return.clone());
        let ok = match body {
            LambdaBody::Expr(expr) => match self.check_expr(expr) {
                Some(ty) if ty == declared_return => true,
                Some(ty) => {
                    self.type_mismatch(
                        expr.span(),
                        format!("lambda body type {ty:?} does not match return type {declared_return:?}"),
                    );
                    false
                }
                None => false,
            },
            LambdaBody::Block(stmts) => {
                self.check_stmt_sequence(stmts);
                true
            }
        };
        self.current_return_type = prev_return;
        self.exit_scope_checked(span);

        if !ok {
            return None;
        }

        let mem_quals = vec![rivet_common::MemQual::default(); param_types.len()];
        Some(self.types.intern(Type::function(declared_return, param_types, mem_quals, false)))
    }
}
