//! `TypeName.method(args)` (§4.3.4 "Static call"): dispatches through the
//! Static Call Resolver's tables, then checks arity and argument types the
//! same way an ordinary call does.

use rivet_ast::Expr;
use rivet_common::{DiagnosticCategory, Span};
use rivet_types::{BuiltinClass, Type};

use crate::builtin_methods::MemberEntry;
use crate::context::CheckContext;
use crate::static_resolver;

impl CheckContext {
    pub(super) fn check_static_call(
        &mut self,
        span: Span,
        type_name: &str,
        method: &str,
        args: &[Expr],
    ) -> Option<Type> {
        if static_resolver::STATIC_NAMESPACES.contains(&type_name) {
            if type_name == "Environment" && method == "get" {
                return self.check_environment_get(span, args);
            }
            let entry = static_resolver::resolve_static_namespace_method(type_name, method);
            return self.dispatch_static_entry(span, type_name, method, args, entry, || {
                static_resolver::static_namespace_method_names(type_name)
            });
        }

        if let Some(class) = BuiltinClass::from_name(type_name) {
            let entry = static_resolver::resolve_builtin_class_static(class, method);
            return self.dispatch_static_entry(span, type_name, method, args, entry, || {
                static_resolver::builtin_class_static_names(class)
            });
        }

        self.unknown_static_type(span, type_name);
        None
    }

    /// `Environment.get(k)` / `Environment.get(k, default)`: the one static
    /// method with a two-arity overload, dispatched separately from the
    /// generic by-name table lookup.
    fn check_environment_get(&mut self, span: Span, args: &[Expr]) -> Option<Type> {
        let entry = match args.len() {
            1 => static_resolver::resolve_static_namespace_method("Environment", "get")?,
            2 => static_resolver::resolve_environment_get_with_default(),
            _ => {
                self.arity_mismatch(span, "'Environment.get' expects 1 or 2 arguments");
                return None;
            }
        };
        self.check_static_entry_args(span, args, &entry)
    }

    fn dispatch_static_entry(
        &mut self,
        span: Span,
        type_name: &str,
        method: &str,
        args: &[Expr],
        entry: Option<MemberEntry>,
        names: impl FnOnce() -> &'static [&'static str],
    ) -> Option<Type> {
        let Some(entry) = entry else {
            let suggestion = self.suggest(method, names().iter().copied()).map(String::from);
            match suggestion {
                Some(s) => self.error_with_suggestion(
                    span,
                    DiagnosticCategory::UnknownStaticType,
                    format!("unknown {type_name} static method '{method}'"),
                    s,
                ),
                None => self.unknown_static_method(span, type_name, method),
            }
            return None;
        };
        self.check_static_entry_args(span, args, &entry)
    }

    fn check_static_entry_args(&mut self, span: Span, args: &[Expr], entry: &MemberEntry) -> Option<Type> {
        let Type::Function(func) = &entry.ty else {
            unreachable!("static resolver tables only ever produce FUNCTION entries")
        };
        let func = func.clone();
        if args.len() != func.params.len() {
            self.arity_mismatch(
                span,
                format!("expected {} argument(s), found {}", func.params.len(), args.len()),
            );
            return None;
        }
        let mut ok = true;
        for (arg, expected) in args.iter().zip(func.params.iter()) {
            match self.check_expr(arg) {
                Some(arg_ty) if &arg_ty == expected.as_ref() => {}
                Some(arg_ty) => {
                    self.type_mismatch(
                        arg.span(),
                        format!("argument type {arg_ty:?} does not match expected {expected:?}"),
                    );
                    ok = false;
                }
                None => ok = false,
            }
        }
        ok.then(|| (*func.return_type).clone())
    }
}
