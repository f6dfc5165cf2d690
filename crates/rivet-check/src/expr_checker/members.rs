//! Member access (§4.3.5): `obj.m`.

use rivet_ast::Expr;
use rivet_common::Span;
use rivet_types::{PrimitiveKind, Type};

use crate::builtin_methods;
use crate::context::CheckContext;

impl CheckContext {
    pub(super) fn check_member_access(&mut self, span: Span, object: &Expr, member: &str) -> Option<Type> {
        // A namespace object (`ns.exported_name`) resolves against the
        // imported module's exports rather than as a value member access;
        // a namespace has no static type of its own to check here.
        if let Expr::Variable { name, .. } = object {
            if self.symbols.is_namespace(name) {
                // Export resolution lives with the module loader, which is
                // outside this core's contract (§6); nothing further to
                // check at this call site.
                return None;
            }
        }

        let object_ty = self.check_expr(object)?;
        let (entry, type_name, table_names): (Option<builtin_methods::MemberEntry>, String, Vec<&'static str>) =
            match &object_ty {
                Type::Array(element) => (
                    builtin_methods::resolve_array_member(element, member),
                    "array".to_string(),
                    builtin_methods::array_member_names(element),
                ),
                Type::Primitive(PrimitiveKind::String) => (
                    builtin_methods::resolve_string_member(member),
                    "string".to_string(),
                    builtin_methods::string_member_names().to_vec(),
                ),
                Type::BuiltinClass(class) => (
                    builtin_methods::resolve_builtin_class_member(*class, member),
                    class.name().to_string(),
                    builtin_methods::builtin_class_member_names(*class).to_vec(),
                ),
                _ => {
                    self.type_mismatch(span, format!("type {object_ty:?} has no members"));
                    return None;
                }
            };

        let Some(entry) = entry else {
            self.invalid_member(span, &type_name, member, &table_names);
            return None;
        };

        if entry.is_mutating {
            if let Some(name) = object.base_symbol_name() {
                if let Some(id) = self.symbols.lookup(name) {
                    if self.symbols.symbol(id).is_frozen() {
                        self.frozen_mutation(span, name);
                        return None;
                    }
                }
            }
        }

        Some(entry.ty)
    }
}
