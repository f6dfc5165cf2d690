//! Variable declarations, function declarations, and imports (§4.4).

use rivet_ast::{Expr, ParamDecl, Stmt, TypeAnnotation};
use rivet_common::{MemQual, Modifier, Span};
use rivet_types::{BuiltinClass, PrimitiveKind, Type};

use crate::context::CheckContext;

/// Structural keywords that, alongside every primitive keyword and
/// built-in class name, a named import's alias may not shadow (§4.4:
/// "The import namespace may not collide with any reserved keyword").
const RESERVED_KEYWORDS: &[&str] = &[
    "if", "else", "while", "for", "return", "var", "func", "import", "as", "private", "shared",
    "default", "true", "false", "nil", "native",
];

fn is_reserved(name: &str) -> bool {
    RESERVED_KEYWORDS.contains(&name)
        || PrimitiveKind::from_keyword(name).is_some()
        || BuiltinClass::from_name(name).is_some()
}

impl CheckContext {
    /// `var name[: T] = initializer;` (§4.4). A spawn initializer (`var r =
    /// &f(...)`) runs the Concurrency Analyzer instead of the ordinary
    /// declared/inferred-type reconciliation below, mirroring the spawn
    /// handling an assignment's right-hand side gets (§4.6).
    pub(super) fn check_var_decl(
        &mut self,
        span: Span,
        name: &str,
        _mem_qual: MemQual,
        declared_type: Option<&TypeAnnotation>,
        initializer: Option<&Expr>,
    ) {
        if let Some(Expr::Spawn { span: spawn_span, modifier, call, .. }) = initializer {
            self.check_var_decl_spawn(span, name, *spawn_span, *modifier, call, declared_type);
            return;
        }

        let declared = declared_type.and_then(|ann| self.resolve_type_annotation(span, ann));
        let init_ty = initializer.and_then(|expr| self.check_expr(expr));

        let final_ty = match (declared, initializer, init_ty) {
            (Some(d), Some(_), Some(i)) => {
                if d != i {
                    self.type_mismatch(
                        span,
                        format!("initializer type {i:?} does not match declared type {d:?} for '{name}'"),
                    );
                    return;
                }
                d
            }
            (Some(d), None, _) => d,
            (Some(_), Some(_), None) => return,
            (None, Some(_), Some(i)) => i,
            (None, Some(_), None) => return,
            (None, None, _) => {
                self.type_mismatch(span, format!("cannot infer type of '{name}' without an initializer or annotation"));
                return;
            }
        };

        let id = self.declare_checked(span, name, final_ty.clone());
        // Escape analysis runs on every variable declaration's initializer
        // per §4.4; for a fresh declaration the symbol's own arena depth
        // always equals the current scope's, so this is a structural
        // no-op outside of recording the call site — the rule only bites
        // on *assignment* to a symbol declared in a shallower scope
        // (§4.5, exercised in `check_assign`).
        if let Some(init) = initializer {
            self.check_escape(id, &final_ty, init.span());
        }
    }

    fn check_var_decl_spawn(
        &mut self,
        decl_span: Span,
        name: &str,
        spawn_span: Span,
        modifier: Modifier,
        call: &Expr,
        declared_type: Option<&TypeAnnotation>,
    ) {
        let declared = declared_type.and_then(|ann| self.resolve_type_annotation(decl_span, ann));
        // Placeholder type: the spawn's real return type is only known once
        // `check_spawn` resolves the enclosed call, but `check_spawn` needs
        // the symbol's id up front to mark it PENDING and record frozen
        // arguments against it (§4.3.6).
        let placeholder = declared.clone().unwrap_or(Type::Primitive(PrimitiveKind::Void));
        let id = self.declare_checked(decl_span, name, placeholder);

        let Some(result_ty) = self.check_spawn(spawn_span, modifier, call, Some(id)) else {
            return;
        };
        if let Some(d) = &declared {
            if *d != result_ty {
                self.type_mismatch(
                    decl_span,
                    format!("spawn result type {result_ty:?} does not match declared type {d:?} for '{name}'"),
                );
                return;
            }
        }
        self.symbols.symbol_mut(id).ty = result_ty;
    }

    fn resolve_type_annotation(&mut self, span: Span, ann: &TypeAnnotation) -> Option<Type> {
        match self.types.resolve_annotation(ann) {
            Ok(t) => Some(self.types.intern(t)),
            Err(unresolved) => {
                self.type_mismatch(span, format!("unknown type '{unresolved}'"));
                None
            }
        }
    }

    /// `func name(params) -> R { body }` (§4.4): builds the FUNCTION type
    /// from the parameter and return annotations, registers it in the
    /// *current* scope (so the body can call it recursively), then checks
    /// the body under a fresh parameter scope with the return type bound
    /// as the "current function return type" context.
    pub(super) fn check_func_decl(
        &mut self,
        span: Span,
        name: &str,
        func_mod: Modifier,
        params: &[ParamDecl],
        return_type: &TypeAnnotation,
        body: &Stmt,
    ) {
        let _span = tracing::debug_span!("check_func_decl", name).entered();

        let Some(return_ty) = self.resolve_type_annotation(span, return_type) else {
            return;
        };
        let mut param_tys = Vec::with_capacity(params.len());
        let mut mem_quals = Vec::with_capacity(params.len());
        let mut ok = true;
        for param in params {
            match self.resolve_type_annotation(span, &param.ty) {
                Some(t) => param_tys.push(t),
                None => ok = false,
            }
            mem_quals.push(param.mem_qual);
        }
        if !ok {
            return;
        }

        let func_ty = self.types.intern(Type::function(
            return_ty.clone(),
            param_tys.clone(),
            mem_quals,
            false,
        ));
        let id = self.declare_checked(span, name, func_ty);
        {
            let symbol = self.symbols.symbol_mut(id);
            symbol.is_function = true;
            symbol.func_mod = func_mod;
        }

        self.symbols.enter_scope();
        for (param, ty) in params.iter().zip(param_tys.into_iter()) {
            self.declare_checked(span, &param.name, ty);
        }

        // A `PRIVATE`-modified function activates the Escape Analyzer for
        // its body, exactly like a `PRIVATE` block (§4.4 "Block"; the
        // Glossary defines "Private scope" as "a block *or function*
        // marked `private`").
        if func_mod.is_private() {
            self.private_depth += 1;
        }
        let prev_return = self.current_return_type.replace(return_ty);
        self.check_stmt(body);
        self.current_return_type = prev_return;
        if func_mod.is_private() {
            self.private_depth -= 1;
        }

        self.exit_scope_checked(span);
    }

    /// `return [value];` (§4.4): `value`'s type must match the enclosing
    /// function's declared return type; a bare `return;` requires that
    /// return type to be VOID. A `return` outside any function body is a
    /// malformed program the checker still reports rather than panicking.
    pub(super) fn check_return(&mut self, span: Span, value: Option<&Expr>) {
        let Some(expected) = self.current_return_type.clone() else {
            self.type_mismatch(span, "'return' outside of a function body");
            return;
        };
        match value {
            Some(expr) => {
                let Some(actual) = self.check_expr(expr) else { return };
                if actual != expected {
                    self.type_mismatch(
                        expr.span(),
                        format!("return type {actual:?} does not match function return type {expected:?}"),
                    );
                }
            }
            None => {
                if expected != Type::Primitive(PrimitiveKind::Void) {
                    self.type_mismatch(span, format!("missing return value, expected {expected:?}"));
                }
            }
        }
    }

    /// `import mod;` / `import mod as ns;` (§4.4). Resolving which symbols
    /// a named module actually exports is a multi-module compilation-driver
    /// concern outside this core's contract (§6 only names a single parsed
    /// `Module` as input) — the same boundary `check_member_access` already
    /// draws for `ns.member` lookups. This entry point's job is therefore
    /// limited to the checker's own invariant: a
    /// named import's alias may not collide with a reserved keyword, and
    /// that alias becomes a namespace symbol other statements can reference.
    pub(super) fn check_import(&mut self, span: Span, module: &str, alias: Option<&str>) {
        if module.is_empty() {
            self.import_error(span, "import module name must not be empty");
            return;
        }
        let Some(alias) = alias else {
            // Unnamed import: exported symbols would be spliced into the
            // current scope by a module resolver this core does not own.
            return;
        };
        if is_reserved(alias) {
            self.import_error(span, format!("import alias '{alias}' collides with a reserved keyword"));
            return;
        }
        let id = self.declare_checked(span, alias, Type::Primitive(PrimitiveKind::Void));
        self.symbols.symbol_mut(id).is_namespace = true;
    }
}
