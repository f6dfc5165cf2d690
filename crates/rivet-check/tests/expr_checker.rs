//! Black-box coverage of the Expression Checker (§4.3): calls (ordinary,
//! static, Random's parametric collection methods), member access, spawn/
//! sync, and the array/operator forms. Exercises the concrete scenarios
//! named in §8 (S1-S7) end to end through `CheckContext::check_expr`/
//! `check_module` rather than unit-testing each table in isolation.

use rivet_ast::{
    ArrayElement, BinaryOp, Expr, LambdaBody, LambdaParam, LiteralValue, Module, NodeIdGen, Stmt,
    SyncTarget, TypeAnnotation,
};
use rivet_common::{CheckerOptions, DiagnosticCategory, MemQual, Modifier, Span};
use rivet_symbols::{DeclareOutcome, ThreadState};

use super::*;

fn sp() -> Span {
    Span::new(0, 1)
}

fn declare(ctx: &mut CheckContext, name: &str, ty: Type) -> rivet_symbols::SymbolId {
    match ctx.symbols.declare(name, ty, sp()) {
        DeclareOutcome::Declared(id) => id,
        DeclareOutcome::AlreadyDeclared(id) => id,
    }
}

fn int_ty() -> Type {
    Type::Primitive(PrimitiveKind::Int)
}

fn double_ty() -> Type {
    Type::Primitive(PrimitiveKind::Double)
}

fn string_ty() -> Type {
    Type::Primitive(PrimitiveKind::String)
}

fn int_array_ty() -> Type {
    Type::array_of(int_ty())
}

fn lit_int(ids: &mut NodeIdGen, n: i64) -> Expr {
    Expr::Literal { id: ids.next(), span: sp(), value: LiteralValue::Int(n) }
}

fn lit_double(ids: &mut NodeIdGen, n: f64) -> Expr {
    Expr::Literal { id: ids.next(), span: sp(), value: LiteralValue::Double(n) }
}

fn lit_str(ids: &mut NodeIdGen, s: &str) -> Expr {
    Expr::Literal { id: ids.next(), span: sp(), value: LiteralValue::Str(s.to_string()) }
}

fn var(ids: &mut NodeIdGen, name: &str) -> Expr {
    Expr::Variable { id: ids.next(), span: sp(), name: name.to_string() }
}

fn call(ids: &mut NodeIdGen, callee: Expr, args: Vec<Expr>) -> Expr {
    Expr::Call { id: ids.next(), span: sp(), callee: Box::new(callee), args }
}

fn member(ids: &mut NodeIdGen, object: Expr, name: &str) -> Expr {
    Expr::MemberAccess { id: ids.next(), span: sp(), object: Box::new(object), member: name.to_string() }
}

fn array_lit(ids: &mut NodeIdGen, values: Vec<Expr>) -> Expr {
    Expr::ArrayLiteral {
        id: ids.next(),
        span: sp(),
        elements: values.into_iter().map(ArrayElement::Value).collect(),
    }
}

// --- S1: array push on an unfrozen array is accepted -----------------

#[test]
fn s1_array_push_on_an_unfrozen_array_is_accepted() {
    let mut ctx = CheckContext::new(CheckerOptions::default());
    let mut ids = NodeIdGen::new();
    declare(&mut ctx, "arr", int_array_ty());

    let push_call = call(&mut ids, member(&mut ids, var(&mut ids, "arr"), "push"), vec![lit_int(&mut ids, 4)]);

    let ty = ctx.check_expr(&push_call);

    assert!(!ctx.sink.had_error());
    assert_eq!(ty, Some(Type::Primitive(PrimitiveKind::Void)));
}

// --- S2: assigning a string literal to an int variable is a TypeMismatch

#[test]
fn s2_assigning_mismatched_type_is_a_type_mismatch() {
    let mut ctx = CheckContext::new(CheckerOptions::default());
    let mut ids = NodeIdGen::new();
    declare(&mut ctx, "x", int_ty());

    let assign = Expr::Assign {
        id: ids.next(),
        span: sp(),
        target: Box::new(var(&mut ids, "x")),
        value: Box::new(lit_str(&mut ids, "hello")),
    };

    let ty = ctx.check_expr(&assign);

    assert!(ty.is_none());
    assert!(ctx.sink.had_error());
    assert_eq!(ctx.sink.diagnostics()[0].category, DiagnosticCategory::TypeMismatch);
}

// --- S4: reading a pending handle is PendingAccess; after sync it's fine

#[test]
fn s4_reading_a_pending_handle_before_sync_is_pending_access() {
    let mut ctx = CheckContext::new(CheckerOptions::default());
    declare(
        &mut ctx,
        "compute",
        Type::function(int_ty(), vec![], vec![], false),
    );
    let r = declare(&mut ctx, "r", int_ty());
    ctx.on_spawn(Some(r), &[]);

    let mut ids = NodeIdGen::new();
    let read = var(&mut ids, "r");

    assert!(ctx.check_expr(&read).is_none());
    assert_eq!(ctx.sink.diagnostics()[0].category, DiagnosticCategory::PendingAccess);

    ctx.on_sync_scalar(r, "r", sp());
    let mut ids2 = NodeIdGen::new();
    let read_again = var(&mut ids2, "r");
    assert_eq!(ctx.check_expr(&read_again), Some(int_ty()));
}

// --- S5: spawning with a reference argument freezes it; sync unfreezes

#[test]
fn s5_spawn_freezes_the_array_argument_and_sync_unfreezes_it() {
    let mut ctx = CheckContext::new(CheckerOptions::default());
    declare(
        &mut ctx,
        "process",
        Type::function(int_ty(), vec![int_array_ty()], vec![MemQual::Default], false),
    );
    declare(&mut ctx, "data", int_array_ty());

    let mut ids = NodeIdGen::new();
    let spawn_decl = Stmt::VarDecl {
        id: ids.next(),
        span: sp(),
        name: "r".to_string(),
        mem_qual: MemQual::Default,
        declared_type: None,
        initializer: Some(Expr::Spawn {
            id: ids.next(),
            span: sp(),
            modifier: Modifier::Default,
            call: Box::new(call(&mut ids, var(&mut ids, "process"), vec![var(&mut ids, "data")])),
        }),
    };
    ctx.check_module(&Module::new(vec![spawn_decl]));
    assert!(!ctx.sink.had_error());

    let data_id = ctx.symbols.lookup("data").unwrap();
    assert!(ctx.symbols.symbol(data_id).is_frozen());

    // Mutating the frozen array is rejected.
    let mutate = call(&mut ids, member(&mut ids, var(&mut ids, "data"), "push"), vec![lit_int(&mut ids, 9)]);
    assert!(ctx.check_expr(&mutate).is_none());
    assert_eq!(ctx.sink.diagnostics().last().unwrap().category, DiagnosticCategory::FrozenMutation);

    // After sync, the mutation is accepted.
    let r_id = ctx.symbols.lookup("r").unwrap();
    ctx.on_sync_scalar(r_id, "r", sp());
    assert!(!ctx.symbols.symbol(data_id).is_frozen());

    let mut ids2 = NodeIdGen::new();
    let mutate_again = call(&mut ids2, member(&mut ids2, var(&mut ids2, "data"), "push"), vec![lit_int(&mut ids2, 9)]);
    assert!(ctx.check_expr(&mutate_again).is_some());
}

// --- S6: spawning a non-call expression is a SpawnShape error ---------

#[test]
fn s6_spawning_a_bare_literal_is_a_spawn_shape_error() {
    let mut ctx = CheckContext::new(CheckerOptions::default());
    let mut ids = NodeIdGen::new();
    let spawn = Expr::Spawn {
        id: ids.next(),
        span: sp(),
        modifier: Modifier::Default,
        call: Box::new(lit_int(&mut ids, 42)),
    };

    let ty = ctx.check_expr(&spawn);

    assert!(ty.is_none());
    assert_eq!(ctx.sink.diagnostics()[0].category, DiagnosticCategory::SpawnShape);
}

// --- S7: Random.choice parametric resolution ---------------------------

#[test]
fn s7_random_choice_on_an_array_yields_the_element_type() {
    let mut ctx = CheckContext::new(CheckerOptions::default());
    let mut ids = NodeIdGen::new();
    declare(&mut ctx, "rng", Type::BuiltinClass(BuiltinClass::Random));

    let choice = call(
        &mut ids,
        member(&mut ids, var(&mut ids, "rng"), "choice"),
        vec![array_lit(&mut ids, vec![lit_int(&mut ids, 10), lit_int(&mut ids, 20), lit_int(&mut ids, 30)])],
    );

    assert_eq!(ctx.check_expr(&choice), Some(int_ty()));
    assert!(!ctx.sink.had_error());
}

#[test]
fn s7_random_choice_on_a_non_array_is_a_type_mismatch() {
    let mut ctx = CheckContext::new(CheckerOptions::default());
    let mut ids = NodeIdGen::new();
    declare(&mut ctx, "rng", Type::BuiltinClass(BuiltinClass::Random));

    let choice = call(&mut ids, member(&mut ids, var(&mut ids, "rng"), "choice"), vec![lit_int(&mut ids, 42)]);

    assert!(ctx.check_expr(&choice).is_none());
    assert_eq!(ctx.sink.diagnostics()[0].category, DiagnosticCategory::TypeMismatch);
}

#[test]
fn random_weighted_choice_requires_double_array_weights() {
    let mut ctx = CheckContext::new(CheckerOptions::default());
    let mut ids = NodeIdGen::new();
    declare(&mut ctx, "rng", Type::BuiltinClass(BuiltinClass::Random));

    let items = array_lit(&mut ids, vec![lit_str(&mut ids, "a"), lit_str(&mut ids, "b")]);
    let weights = array_lit(&mut ids, vec![lit_double(&mut ids, 0.5), lit_double(&mut ids, 0.5)]);
    let weighted = call(&mut ids, member(&mut ids, var(&mut ids, "rng"), "weightedChoice"), vec![items, weights]);

    assert_eq!(ctx.check_expr(&weighted), Some(string_ty()));
}

#[test]
fn random_shuffle_yields_void() {
    let mut ctx = CheckContext::new(CheckerOptions::default());
    let mut ids = NodeIdGen::new();
    declare(&mut ctx, "rng", Type::BuiltinClass(BuiltinClass::Random));
    let arr = array_lit(&mut ids, vec![lit_int(&mut ids, 1)]);
    let shuffle = call(&mut ids, member(&mut ids, var(&mut ids, "rng"), "shuffle"), vec![arr]);

    assert_eq!(ctx.check_expr(&shuffle), Some(Type::Primitive(PrimitiveKind::Void)));
}

// --- Static call resolution --------------------------------------------

#[test]
fn static_call_on_a_known_builtin_class_resolves() {
    let mut ctx = CheckContext::new(CheckerOptions::default());
    let open = Expr::StaticCall {
        id: rivet_ast::NodeId::from_raw(0),
        span: sp(),
        type_name: "TextFile".to_string(),
        method: "open".to_string(),
        args: vec![
            Expr::Literal { id: rivet_ast::NodeId::from_raw(1), span: sp(), value: LiteralValue::Str("a".into()) },
            Expr::Literal { id: rivet_ast::NodeId::from_raw(2), span: sp(), value: LiteralValue::Str("r".into()) },
        ],
    };

    assert_eq!(ctx.check_expr(&open), Some(Type::BuiltinClass(BuiltinClass::TextFile)));
    assert!(!ctx.sink.had_error());
}

#[test]
fn static_call_on_an_unknown_type_is_unknown_static_type() {
    let mut ctx = CheckContext::new(CheckerOptions::default());
    let bogus = Expr::StaticCall {
        id: rivet_ast::NodeId::from_raw(0),
        span: sp(),
        type_name: "NotAType".to_string(),
        method: "make".to_string(),
        args: vec![],
    };

    assert!(ctx.check_expr(&bogus).is_none());
    assert_eq!(ctx.sink.diagnostics()[0].category, DiagnosticCategory::UnknownStaticType);
}

#[test]
fn static_call_on_an_unknown_method_suggests_a_spelling() {
    let mut ctx = CheckContext::new(CheckerOptions::default());
    let typo = Expr::StaticCall {
        id: rivet_ast::NodeId::from_raw(0),
        span: sp(),
        type_name: "UUID".to_string(),
        method: "generat".to_string(),
        args: vec![],
    };

    assert!(ctx.check_expr(&typo).is_none());
    let diag = &ctx.sink.diagnostics()[0];
    assert_eq!(diag.category, DiagnosticCategory::UnknownStaticType);
    assert_eq!(diag.suggestion.as_deref(), Some("generate"));
}

#[test]
fn environment_get_has_a_one_and_two_argument_overload() {
    let mut ctx = CheckContext::new(CheckerOptions::default());
    let one_arg = Expr::StaticCall {
        id: rivet_ast::NodeId::from_raw(0),
        span: sp(),
        type_name: "Environment".to_string(),
        method: "get".to_string(),
        args: vec![Expr::Literal { id: rivet_ast::NodeId::from_raw(1), span: sp(), value: LiteralValue::Str("HOME".into()) }],
    };
    assert_eq!(ctx.check_expr(&one_arg), Some(string_ty()));

    let mut ctx2 = CheckContext::new(CheckerOptions::default());
    let two_arg = Expr::StaticCall {
        id: rivet_ast::NodeId::from_raw(2),
        span: sp(),
        type_name: "Environment".to_string(),
        method: "get".to_string(),
        args: vec![
            Expr::Literal { id: rivet_ast::NodeId::from_raw(3), span: sp(), value: LiteralValue::Str("HOME".into()) },
            Expr::Literal { id: rivet_ast::NodeId::from_raw(4), span: sp(), value: LiteralValue::Str("/root".into()) },
        ],
    };
    assert_eq!(ctx2.check_expr(&two_arg), Some(string_ty()));
}

// --- Member access: property, mutation-on-frozen, byte-only methods ---

#[test]
fn member_access_on_an_unknown_name_suggests_a_spelling() {
    let mut ctx = CheckContext::new(CheckerOptions::default());
    let mut ids = NodeIdGen::new();
    declare(&mut ctx, "arr", int_array_ty());

    let typo = member(&mut ids, var(&mut ids, "arr"), "lengt");

    assert!(ctx.check_expr(&typo).is_none());
    let diag = &ctx.sink.diagnostics()[0];
    assert_eq!(diag.category, DiagnosticCategory::InvalidMember);
    assert_eq!(diag.suggestion.as_deref(), Some("length"));
}

#[test]
fn byte_array_only_methods_are_unavailable_on_an_int_array() {
    let mut ctx = CheckContext::new(CheckerOptions::default());
    let mut ids = NodeIdGen::new();
    declare(&mut ctx, "arr", int_array_ty());

    let to_hex = member(&mut ids, var(&mut ids, "arr"), "toHex");

    assert!(ctx.check_expr(&to_hex).is_none());
    assert_eq!(ctx.sink.diagnostics()[0].category, DiagnosticCategory::InvalidMember);
}

#[test]
fn byte_array_to_hex_is_available_on_a_byte_array() {
    let mut ctx = CheckContext::new(CheckerOptions::default());
    declare(&mut ctx, "bytes", Type::array_of(Type::Primitive(PrimitiveKind::Byte)));
    let mut ids = NodeIdGen::new();
    let call_expr = call(&mut ids, member(&mut ids, var(&mut ids, "bytes"), "toHex"), vec![]);

    assert_eq!(ctx.check_expr(&call_expr), Some(string_ty()));
}

#[test]
fn read_only_array_methods_are_permitted_on_a_frozen_array() {
    let mut ctx = CheckContext::new(CheckerOptions::default());
    let arr = declare(&mut ctx, "arr", int_array_ty());
    ctx.symbols.freeze(arr);

    let mut ids = NodeIdGen::new();
    let length = member(&mut ids, var(&mut ids, "arr"), "length");

    assert_eq!(ctx.check_expr(&length), Some(int_ty()));
    assert!(!ctx.sink.had_error());
}

// --- Arrays, slices, ranges, spreads (§4.3.7) ---------------------------

#[test]
fn empty_array_literal_is_the_nil_element_sentinel() {
    let mut ctx = CheckContext::new(CheckerOptions::default());
    let lit = Expr::ArrayLiteral { id: rivet_ast::NodeId::from_raw(0), span: sp(), elements: vec![] };

    assert_eq!(ctx.check_expr(&lit), Some(Type::array_of(Type::Primitive(PrimitiveKind::Nil))));
}

#[test]
fn array_literal_with_mismatched_element_types_is_rejected() {
    let mut ctx = CheckContext::new(CheckerOptions::default());
    let mut ids = NodeIdGen::new();
    let lit = array_lit(&mut ids, vec![lit_int(&mut ids, 1), lit_str(&mut ids, "oops")]);

    assert!(ctx.check_expr(&lit).is_none());
    assert_eq!(ctx.sink.diagnostics()[0].category, DiagnosticCategory::TypeMismatch);
}

#[test]
fn spread_element_contributes_the_inner_array_element_type() {
    let mut ctx = CheckContext::new(CheckerOptions::default());
    declare(&mut ctx, "xs", int_array_ty());
    let mut ids = NodeIdGen::new();
    let lit = Expr::ArrayLiteral {
        id: ids.next(),
        span: sp(),
        elements: vec![ArrayElement::Value(lit_int(&mut ids, 1)), ArrayElement::Spread(var(&mut ids, "xs"))],
    };

    assert_eq!(ctx.check_expr(&lit), Some(int_array_ty()));
}

#[test]
fn slice_of_an_array_preserves_the_element_type() {
    let mut ctx = CheckContext::new(CheckerOptions::default());
    declare(&mut ctx, "xs", int_array_ty());
    let mut ids = NodeIdGen::new();
    let slice = Expr::Slice {
        id: ids.next(),
        span: sp(),
        array: Box::new(var(&mut ids, "xs")),
        start: Some(Box::new(lit_int(&mut ids, 0))),
        end: Some(Box::new(lit_int(&mut ids, 2))),
    };

    assert_eq!(ctx.check_expr(&slice), Some(int_array_ty()));
}

#[test]
fn sized_array_allocation_with_promotable_default() {
    let mut ctx = CheckContext::new(CheckerOptions::default());
    let mut ids = NodeIdGen::new();
    let sized = Expr::SizedArray {
        id: ids.next(),
        span: sp(),
        element_type: TypeAnnotation::named("double"),
        size: Box::new(lit_int(&mut ids, 4)),
        default: Some(Box::new(lit_int(&mut ids, 0))),
    };

    assert_eq!(ctx.check_expr(&sized), Some(Type::array_of(double_ty())));
}

// --- Operators (§4.3.2): promotion and string concatenation -----------

#[test]
fn arithmetic_promotes_int_and_double_to_double() {
    let mut ctx = CheckContext::new(CheckerOptions::default());
    let mut ids = NodeIdGen::new();
    let add = Expr::Binary {
        id: ids.next(),
        span: sp(),
        op: BinaryOp::Add,
        left: Box::new(lit_int(&mut ids, 1)),
        right: Box::new(lit_double(&mut ids, 2.5)),
    };

    assert_eq!(ctx.check_expr(&add), Some(double_ty()));
}

#[test]
fn plus_with_a_string_operand_concatenates_to_string() {
    let mut ctx = CheckContext::new(CheckerOptions::default());
    let mut ids = NodeIdGen::new();
    let concat = Expr::Binary {
        id: ids.next(),
        span: sp(),
        op: BinaryOp::Add,
        left: Box::new(lit_str(&mut ids, "n = ")),
        right: Box::new(lit_int(&mut ids, 3)),
    };

    assert_eq!(ctx.check_expr(&concat), Some(string_ty()));
}

#[test]
fn comparison_between_incompatible_types_is_invalid_operator() {
    let mut ctx = CheckContext::new(CheckerOptions::default());
    let mut ids = NodeIdGen::new();
    let cmp = Expr::Binary {
        id: ids.next(),
        span: sp(),
        op: BinaryOp::Lt,
        left: Box::new(lit_str(&mut ids, "a")),
        right: Box::new(lit_int(&mut ids, 1)),
    };

    assert!(ctx.check_expr(&cmp).is_none());
    assert_eq!(ctx.sink.diagnostics()[0].category, DiagnosticCategory::InvalidOperator);
}

// --- Interpolated strings (§4.3.1) --------------------------------------

#[test]
fn interpolated_string_requires_every_part_printable() {
    let mut ctx = CheckContext::new(CheckerOptions::default());
    declare(&mut ctx, "arr", int_array_ty());
    let mut ids = NodeIdGen::new();
    let interp = Expr::Interpolated {
        id: ids.next(),
        span: sp(),
        parts: vec![lit_str(&mut ids, "value: "), var(&mut ids, "arr")],
    };

    assert!(ctx.check_expr(&interp).is_none());
    assert_eq!(ctx.sink.diagnostics()[0].category, DiagnosticCategory::TypeMismatch);
}

#[test]
fn interpolated_string_of_printable_parts_is_string() {
    let mut ctx = CheckContext::new(CheckerOptions::default());
    let mut ids = NodeIdGen::new();
    let interp = Expr::Interpolated {
        id: ids.next(),
        span: sp(),
        parts: vec![lit_str(&mut ids, "n = "), lit_int(&mut ids, 3)],
    };

    assert_eq!(ctx.check_expr(&interp), Some(string_ty()));
}

// --- Lambda bidirectional inference (§4.3.8) ---------------------------

#[test]
fn lambda_argument_infers_parameter_and_return_type_from_the_callee() {
    let mut ctx = CheckContext::new(CheckerOptions::default());
    declare(
        &mut ctx,
        "apply",
        Type::function(
            int_ty(),
            vec![Type::function(int_ty(), vec![int_ty()], vec![MemQual::Default], false)],
            vec![MemQual::Default],
            false,
        ),
    );

    let mut ids = NodeIdGen::new();
    let lambda = Expr::Lambda {
        id: ids.next(),
        span: sp(),
        params: vec![LambdaParam { name: "n".to_string(), ty: None }],
        return_type: None,
        body: LambdaBody::Expr(Box::new(var(&mut ids, "n"))),
    };
    let apply_call = call(&mut ids, var(&mut ids, "apply"), vec![lambda]);

    assert_eq!(ctx.check_expr(&apply_call), Some(int_ty()));
    assert!(!ctx.sink.had_error());
}

// --- Variadic calls (§4.3.4 items 4, 6) ---------------------------------

#[test]
fn variadic_call_accepts_any_number_of_printable_trailing_arguments() {
    let mut ctx = CheckContext::new(CheckerOptions::default());
    declare(
        &mut ctx,
        "printf",
        Type::function(Type::Primitive(PrimitiveKind::Void), vec![string_ty()], vec![MemQual::Default], true),
    );

    let mut ids = NodeIdGen::new();
    let call_expr = call(
        &mut ids,
        var(&mut ids, "printf"),
        vec![lit_str(&mut ids, "fmt"), lit_int(&mut ids, 1), lit_str(&mut ids, "two")],
    );

    assert_eq!(ctx.check_expr(&call_expr), Some(Type::Primitive(PrimitiveKind::Void)));
}

#[test]
fn variadic_call_below_the_fixed_arity_is_arity_mismatch() {
    let mut ctx = CheckContext::new(CheckerOptions::default());
    declare(
        &mut ctx,
        "printf",
        Type::function(Type::Primitive(PrimitiveKind::Void), vec![string_ty()], vec![MemQual::Default], true),
    );

    let mut ids = NodeIdGen::new();
    let call_expr = call(&mut ids, var(&mut ids, "printf"), vec![]);

    assert!(ctx.check_expr(&call_expr).is_none());
    assert_eq!(ctx.sink.diagnostics()[0].category, DiagnosticCategory::ArityMismatch);
}

// --- `len` hardcode (§4.3.4 item 1) -------------------------------------

#[test]
fn len_accepts_an_array_or_string_and_rejects_anything_else() {
    let mut ctx = CheckContext::new(CheckerOptions::default());
    declare(&mut ctx, "xs", int_array_ty());
    let mut ids = NodeIdGen::new();
    let len_call = call(&mut ids, var(&mut ids, "len"), vec![var(&mut ids, "xs")]);
    assert_eq!(ctx.check_expr(&len_call), Some(int_ty()));

    let mut ctx2 = CheckContext::new(CheckerOptions::default());
    let mut ids2 = NodeIdGen::new();
    let bad_len = call(&mut ids2, var(&mut ids2, "len"), vec![lit_int(&mut ids2, 1)]);
    assert!(ctx2.check_expr(&bad_len).is_none());
    assert_eq!(ctx2.sink.diagnostics()[0].category, DiagnosticCategory::TypeMismatch);
}

// --- Array sync (§4.3.6) -------------------------------------------------

#[test]
fn array_sync_skips_already_synchronized_handles_without_error() {
    let mut ctx = CheckContext::new(CheckerOptions::default());
    let h1 = declare(&mut ctx, "h1", int_ty());
    let h2 = declare(&mut ctx, "h2", int_ty());
    ctx.on_spawn(Some(h1), &[]);
    ctx.on_spawn(Some(h2), &[]);
    ctx.on_sync_scalar(h2, "h2", sp());

    let mut ids = NodeIdGen::new();
    let sync = Expr::Sync {
        id: ids.next(),
        span: sp(),
        target: SyncTarget::Array(vec![var(&mut ids, "h1"), var(&mut ids, "h2")]),
    };

    assert_eq!(ctx.check_expr(&sync), Some(Type::Primitive(PrimitiveKind::Void)));
    assert!(!ctx.sink.had_error());
    assert_eq!(ctx.symbols.symbol(h1).thread_state, ThreadState::Synchronized);
}

// --- Private spawn return restriction (§4.3.6) --------------------------

#[test]
fn private_spawn_returning_a_non_primitive_is_rejected() {
    let mut ctx = CheckContext::new(CheckerOptions::default());
    declare(&mut ctx, "load", Type::function(int_array_ty(), vec![], vec![], false));
    let mut ids = NodeIdGen::new();
    let spawn = Expr::Spawn {
        id: ids.next(),
        span: sp(),
        modifier: Modifier::Private,
        call: Box::new(call(&mut ids, var(&mut ids, "load"), vec![])),
    };

    assert!(ctx.check_expr(&spawn).is_none());
    assert_eq!(ctx.sink.diagnostics()[0].category, DiagnosticCategory::PrivateSpawnReturn);
}
