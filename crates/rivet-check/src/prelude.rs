//! Seeds the Symbol Table with the language's built-in free functions
//! (§6, "External Interfaces": "A Symbol Table seeded with the language's
//! built-in free functions (`len`, printing primitives)").
//!
//! `len` is also special-cased by name in [`crate::expr_checker`]'s call
//! dispatch (§4.3.4 item 1) before any symbol lookup happens, so the
//! seeded entry here is never actually consulted to resolve a `len(...)`
//! call; it exists so `len` shows up in "did you mean?" suggestions and so
//! referencing it as a plain variable doesn't spuriously report
//! `UndefinedName`.

use rivet_common::{MemQual, Span};
use rivet_symbols::SymbolTable;
use rivet_types::{PrimitiveKind, Type};

fn variadic_printer() -> Type {
    Type::function(Type::Primitive(PrimitiveKind::Void), vec![], vec![], true)
}

pub(crate) fn seed_builtins(symbols: &mut SymbolTable) {
    symbols.declare(
        "len",
        Type::function(
            Type::Primitive(PrimitiveKind::Int),
            vec![Type::Primitive(PrimitiveKind::Any)],
            vec![MemQual::Default],
            false,
        ),
        Span::dummy(),
    );
    symbols.declare("print", variadic_printer(), Span::dummy());
    symbols.declare("println", variadic_printer(), Span::dummy());
}
