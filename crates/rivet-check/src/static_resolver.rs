//! Static Call Resolver (§2 item 6, §4.3.4): `(TypeName, method-name, arg-types)
//! -> return type`. Closed dispatch over the built-in class set plus `Path`,
//! `Directory`, `Stdin`, `Stdout`, `Stderr`, `Bytes`, `Environment`, `UUID`.

use rivet_types::{BuiltinClass, PrimitiveKind, Type};

use crate::builtin_methods::MemberEntry;

fn p(kind: PrimitiveKind) -> Type {
    Type::Primitive(kind)
}

fn method(params: Vec<Type>, return_type: Type) -> MemberEntry {
    let mem_quals = vec![rivet_common::MemQual::default(); params.len()];
    MemberEntry {
        ty: Type::function(return_type, params, mem_quals, false),
        is_mutating: false,
    }
}

/// Bare utility namespaces that are not also a [`BuiltinClass`] instance
/// type: `Path`, `Directory`, `Stdin`, `Stdout`, `Stderr`, `Bytes`,
/// `Environment`. `UUID` doubles as both a static namespace (`UUID.generate()`)
/// and an instance type, so it is dispatched in both tables.
pub(crate) const STATIC_NAMESPACES: &[&str] = &[
    "Path",
    "Directory",
    "Stdin",
    "Stdout",
    "Stderr",
    "Bytes",
    "Environment",
    "UUID",
];

pub(crate) fn resolve_static_namespace_method(namespace: &str, method_name: &str) -> Option<MemberEntry> {
    match (namespace, method_name) {
        ("Path", "join") => Some(method(vec![p(PrimitiveKind::String), p(PrimitiveKind::String)], p(PrimitiveKind::String))),
        ("Path", "exists") => Some(method(vec![p(PrimitiveKind::String)], p(PrimitiveKind::Bool))),
        ("Path", "basename" | "dirname" | "extension" | "normalize") => {
            Some(method(vec![p(PrimitiveKind::String)], p(PrimitiveKind::String)))
        }
        ("Path", "isAbsolute") => Some(method(vec![p(PrimitiveKind::String)], p(PrimitiveKind::Bool))),

        ("Directory", "list") => Some(method(vec![p(PrimitiveKind::String)], Type::array_of(p(PrimitiveKind::String)))),
        ("Directory", "create" | "remove") => Some(method(vec![p(PrimitiveKind::String)], p(PrimitiveKind::Void))),
        ("Directory", "rename") => Some(method(
            vec![p(PrimitiveKind::String), p(PrimitiveKind::String)],
            p(PrimitiveKind::Void),
        )),

        ("Stdin", "readLine" | "readAll") => Some(method(vec![], p(PrimitiveKind::String))),
        ("Stdin", "readChar") => Some(method(vec![], p(PrimitiveKind::Char))),

        ("Stdout", "write" | "writeLine") => Some(method(vec![p(PrimitiveKind::String)], p(PrimitiveKind::Void))),
        ("Stdout", "flush") => Some(method(vec![], p(PrimitiveKind::Void))),
        ("Stderr", "write" | "writeLine") => Some(method(vec![p(PrimitiveKind::String)], p(PrimitiveKind::Void))),
        ("Stderr", "flush") => Some(method(vec![], p(PrimitiveKind::Void))),

        ("Bytes", "fromString" | "fromHex" | "fromBase64") => {
            Some(method(vec![p(PrimitiveKind::String)], Type::array_of(p(PrimitiveKind::Byte))))
        }
        ("Bytes", "toString" | "toHex" | "toBase64") => {
            Some(method(vec![Type::array_of(p(PrimitiveKind::Byte))], p(PrimitiveKind::String)))
        }
        ("Bytes", "concat") => Some(method(
            vec![Type::array_of(p(PrimitiveKind::Byte)), Type::array_of(p(PrimitiveKind::Byte))],
            Type::array_of(p(PrimitiveKind::Byte)),
        )),
        ("Bytes", "equals") => Some(method(
            vec![Type::array_of(p(PrimitiveKind::Byte)), Type::array_of(p(PrimitiveKind::Byte))],
            p(PrimitiveKind::Bool),
        )),

        // `Environment.get(k)` / `Environment.get(k, default)`: a small
        // explicit overload set, per §4.3.4's note that the resolver allows
        // these where named.
        ("Environment", "get") => Some(method(vec![p(PrimitiveKind::String)], p(PrimitiveKind::String))),
        ("Environment", "set") => Some(method(
            vec![p(PrimitiveKind::String), p(PrimitiveKind::String)],
            p(PrimitiveKind::Void),
        )),
        ("Environment", "has") => Some(method(vec![p(PrimitiveKind::String)], p(PrimitiveKind::Bool))),
        ("Environment", "remove") => Some(method(vec![p(PrimitiveKind::String)], p(PrimitiveKind::Void))),

        ("UUID", "generate") => Some(method(vec![], Type::BuiltinClass(BuiltinClass::Uuid))),
        ("UUID", "parse") => Some(method(vec![p(PrimitiveKind::String)], Type::BuiltinClass(BuiltinClass::Uuid))),

        _ => None,
    }
}

/// `Environment.get(k, default)` two-argument overload, dispatched
/// separately because the resolver otherwise keys purely on name.
pub(crate) fn resolve_environment_get_with_default() -> MemberEntry {
    method(vec![p(PrimitiveKind::String), p(PrimitiveKind::String)], p(PrimitiveKind::String))
}

/// Method names offered by a bare static namespace, for "did you mean?"
/// suggestions on an unknown-method miss.
pub(crate) fn static_namespace_method_names(namespace: &str) -> &'static [&'static str] {
    match namespace {
        "Path" => &["join", "exists", "basename", "dirname", "extension", "isAbsolute", "normalize"],
        "Directory" => &["list", "create", "remove", "rename"],
        "Stdin" => &["readLine", "readAll", "readChar"],
        "Stdout" => &["write", "writeLine", "flush"],
        "Stderr" => &["write", "writeLine", "flush"],
        "Bytes" => &["fromString", "toString", "fromHex", "toHex", "fromBase64", "toBase64", "concat", "equals"],
        "Environment" => &["get", "set", "has", "remove"],
        "UUID" => &["generate", "parse"],
        _ => &[],
    }
}

/// Factory constructors on built-in class names, e.g. `TextFile.open(path)`.
pub(crate) fn resolve_builtin_class_static(class: BuiltinClass, method_name: &str) -> Option<MemberEntry> {
    use BuiltinClass::*;
    match (class, method_name) {
        (TextFile, "open" | "create") => Some(method(
            vec![p(PrimitiveKind::String), p(PrimitiveKind::String)],
            Type::BuiltinClass(TextFile),
        )),
        (BinaryFile, "open" | "create") => Some(method(
            vec![p(PrimitiveKind::String), p(PrimitiveKind::String)],
            Type::BuiltinClass(BinaryFile),
        )),
        (Time, "now") => Some(method(vec![], Type::BuiltinClass(Time))),
        (Time, "fromMillis") => Some(method(vec![p(PrimitiveKind::Long)], Type::BuiltinClass(Time))),
        (Date, "today") => Some(method(vec![], Type::BuiltinClass(Date))),
        (Date, "fromEpochMillis") => Some(method(vec![p(PrimitiveKind::Long)], Type::BuiltinClass(Date))),
        (Date, "parse") => Some(method(vec![p(PrimitiveKind::String)], Type::BuiltinClass(Date))),
        (Process, "spawn") => Some(method(vec![p(PrimitiveKind::String)], Type::BuiltinClass(Process))),
        (Process, "run") => Some(method(
            vec![p(PrimitiveKind::String), Type::array_of(p(PrimitiveKind::String))],
            Type::BuiltinClass(Process),
        )),
        (TcpListener, "bind") => Some(method(vec![p(PrimitiveKind::Int)], Type::BuiltinClass(TcpListener))),
        (TcpStream, "connect") => Some(method(
            vec![p(PrimitiveKind::String), p(PrimitiveKind::Int)],
            Type::BuiltinClass(TcpStream),
        )),
        (UdpSocket, "bind") => Some(method(vec![p(PrimitiveKind::Int)], Type::BuiltinClass(UdpSocket))),
        (Random, "new") => Some(method(vec![], Type::BuiltinClass(Random))),
        (Random, "seeded") => Some(method(vec![p(PrimitiveKind::Long)], Type::BuiltinClass(Random))),
        (Uuid, "generate") => Some(method(vec![], Type::BuiltinClass(Uuid))),
        (Uuid, "parse") => Some(method(vec![p(PrimitiveKind::String)], Type::BuiltinClass(Uuid))),
        _ => None,
    }
}

/// Static method names offered by a built-in class's factory table, for
/// "did you mean?" suggestions on an unknown-method miss.
pub(crate) fn builtin_class_static_names(class: BuiltinClass) -> &'static [&'static str] {
    use BuiltinClass::*;
    match class {
        TextFile => &["open", "create"],
        BinaryFile => &["open", "create"],
        Time => &["now", "fromMillis"],
        Date => &["today", "fromEpochMillis", "parse"],
        Process => &["spawn", "run"],
        TcpListener => &["bind"],
        TcpStream => &["connect"],
        UdpSocket => &["bind"],
        Random => &["new", "seeded"],
        Uuid => &["generate", "parse"],
    }
}
