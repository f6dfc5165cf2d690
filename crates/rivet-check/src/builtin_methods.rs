//! Built-in Method Resolver (§2 item 5, §4.3.5): `(receiver-type, method-name)
//! -> method function type`. One table per built-in family, table-driven
//! per the §9 design note rather than an `if`-cascade per method.

use rivet_types::{BuiltinClass, PrimitiveKind, Type};

fn p(kind: PrimitiveKind) -> Type {
    Type::Primitive(kind)
}

/// A resolved member: its type (bare for a property, FUNCTION for a
/// method), and whether invoking it mutates the receiver (consulted by the
/// frozen-array check, §4.3.5 — the only family where mutation matters).
pub(crate) struct MemberEntry {
    pub ty: Type,
    pub is_mutating: bool,
}

impl MemberEntry {
    fn property(ty: Type) -> Self {
        Self { ty, is_mutating: false }
    }

    /// Every built-in method parameter uses the default (by-value)
    /// qualifier, so this constructor pads the `param_mem_quals` vec
    /// `Type::function` requires rather than making every call site spell it.
    fn method(params: Vec<Type>, return_type: Type) -> Self {
        let mem_quals = vec![rivet_common::MemQual::default(); params.len()];
        Self {
            ty: Type::function(return_type, params, mem_quals, false),
            is_mutating: false,
        }
    }
}

const ARRAY_MUTATING: &[&str] = &["push", "pop", "insert", "remove", "clear", "reverse"];
const ARRAY_READONLY: &[&str] = &["length", "indexOf", "contains", "clone", "join", "concat"];
const ARRAY_BYTE_ONLY: &[&str] = &["toString", "toStringLatin1", "toHex", "toBase64"];

pub(crate) fn array_member_names(element: &Type) -> Vec<&'static str> {
    let mut names: Vec<&'static str> = ARRAY_MUTATING.iter().chain(ARRAY_READONLY).copied().collect();
    if matches!(element, Type::Primitive(PrimitiveKind::Byte)) {
        names.extend_from_slice(ARRAY_BYTE_ONLY);
    }
    names
}

/// `obj.m` where `type(obj) == ARRAY(element)` (§4.3.5). The member set
/// here is exactly the one §4.3.5 enumerates by name (mutating, read-only,
/// byte-only); unlike the other built-in families this one is closed by
/// the spec itself and is not a candidate for enrichment.
pub(crate) fn resolve_array_member(element: &Type, name: &str) -> Option<MemberEntry> {
    let elem = element.clone();
    match name {
        "length" => Some(MemberEntry::property(p(PrimitiveKind::Int))),
        "push" => Some(MemberEntry {
            ty: Type::function(p(PrimitiveKind::Void), vec![elem], vec![Default::default()], false),
            is_mutating: true,
        }),
        "pop" => Some(MemberEntry {
            ty: Type::function(elem, vec![], vec![], false),
            is_mutating: true,
        }),
        "insert" => Some(MemberEntry {
            ty: Type::function(
                p(PrimitiveKind::Void),
                vec![p(PrimitiveKind::Int), elem],
                vec![Default::default(), Default::default()],
                false,
            ),
            is_mutating: true,
        }),
        "remove" => Some(MemberEntry {
            ty: Type::function(
                p(PrimitiveKind::Void),
                vec![p(PrimitiveKind::Int)],
                vec![Default::default()],
                false,
            ),
            is_mutating: true,
        }),
        "clear" => Some(MemberEntry {
            ty: Type::function(p(PrimitiveKind::Void), vec![], vec![], false),
            is_mutating: true,
        }),
        "reverse" => Some(MemberEntry {
            ty: Type::function(p(PrimitiveKind::Void), vec![], vec![], false),
            is_mutating: true,
        }),
        "indexOf" => Some(MemberEntry::method(vec![elem], p(PrimitiveKind::Int))),
        "contains" => Some(MemberEntry::method(vec![elem], p(PrimitiveKind::Bool))),
        "clone" => Some(MemberEntry::method(vec![], Type::array_of(element.clone()))),
        "join" => Some(MemberEntry::method(vec![p(PrimitiveKind::String)], p(PrimitiveKind::String))),
        "concat" => Some(MemberEntry::method(vec![Type::array_of(element.clone())], Type::array_of(element.clone()))),
        "toString" | "toStringLatin1" if matches!(element, Type::Primitive(PrimitiveKind::Byte)) => {
            Some(MemberEntry::method(vec![], p(PrimitiveKind::String)))
        }
        "toHex" | "toBase64" if matches!(element, Type::Primitive(PrimitiveKind::Byte)) => {
            Some(MemberEntry::method(vec![], p(PrimitiveKind::String)))
        }
        _ => None,
    }
}

const STRING_MEMBERS: &[&str] = &[
    "length",
    "toUpperCase",
    "toLowerCase",
    "trim",
    "split",
    "substring",
    "charAt",
    "contains",
    "replace",
    "indexOf",
    "startsWith",
    "endsWith",
    "repeat",
    "padStart",
    "padEnd",
    "toCharArray",
    "reverse",
    "isEmpty",
    "compareTo",
];

pub(crate) fn string_member_names() -> &'static [&'static str] {
    STRING_MEMBERS
}

/// `obj.m` where `type(obj) == STRING`. Not a closed set named by §4.3.5
/// the way ARRAY's is — only `length` is named explicitly as an example —
/// so this table carries the rest of the string utility surface a source
/// program actually needs (case conversion, searching, padding).
pub(crate) fn resolve_string_member(name: &str) -> Option<MemberEntry> {
    match name {
        "length" => Some(MemberEntry::property(p(PrimitiveKind::Int))),
        "toUpperCase" | "toLowerCase" | "trim" | "reverse" => {
            Some(MemberEntry::method(vec![], p(PrimitiveKind::String)))
        }
        "split" => Some(MemberEntry::method(
            vec![p(PrimitiveKind::String)],
            Type::array_of(p(PrimitiveKind::String)),
        )),
        "substring" => Some(MemberEntry::method(
            vec![p(PrimitiveKind::Int), p(PrimitiveKind::Int)],
            p(PrimitiveKind::String),
        )),
        "charAt" => Some(MemberEntry::method(vec![p(PrimitiveKind::Int)], p(PrimitiveKind::Char))),
        "contains" | "startsWith" | "endsWith" => {
            Some(MemberEntry::method(vec![p(PrimitiveKind::String)], p(PrimitiveKind::Bool)))
        }
        "replace" => Some(MemberEntry::method(
            vec![p(PrimitiveKind::String), p(PrimitiveKind::String)],
            p(PrimitiveKind::String),
        )),
        "indexOf" => Some(MemberEntry::method(vec![p(PrimitiveKind::String)], p(PrimitiveKind::Int))),
        "repeat" => Some(MemberEntry::method(vec![p(PrimitiveKind::Int)], p(PrimitiveKind::String))),
        "padStart" | "padEnd" => Some(MemberEntry::method(
            vec![p(PrimitiveKind::Int), p(PrimitiveKind::String)],
            p(PrimitiveKind::String),
        )),
        "toCharArray" => Some(MemberEntry::method(vec![], Type::array_of(p(PrimitiveKind::Char)))),
        "isEmpty" => Some(MemberEntry::method(vec![], p(PrimitiveKind::Bool))),
        "compareTo" => Some(MemberEntry::method(vec![p(PrimitiveKind::String)], p(PrimitiveKind::Int))),
        _ => None,
    }
}

/// `obj.m` where `type(obj) == BUILTIN_CLASS(class)` (§4.3.5). Random's
/// collection-family methods (`choice`, `shuffle`, `weightedChoice`,
/// `sample`) are deliberately absent here: they need the call's argument
/// types to derive a result (§4.3.4 item 2) and are handled as a parametric
/// rule in the Expression Checker's call-dispatch, not a fixed table entry.
pub(crate) fn resolve_builtin_class_member(class: BuiltinClass, name: &str) -> Option<MemberEntry> {
    use BuiltinClass::*;
    match (class, name) {
        (TextFile, "path") => Some(MemberEntry::property(p(PrimitiveKind::String))),
        (TextFile, "isOpen") => Some(MemberEntry::property(p(PrimitiveKind::Bool))),
        (TextFile, "eof") => Some(MemberEntry::property(p(PrimitiveKind::Bool))),
        (TextFile, "readLine" | "readAll" | "readChar") => {
            let return_ty = if name == "readChar" { p(PrimitiveKind::Char) } else { p(PrimitiveKind::String) };
            Some(MemberEntry::method(vec![], return_ty))
        }
        (TextFile, "writeLine" | "write") => {
            Some(MemberEntry::method(vec![p(PrimitiveKind::String)], p(PrimitiveKind::Void)))
        }
        (TextFile, "seek") => Some(MemberEntry::method(vec![p(PrimitiveKind::Long)], p(PrimitiveKind::Void))),
        (TextFile, "size") => Some(MemberEntry::method(vec![], p(PrimitiveKind::Long))),
        (TextFile, "flush" | "delete" | "close") => Some(MemberEntry::method(vec![], p(PrimitiveKind::Void))),

        (BinaryFile, "path") => Some(MemberEntry::property(p(PrimitiveKind::String))),
        (BinaryFile, "eof") => Some(MemberEntry::property(p(PrimitiveKind::Bool))),
        (BinaryFile, "read") => Some(MemberEntry::method(
            vec![p(PrimitiveKind::Int)],
            Type::array_of(p(PrimitiveKind::Byte)),
        )),
        (BinaryFile, "write") => Some(MemberEntry::method(
            vec![Type::array_of(p(PrimitiveKind::Byte))],
            p(PrimitiveKind::Void),
        )),
        (BinaryFile, "seek") => Some(MemberEntry::method(vec![p(PrimitiveKind::Long)], p(PrimitiveKind::Void))),
        (BinaryFile, "size") => Some(MemberEntry::method(vec![], p(PrimitiveKind::Long))),
        (BinaryFile, "flush" | "delete" | "close") => Some(MemberEntry::method(vec![], p(PrimitiveKind::Void))),

        (Time, "elapsedMillis") => Some(MemberEntry::method(vec![], p(PrimitiveKind::Long))),
        (Time, "elapsedSeconds") => Some(MemberEntry::method(vec![], p(PrimitiveKind::Double))),
        (Time, "toMillis") => Some(MemberEntry::method(vec![], p(PrimitiveKind::Long))),
        (Time, "addMillis") => Some(MemberEntry::method(vec![p(PrimitiveKind::Long)], Type::BuiltinClass(Time))),
        (Time, "compareTo") => Some(MemberEntry::method(vec![Type::BuiltinClass(Time)], p(PrimitiveKind::Int))),
        (Time, "toString") => Some(MemberEntry::method(vec![], p(PrimitiveKind::String))),

        (Date, "year" | "month" | "day" | "dayOfWeek") => Some(MemberEntry::property(p(PrimitiveKind::Int))),
        (Date, "isLeapYear") => Some(MemberEntry::property(p(PrimitiveKind::Bool))),
        (Date, "addDays" | "addMonths" | "addYears") => {
            Some(MemberEntry::method(vec![p(PrimitiveKind::Int)], Type::BuiltinClass(Date)))
        }
        (Date, "compareTo") => Some(MemberEntry::method(vec![Type::BuiltinClass(Date)], p(PrimitiveKind::Int))),
        (Date, "toEpochMillis") => Some(MemberEntry::method(vec![], p(PrimitiveKind::Long))),
        (Date, "format") => Some(MemberEntry::method(vec![p(PrimitiveKind::String)], p(PrimitiveKind::String))),
        (Date, "toString") => Some(MemberEntry::method(vec![], p(PrimitiveKind::String))),

        (Process, "stdout" | "stderr") => Some(MemberEntry::property(p(PrimitiveKind::String))),
        (Process, "exitCode" | "pid") => Some(MemberEntry::property(p(PrimitiveKind::Int))),
        (Process, "isRunning") => Some(MemberEntry::property(p(PrimitiveKind::Bool))),
        (Process, "writeStdin") => Some(MemberEntry::method(vec![p(PrimitiveKind::String)], p(PrimitiveKind::Void))),
        (Process, "wait") => Some(MemberEntry::method(vec![], p(PrimitiveKind::Int))),
        (Process, "kill") => Some(MemberEntry::method(vec![], p(PrimitiveKind::Void))),

        (TcpListener, "localPort") => Some(MemberEntry::property(p(PrimitiveKind::Int))),
        (TcpListener, "accept") => Some(MemberEntry::method(vec![], Type::BuiltinClass(TcpStream))),
        (TcpListener, "setTimeout") => Some(MemberEntry::method(vec![p(PrimitiveKind::Int)], p(PrimitiveKind::Void))),
        (TcpListener, "close") => Some(MemberEntry::method(vec![], p(PrimitiveKind::Void))),

        (TcpStream, "remoteAddress") => Some(MemberEntry::property(p(PrimitiveKind::String))),
        (TcpStream, "remotePort") => Some(MemberEntry::property(p(PrimitiveKind::Int))),
        (TcpStream, "isConnected") => Some(MemberEntry::property(p(PrimitiveKind::Bool))),
        (TcpStream, "send") => Some(MemberEntry::method(
            vec![Type::array_of(p(PrimitiveKind::Byte))],
            p(PrimitiveKind::Int),
        )),
        (TcpStream, "receive") => Some(MemberEntry::method(
            vec![p(PrimitiveKind::Int)],
            Type::array_of(p(PrimitiveKind::Byte)),
        )),
        (TcpStream, "setTimeout") => Some(MemberEntry::method(vec![p(PrimitiveKind::Int)], p(PrimitiveKind::Void))),
        (TcpStream, "flush" | "close") => Some(MemberEntry::method(vec![], p(PrimitiveKind::Void))),

        (UdpSocket, "localPort") => Some(MemberEntry::property(p(PrimitiveKind::Int))),
        (UdpSocket, "send") => Some(MemberEntry::method(
            vec![Type::array_of(p(PrimitiveKind::Byte)), p(PrimitiveKind::String), p(PrimitiveKind::Int)],
            p(PrimitiveKind::Int),
        )),
        // `receiveFrom` deliberately returns only the byte array; the sender
        // address is exposed via the side-channel property `lastSender`
        // rather than a tuple return (§9 design note).
        (UdpSocket, "receiveFrom") => Some(MemberEntry::method(
            vec![p(PrimitiveKind::Int)],
            Type::array_of(p(PrimitiveKind::Byte)),
        )),
        (UdpSocket, "lastSender") => Some(MemberEntry::property(p(PrimitiveKind::String))),
        (UdpSocket, "setBroadcast") => Some(MemberEntry::method(vec![p(PrimitiveKind::Bool)], p(PrimitiveKind::Void))),
        (UdpSocket, "setTimeout") => Some(MemberEntry::method(vec![p(PrimitiveKind::Int)], p(PrimitiveKind::Void))),
        (UdpSocket, "close") => Some(MemberEntry::method(vec![], p(PrimitiveKind::Void))),

        (Random, "nextInt") => Some(MemberEntry::method(vec![], p(PrimitiveKind::Int))),
        (Random, "nextLong") => Some(MemberEntry::method(vec![], p(PrimitiveKind::Long))),
        (Random, "nextDouble") => Some(MemberEntry::method(vec![], p(PrimitiveKind::Double))),
        (Random, "nextBool") => Some(MemberEntry::method(vec![], p(PrimitiveKind::Bool))),
        (Random, "nextRange") => Some(MemberEntry::method(
            vec![p(PrimitiveKind::Int), p(PrimitiveKind::Int)],
            p(PrimitiveKind::Int),
        )),
        (Random, "seed") => Some(MemberEntry::method(vec![p(PrimitiveKind::Long)], p(PrimitiveKind::Void))),

        (Uuid, "toString") => Some(MemberEntry::method(vec![], p(PrimitiveKind::String))),
        (Uuid, "equals") => Some(MemberEntry::method(vec![Type::BuiltinClass(Uuid)], p(PrimitiveKind::Bool))),
        (Uuid, "isNil") => Some(MemberEntry::method(vec![], p(PrimitiveKind::Bool))),
        (Uuid, "version") => Some(MemberEntry::method(vec![], p(PrimitiveKind::Int))),

        _ => None,
    }
}

pub(crate) fn builtin_class_member_names(class: BuiltinClass) -> &'static [&'static str] {
    use BuiltinClass::*;
    match class {
        TextFile => &["path", "isOpen", "eof", "readLine", "readAll", "readChar", "writeLine", "write", "seek", "size", "flush", "delete", "close"],
        BinaryFile => &["path", "eof", "read", "write", "seek", "size", "flush", "delete", "close"],
        Time => &["elapsedMillis", "elapsedSeconds", "toMillis", "addMillis", "compareTo", "toString"],
        Date => &["year", "month", "day", "dayOfWeek", "isLeapYear", "addDays", "addMonths", "addYears", "compareTo", "toEpochMillis", "format", "toString"],
        Process => &["stdout", "stderr", "exitCode", "pid", "isRunning", "writeStdin", "wait", "kill"],
        TcpListener => &["localPort", "accept", "setTimeout", "close"],
        TcpStream => &["remoteAddress", "remotePort", "isConnected", "send", "receive", "setTimeout", "flush", "close"],
        UdpSocket => &["localPort", "send", "receiveFrom", "lastSender", "setBroadcast", "setTimeout", "close"],
        Random => &["nextInt", "nextLong", "nextDouble", "nextBool", "nextRange", "seed", "choice", "shuffle", "weightedChoice", "sample"],
        Uuid => &["toString", "equals", "isNil", "version"],
    }
}
