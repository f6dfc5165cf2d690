//! Type Registry (§2 item 1, §3.1, §4.1): the closed set of source-language
//! types, the predicates over them, the numeric promotion lattice, and
//! resolution of syntactic [`rivet_ast::TypeAnnotation`]s into semantic
//! [`Type`]s.

pub mod builtin_class;
pub mod primitive;
pub mod promotion;
pub mod registry;
pub mod type_def;

pub use builtin_class::BuiltinClass;
pub use primitive::PrimitiveKind;
pub use promotion::promote;
pub use registry::TypeRegistry;
pub use type_def::{FunctionType, Opaque, Type};
