//! Syntactic type annotations, as written by the programmer.
//!
//! This is deliberately *not* [`rivet_types::Type`]: a `TypeAnnotation` is
//! surface syntax (`"int[]"`, `"(int, string) -> bool"`, a bare name like
//! `"TcpListener"`) that the checker resolves into a `Type` once a symbol
//! table is available to look up named types against. Keeping the two
//! separate avoids `rivet-ast` depending on `rivet-types` at all.

use rivet_common::MemQual;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeAnnotation {
    /// A bare name: a primitive keyword (`int`, `string`, `void`, `any`, ...)
    /// or a built-in class name (`Time`, `TcpListener`, `Random`, ...).
    Named(String),
    /// `T[]`
    Array(Box<TypeAnnotation>),
    /// `(p1, p2, ...) -> R`, optionally variadic in the last parameter.
    Function {
        params: Vec<ParamAnnotation>,
        return_type: Box<TypeAnnotation>,
        is_variadic: bool,
    },
}

impl TypeAnnotation {
    pub fn array_of(elem: TypeAnnotation) -> Self {
        Self::Array(Box::new(elem))
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParamAnnotation {
    pub ty: TypeAnnotation,
    pub mem_qual: MemQual,
}

impl ParamAnnotation {
    pub fn new(ty: TypeAnnotation, mem_qual: MemQual) -> Self {
        Self { ty, mem_qual }
    }
}
