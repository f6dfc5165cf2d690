//! The closed set of source-language types (§3.1).

use std::rc::Rc;

use rivet_common::MemQual;

use crate::builtin_class::BuiltinClass;
use crate::primitive::PrimitiveKind;

/// Payload of an `OPAQUE`/`POINTER` type (§3.1): either an FFI pointer to
/// some inner type (possibly opaque itself, hence `Option` rather than a
/// required payload), or a bare named native type with no further
/// structure the checker understands.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Opaque {
    Pointer(Option<Rc<Type>>),
    Native(String),
}

/// `FUNCTION`'s payload (§3.1). `params.len() == param_mem_quals.len()` is
/// an invariant of every constructor in this module.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FunctionType {
    pub return_type: Rc<Type>,
    pub params: Vec<Rc<Type>>,
    pub param_mem_quals: Vec<MemQual>,
    pub is_variadic: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Type {
    Primitive(PrimitiveKind),
    Array(Rc<Type>),
    Function(Rc<FunctionType>),
    Opaque(Opaque),
    BuiltinClass(BuiltinClass),
}

impl Type {
    pub fn array_of(element: Type) -> Self {
        Self::Array(Rc::new(element))
    }

    pub fn function(
        return_type: Type,
        params: Vec<Type>,
        param_mem_quals: Vec<MemQual>,
        is_variadic: bool,
    ) -> Self {
        assert_eq!(
            params.len(),
            param_mem_quals.len(),
            "FUNCTION params length must match param_mem_quals length"
        );
        Self::Function(Rc::new(FunctionType {
            return_type: Rc::new(return_type),
            params: params.into_iter().map(Rc::new).collect(),
            param_mem_quals,
            is_variadic,
        }))
    }

    pub const fn primitive(kind: PrimitiveKind) -> Self {
        Self::Primitive(kind)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Primitive(k) if k.is_numeric())
    }

    pub fn is_printable(&self) -> bool {
        matches!(self, Self::Primitive(k) if k.is_printable())
    }

    /// `is_variadic_compatible ≡ printable ∨ pointer/opaque; ARRAY rejected` (§4.1).
    pub fn is_variadic_compatible(&self) -> bool {
        match self {
            Self::Primitive(k) => k.is_printable(),
            Self::Opaque(_) => true,
            Self::Array(_) | Self::Function(_) | Self::BuiltinClass(_) => false,
        }
    }

    /// `is_c_compatible` (supplement, §4.1): PRIMITIVE other than
    /// STRING/NIL/ANY, an OPAQUE/POINTER, or an ARRAY of such a type.
    pub fn is_c_compatible(&self) -> bool {
        match self {
            Self::Primitive(k) => !matches!(
                k,
                PrimitiveKind::String | PrimitiveKind::Nil | PrimitiveKind::Any
            ),
            Self::Opaque(_) => true,
            Self::Array(elem) => elem.is_c_compatible(),
            Self::Function(_) | Self::BuiltinClass(_) => false,
        }
    }

    pub fn crosses_private_boundary(&self) -> bool {
        matches!(self, Self::Primitive(k) if k.crosses_private_boundary())
    }
}

#[cfg(test)]
#[path = "../tests/type_def.rs"]
mod tests;
