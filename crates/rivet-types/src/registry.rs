//! Type Registry: constructors, structural equality, and an internal
//! interning cache for `ARRAY`/`FUNCTION` shapes (§3.1, §4.1).
//!
//! Interning is a performance detail only: `Type`'s derived `PartialEq`
//! already makes `equal(a, b)` structurally correct for any two
//! independently-constructed values, interned or not. The registry exists
//! so that two occurrences of, say, `int[]` share one `Rc` allocation
//! instead of walking the tree afresh on every comparison.

use rustc_hash::FxHashMap;

use rivet_ast::TypeAnnotation;
use rivet_common::MemQual;

use crate::builtin_class::BuiltinClass;
use crate::primitive::PrimitiveKind;
use crate::type_def::Type;

#[derive(Default)]
pub struct TypeRegistry {
    cache: FxHashMap<Type, Type>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Share structurally-identical `ARRAY`/`FUNCTION` shapes behind one
    /// `Rc`. Scalar variants (`PRIMITIVE`, `BUILTIN_CLASS`) are already
    /// cheap to clone and pass through untouched.
    pub fn intern(&mut self, ty: Type) -> Type {
        match &ty {
            Type::Array(_) | Type::Function(_) => {
                if let Some(existing) = self.cache.get(&ty) {
                    return existing.clone();
                }
                self.cache.insert(ty.clone(), ty.clone());
                ty
            }
            Type::Primitive(_) | Type::Opaque(_) | Type::BuiltinClass(_) => ty,
        }
    }

    /// Resolve surface syntax into a semantic `Type`. `Err` carries the
    /// unresolved name; the caller (the Expression/Statement Checker) is
    /// responsible for turning that into an `UnknownStaticType` diagnostic
    /// with a suggestion — this is a pure data transform, not a diagnostic
    /// emitter.
    pub fn resolve_annotation(&mut self, ann: &TypeAnnotation) -> Result<Type, String> {
        match ann {
            TypeAnnotation::Named(name) => {
                if let Some(kind) = PrimitiveKind::from_keyword(name) {
                    Ok(Type::Primitive(kind))
                } else if let Some(class) = BuiltinClass::from_name(name) {
                    Ok(Type::BuiltinClass(class))
                } else {
                    Err(name.clone())
                }
            }
            TypeAnnotation::Array(elem) => {
                let elem_ty = self.resolve_annotation(elem)?;
                Ok(self.intern(Type::array_of(elem_ty)))
            }
            TypeAnnotation::Function {
                params,
                return_type,
                is_variadic,
            } => {
                let return_ty = self.resolve_annotation(return_type)?;
                let mut param_tys = Vec::with_capacity(params.len());
                let mut mem_quals: Vec<MemQual> = Vec::with_capacity(params.len());
                for p in params {
                    param_tys.push(self.resolve_annotation(&p.ty)?);
                    mem_quals.push(p.mem_qual);
                }
                Ok(self.intern(Type::function(return_ty, param_tys, mem_quals, *is_variadic)))
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/registry.rs"]
mod tests;
