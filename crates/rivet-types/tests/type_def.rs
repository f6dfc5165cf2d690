use super::*;
use rivet_common::MemQual;

#[test]
fn structural_equality_holds_for_independently_built_arrays() {
    let a = Type::array_of(Type::primitive(PrimitiveKind::Int));
    let b = Type::array_of(Type::primitive(PrimitiveKind::Int));
    assert_eq!(a, b);
}

#[test]
fn structural_equality_distinguishes_element_type() {
    let a = Type::array_of(Type::primitive(PrimitiveKind::Int));
    let b = Type::array_of(Type::primitive(PrimitiveKind::Long));
    assert_ne!(a, b);
}

#[test]
fn function_type_equality_is_structural() {
    let a = Type::function(
        Type::primitive(PrimitiveKind::Void),
        vec![Type::primitive(PrimitiveKind::Int)],
        vec![MemQual::Default],
        false,
    );
    let b = Type::function(
        Type::primitive(PrimitiveKind::Void),
        vec![Type::primitive(PrimitiveKind::Int)],
        vec![MemQual::Default],
        false,
    );
    assert_eq!(a, b);
}

#[test]
fn string_array_and_opaque_are_not_variadic_compatible_if_array() {
    let arr = Type::array_of(Type::primitive(PrimitiveKind::Int));
    assert!(!arr.is_variadic_compatible());
    assert!(Type::primitive(PrimitiveKind::String).is_variadic_compatible());
    assert!(Type::Opaque(Opaque::Native("FILE".into())).is_variadic_compatible());
}

#[test]
fn c_compatible_excludes_string_nil_any_but_allows_array_of_int() {
    assert!(!Type::primitive(PrimitiveKind::String).is_c_compatible());
    assert!(!Type::primitive(PrimitiveKind::Nil).is_c_compatible());
    assert!(!Type::primitive(PrimitiveKind::Any).is_c_compatible());
    assert!(Type::primitive(PrimitiveKind::Int).is_c_compatible());
    let arr = Type::array_of(Type::primitive(PrimitiveKind::Int));
    assert!(arr.is_c_compatible());
    let bad_arr = Type::array_of(Type::primitive(PrimitiveKind::String));
    assert!(!bad_arr.is_c_compatible());
}

#[test]
#[should_panic]
fn function_constructor_panics_on_mismatched_param_lengths() {
    Type::function(
        Type::primitive(PrimitiveKind::Void),
        vec![Type::primitive(PrimitiveKind::Int)],
        vec![],
        false,
    );
}
