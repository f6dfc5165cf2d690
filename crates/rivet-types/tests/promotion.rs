use super::*;

fn p(kind: PrimitiveKind) -> Type {
    Type::Primitive(kind)
}

#[test]
fn int_and_long_promote_to_long() {
    assert_eq!(promote(&p(PrimitiveKind::Int), &p(PrimitiveKind::Long)), Some(p(PrimitiveKind::Long)));
}

#[test]
fn long_and_double_promote_to_double() {
    assert_eq!(
        promote(&p(PrimitiveKind::Long), &p(PrimitiveKind::Double)),
        Some(p(PrimitiveKind::Double))
    );
}

#[test]
fn byte_and_int_promote_to_int() {
    assert_eq!(promote(&p(PrimitiveKind::Byte), &p(PrimitiveKind::Int)), Some(p(PrimitiveKind::Int)));
}

#[test]
fn char_alone_promotes_to_int() {
    assert_eq!(promote(&p(PrimitiveKind::Char), &p(PrimitiveKind::Char)), Some(p(PrimitiveKind::Int)));
}

#[test]
fn float_and_int_promote_to_float() {
    assert_eq!(promote(&p(PrimitiveKind::Float), &p(PrimitiveKind::Int)), Some(p(PrimitiveKind::Float)));
}

#[test]
fn non_numeric_operand_yields_none() {
    assert_eq!(promote(&p(PrimitiveKind::String), &p(PrimitiveKind::Int)), None);
    assert_eq!(promote(&p(PrimitiveKind::Bool), &p(PrimitiveKind::Double)), None);
}

#[test]
fn non_primitive_operand_yields_none() {
    let arr = Type::array_of(p(PrimitiveKind::Int));
    assert_eq!(promote(&arr, &p(PrimitiveKind::Int)), None);
}
