use super::*;

#[test]
fn numeric_kinds_match_spec_set() {
    for kind in [
        PrimitiveKind::Int,
        PrimitiveKind::Long,
        PrimitiveKind::Float,
        PrimitiveKind::Double,
        PrimitiveKind::Byte,
        PrimitiveKind::Char,
    ] {
        assert!(kind.is_numeric());
    }
    for kind in [
        PrimitiveKind::Bool,
        PrimitiveKind::String,
        PrimitiveKind::Void,
        PrimitiveKind::Nil,
        PrimitiveKind::Any,
    ] {
        assert!(!kind.is_numeric());
    }
}

#[test]
fn printable_adds_bool_and_string_to_numeric() {
    assert!(PrimitiveKind::Bool.is_printable());
    assert!(PrimitiveKind::String.is_printable());
    assert!(PrimitiveKind::Int.is_printable());
    assert!(!PrimitiveKind::Void.is_printable());
    assert!(!PrimitiveKind::Nil.is_printable());
    assert!(!PrimitiveKind::Any.is_printable());
}

#[test]
fn string_does_not_cross_private_boundary() {
    assert!(!PrimitiveKind::String.crosses_private_boundary());
    assert!(!PrimitiveKind::Void.crosses_private_boundary());
    assert!(!PrimitiveKind::Nil.crosses_private_boundary());
    assert!(!PrimitiveKind::Any.crosses_private_boundary());
}

#[test]
fn scalar_numeric_and_bool_cross_private_boundary() {
    for kind in [
        PrimitiveKind::Int,
        PrimitiveKind::Long,
        PrimitiveKind::Float,
        PrimitiveKind::Double,
        PrimitiveKind::Byte,
        PrimitiveKind::Char,
        PrimitiveKind::Bool,
    ] {
        assert!(kind.crosses_private_boundary());
    }
}

#[test]
fn keyword_round_trips_through_from_keyword() {
    for kind in [
        PrimitiveKind::Int,
        PrimitiveKind::Long,
        PrimitiveKind::Double,
        PrimitiveKind::Float,
        PrimitiveKind::Char,
        PrimitiveKind::Byte,
        PrimitiveKind::Bool,
        PrimitiveKind::String,
        PrimitiveKind::Void,
        PrimitiveKind::Any,
    ] {
        assert_eq!(PrimitiveKind::from_keyword(kind.keyword()), Some(kind));
    }
}

#[test]
fn unknown_keyword_resolves_to_none() {
    assert_eq!(PrimitiveKind::from_keyword("whatever"), None);
}
