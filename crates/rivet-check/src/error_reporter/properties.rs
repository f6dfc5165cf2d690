use rivet_common::{DiagnosticCategory, Span};

use crate::context::CheckContext;

impl CheckContext {
    /// `InvalidMember`: "no member 'm' on type T" (§4.3.5), with an
    /// edit-distance suggestion over the receiver's own method table.
    pub(crate) fn invalid_member(
        &mut self,
        span: Span,
        type_name: &str,
        member: &str,
        table_names: &[&'static str],
    ) {
        let suggestion = self.suggest(member, table_names.iter().copied());
        match suggestion {
            Some(s) => self.error_with_suggestion(
                span,
                DiagnosticCategory::InvalidMember,
                format!("no member '{member}' on type {type_name}"),
                s,
            ),
            None => self.error(
                span,
                DiagnosticCategory::InvalidMember,
                format!("no member '{member}' on type {type_name}"),
            ),
        }
    }

    /// `UnknownStaticType`: `T.m(...)` where `T` is not a known built-in
    /// class or static-utility name (§4.3.4).
    pub(crate) fn unknown_static_type(&mut self, span: Span, type_name: &str) {
        self.error(
            span,
            DiagnosticCategory::UnknownStaticType,
            format!("unknown static type '{type_name}'"),
        );
    }

    /// `UnknownStaticType`: "Unknown X static method 'm'" (§4.3.4).
    pub(crate) fn unknown_static_method(&mut self, span: Span, type_name: &str, method: &str) {
        self.error(
            span,
            DiagnosticCategory::UnknownStaticType,
            format!("unknown {type_name} static method '{method}'"),
        );
    }
}
